pub mod progress_bar;
pub mod progress_controls;
