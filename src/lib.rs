use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod i18n;
pub mod progress;

pub use components::progress_bar::{ProgressBar, ProgressBarProps};
pub use i18n::{Catalog, CatalogError, Translate, Translations};
pub use progress::{Progress, ProgressValue};

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
