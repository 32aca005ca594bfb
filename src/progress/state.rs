use super::{Progress, ProgressValue, WidthStyle};
use crate::i18n::Translate;

/// Template key for "N%". Its single parameter is `$a`.
pub const PERCENTAGE_KEY: &str = "core.percentagenumber";

/// Which widget inputs changed since the previous pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub progress: bool,
    pub text: bool,
    pub a11y_text: bool,
}

impl ChangeSet {
    /// First pass after mounting: every supplied input counts as changed.
    pub fn initial(inputs: &Inputs<'_>) -> Self {
        Self {
            progress: true,
            text: inputs.text.is_some(),
            a11y_text: inputs.a11y_text.is_some(),
        }
    }

    pub fn between(old: &Inputs<'_>, new: &Inputs<'_>) -> Self {
        Self {
            progress: old.progress != new.progress,
            text: old.text != new.text,
            a11y_text: old.a11y_text != new.a11y_text,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.progress || self.text || self.a11y_text)
    }
}

/// Current values of the inputs the change handler reads.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    pub progress: &'a ProgressValue,
    pub text: Option<&'a str>,
    pub a11y_text: Option<&'a str>,
}

/// Derived display state of one mounted progress bar.
///
/// `text_supplied` is a latch: it flips to `true` the first time the caller
/// passes a text and never goes back, so the percentage stops overwriting the
/// caller's text for the rest of the mount. Later updates without a text keep
/// the last supplied one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressState {
    progress: Progress,
    text: Option<String>,
    width: Option<WidthStyle>,
    value_text: Option<String>,
    text_supplied: bool,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the derived fields for the inputs flagged in `changes`.
    pub fn apply<T>(&mut self, changes: ChangeSet, inputs: &Inputs<'_>, translator: &T)
    where
        T: Translate + ?Sized,
    {
        if changes.text {
            // An omitted text keeps the last one the caller supplied.
            if let Some(text) = inputs.text {
                self.text_supplied = true;
                self.text = Some(text.to_owned());
            }
        }

        if changes.progress {
            self.progress = Progress::from(inputs.progress);

            if let Some(width) = WidthStyle::from_progress(self.progress) {
                if !self.text_supplied {
                    self.text = Some(width.percent().to_string());
                }
                self.width = Some(width);
            }
        }

        if !changes.is_empty() {
            self.value_text = Some(self.announce(inputs.a11y_text, translator));
        }
    }

    /// Rebuilds the announcement with another translator, e.g. after a
    /// language switch. Text, width and the latch stay as they are.
    pub fn retranslate<T>(&mut self, a11y_text: Option<&str>, translator: &T)
    where
        T: Translate + ?Sized,
    {
        self.value_text = Some(self.announce(a11y_text, translator));
    }

    fn announce<T>(&self, a11y_text: Option<&str>, translator: &T) -> String
    where
        T: Translate + ?Sized,
    {
        let mut announcement = String::new();
        if let Some(prefix) = a11y_text.filter(|prefix| !prefix.is_empty()) {
            announcement.push_str(&translator.instant(prefix, &[]));
            announcement.push(' ');
        }
        let text = self.text.as_deref().unwrap_or_default();
        announcement.push_str(&translator.instant(PERCENTAGE_KEY, &[("$a", text)]));
        announcement
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn width(&self) -> Option<WidthStyle> {
        self.width
    }

    pub fn value_text(&self) -> Option<&str> {
        self.value_text.as_deref()
    }

    pub fn text_supplied(&self) -> bool {
        self.text_supplied
    }
}
