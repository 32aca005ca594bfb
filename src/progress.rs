use std::fmt;

use yew::html::IntoPropValue;
use yew::AttrValue;

mod parse;
mod state;

pub use parse::parse_int;
pub use state::{ChangeSet, Inputs, ProgressState, PERCENTAGE_KEY};

/// Progress as handed over by the caller: a number or a numeral in text.
#[derive(Debug, Clone)]
pub enum ProgressValue {
    Number(f64),
    Text(AttrValue),
}

// Numbers compare bitwise so that a NaN progress equals itself.
impl PartialEq for ProgressValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProgressValue::Number(a), ProgressValue::Number(b)) => a.to_bits() == b.to_bits(),
            (ProgressValue::Text(a), ProgressValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ProgressValue {}

impl Default for ProgressValue {
    fn default() -> Self {
        ProgressValue::Number(0.0)
    }
}

impl From<f64> for ProgressValue {
    fn from(value: f64) -> Self {
        ProgressValue::Number(value)
    }
}

impl From<f32> for ProgressValue {
    fn from(value: f32) -> Self {
        ProgressValue::Number(value.into())
    }
}

impl From<i32> for ProgressValue {
    fn from(value: i32) -> Self {
        ProgressValue::Number(value.into())
    }
}

impl From<u32> for ProgressValue {
    fn from(value: u32) -> Self {
        ProgressValue::Number(value.into())
    }
}

impl From<&'static str> for ProgressValue {
    fn from(value: &'static str) -> Self {
        ProgressValue::Text(AttrValue::Static(value))
    }
}

impl From<String> for ProgressValue {
    fn from(value: String) -> Self {
        ProgressValue::Text(AttrValue::from(value))
    }
}

impl From<AttrValue> for ProgressValue {
    fn from(value: AttrValue) -> Self {
        ProgressValue::Text(value)
    }
}

macro_rules! impl_into_progress_prop {
    ($($ty:ty),*) => {
        $(
            impl IntoPropValue<ProgressValue> for $ty {
                fn into_prop_value(self) -> ProgressValue {
                    ProgressValue::from(self)
                }
            }
        )*
    };
}

impl_into_progress_prop!(f64, f32, i32, u32, &'static str, String, AttrValue);

/// Normalized progress. Anything negative or unreadable is `Indeterminate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    Percent(u32),
    #[default]
    Indeterminate,
}

impl Progress {
    /// Numeric stand-in for `Indeterminate` in the percentage domain.
    pub const SENTINEL: i64 = -1;

    pub fn percent(self) -> Option<u32> {
        match self {
            Progress::Percent(value) => Some(value),
            Progress::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(self) -> bool {
        matches!(self, Progress::Indeterminate)
    }

    pub fn as_sentinel(self) -> i64 {
        match self {
            Progress::Percent(value) => i64::from(value),
            Progress::Indeterminate => Self::SENTINEL,
        }
    }

    fn from_number(value: f64) -> Self {
        if value.is_nan() || value.is_infinite() || value < 0.0 {
            return Progress::Indeterminate;
        }
        // Float to int casts saturate.
        Progress::Percent(value.trunc() as u32)
    }
}

impl From<&ProgressValue> for Progress {
    fn from(value: &ProgressValue) -> Self {
        match value {
            ProgressValue::Number(number) => Progress::from_number(*number),
            ProgressValue::Text(text) => match parse_int(text) {
                Some(parsed) if parsed >= 0 => {
                    Progress::Percent(u32::try_from(parsed).unwrap_or(u32::MAX))
                }
                _ => Progress::Indeterminate,
            },
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sentinel())
    }
}

/// A `width` style value. It can only be built from a validated percentage,
/// so it is safe to place in a `style` attribute as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthStyle(u32);

impl WidthStyle {
    pub fn from_progress(progress: Progress) -> Option<Self> {
        progress.percent().map(WidthStyle)
    }

    pub fn percent(&self) -> u32 {
        self.0
    }

    /// Full declaration for a `style` attribute.
    pub fn declaration(&self) -> String {
        format!("width: {}", self)
    }
}

impl fmt::Display for WidthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(value: impl Into<ProgressValue>) -> Progress {
        Progress::from(&value.into())
    }

    #[test]
    fn numbers_truncate_toward_zero() {
        assert_eq!(normalize(45), Progress::Percent(45));
        assert_eq!(normalize(99.99), Progress::Percent(99));
        assert_eq!(normalize(0.4), Progress::Percent(0));
    }

    #[test]
    fn negative_and_nan_numbers_are_indeterminate() {
        assert_eq!(normalize(-5), Progress::Indeterminate);
        assert_eq!(normalize(-0.5), Progress::Indeterminate);
        assert_eq!(normalize(f64::NAN), Progress::Indeterminate);
        assert_eq!(normalize(f64::INFINITY), Progress::Indeterminate);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(normalize(-0.0), Progress::Percent(0));
        assert_eq!(normalize("-0"), Progress::Percent(0));
    }

    #[test]
    fn numerals_are_parsed_as_integers() {
        assert_eq!(normalize("67.9"), Progress::Percent(67));
        assert_eq!(normalize("  12abc"), Progress::Percent(12));
        assert_eq!(normalize(String::from("100")), Progress::Percent(100));
    }

    #[test]
    fn unreadable_numerals_are_indeterminate() {
        assert_eq!(normalize("abc"), Progress::Indeterminate);
        assert_eq!(normalize(""), Progress::Indeterminate);
        assert_eq!(normalize("-3"), Progress::Indeterminate);
        assert_eq!(normalize(".5"), Progress::Indeterminate);
    }

    #[test]
    fn values_above_one_hundred_are_kept() {
        assert_eq!(normalize(150), Progress::Percent(150));
        assert_eq!(normalize("99999999999999"), Progress::Percent(u32::MAX));
    }

    #[test]
    fn values_compare_bitwise() {
        assert_eq!(ProgressValue::from(f64::NAN), ProgressValue::from(f64::NAN));
        assert_eq!(ProgressValue::from(45), ProgressValue::from(45.0));
        assert_ne!(ProgressValue::from(45), ProgressValue::from("45"));
        assert_ne!(ProgressValue::from(0.0), ProgressValue::from(-0.0));
    }

    #[test]
    fn sentinel_stands_for_indeterminate() {
        assert_eq!(Progress::Indeterminate.as_sentinel(), -1);
        assert_eq!(Progress::Percent(30).as_sentinel(), 30);
        assert_eq!(Progress::Indeterminate.to_string(), "-1");
    }

    #[test]
    fn width_is_only_built_from_percentages() {
        let width = WidthStyle::from_progress(Progress::Percent(45)).unwrap();
        assert_eq!(width.to_string(), "45%");
        assert_eq!(width.declaration(), "width: 45%");
        assert!(WidthStyle::from_progress(Progress::Indeterminate).is_none());
    }
}
