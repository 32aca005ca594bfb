use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::progress::PERCENTAGE_KEY;

/// Synchronous localization lookup.
pub trait Translate {
    /// Returns the string for `key` with every `{{name}}` placeholder replaced
    /// by the matching entry of `params`.
    fn instant(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &[(&str, &str)]) -> String,
{
    fn instant(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid language file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("language file root must be an object")]
    NotAnObject,
    #[error("entry `{0}` is neither a string nor an object")]
    InvalidEntry(String),
}

/// A set of translated strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    lang: String,
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            strings: HashMap::new(),
        }
    }

    /// Built-in English strings.
    pub fn english() -> Self {
        let mut catalog = Self::new("en");
        catalog.insert(PERCENTAGE_KEY, "{{$a}}%");
        catalog.insert("core.downloading", "Downloading");
        catalog.insert("core.uploading", "Uploading");
        catalog.insert("core.progress", "Progress");
        catalog
    }

    /// Loads a language file. Nested objects are flattened into dotted keys,
    /// so `{"core": {"downloading": "..."}}` defines `core.downloading`.
    pub fn from_json(lang: impl Into<String>, json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = root else {
            return Err(CatalogError::NotAnObject);
        };

        let mut catalog = Self::new(lang);
        catalog.flatten("", entries)?;
        Ok(catalog)
    }

    fn flatten(&mut self, prefix: &str, entries: Map<String, Value>) -> Result<(), CatalogError> {
        for (name, value) in entries {
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{}.{}", prefix, name)
            };
            match value {
                Value::String(text) => {
                    self.strings.insert(key, text);
                }
                Value::Object(nested) => self.flatten(&key, nested)?,
                _ => return Err(CatalogError::InvalidEntry(key)),
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }

    /// Fills keys missing from this catalog with the strings of `fallback`.
    pub fn with_fallback(mut self, fallback: &Catalog) -> Self {
        for (key, text) in &fallback.strings {
            self.strings
                .entry(key.clone())
                .or_insert_with(|| text.clone());
        }
        self
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Translate for Catalog {
    fn instant(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.get(key) {
            Some(template) => interpolate(template, params),
            // Missing keys show up as themselves.
            None => key.to_string(),
        }
    }
}

/// Replaces `{{ name }}` placeholders. Unknown names are left untouched.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + len;
        let name = rest[start + 2..end].trim();

        out.push_str(&rest[..start]);
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..end + 2]),
        }
        rest = &rest[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Catalog shared through the component tree with `ContextProvider`.
#[derive(Debug, Clone)]
pub struct Translations(pub Rc<Catalog>);

impl Translations {
    pub fn new(catalog: Catalog) -> Self {
        Self(Rc::new(catalog))
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new(Catalog::english())
    }
}

impl PartialEq for Translations {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Translate for Translations {
    fn instant(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.0.instant(key, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_percentage_template() {
        let catalog = Catalog::english();
        assert_eq!(catalog.instant(PERCENTAGE_KEY, &[("$a", "45")]), "45%");
        assert_eq!(catalog.instant("core.downloading", &[]), "Downloading");
    }

    #[test]
    fn missing_key_returns_key() {
        let catalog = Catalog::english();
        assert_eq!(catalog.instant("mod_forum.nothing", &[]), "mod_forum.nothing");
    }

    #[test]
    fn placeholders_allow_spaces_and_keep_unknown_names() {
        assert_eq!(interpolate("{{ $a }} of {{$b}}", &[("$a", "3")]), "3 of {{$b}}");
        assert_eq!(interpolate("{{$a}} and {{$a}}", &[("$a", "x")]), "x and x");
        assert_eq!(interpolate("open {{ brace", &[("brace", "x")]), "open {{ brace");
        assert_eq!(interpolate("plain", &[]), "plain");
    }

    #[test]
    fn loads_flat_and_nested_files() {
        let json = r#"{
            "core.percentagenumber": "{{$a}} %",
            "core": { "downloading": "Descargando" }
        }"#;
        let catalog = Catalog::from_json("es", json).unwrap();
        assert_eq!(catalog.lang(), "es");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.instant(PERCENTAGE_KEY, &[("$a", "7")]), "7 %");
        assert_eq!(catalog.get("core.downloading"), Some("Descargando"));
    }

    #[test]
    fn rejects_malformed_files() {
        assert!(matches!(
            Catalog::from_json("xx", "{"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            Catalog::from_json("xx", "[]"),
            Err(CatalogError::NotAnObject)
        ));
        match Catalog::from_json("xx", r#"{"core": {"count": 3}}"#) {
            Err(CatalogError::InvalidEntry(key)) => assert_eq!(key, "core.count"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn fallback_fills_only_missing_keys() {
        let mut partial = Catalog::new("fr");
        partial.insert("core.downloading", "Téléchargement");
        let catalog = partial.with_fallback(&Catalog::english());
        assert_eq!(catalog.lang(), "fr");
        assert_eq!(catalog.get("core.downloading"), Some("Téléchargement"));
        assert_eq!(catalog.get(PERCENTAGE_KEY), Some("{{$a}}%"));
    }

    #[test]
    fn translations_compare_by_identity() {
        let shared = Translations::default();
        assert_eq!(shared, shared.clone());
        assert_ne!(shared, Translations::default());
    }
}
