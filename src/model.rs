use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type LocaleEntries = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationModel {
    locales: IndexMap<String, LocaleEntries>,
}

impl TranslationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_locale(&mut self, locale: impl Into<String>) -> &mut LocaleEntries {
        self.locales.entry(locale.into()).or_default()
    }

    pub fn insert(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleEntries> {
        self.locales.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = (&str, &LocaleEntries)> {
        self.locales.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn locale_keys(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
