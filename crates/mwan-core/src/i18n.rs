//! Translation of user-facing strings.

use std::collections::HashMap;

/// Translate a user-facing string. Implementations return the message id
/// unchanged when they have no translation for it.
pub trait Translator: Send + Sync {
    fn translate(&self, msgid: &str) -> String;
}

/// Returns every message untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translator for Identity {
    fn translate(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Lookup table of translations, typically loaded from the `[translations]`
/// config section.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translator for Catalog {
    fn translate(&self, msgid: &str) -> String {
        self.entries
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}
