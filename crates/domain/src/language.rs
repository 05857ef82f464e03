//! 言語定義 (データ駆動)
//!
//! Scanner and scorer never branch on a language; everything language-specific
//! lives in a [`LanguageDescriptor`] handed to them.

use serde::{Deserialize, Serialize};

/// Data describing one language: how it is recognised and which byte
/// sequences count towards the complexity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub complexity_keywords: Vec<String>,
}

impl LanguageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), extensions: Vec::new(), complexity_keywords: Vec::new() }
    }

    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions.into_iter().map(|e| e.as_ref().to_ascii_lowercase()).collect();
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.complexity_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn keyword_bytes(&self) -> impl Iterator<Item = &[u8]> {
        self.complexity_keywords.iter().map(String::as_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_lowercased() {
        let desc = LanguageDescriptor::new("C").with_extensions(["C", "h"]);
        assert_eq!(desc.extensions, vec!["c", "h"]);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let desc: LanguageDescriptor = serde_json::from_str(r#"{"name":"Plain"}"#).unwrap();
        assert_eq!(desc.name, "Plain");
        assert!(desc.extensions.is_empty());
        assert_eq!(desc.keyword_bytes().count(), 0);
    }
}
