//! 言語レジストリ
//!
//! Maps file extensions to [`LanguageDescriptor`]s and keeps one compiled
//! [`KeywordSet`] per language so workers never rebuild them.

mod builtin;

use std::collections::HashMap;

use codestat_domain::LanguageDescriptor;
use codestat_shared_kernel::{ConfigResult, ConfigurationError, FilePath, Result};

use crate::complexity::KeywordSet;

/// Read-only after construction; shared between workers behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
    keywords: Vec<KeywordSet>,
    by_name: HashMap<String, usize>,
    by_extension: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Registry with the bundled language table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for descriptor in builtin::descriptors() {
            registry.insert(descriptor);
        }
        registry
    }

    /// Builds a registry from descriptors, rejecting duplicate names.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::DuplicateLanguage`] when two descriptors share a name.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = LanguageDescriptor>) -> ConfigResult<Self> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            if registry.by_name.contains_key(&descriptor.name) {
                return Err(ConfigurationError::DuplicateLanguage { name: descriptor.name });
            }
            registry.insert(descriptor);
        }
        Ok(registry)
    }

    /// Parses a JSON array of descriptors.
    ///
    /// # Errors
    /// Fails on malformed JSON or duplicate language names.
    pub fn from_json(text: &str) -> Result<Self> {
        let descriptors: Vec<LanguageDescriptor> = serde_json::from_str(text)?;
        Ok(Self::from_descriptors(descriptors)?)
    }

    /// Adds or replaces languages. A descriptor whose name already exists
    /// replaces the previous definition, including its extensions.
    pub fn extend(&mut self, descriptors: impl IntoIterator<Item = LanguageDescriptor>) {
        for descriptor in descriptors {
            self.insert(descriptor);
        }
    }

    fn insert(&mut self, descriptor: LanguageDescriptor) {
        let keywords = KeywordSet::from_descriptor(&descriptor);
        let index = if let Some(&index) = self.by_name.get(&descriptor.name) {
            self.by_extension.retain(|_, i| *i != index);
            self.keywords[index] = keywords;
            self.languages[index] = descriptor;
            index
        } else {
            self.languages.push(descriptor);
            self.keywords.push(keywords);
            let index = self.languages.len() - 1;
            self.by_name.insert(self.languages[index].name.clone(), index);
            index
        };

        for ext in &self.languages[index].extensions {
            self.by_extension.insert(ext.to_ascii_lowercase(), index);
        }
    }

    /// Language of `path`, by extension (or file name for extension-less files).
    pub fn detect(&self, path: &FilePath) -> Option<&LanguageDescriptor> {
        let ext = path.extension();
        self.by_extension.get(ext.as_str()).map(|&i| &self.languages[i])
    }

    pub fn get(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.by_name.get(name).map(|&i| &self.languages[i])
    }

    /// Compiled keywords of `language`; `None` for unknown languages.
    pub fn keywords(&self, language: &str) -> Option<&KeywordSet> {
        self.by_name.get(language).map(|&i| &self.keywords[i])
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_detects_common_extensions() {
        let registry = LanguageRegistry::builtin();
        let rust = registry.detect(&FilePath::from("src/main.rs")).unwrap();
        assert_eq!(rust.name, "Rust");
        let go = registry.detect(&FilePath::from("cmd/Main.GO")).unwrap();
        assert_eq!(go.name, "Go");
        assert!(registry.detect(&FilePath::from("image.png")).is_none());
    }

    #[test]
    fn builtin_keywords_are_compiled() {
        let registry = LanguageRegistry::builtin();
        let kw = registry.keywords("Rust").unwrap();
        assert!(kw.matches(b"    if x {"));
        assert!(registry.keywords("Plain Text").unwrap().is_empty());
        assert!(registry.keywords("Klingon").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = LanguageRegistry::from_descriptors([
            LanguageDescriptor::new("A").with_extensions(["a"]),
            LanguageDescriptor::new("A").with_extensions(["b"]),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateLanguage { name } if name == "A"));
    }

    #[test]
    fn extend_replaces_existing_language() {
        let mut registry = LanguageRegistry::builtin();
        let before = registry.len();
        registry.extend([LanguageDescriptor::new("Rust").with_extensions(["rsx"]).with_keywords(["loop"])]);
        assert_eq!(registry.len(), before);
        assert!(registry.detect(&FilePath::from("a.rs")).is_none());
        assert_eq!(registry.detect(&FilePath::from("a.rsx")).unwrap().name, "Rust");
        assert!(registry.keywords("Rust").unwrap().matches(b"loop {"));
    }

    #[test]
    fn loads_from_json() {
        let registry = LanguageRegistry::from_json(
            r#"[{"name":"Zig","extensions":["zig"],"complexity_keywords":["if ","while "]}]"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.detect(&FilePath::from("build.zig")).unwrap().name, "Zig");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LanguageRegistry::from_json("{not json").is_err());
    }
}
