//! 複雑度ヒューリスティック
//!
//! A code line scores at most one point, however many keywords it contains.

use memchr::memmem::Finder;

use codestat_domain::LanguageDescriptor;

/// Immutable, compiled set of complexity keywords for one language.
///
/// Matching is a case-sensitive substring search over raw bytes. Empty
/// keywords are dropped, since an empty needle would match every line.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    finders: Vec<Finder<'static>>,
}

impl KeywordSet {
    pub fn new<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let finders = keywords
            .into_iter()
            .filter(|k| !k.as_ref().is_empty())
            .map(|k| Finder::new(k.as_ref()).into_owned())
            .collect();
        Self { finders }
    }

    pub fn from_descriptor(descriptor: &LanguageDescriptor) -> Self {
        Self::new(descriptor.keyword_bytes())
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    /// True when `line` contains any keyword. Stops at the first hit.
    #[inline]
    pub fn matches(&self, line: &[u8]) -> bool {
        self.finders.iter().any(|f| f.find(line).is_some())
    }
}

/// Tests one code line against `keywords`.
///
/// Callers add exactly one to the file's complexity when this returns `true`.
#[inline]
pub fn score_line(line: &[u8], keywords: &KeywordSet) -> bool {
    keywords.matches(line)
}
