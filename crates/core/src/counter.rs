// crates/core/src/counter.rs
use std::sync::Arc;

use codestat_domain::FileRecord;
use serde::{Deserialize, Serialize};

use crate::complexity::{KeywordSet, score_line};
use crate::language::LanguageRegistry;
use crate::scanner::{LineKind, scan_lines};

/// バイナリ判定で調べる先頭バイト数
const BINARY_PROBE_LEN: usize = 8 * 1024;

/// Runs the line scanner over `record.content` and scores each code line
/// against `keywords`.
///
/// `lines`, `code`, `blank`, `complexity` and `bytes` are assigned, not
/// accumulated, so running this twice on the same record gives the same
/// result. `comment` is left as it was.
pub fn count_stats(record: &mut FileRecord, keywords: Option<&KeywordSet>) {
    let keywords = keywords.filter(|k| !k.is_empty());

    let (mut lines, mut code, mut blank, mut complexity) = (0u64, 0u64, 0u64, 0u64);
    scan_lines(&record.content, |line, kind| {
        lines += 1;
        match kind {
            LineKind::Blank => blank += 1,
            LineKind::Code => {
                code += 1;
                if let Some(kw) = keywords
                    && score_line(line, kw)
                {
                    complexity += 1;
                }
            }
        }
    });

    record.lines = lines;
    record.code = code;
    record.blank = blank;
    record.complexity = complexity;
    record.bytes = record.content.len() as u64;
}

/// Treats content as binary when a NUL byte appears in its first 8 KiB.
#[must_use]
pub fn is_binary(content: &[u8]) -> bool {
    let len = content.len().min(BINARY_PROBE_LEN);
    memchr::memchr(0, &content[..len]).is_some()
}

/// Per-unit work executed by pool workers.
pub trait RecordProcessor: Send + Sync {
    fn process(&self, record: &mut FileRecord);
}

/// Switches for the default processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Score control-flow keywords on code lines.
    pub complexity: bool,
    /// Leave binary content uncounted and flag the record instead.
    pub skip_binary: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self { complexity: true, skip_binary: true }
    }
}

/// Default processor: binary check, then [`count_stats`] with the keywords of
/// the record's language.
#[derive(Debug, Clone)]
pub struct StatsProcessor {
    registry: Arc<LanguageRegistry>,
    options: CountOptions,
}

impl StatsProcessor {
    pub fn new(registry: Arc<LanguageRegistry>, options: CountOptions) -> Self {
        Self { registry, options }
    }
}

impl RecordProcessor for StatsProcessor {
    fn process(&self, record: &mut FileRecord) {
        if self.options.skip_binary && is_binary(&record.content) {
            record.binary = true;
            record.lines = 0;
            record.code = 0;
            record.blank = 0;
            record.complexity = 0;
            record.bytes = record.content.len() as u64;
            return;
        }

        let keywords = if self.options.complexity { self.registry.keywords(&record.language) } else { None };
        count_stats(record, keywords);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &[u8]) -> FileRecord {
        FileRecord::new("test.rs", "Rust", content.to_vec())
    }

    fn rust_processor(options: CountOptions) -> StatsProcessor {
        StatsProcessor::new(Arc::new(LanguageRegistry::builtin()), options)
    }

    #[test]
    fn counts_match_scanner() {
        let mut r = record(b"fn main() {\n\n    println!();\n}\n");
        count_stats(&mut r, None);
        assert_eq!((r.lines, r.code, r.blank), (4, 3, 1));
        assert_eq!(r.lines, r.code + r.blank);
        assert_eq!(r.bytes, 31);
        assert_eq!(r.complexity, 0);
    }

    #[test]
    fn complexity_counts_each_code_line_once() {
        let kw = KeywordSet::new(["if ", "&& "]);
        let mut r = record(b"if a && b && c {\n}\nif x {\n\n  let y = 1;\n");
        count_stats(&mut r, Some(&kw));
        assert_eq!(r.complexity, 2);
    }

    #[test]
    fn long_keyword_lines_score_and_near_misses_do_not() {
        let kw = KeywordSet::new(["if ", "for "]);
        let lines = |line: String| format!("{line}\n").repeat(500).into_bytes();

        let mut hit_if = record(&lines(format!("if {}", "i".repeat(97))));
        count_stats(&mut hit_if, Some(&kw));
        assert_eq!((hit_if.code, hit_if.complexity), (500, 500));

        let mut hit_for = record(&lines(format!("for {}", "fo".repeat(48))));
        count_stats(&mut hit_for, Some(&kw));
        assert_eq!(hit_for.complexity, 500);

        let mut miss = record(&lines("fo".repeat(50)));
        count_stats(&mut miss, Some(&kw));
        assert_eq!((miss.code, miss.complexity), (500, 0));
    }

    #[test]
    fn blank_lines_are_never_scored() {
        let kw = KeywordSet::new([" "]);
        let mut r = record(b"   \n\t\nx y\n");
        count_stats(&mut r, Some(&kw));
        assert_eq!(r.blank, 2);
        assert_eq!(r.complexity, 1);
    }

    #[test]
    fn rerun_is_idempotent() {
        let kw = KeywordSet::new(["for "]);
        let mut r = record(b"for x in y {\n}\n\n");
        count_stats(&mut r, Some(&kw));
        let first = r.clone();
        count_stats(&mut r, Some(&kw));
        assert_eq!(r, first);
    }

    #[test]
    fn comment_field_is_preserved() {
        let mut r = record(b"a\nb\n");
        r.comment = 7;
        count_stats(&mut r, None);
        assert_eq!(r.comment, 7);
        assert_eq!(r.lines, 2);
    }

    #[test]
    fn empty_content_is_all_zero() {
        let mut r = record(b"");
        count_stats(&mut r, Some(&KeywordSet::new(["if"])));
        assert_eq!((r.lines, r.code, r.blank, r.complexity, r.bytes), (0, 0, 0, 0, 0));
    }

    #[test]
    fn binary_detection_looks_at_prefix_only() {
        assert!(is_binary(b"abc\0def"));
        assert!(!is_binary(b"plain text\n"));
        let mut late_nul = vec![b'a'; BINARY_PROBE_LEN];
        late_nul.push(0);
        assert!(!is_binary(&late_nul));
    }

    #[test]
    fn processor_flags_binary_content() {
        let p = rust_processor(CountOptions::default());
        let mut r = record(b"\0\x01\x02\nif x {\n");
        p.process(&mut r);
        assert!(r.binary);
        assert_eq!(r.lines, 0);
        assert_eq!(r.bytes, 11);
    }

    #[test]
    fn processor_counts_binary_when_asked() {
        let p = rust_processor(CountOptions { skip_binary: false, ..CountOptions::default() });
        let mut r = record(b"\0\nif x {\n");
        p.process(&mut r);
        assert!(!r.binary);
        assert_eq!(r.lines, 2);
    }

    #[test]
    fn processor_uses_language_keywords() {
        let p = rust_processor(CountOptions::default());
        let mut r = record(b"fn f(x: u8) {\n    if x == 1 {\n    }\n    match x {\n    }\n}\n");
        p.process(&mut r);
        assert_eq!(r.complexity, 2);
    }

    #[test]
    fn complexity_can_be_disabled() {
        let p = rust_processor(CountOptions { complexity: false, ..CountOptions::default() });
        let mut r = record(b"if x {\n}\n");
        p.process(&mut r);
        assert_eq!(r.complexity, 0);
        assert_eq!(r.code, 2);
    }

    #[test]
    fn unknown_language_scores_nothing() {
        let p = rust_processor(CountOptions::default());
        let mut r = FileRecord::new("x.zz", "Unknown", b"if x {\n".to_vec());
        p.process(&mut r);
        assert_eq!(r.code, 1);
        assert_eq!(r.complexity, 0);
    }
}
