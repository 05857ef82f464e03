//! 行分類 (コード行 / 空行)
//!
//! Single pass over a byte buffer. `\n` terminates a line; a `\r` right before
//! it is part of the terminator. A line is blank when every byte in it is a
//! space, a tab or a carriage return.

use serde::{Deserialize, Serialize};

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Blank,
}

/// Result of [`classify`]. `lines == code + blank` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub lines: u64,
    pub code: u64,
    pub blank: u64,
}

impl LineCounts {
    #[inline]
    fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

/// Counts total, code and blank lines of `content`.
///
/// Empty content has no lines at all. A buffer ending on `\n` does not get an
/// extra empty line; trailing bytes after the last `\n` form one more line.
#[must_use]
pub fn classify(content: &[u8]) -> LineCounts {
    let mut counts = LineCounts::default();
    scan_lines(content, |_, kind| counts.record(kind));
    counts
}

/// Walks `content` once and calls `visit` for every physical line.
///
/// The slice passed to `visit` excludes the `\n` and, when present, the `\r`
/// immediately before it. Lines are borrowed from `content`; nothing is
/// allocated.
#[inline]
pub fn scan_lines<'a, F>(content: &'a [u8], mut visit: F)
where
    F: FnMut(&'a [u8], LineKind),
{
    if content.is_empty() {
        return;
    }

    let mut start = 0;
    let mut seen_content = false;

    for (i, &byte) in content.iter().enumerate() {
        match byte {
            b'\n' => {
                visit(trim_cr(&content[start..i]), kind_of(seen_content));
                start = i + 1;
                seen_content = false;
            }
            b' ' | b'\t' | b'\r' => {}
            _ => seen_content = true,
        }
    }

    // 改行で終わらない最終行
    if start < content.len() {
        visit(&content[start..], kind_of(seen_content));
    }
}

#[inline]
const fn kind_of(seen_content: bool) -> LineKind {
    if seen_content { LineKind::Code } else { LineKind::Blank }
}

#[inline]
fn trim_cr(line: &[u8]) -> &[u8] {
    match line.split_last() {
        Some((&b'\r', rest)) => rest,
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(lines: u64, code: u64, blank: u64) -> LineCounts {
        LineCounts { lines, code, blank }
    }

    #[test]
    fn empty_content_has_no_lines() {
        // tokei と sloccount に合わせて 0 行
        assert_eq!(classify(b""), counts(0, 0, 0));
    }

    #[test]
    fn single_char_without_newline_is_one_line() {
        // wc -l would report 0 here
        assert_eq!(classify(b"a"), counts(1, 1, 0));
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(classify(b"a\n"), counts(1, 1, 0));
        assert_eq!(classify(b"1\n"), counts(1, 1, 0));
        assert_eq!(classify(b"1\n2\n"), counts(2, 2, 0));
    }

    #[test]
    fn unterminated_last_line_is_counted() {
        assert_eq!(classify(b"1\n2\n3"), counts(3, 3, 0));
    }

    #[test]
    fn repeated_lines() {
        let mut content = Vec::new();
        assert_eq!(classify(&content), counts(0, 0, 0));
        for i in 1..=5000u64 {
            content.extend_from_slice(b"a\n");
            let result = classify(&content);
            assert_eq!(result.lines, i);
            assert_eq!(result.code, i);
            assert_eq!(result.blank, 0);
        }
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify(b" "), counts(1, 0, 1));
        assert_eq!(classify(b"\n"), counts(1, 0, 1));
        assert_eq!(classify(b"\n "), counts(2, 0, 2));
        assert_eq!(classify(b"            "), counts(1, 0, 1));
        assert_eq!(classify(b"            \n             "), counts(2, 0, 2));
        assert_eq!(classify(b"\t\t\n"), counts(1, 0, 1));
    }

    #[test]
    fn crlf_is_a_single_terminator() {
        assert_eq!(classify(b"\r\n\r\n"), counts(2, 0, 2));
        assert_eq!(classify(b"\r\n"), counts(1, 0, 1));
        assert_eq!(classify(b"a\r\nb\r\n"), counts(2, 2, 0));
    }

    #[test]
    fn mixed_code_and_blank() {
        let src = b"fn main() {\n\n    let x = 1;\n    \n}\n";
        assert_eq!(classify(src), counts(5, 3, 2));
    }

    #[test]
    fn invalid_utf8_is_still_classified() {
        assert_eq!(classify(&[0xff, 0xfe, b'\n', 0x80]), counts(2, 2, 0));
    }

    #[test]
    fn visitor_sees_lines_without_terminators() {
        let mut seen = Vec::new();
        scan_lines(b"ab\r\n  \ncd", |line, kind| seen.push((line.to_vec(), kind)));
        assert_eq!(
            seen,
            vec![
                (b"ab".to_vec(), LineKind::Code),
                (b"  ".to_vec(), LineKind::Blank),
                (b"cd".to_vec(), LineKind::Code),
            ]
        );
    }

    #[test]
    fn lone_carriage_return_is_whitespace() {
        assert_eq!(classify(b"\r"), counts(1, 0, 1));
        assert_eq!(classify(b"a\r"), counts(1, 1, 0));
    }

    #[test]
    fn classification_carries_no_state_between_calls() {
        let first = classify(b"x\n\n");
        let _ = classify(b"   \n\n\n\nzzz");
        assert_eq!(classify(b"x\n\n"), first);
    }
}
