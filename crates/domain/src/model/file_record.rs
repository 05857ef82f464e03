use std::fmt;

use codestat_shared_kernel::FilePath;

use crate::model::FileSummary;

/// 1ファイル分の処理単位。内容と集計結果を保持する
///
/// A record is created by discovery with `content` populated and all counters
/// zeroed. While a worker owns it, only `lines`, `code`, `blank`, `complexity`,
/// `bytes` and `binary` are written; `comment` belongs to a later
/// language-aware pass and is left untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: FilePath,
    pub language: String,
    pub content: Vec<u8>,
    pub lines: u64,
    pub code: u64,
    pub blank: u64,
    pub comment: u64,
    pub complexity: u64,
    pub bytes: u64,
    pub binary: bool,
}

impl FileRecord {
    pub fn new(path: impl Into<FilePath>, language: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            content,
            lines: 0,
            code: 0,
            blank: 0,
            comment: 0,
            complexity: 0,
            bytes: 0,
            binary: false,
        }
    }

    /// Identity plus counters, without the content buffer.
    #[must_use]
    pub fn summary(&self) -> FileSummary {
        FileSummary {
            path: self.path.clone(),
            language: self.language.clone(),
            lines: self.lines,
            code: self.code,
            blank: self.blank,
            comment: self.comment,
            complexity: self.complexity,
            bytes: self.bytes,
            binary: self.binary,
        }
    }
}

// 内容はサイズのみ表示 (巨大なバイト列をログに流さない)
impl fmt::Debug for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRecord")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("content_len", &self.content.len())
            .field("lines", &self.lines)
            .field("code", &self.code)
            .field("blank", &self.blank)
            .field("comment", &self.comment)
            .field("complexity", &self.complexity)
            .field("binary", &self.binary)
            .finish()
    }
}
