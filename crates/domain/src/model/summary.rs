use std::ops::{Add, AddAssign};

use codestat_shared_kernel::FilePath;
use serde::{Deserialize, Serialize};

/// Counters of one processed file, detached from its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: FilePath,
    pub language: String,
    pub lines: u64,
    pub code: u64,
    pub blank: u64,
    pub comment: u64,
    pub complexity: u64,
    pub bytes: u64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub binary: bool,
}

/// Summary statistics over a set of processed files.
///
/// Every field is a plain sum, so merging is commutative and associative and
/// the result does not depend on the order in which files complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files: u64,
    pub lines: u64,
    pub code: u64,
    pub blank: u64,
    pub comment: u64,
    pub complexity: u64,
    pub bytes: u64,
}

impl AddAssign<&FileSummary> for Totals {
    fn add_assign(&mut self, s: &FileSummary) {
        self.files += 1;
        self.lines += s.lines;
        self.code += s.code;
        self.blank += s.blank;
        self.comment += s.comment;
        self.complexity += s.complexity;
        self.bytes += s.bytes;
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        self.files += rhs.files;
        self.lines += rhs.lines;
        self.code += rhs.code;
        self.blank += rhs.blank;
        self.comment += rhs.comment;
        self.complexity += rhs.complexity;
        self.bytes += rhs.bytes;
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
