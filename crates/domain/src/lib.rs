#![allow(clippy::multiple_crate_versions)]

pub mod language;
pub mod model;

pub use language::LanguageDescriptor;
pub use model::{FileRecord, FileSummary, Totals};
