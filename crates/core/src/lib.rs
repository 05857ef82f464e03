//! 行分類・複雑度・並列集計のコア
//!
//! - [`scanner`]: code/blank line classification over raw bytes
//! - [`complexity`]: per-line keyword scoring
//! - [`counter`]: the per-file pass combining both
//! - [`pool`]: bounded worker pool applying the pass to many files
//! - [`aggregator`]: order-independent accumulation of the results

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;
pub mod complexity;
pub mod counter;
pub mod language;
pub mod pool;
pub mod scanner;

pub use aggregator::{Aggregator, Report};
pub use complexity::{KeywordSet, score_line};
pub use counter::{CountOptions, RecordProcessor, StatsProcessor, count_stats, is_binary};
pub use language::LanguageRegistry;
pub use pool::{Backpressure, PoolConfig, PoolReport, SubmitError, Submitter, WorkerPool};
pub use scanner::{LineCounts, LineKind, classify, scan_lines};
