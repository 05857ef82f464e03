pub mod file_record;
pub mod summary;

pub use file_record::FileRecord;
pub use summary::{FileSummary, Totals};
