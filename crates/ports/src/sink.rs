// crates/ports/src/sink.rs
use codestat_domain::FileRecord;
use codestat_shared_kernel::FilePath;

/// Downstream consumer of completed records.
///
/// Called concurrently from every worker, in completion order. Implementations
/// must combine results commutatively.
pub trait RecordSink: Send + Sync {
    fn accept(&self, record: FileRecord);

    /// A unit failed while being processed; the record itself is gone.
    fn fault(&self, path: &FilePath, message: &str);
}
