// crates/ports/src/source.rs
use codestat_domain::FileRecord;
use codestat_shared_kernel::Result;

/// Port producing records with their content loaded.
///
/// Records are pushed one at a time so that a bounded consumer can apply
/// backpressure to the walk itself. An error returned by the visitor stops
/// the enumeration and is returned to the caller.
pub trait ContentSource {
    /// Returns how many records were handed to `visitor`.
    fn visit(&self, visitor: &mut dyn FnMut(FileRecord) -> Result<()>) -> Result<usize>;
}
