use std::io;

use codestat_shared_kernel::{CodestatError, ErrorContext, PoolError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CodestatError::from)
        .context("reading language table")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading language table"));
    assert!(display.contains("Output error:"));
}

#[test]
fn pool_errors_convert_into_root() {
    let err: CodestatError = PoolError::NoWorkers.into();
    assert_eq!(err.to_string(), "Worker pool error: worker count must be at least 1");
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let result: Result<(), PoolError> = Err(PoolError::ZeroCapacity);
    let err = result.with_context(|| format!("starting pool with {} workers", 4)).unwrap_err();
    assert!(err.to_string().starts_with("starting pool with 4 workers"));
    assert!(std::error::Error::source(&err).is_some());
}
