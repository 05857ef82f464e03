use codestat_domain::FileRecord;
use thiserror::Error;

/// A unit the pool did not accept. The record is handed back untouched.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("job queue is full, rejected '{}'", .0.path)]
    QueueFull(Box<FileRecord>),

    #[error("worker pool is shut down, rejected '{}'", .0.path)]
    ShutDown(Box<FileRecord>),
}

impl SubmitError {
    pub fn into_record(self) -> FileRecord {
        match self {
            Self::QueueFull(record) | Self::ShutDown(record) => *record,
        }
    }

    pub fn record(&self) -> &FileRecord {
        match self {
            Self::QueueFull(record) | Self::ShutDown(record) => record,
        }
    }
}
