use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use codestat_domain::FileRecord;
use codestat_ports::RecordSink;
use crossbeam_channel::Receiver;
use serde::Serialize;

use crate::counter::RecordProcessor;

/// Outcome counters shared by the pool handle and its workers.
#[derive(Debug, Default)]
pub(super) struct Counters {
    pub(super) submitted: AtomicU64,
    pub(super) processed: AtomicU64,
    pub(super) faulted: AtomicU64,
}

impl Counters {
    pub(super) fn report(&self) -> PoolReport {
        PoolReport {
            submitted: self.submitted.load(Ordering::Acquire),
            processed: self.processed.load(Ordering::Acquire),
            faulted: self.faulted.load(Ordering::Acquire),
        }
    }
}

/// Final accounting of a pool run. After shutdown,
/// `processed + faulted == submitted`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolReport {
    pub submitted: u64,
    pub processed: u64,
    pub faulted: u64,
}

pub(super) struct Worker {
    pub(super) index: usize,
    pub(super) jobs: Receiver<FileRecord>,
    pub(super) processor: Arc<dyn RecordProcessor>,
    pub(super) sink: Arc<dyn RecordSink>,
    pub(super) counters: Arc<Counters>,
}

impl Worker {
    /// Pulls jobs until the queue is closed and empty.
    pub(super) fn run(self) {
        log::trace!("worker {} started", self.index);
        for record in &self.jobs {
            self.handle(record);
        }
        log::trace!("worker {} drained", self.index);
    }

    fn handle(&self, mut record: FileRecord) {
        let path = record.path.clone();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.processor.process(&mut record);
            self.sink.accept(record);
        }));

        match outcome {
            Ok(()) => {
                self.counters.processed.fetch_add(1, Ordering::AcqRel);
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::warn!("worker {}: processing '{path}' failed: {message}", self.index);
                self.counters.faulted.fetch_add(1, Ordering::AcqRel);
                self.sink.fault(&path, &message);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_handles_common_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
