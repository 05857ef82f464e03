//! 有界キュー付きワーカープール
//!
//! N worker threads drain one bounded crossbeam channel. Each accepted
//! record is received by exactly one worker, processed, and handed to the
//! sink. The queue and the sink are the only shared points.
//!
//! Shutdown takes the single `Sender` out of a lock. Any producer that got
//! in before that finishes its send first, so no accepted unit can land in a
//! queue nobody drains; producers arriving later see the empty slot and get
//! the record back.

mod config;
mod error;
mod worker;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};

use codestat_domain::FileRecord;
use codestat_ports::RecordSink;
use codestat_shared_kernel::{PoolError, PoolResult};
use crossbeam_channel::{SendError, Sender, TrySendError};
use parking_lot::RwLock;

pub use config::{Backpressure, PoolConfig};
pub use error::SubmitError;
pub use worker::PoolReport;

use crate::counter::RecordProcessor;
use worker::{Counters, Worker};

struct Shared {
    sender: RwLock<Option<Sender<FileRecord>>>,
    backpressure: Backpressure,
    counters: Arc<Counters>,
}

impl Shared {
    fn submit(&self, record: FileRecord) -> Result<(), SubmitError> {
        // 送信中は read ロックを保持する (shutdown は write ロックで待つ)
        let guard = self.sender.read();
        let Some(sender) = guard.as_ref() else {
            return Err(SubmitError::ShutDown(Box::new(record)));
        };

        match self.backpressure {
            Backpressure::Block => sender
                .send(record)
                .map_err(|SendError(record)| SubmitError::ShutDown(Box::new(record)))?,
            Backpressure::Reject => sender.try_send(record).map_err(|err| match err {
                TrySendError::Full(record) => SubmitError::QueueFull(Box::new(record)),
                TrySendError::Disconnected(record) => SubmitError::ShutDown(Box::new(record)),
            })?,
        }

        self.counters.submitted.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn close(&self) -> bool {
        self.sender.write().take().is_some()
    }

    fn is_closed(&self) -> bool {
        self.sender.read().is_none()
    }
}

/// Bounded pool of worker threads applying a [`RecordProcessor`] to records.
pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `config.workers` threads.
    ///
    /// # Errors
    /// Invalid configuration or a failed thread spawn. Nothing fails after
    /// this point.
    pub fn start(
        config: PoolConfig,
        processor: Arc<dyn RecordProcessor>,
        sink: Arc<dyn RecordSink>,
    ) -> PoolResult<Self> {
        config.validate()?;

        let (sender, receiver) = crossbeam_channel::bounded(config.queue_capacity);
        let counters = Arc::new(Counters::default());
        let shared = Arc::new(Shared {
            sender: RwLock::new(Some(sender)),
            backpressure: config.backpressure,
            counters: Arc::clone(&counters),
        });

        let mut workers = Vec::with_capacity(config.workers);
        for index in 0..config.workers {
            let worker = Worker {
                index,
                jobs: receiver.clone(),
                processor: Arc::clone(&processor),
                sink: Arc::clone(&sink),
                counters: Arc::clone(&counters),
            };
            let handle = thread::Builder::new()
                .name(format!("codestat-worker-{index}"))
                .spawn(move || worker.run())
                .map_err(|source| PoolError::Spawn { index, source })?;
            workers.push(handle);
        }

        log::debug!(
            "worker pool started: workers={}, queue_capacity={}, backpressure={:?}",
            config.workers,
            config.queue_capacity,
            config.backpressure
        );

        Ok(Self { shared, workers })
    }

    /// Enqueues one unit, subject to the configured backpressure policy.
    ///
    /// # Errors
    /// [`SubmitError::QueueFull`] under [`Backpressure::Reject`], or
    /// [`SubmitError::ShutDown`] once the pool is closed. The record is returned
    /// inside the error.
    pub fn submit(&self, record: FileRecord) -> Result<(), SubmitError> {
        self.shared.submit(record)
    }

    /// Cloneable handle for submitting from other threads.
    #[must_use]
    pub fn submitter(&self) -> Submitter {
        Submitter { shared: Arc::clone(&self.shared) }
    }

    /// Stops accepting new units without waiting for the workers.
    pub fn close(&self) {
        if self.shared.close() {
            log::debug!("worker pool closed for submissions");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Stops accepting, drains every unit already queued, and joins all workers.
    pub fn shutdown(mut self) -> PoolReport {
        self.close();
        self.join_workers();
        let report = self.shared.counters.report();
        log::debug!(
            "worker pool finished: submitted={}, processed={}, faulted={}",
            report.submitted,
            report.processed,
            report.faulted
        );
        report
    }

    fn join_workers(&mut self) {
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("worker thread terminated abnormally");
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shared.close();
        self.join_workers();
    }
}

/// Submission handle shared between producers.
#[derive(Clone)]
pub struct Submitter {
    shared: Arc<Shared>,
}

impl Submitter {
    /// Same contract as [`WorkerPool::submit`].
    ///
    /// # Errors
    /// See [`SubmitError`].
    pub fn submit(&self, record: FileRecord) -> Result<(), SubmitError> {
        self.shared.submit(record)
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}
