use codestat_shared_kernel::{PoolError, PoolResult};
use serde::{Deserialize, Serialize};

/// ワーカー1つあたりのキュー枠
const QUEUE_SLOTS_PER_WORKER: usize = 4;

/// What `submit` does when the job queue is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backpressure {
    /// Block the producer until a worker frees a slot.
    #[default]
    Block,
    /// Hand the unit back to the producer immediately.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub workers: usize,
    pub queue_capacity: usize,
    #[serde(default)]
    pub backpressure: Backpressure,
}

impl PoolConfig {
    /// `workers` threads with a queue sized proportionally to them.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            queue_capacity: workers.max(1) * QUEUE_SLOTS_PER_WORKER,
            backpressure: Backpressure::default(),
        }
    }

    #[must_use]
    pub const fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn backpressure(mut self, policy: Backpressure) -> Self {
        self.backpressure = policy;
        self
    }

    /// # Errors
    /// Zero workers or a zero-capacity queue.
    pub fn validate(&self) -> PoolResult<()> {
        if self.workers == 0 {
            return Err(PoolError::NoWorkers);
        }
        if self.queue_capacity == 0 {
            return Err(PoolError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::with_workers(num_cpus::get().max(1))
    }
}
