use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::core::constants::error_messages;
use crate::core::error::{Result, UrlProbeError};

/// Bound on the number of probes running at the same time.
///
/// The pool outlives individual batches. Clones share the same permits, so
/// every batch started through any clone counts against one limit.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool running at most `size` probes at once (at least one).
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Pool sized to the available parallelism of the machine.
    pub fn auto() -> Self {
        Self::new(num_cpus::get())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Permits not currently held by a running probe.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a free worker slot. The slot is released when the permit drops.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit> {
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| UrlProbeError::Pool(error_messages::POOL_CLOSED.to_string()))
    }

    /// Close the pool. Waiting and future acquisitions fail.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::auto()
    }
}
