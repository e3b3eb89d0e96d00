//! Concurrent URL probing
//!
//! This module issues one lightweight HTTP request per URL on a
//! bounded worker pool and merges the outcomes back into input order.

pub mod pool;
pub mod probe;
pub mod prober;

// Re-export commonly used items
pub use pool::WorkerPool;
pub use probe::{HttpProbe, Probe};
pub use prober::Prober;
