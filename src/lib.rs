//! Bulk URL reachability checker.
//!
//! URLs are read from CSV files, plain lists or arguments, probed
//! concurrently with one lightweight request each, and reported in the
//! order they were given.
//!
//! ```no_run
//! use urlprobe::{Prober, config::Config};
//!
//! # async fn run() -> urlprobe::Result<()> {
//! let prober = Prober::from_config(&Config::default())?;
//! let results = prober
//!     .check_all(vec!["https://example.com".to_string(), "not a url".to_string()])
//!     .await?;
//! for result in &results {
//!     println!("{} {}", result.url, result.outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod ingest;
pub mod probing;
pub mod reporting;
pub mod ui;

pub use crate::core::{ProbeOutcome, ProbeResult, Result, UrlProbeError};
pub use crate::ingest::{IngestedUrls, UrlSources};
pub use crate::probing::{HttpProbe, Probe, Prober, WorkerPool};
