//! Reporting
//!
//! This module handles outcome labels, CSV export of results,
//! and structured logging for the application.

pub mod export;
pub mod logging;
pub mod status;

// Re-export commonly used items
pub use export::{export_to_file, to_csv_string, write_csv};
pub use status::status_label;
