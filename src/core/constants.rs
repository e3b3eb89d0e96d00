//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! This module centralizes all magic strings, numbers, and other literal values
//! used across the application, making them easier to maintain and modify.

/// Output format constants
pub mod output_formats {
    /// Text output format - aligned, colored result table
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// CSV output format - same layout as the export file, written to stdout
    pub const CSV: &str = "csv";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, CSV];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Largest timeout accepted from config or CLI (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Idle pooled connections are closed after this many seconds
    pub const POOL_IDLE_TIMEOUT_SECONDS: u64 = 30;
}

/// Default configuration values
pub mod defaults {
    /// Maximum number of redirect hops followed per probe
    pub const REDIRECT_LIMIT: usize = 10;
    /// Probes use HEAD unless configured otherwise
    pub const USE_HEAD_REQUESTS: bool = true;
    /// Upper bound on configured concurrency
    pub const MAX_CONCURRENCY: usize = 1000;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlprobe.toml";
    /// Number of parent directories searched for the config file
    pub const CONFIG_PARENT_DEPTH: usize = 3;
    /// Export file name used when `--export` is given without a path
    pub const EXPORT_FILE_NAME: &str = "url_check_results.csv";
}

/// Labels shown for probe outcomes
pub mod labels {
    /// Shown instead of the number for HTTP 200
    pub const ACCESSIBLE: &str = "Link accessible";
    /// Shown for URLs that never produced a status
    pub const UNREACHABLE: &str = "Not found";
}

/// CSV export layout
pub mod export {
    /// Header of the URL column
    pub const URL_HEADER: &str = "URL";
    /// Header of the status column
    pub const STATUS_HEADER: &str = "Status";
}

/// Error message constants
pub mod error_messages {
    /// CSV input without even a header row
    pub const EMPTY_CSV: &str = "CSV file is empty.";
    /// Nothing to check after ingestion
    pub const NO_URLS: &str =
        "No URLs to check. Provide a CSV file, a text list, or URLs as arguments.";
    /// The worker pool was closed before the batch could run
    pub const POOL_CLOSED: &str = "worker pool is closed";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for reachable URLs with a success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for unreachable URLs
    pub const NETWORK_ERROR_EMOJI: &str = "🔌";
    /// Emoji for the export notice
    pub const EXPORT_EMOJI: &str = "📥";
}
