use std::fmt;

/// Error types for urlprobe operations.
///
/// Per-URL network failures never show up here; they become
/// [`ProbeOutcome::Unreachable`](crate::core::types::ProbeOutcome) instead.
#[derive(Debug)]
pub enum UrlProbeError {
    /// IO error (file operations, stdin, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input ingestion error (empty CSV, nothing to check, ...)
    Input(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Worker pool failure, fatal to the whole batch
    Pool(String),
}

impl fmt::Display for UrlProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlProbeError::Io(err) => write!(f, "IO error: {err}"),
            UrlProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlProbeError::Input(msg) => write!(f, "Input error: {msg}"),
            UrlProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlProbeError::Csv(err) => write!(f, "CSV error: {err}"),
            UrlProbeError::Json(err) => write!(f, "JSON error: {err}"),
            UrlProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlProbeError::Pool(msg) => write!(f, "Worker pool error: {msg}"),
        }
    }
}

impl std::error::Error for UrlProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlProbeError::Io(err) => Some(err),
            UrlProbeError::Http(err) => Some(err),
            UrlProbeError::Csv(err) => Some(err),
            UrlProbeError::Json(err) => Some(err),
            UrlProbeError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlProbeError {
    fn from(err: std::io::Error) -> Self {
        UrlProbeError::Io(err)
    }
}

impl From<reqwest::Error> for UrlProbeError {
    fn from(err: reqwest::Error) -> Self {
        UrlProbeError::Http(err)
    }
}

impl From<csv::Error> for UrlProbeError {
    fn from(err: csv::Error) -> Self {
        UrlProbeError::Csv(err)
    }
}

impl From<serde_json::Error> for UrlProbeError {
    fn from(err: serde_json::Error) -> Self {
        UrlProbeError::Json(err)
    }
}

impl From<toml::de::Error> for UrlProbeError {
    fn from(err: toml::de::Error) -> Self {
        UrlProbeError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlProbeError
pub type Result<T> = std::result::Result<T, UrlProbeError>;
