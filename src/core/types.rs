use serde::Serialize;
use std::fmt;

/// Classified result of probing a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Status of the final response after redirects, as returned by the server.
    StatusCode(u16),
    /// No status could be obtained: DNS, connect, TLS, timeout or malformed URL.
    Unreachable,
}

impl ProbeOutcome {
    /// The numeric status, if the probe got one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::StatusCode(code) => Some(*code),
            Self::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::StatusCode(code) if (200..300).contains(code))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusCode(code) => write!(f, "{code}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Serializes as the bare status number, or `null` when unreachable.
impl Serialize for ProbeOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::StatusCode(code) => serializer.serialize_u16(*code),
            Self::Unreachable => serializer.serialize_none(),
        }
    }
}

/// A URL exactly as it was supplied, paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub url: String,
    #[serde(rename = "status")]
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        Self {
            url: url.into(),
            outcome,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.outcome, self.url)
    }
}
