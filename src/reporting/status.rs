//! Human-readable labels for probe outcomes.
//!
//! Only HTTP 200 gets a worded label; every other status is shown as its
//! number. The probing layer itself never treats 200 specially.

use crate::core::constants::{http_status, labels};
use crate::core::types::ProbeOutcome;

pub fn status_label(outcome: ProbeOutcome) -> String {
    match outcome.status_code() {
        Some(http_status::OK) => labels::ACCESSIBLE.to_string(),
        Some(code) => code.to_string(),
        None => labels::UNREACHABLE.to_string(),
    }
}
