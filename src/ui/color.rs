//! Color and formatting utilities for terminal output

use crate::core::types::ProbeOutcome;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Color used for an outcome: green for 2xx, yellow for 3xx, red otherwise
pub fn outcome_color(outcome: ProbeOutcome) -> &'static str {
    match outcome {
        _ if outcome.is_success() => Colors::BRIGHT_GREEN,
        ProbeOutcome::StatusCode(300..=399) => Colors::BRIGHT_YELLOW,
        ProbeOutcome::StatusCode(_) | ProbeOutcome::Unreachable => Colors::BRIGHT_RED,
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) if term == "dumb" || term.is_empty() => false,
        Ok(term) => {
            term.contains("color")
                || term.contains("256")
                || term.starts_with("xterm")
                || term.starts_with("screen")
                || term.starts_with("tmux")
                || term == "linux"
        }
        Err(_) => false,
    }
}
