use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::{Result, UrlProbeError};

/// Path that makes [`read_text_file`] read standard input.
pub const STDIN_PATH: &str = "-";

/// One URL per non-blank line, surrounding whitespace removed.
pub fn parse_text_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read a newline-separated URL list from a file, or from stdin for `-`.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let read = if path == Path::new(STDIN_PATH) {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    let text = read.map_err(|e| {
        UrlProbeError::Input(format!("Error reading file '{}': {e}", path.display()))
    })?;

    Ok(parse_text_urls(&text))
}
