//! URL ingestion
//!
//! This module turns CSV files, newline-separated lists and inline
//! arguments into one ordered, deduplicated list of URLs.

pub mod tabular;
pub mod text;

use rustc_hash::FxHashSet;
use std::path::PathBuf;

use crate::core::constants::error_messages;
use crate::core::error::{Result, UrlProbeError};
use crate::reporting::logging;

// Re-export commonly used items
pub use tabular::{read_csv_file, read_csv_urls};
pub use text::{STDIN_PATH, parse_text_urls, read_text_file};

/// Where URLs come from. Sources are read in field order.
#[derive(Debug, Default, Clone)]
pub struct UrlSources {
    pub csv_files: Vec<PathBuf>,
    pub text_files: Vec<PathBuf>,
    /// URLs given directly; each entry may hold several lines
    pub inline: Vec<String>,
}

/// Deduplicated URLs plus how many were found before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedUrls {
    pub urls: Vec<String>,
    pub total_found: usize,
}

impl IngestedUrls {
    pub fn duplicates_removed(&self) -> usize {
        self.total_found.saturating_sub(self.urls.len())
    }
}

impl UrlSources {
    pub fn is_empty(&self) -> bool {
        self.csv_files.is_empty() && self.text_files.is_empty() && self.inline.is_empty()
    }

    /// Read every source. Any unreadable source aborts ingestion, as does
    /// ending up with no URLs at all.
    pub fn collect(&self) -> Result<IngestedUrls> {
        let mut urls = Vec::new();

        for path in &self.csv_files {
            urls.extend(read_csv_file(path)?);
        }
        for path in &self.text_files {
            urls.extend(read_text_file(path)?);
        }
        for entry in &self.inline {
            urls.extend(parse_text_urls(entry));
        }

        let total_found = urls.len();
        let urls = dedup_urls(&urls);
        if urls.is_empty() {
            return Err(UrlProbeError::Input(error_messages::NO_URLS.to_string()));
        }

        logging::log_url_ingestion(urls.len(), total_found);
        Ok(IngestedUrls { urls, total_found })
    }
}

/// Order-preserving deduplication using FxHashSet; the first occurrence wins.
pub fn dedup_urls(urls: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::with_capacity_and_hasher(urls.len(), Default::default());
    let mut unique = Vec::with_capacity(urls.len());

    for url in urls {
        if seen.insert(url.as_str()) {
            unique.push(url.clone());
        }
    }

    unique
}
