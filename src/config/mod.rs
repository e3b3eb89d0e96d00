//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::{Result, UrlProbeError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// Maximum number of probes in flight at once
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Probe with HEAD (true) or GET (false)
    pub use_head_requests: Option<bool>,

    /// Output format (text, json, csv)
    pub output_format: Option<String>,

    /// Write the CSV export to this path
    pub export_path: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            concurrency: None, // Will default to CPU core count
            user_agent: None,
            use_head_requests: Some(defaults::USE_HEAD_REQUESTS),
            output_format: Some(output_formats::DEFAULT.to_string()),
            export_path: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlProbeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlProbeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut candidate = PathBuf::from(dir);
        for _ in 0..=defaults::CONFIG_PARENT_DEPTH {
            if let Ok(config) = Self::load_from_file(candidate.join(defaults::CONFIG_FILE_NAME)) {
                return config;
            }
            candidate.push("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.use_get_requests {
            self.use_head_requests = Some(false);
        }

        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref export_path) = cli_config.export_path {
            self.export_path = Some(export_path.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Effective pool size: configured value or available parallelism
    pub fn concurrency_or_auto(&self) -> usize {
        self.concurrency.unwrap_or_else(num_cpus::get)
    }

    pub fn use_head_requests(&self) -> bool {
        self.use_head_requests.unwrap_or(defaults::USE_HEAD_REQUESTS)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(UrlProbeError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(UrlProbeError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(UrlProbeError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > defaults::MAX_CONCURRENCY {
                return Err(UrlProbeError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may exhaust sockets. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlProbeError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref export_path) = self.export_path
            && export_path.trim().is_empty()
        {
            return Err(UrlProbeError::Config("Export path cannot be empty.".to_string()));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,         // --timeout
    pub concurrency: Option<usize>,   // --concurrency
    pub user_agent: Option<String>,   // --user-agent
    pub use_get_requests: bool,       // --get

    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress
    pub export_path: Option<String>,   // --export

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
