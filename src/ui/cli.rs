// Command-line interface definitions and parsing for urlprobe

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats};
use crate::ingest::UrlSources;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// URLs to check (an argument may hold several newline-separated URLs)
    pub urls: Vec<String>,

    // Input
    /// CSV file whose first column holds URLs (header row is skipped)
    #[arg(long = "csv", value_name = "FILE", help_heading = "Input")]
    pub csv_files: Vec<PathBuf>,

    /// Text file with one URL per line, '-' reads stdin
    #[arg(long = "list", value_name = "FILE", help_heading = "Input")]
    pub list_files: Vec<PathBuf>,

    // Core Options
    /// Per-request timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Concurrent requests (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Use GET instead of HEAD for servers that reject HEAD
    #[arg(long, help_heading = "Core Options")]
    pub get: bool,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Core Options")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Export results as CSV (default file: url_check_results.csv)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = defaults::EXPORT_FILE_NAME,
        help_heading = "Output & Verbosity"
    )]
    pub export: Option<String>,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Suppress informational output and progress
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Collect the CLI flags that can override the config file
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        concurrency: cli.concurrency,
        user_agent: cli.user_agent.clone(),
        use_get_requests: cli.get,

        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        export_path: cli.export.clone(),

        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

/// Input sources named on the command line
pub fn cli_to_sources(cli: &Cli) -> UrlSources {
    UrlSources {
        csv_files: cli.csv_files.clone(),
        text_files: cli.list_files.clone(),
        inline: cli.urls.clone(),
    }
}
