use clap::{CommandFactory, Parser};
use urlprobe::config::{CliConfig, Config};
use urlprobe::core::constants::output_formats;
use urlprobe::ingest::IngestedUrls;
use urlprobe::reporting::{export_to_file, logging};
use urlprobe::ui::output::{self, DisplayMetadata};
use urlprobe::ui::{Cli, Commands, ProgressReporter, cli_to_config, cli_to_sources};
use urlprobe::{ProbeResult, Prober};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    if cli_to_sources(&cli).is_empty() {
        eprintln!("Error: No URLs provided");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(1);
    }

    match run_urlprobe_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            urlprobe::ui::print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Ingest, probe, render and export. Extracted from main() for testing
pub async fn run_urlprobe_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    let ingested = ingest_urls(cli)?;
    if output_settings.should_show_info() {
        output::display_url_discovery(&ingested);
    }

    let results = probe_urls(&ingested, &config, &output_settings).await?;
    let metadata = DisplayMetadata::new(&ingested, &results);

    output::display_results(&results, &output_settings.output_format, &metadata)?;

    if let Some(ref export_path) = config.export_path {
        export_to_file(export_path, &results).inspect_err(|e| {
            logging::log_error(&format!("Could not export results to '{export_path}'"), Some(e));
        })?;
        if output_settings.should_show_info() {
            output::display_export_notice(export_path);
        }
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence; values given on the command line are validated too
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    /// Informational lines only go with the human-readable format
    pub fn should_show_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let output_format = config.output_format().to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format,
        show_progress,
    }
}

/// Read every input source named on the command line
pub fn ingest_urls(cli: &Cli) -> Result<IngestedUrls, Box<dyn std::error::Error>> {
    let ingested = cli_to_sources(cli).collect().inspect_err(|e| {
        logging::log_error("Could not read input", Some(e));
    })?;

    let duplicates = ingested.duplicates_removed();
    if duplicates > 0 {
        logging::log_warning(&format!("Ignoring {duplicates} duplicate URL(s)"));
    }
    Ok(ingested)
}

/// Run the batch through a prober built from the config
pub async fn probe_urls(
    ingested: &IngestedUrls,
    config: &Config,
    output_settings: &OutputSettings,
) -> Result<Vec<ProbeResult>, Box<dyn std::error::Error>> {
    let concurrency = config.concurrency_or_auto();
    logging::log_config_info(config, concurrency);

    let prober = Prober::from_config(config)?;
    let mut progress = output_settings
        .show_progress
        .then(|| ProgressReporter::new(true));

    let results = prober
        .check_all_with_progress(ingested.urls.clone(), progress.as_mut())
        .await;

    // A finished batch leaves its summary on the bar
    if results.is_err()
        && let Some(ref progress) = progress
    {
        progress.finish_and_clear();
    }

    Ok(results?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("urlprobe").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_handle_completion_commands_none() {
        let cli = parse(&["https://example.com"]);
        assert_eq!(handle_completion_commands(&cli), None);
    }

    #[test]
    fn test_load_and_merge_config_no_config() -> Result<(), Box<dyn std::error::Error>> {
        let cli_config = CliConfig {
            no_config: true,
            timeout: Some(2),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config)?;

        assert_eq!(config.timeout, Some(2));
        assert!(config.use_head_requests());
        Ok(())
    }

    #[test]
    fn test_load_and_merge_config_rejects_invalid_cli_values() {
        let cli_config = CliConfig {
            no_config: true,
            concurrency: Some(0),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_load_and_merge_config_missing_file() {
        let cli_config = CliConfig {
            config_file: Some("no-such-config.toml".to_string()),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_output_settings() {
        let config = Config::default();

        let normal = setup_output_settings(&CliConfig::default(), &config);
        assert!(normal.should_show_info());
        assert!(normal.show_progress);

        let quiet = setup_output_settings(
            &CliConfig {
                quiet: true,
                ..Default::default()
            },
            &config,
        );
        assert!(!quiet.should_show_info());
        assert!(!quiet.show_progress);

        let json_config = Config {
            output_format: Some(output_formats::JSON.to_string()),
            ..Default::default()
        };
        let json = setup_output_settings(&CliConfig::default(), &json_config);
        assert!(!json.should_show_info());
        assert!(!json.show_progress);
    }

    #[test]
    fn test_ingest_urls_from_arguments() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse(&["http://a.example", "http://a.example", "http://b.example"]);

        let ingested = ingest_urls(&cli)?;

        assert_eq!(ingested.urls, vec!["http://a.example", "http://b.example"]);
        assert_eq!(ingested.total_found, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_urls_keeps_order() -> Result<(), Box<dyn std::error::Error>> {
        let ingested = IngestedUrls {
            urls: vec!["not a url".to_string(), "http://127.0.0.1:1".to_string()],
            total_found: 2,
        };
        let config = Config {
            timeout: Some(2),
            concurrency: Some(2),
            ..Default::default()
        };
        let settings = OutputSettings {
            quiet: true,
            verbose: false,
            output_format: output_formats::TEXT.to_string(),
            show_progress: false,
        };

        let results = probe_urls(&ingested, &config, &settings).await?;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "not a url");
        assert_eq!(results[1].url, "http://127.0.0.1:1");
        assert!(results.iter().all(|r| r.outcome.is_unreachable()));
        Ok(())
    }
}
