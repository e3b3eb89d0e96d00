use crate::config::Config;
use crate::core::types::ProbeOutcome;
use log::{debug, error, info, warn};
use std::io::Write;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logger_builder(level, env_filters.as_deref()).init();

    debug!("Logger initialized with level: {level:?}");
}

/// Builder with `level` as the default; `RUST_LOG`-style filters override it.
fn logger_builder(level: log::LevelFilter, env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let timeout = config.timeout_duration().as_secs();
    let method = if config.use_head_requests() {
        "HEAD"
    } else {
        "GET"
    };
    let user_agent = config.user_agent.as_deref().unwrap_or("default");

    info!("Configuration: concurrency={actual_concurrency}, timeout={timeout}s");
    info!("HTTP: method={method}, user_agent={user_agent}");
}

/// Log URL ingestion information
pub fn log_url_ingestion(unique_urls: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs (from {total_found} total)");
}

/// Log batch start
pub fn log_batch_start(url_count: usize, pool_size: usize) {
    info!("Probing {url_count} URLs with up to {pool_size} concurrent requests");
}

/// Log batch completion
pub fn log_batch_complete(url_count: usize, unreachable: usize, duration_ms: u128) {
    if unreachable == 0 {
        info!("✅ Batch complete: {url_count} URLs probed ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Batch complete: {}/{} URLs reachable, {} unreachable ({}ms)",
            url_count - unreachable,
            url_count,
            unreachable,
            duration_ms
        );
    }
}

/// Log individual probe results for debugging
pub fn log_probe_result(url: &str, outcome: ProbeOutcome, reason: Option<&str>) {
    match (outcome, reason) {
        (ProbeOutcome::StatusCode(status), _) => debug!("✓ {url} -> {status}"),
        (ProbeOutcome::Unreachable, Some(reason)) => debug!("✗ {url} -> {reason}"),
        (ProbeOutcome::Unreachable, None) => debug!("✗ {url} -> unreachable"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_builder_uses_level_without_env_filters() {
        let logger = logger_builder(log::LevelFilter::Off, None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Off);

        let logger = logger_builder(log::LevelFilter::Debug, None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_logger_builder_env_filters_override_level() {
        let logger = logger_builder(log::LevelFilter::Off, Some("info")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);

        let logger = logger_builder(log::LevelFilter::Off, Some("urlprobe=trace")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default(), 4);

        let config = Config {
            use_head_requests: Some(false),
            user_agent: Some("agent/1.0".to_string()),
            ..Default::default()
        };
        log_config_info(&config, 1);
    }

    #[test]
    fn test_log_batch_functions() {
        log_url_ingestion(0, 0);
        log_url_ingestion(3, 5);
        log_batch_start(10, 4);
        log_batch_complete(10, 0, 15);
        log_batch_complete(10, 3, 1500);
        log_batch_complete(0, 0, 0);
    }

    #[test]
    fn test_log_probe_result_variants() {
        log_probe_result("https://example.com", ProbeOutcome::StatusCode(200), None);
        log_probe_result(
            "https://example.com",
            ProbeOutcome::StatusCode(404),
            Some("ignored"),
        );
        log_probe_result("http://127.0.0.1:1", ProbeOutcome::Unreachable, Some("refused"));
        log_probe_result("not a url", ProbeOutcome::Unreachable, None);
    }

    #[test]
    fn test_log_error_and_warning() {
        log_error("plain failure", None);
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing.csv");
        log_error("with source", Some(&io_error as &dyn std::error::Error));
        log_warning("careful");
    }
}
