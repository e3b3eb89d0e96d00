use async_trait::async_trait;
use reqwest::redirect::Policy;
use tokio::time::Duration;

use crate::config::Config;
use crate::core::constants::{defaults, timeouts};
use crate::core::error::Result;
use crate::core::types::ProbeOutcome;
use crate::reporting::logging;

/// A single liveness check. Implementations never fail: every transport
/// problem is folded into [`ProbeOutcome::Unreachable`].
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Probe backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    use_head: bool,
}

impl HttpProbe {
    /// Build the client from config: timeout, redirect limit, user agent and
    /// connection pooling sized to the configured concurrency.
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(defaults::REDIRECT_LIMIT))
            .user_agent(user_agent)
            .pool_max_idle_per_host(config.concurrency_or_auto().min(20))
            .pool_idle_timeout(Duration::from_secs(timeouts::POOL_IDLE_TIMEOUT_SECONDS))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self::with_client(client, config.use_head_requests()))
    }

    pub fn with_client(client: reqwest::Client, use_head: bool) -> Self {
        Self { client, use_head }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let request = if self.use_head {
            self.client.head(url)
        } else {
            self.client.get(url)
        };

        // The body of a GET response is never read; dropping it closes the stream.
        match request.send().await {
            Ok(response) => {
                let outcome = ProbeOutcome::StatusCode(response.status().as_u16());
                logging::log_probe_result(url, outcome, None);
                outcome
            }
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                logging::log_probe_result(url, ProbeOutcome::Unreachable, Some(&description));
                ProbeOutcome::Unreachable
            }
        }
    }
}
