use futures::{StreamExt, stream};
use std::time::Instant;

use crate::config::Config;
use crate::core::error::{Result, UrlProbeError};
use crate::core::types::{ProbeOutcome, ProbeResult};
use crate::probing::pool::WorkerPool;
use crate::probing::probe::{HttpProbe, Probe};
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;

/// Runs batches of probes on a worker pool and returns results in input order.
#[derive(Debug, Clone)]
pub struct Prober<P = HttpProbe> {
    probe: P,
    pool: WorkerPool,
}

impl Prober<HttpProbe> {
    /// HTTP prober with a pool sized from `concurrency` (or the CPU count).
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            HttpProbe::new(config)?,
            WorkerPool::new(config.concurrency_or_auto()),
        ))
    }
}

impl<P: Probe> Prober<P> {
    pub fn new(probe: P, pool: WorkerPool) -> Self {
        Self { probe, pool }
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Probe every URL once. The result has the same length and order as `urls`;
    /// duplicates are probed independently.
    ///
    /// Per-URL failures are reported as [`ProbeOutcome::Unreachable`]. The only
    /// error is a closed worker pool, in which case no results are returned.
    pub async fn check_all(&self, urls: Vec<String>) -> Result<Vec<ProbeResult>> {
        self.check_all_with_progress(urls, None).await
    }

    pub async fn check_all_with_progress(
        &self,
        urls: Vec<String>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<ProbeResult>> {
        let total = urls.len();
        if let Some(ref mut prog) = progress {
            prog.start_batch(total);
        }
        logging::log_batch_start(total, self.pool.size());
        let start_time = Instant::now();

        let mut outcomes: Vec<(usize, ProbeOutcome)> = Vec::with_capacity(total);
        {
            let mut in_flight = stream::iter(urls.iter().enumerate())
                .map(|(index, url)| {
                    let probe = &self.probe;
                    let pool = &self.pool;
                    async move {
                        let _permit = pool.acquire().await?;
                        let outcome = probe.probe(url).await;
                        Ok::<_, UrlProbeError>((index, outcome))
                    }
                })
                .buffer_unordered(self.pool.size());

            while let Some(next) = in_flight.next().await {
                outcomes.push(next?);
                if let Some(ref prog) = progress {
                    prog.update_batch(outcomes.len());
                }
            }
        }

        // Completion order is arbitrary; each index appears exactly once.
        outcomes.sort_unstable_by_key(|(index, _)| *index);
        let results: Vec<ProbeResult> = urls
            .into_iter()
            .zip(outcomes)
            .map(|(url, (_, outcome))| ProbeResult::new(url, outcome))
            .collect();

        let unreachable = results
            .iter()
            .filter(|result| result.outcome.is_unreachable())
            .count();
        if let Some(ref prog) = progress {
            prog.finish_batch(total - unreachable, total);
        }
        logging::log_batch_complete(total, unreachable, start_time.elapsed().as_millis());

        Ok(results)
    }
}
