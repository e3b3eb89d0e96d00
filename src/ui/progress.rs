use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs checked ({eta}) {msg}";
const CHECKING_MESSAGE: &str = "Checking... please wait";

/// Progress bar for one batch, drawn on stderr. A disabled reporter does nothing.
pub struct ProgressReporter {
    batch_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            batch_progress: None,
            enabled,
        }
    }

    pub fn start_batch(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = batch_bar(total_urls, ProgressDrawTarget::stderr());
        pb.enable_steady_tick(Duration::from_millis(120));
        self.batch_progress = Some(pb);
    }

    pub fn update_batch(&self, completed: usize) {
        if let Some(ref pb) = self.batch_progress {
            pb.set_position(completed as u64);
        }
    }

    /// Stop the bar and leave the summary message on screen.
    pub fn finish_batch(&self, reachable: usize, total: usize) {
        if let Some(ref pb) = self.batch_progress {
            pb.finish_with_message(summary_message(reachable, total));
        }
    }

    /// Remove the bar, used when a batch ends without a summary.
    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.batch_progress {
            pb.finish_and_clear();
        }
    }
}

fn batch_bar(total_urls: usize, target: ProgressDrawTarget) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total_urls as u64), target);
    let style = ProgressStyle::default_bar()
        .template(BATCH_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(CHECKING_MESSAGE);
    pb
}

fn summary_message(reachable: usize, total: usize) -> String {
    if reachable == total {
        "✓ All URLs reachable".to_string()
    } else {
        format!("✓ Check complete ({reachable}/{total} reachable)")
    }
}
