//! Progress observers for batched scoring.
//!
//! Observers only ever see batch indices: they cannot change the scores.
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};

pub trait Progress {
    /// Called once before the first batch.
    fn start(&mut self, _total_batches: usize) {}

    /// Called after batch `batch` (1-based) out of `total_batches` has been scored.
    fn advance(&mut self, batch: usize, total_batches: usize);

    /// Called once after the last batch.
    fn finish(&mut self, _nb_texts: usize, _total_batches: usize) {}
}

/// Reports nothing.
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&mut self, _batch: usize, _total_batches: usize) {}
}

/// Reports through the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn advance(&mut self, batch: usize, total_batches: usize) {
        debug!("batch {}/{}", batch, total_batches);
    }

    fn finish(&mut self, nb_texts: usize, total_batches: usize) {
        info!("Processed {} texts in {} batches", nb_texts, total_batches);
    }
}

/// Progress bar on stderr.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::with_template(
            "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} batches",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message("Sentiment analysis");
        Self { bar }
    }

    /// Position of the bar, in batches.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for BarProgress {
    fn start(&mut self, total_batches: usize) {
        self.bar.set_length(total_batches as u64);
    }

    fn advance(&mut self, batch: usize, _total_batches: usize) {
        self.bar.set_position(batch as u64);
    }

    fn finish(&mut self, nb_texts: usize, total_batches: usize) {
        self.bar.finish_with_message(format!(
            "Processed {nb_texts} texts in {total_batches} batches"
        ));
    }
}
