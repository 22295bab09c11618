//! Batched sentiment scoring.
//!
//! Texts are cut into contiguous, non-overlapping batches of at most `batch_size` texts.
//! Batches are scored one after the other and their scores are appended in order,
//! so that the score at index `i` always belongs to the text at index `i`.
//!
//! Any model error stops the run and is returned as is: no retry, no partial result.
use log::debug;

use crate::error::Error;

use super::{BarProgress, NoProgress, Progress, SentimentModel, SentimentScores};

pub struct BatchProcessor {
    batch_size: usize,
}

impl BatchProcessor {
    pub const DEFAULT_BATCH_SIZE: usize = 32;

    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of model calls needed for `nb_texts` texts.
    pub fn total_batches(&self, nb_texts: usize) -> usize {
        nb_texts.div_ceil(self.batch_size)
    }

    /// Score `texts` with `model`, one call per batch.
    ///
    /// Returns [Error::InvalidArgument] on a zero batch size, before calling the model.
    /// A model returning a number of scores different from its batch size yields [Error::Model].
    pub fn process<M>(
        &self,
        texts: &[String],
        model: &M,
        progress: &mut dyn Progress,
    ) -> Result<SentimentScores, Error>
    where
        M: SentimentModel + ?Sized,
    {
        if self.batch_size == 0 {
            return Err(Error::InvalidArgument(
                "batch size must be positive".to_string(),
            ));
        }

        let total_batches = self.total_batches(texts.len());
        let mut scores = SentimentScores::with_capacity(texts.len());

        progress.start(total_batches);
        for (idx, batch) in texts.chunks(self.batch_size).enumerate() {
            let batch_scores = model.predict_sentiment(batch)?;

            if batch_scores.labels().len() != batch.len()
                || batch_scores.probabilities().len() != batch.len()
            {
                return Err(Error::Model(format!(
                    "batch {}: got {} labels and {} probability vectors for {} texts",
                    idx + 1,
                    batch_scores.labels().len(),
                    batch_scores.probabilities().len(),
                    batch.len()
                )));
            }

            debug!("batch {}/{}: {} texts", idx + 1, total_batches, batch.len());
            scores.extend(batch_scores);
            progress.advance(idx + 1, total_batches);
        }
        progress.finish(texts.len(), total_batches);

        Ok(scores)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BATCH_SIZE)
    }
}

/// Score `texts` in batches of `batch_size`, drawing a progress bar if `show_progress` is set.
pub fn batch_process_sentiment<M>(
    texts: &[String],
    model: &M,
    batch_size: usize,
    show_progress: bool,
) -> Result<SentimentScores, Error>
where
    M: SentimentModel + ?Sized,
{
    let processor = BatchProcessor::new(batch_size);
    if show_progress {
        processor.process(texts, model, &mut BarProgress::new())
    } else {
        processor.process(texts, model, &mut NoProgress)
    }
}
