//! Sentiment scoring pipeline
//!
//! Scores every text of the cleaned dataset in batches and saves
//! one row per text with its label and class probabilities.
use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::io::{tabular, DataLayout, Mode};
use crate::sentiment::{
    BarProgress, BatchProcessor, LogProgress, Progress, SentimentModel, SentimentScores,
};
use crate::speech::{Dataset, Speech};

use super::Pipeline;

/// Output row. Probabilities are stored as a JSON array.
#[derive(Debug, Serialize)]
struct SentimentRow<'a> {
    id: &'a str,
    date: &'a str,
    #[serde(rename = "factionId")]
    faction_id: i64,
    party: Option<&'a str>,
    text: &'a str,
    sentiment: &'a str,
    probabilities: String,
}

impl<'a> SentimentRow<'a> {
    fn new(speech: &'a Speech, sentiment: &'a str, probabilities: &[f32]) -> Result<Self, Error> {
        Ok(Self {
            id: &speech.id,
            date: &speech.date,
            faction_id: speech.faction_id,
            party: speech.party.as_deref(),
            text: &speech.text,
            sentiment,
            probabilities: serde_json::to_string(probabilities)?,
        })
    }
}

pub struct Sentiment<M: SentimentModel> {
    layout: DataLayout,
    model: M,
    batch_size: usize,
    show_progress: bool,
}

impl<M: SentimentModel> Sentiment<M> {
    pub fn new(layout: DataLayout, model: M, batch_size: usize, show_progress: bool) -> Self {
        Self {
            layout,
            model,
            batch_size,
            show_progress,
        }
    }

    /// Score `dataset` texts, keeping dataset order.
    pub fn score(&self, dataset: &Dataset) -> Result<SentimentScores, Error> {
        let mut progress: Box<dyn Progress> = if self.show_progress {
            Box::new(BarProgress::new())
        } else {
            Box::new(LogProgress)
        };

        let processor = BatchProcessor::new(self.batch_size);
        info!(
            "scoring {} texts in batches of {}",
            dataset.len(),
            processor.batch_size()
        );
        processor.process(&dataset.texts(), &self.model, progress.as_mut())
    }

    fn write(&self, dataset: &Dataset, scores: &SentimentScores) -> Result<PathBuf, Error> {
        let rows = dataset
            .speeches()
            .iter()
            .zip(scores.labels().iter().zip(scores.probabilities()))
            .map(|(speech, (label, probs))| SentimentRow::new(speech, label, probs))
            .collect::<Result<Vec<_>, Error>>()?;

        let path = self.layout.sentiment_path();
        let nb_rows = tabular::write_records(&path, rows)?;
        info!("saved {} scored texts to {:?}", nb_rows, path);
        Ok(path)
    }
}

impl<M: SentimentModel> Pipeline<PathBuf> for Sentiment<M> {
    fn run(&self) -> Result<PathBuf, Error> {
        let cleaned = self.layout.load(Mode::Cleaned)?;
        let scores = self.score(&cleaned)?;
        self.write(&cleaned, &scores)
    }
}
