//! Sentiment model trait and its output.
use crate::error::Error;

/// Labels and probability vectors, index-aligned with the scored texts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentScores {
    labels: Vec<String>,
    probabilities: Vec<Vec<f32>>,
}

impl SentimentScores {
    pub fn new(labels: Vec<String>, probabilities: Vec<Vec<f32>>) -> Self {
        Self {
            labels,
            probabilities,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            probabilities: Vec::with_capacity(capacity),
        }
    }

    /// Number of scored texts.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get a reference to the predicted labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get a reference to the probability vectors.
    pub fn probabilities(&self) -> &[Vec<f32>] {
        &self.probabilities
    }

    /// Append `other`'s scores after ours.
    pub fn extend(&mut self, other: SentimentScores) {
        self.labels.extend(other.labels);
        self.probabilities.extend(other.probabilities);
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<f32>>) {
        (self.labels, self.probabilities)
    }
}

/// Sentiment prediction trait.
///
/// Implementors score a batch of texts and return one label and one probability vector
/// per text, in input order.
pub trait SentimentModel {
    fn predict_sentiment(&self, batch: &[String]) -> Result<SentimentScores, Error>;
}
