/*! Sentiment scoring

Holds a [SentimentModel] trait for plugging any classifier into the [BatchProcessor].

The bundled model is a supervised [fasttext](https://fasttext.cc) classifier ([FastTextSentiment]). !*/
mod batch;
mod classifier;
mod model;
mod progress;

pub use batch::{batch_process_sentiment, BatchProcessor};
pub use classifier::{FastTextSentiment, FastTextSentimentBuilder};
pub use model::{SentimentModel, SentimentScores};
pub use progress::{BarProgress, LogProgress, NoProgress, Progress};
