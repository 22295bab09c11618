//! Pipelines.
//!
//! Each stage of the preparation is a pipeline implementing the light [pipeline::Pipeline] trait:
//! [Sample] (raw dump to sample), [Clean] (sample to cleaned paragraphs) and
//! [Sentiment] (cleaned paragraphs to sentiment scores).
mod clean;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod sample;
mod sentiment;

pub use clean::Clean;
pub use pipeline::Pipeline;
pub use sample::Sample;
pub use sentiment::Sentiment;
