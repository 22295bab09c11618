//! # Parlprep
//!
//! Preparation of a German parliamentary speeches corpus for topic modeling and sentiment analysis.
//!
//! The crate downloads the dataset, samples it, cleans it (paragraph splitting, word trimming,
//! word/char counts, party names) and scores texts with a sentiment model in batches.
//!
//! It can be used both as a tool (see the `parlprep` binary) or as a lib,
//! the core being [sentiment::BatchProcessor].
pub mod config;
pub mod download;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sentiment;
pub mod speech;
pub mod transformers;
