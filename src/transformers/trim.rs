//! Trims texts to a maximum number of words.
//!
//! Words are space-separated tokens: punctuation and other whitespace stay attached to them.
//!
//! ```text
//! "Sehr geehrte Damen und Herren," (max_words = 3)
//! ```
//!
//! becomes
//!
//! ```text
//! "Sehr geehrte Damen"
//! ```
use itertools::Itertools;
use rayon::prelude::*;

use crate::speech::Dataset;

use super::Transform;

/// Keep the first `max_words` space-separated tokens of `text`.
///
/// Texts with `max_words` tokens or less are returned unchanged.
pub fn trim_to_max_words(text: &str, max_words: usize) -> String {
    text.split(' ').take(max_words).join(" ")
}

pub struct TrimWords {
    max_words: usize,
}

impl TrimWords {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

impl Transform for TrimWords {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        let speeches: Vec<_> = dataset
            .into_inner()
            .into_par_iter()
            .map(|mut speech| {
                speech.text = trim_to_max_words(&speech.text, self.max_words);
                speech
            })
            .collect();
        Dataset::new(speeches)
    }
}

impl Default for TrimWords {
    /// 300 words, the sweet spot for sentiment models.
    fn default() -> Self {
        Self { max_words: 300 }
    }
}
