//! Word and character counts.
use rayon::prelude::*;

use crate::speech::Dataset;

use super::Transform;

/// Number of space-separated tokens.
///
/// An empty text still has one (empty) token.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Number of unicode codepoints.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Fills the `word_count` column.
#[derive(Default)]
pub struct WordCount;

impl Transform for WordCount {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        let speeches: Vec<_> = dataset
            .into_inner()
            .into_par_iter()
            .map(|mut speech| {
                speech.word_count = Some(word_count(&speech.text));
                speech
            })
            .collect();
        Dataset::new(speeches)
    }
}

/// Fills the `char_count` column.
#[derive(Default)]
pub struct CharCount;

impl Transform for CharCount {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        let speeches: Vec<_> = dataset
            .into_inner()
            .into_par_iter()
            .map(|mut speech| {
                speech.char_count = Some(char_count(&speech.text));
                speech
            })
            .collect();
        Dataset::new(speeches)
    }
}

#[cfg(test)]
mod tests {
    use crate::speech::{Dataset, Speech};
    use crate::transformers::Transform;

    use super::{char_count, word_count, CharCount, WordCount};

    #[test]
    fn words() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count(""), 1);
    }

    #[test]
    fn chars() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!("héllo".len(), 6);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn columns_filled() {
        let d = Dataset::new(vec![
            Speech::new("1".into(), "2000-01-01".into(), 4, "hello world".into()),
            Speech::new("2".into(), "2000-01-01".into(), 4, "héllo".into()),
        ]);
        let d = CharCount.transform_own(WordCount.transform_own(d));
        let counts: Vec<_> = d
            .speeches()
            .iter()
            .map(|s| (s.word_count, s.char_count))
            .collect();
        assert_eq!(counts, vec![(Some(2), Some(11)), (Some(1), Some(5))]);
    }
}
