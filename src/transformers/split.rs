//! Splits speeches into paragraphs.
//!
//! Each speech becomes one record per non-empty, whitespace-trimmed segment.
//! Segments inherit the speech metadata.
use rayon::prelude::*;

use crate::speech::Dataset;

use super::Transform;

/// Trimmed, non-empty segments of `text`, in order.
pub fn split_segments<'a>(text: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

pub struct SplitParagraphs {
    delimiter: String,
}

impl SplitParagraphs {
    pub fn new(delimiter: String) -> Self {
        Self { delimiter }
    }
}

impl Transform for SplitParagraphs {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        let speeches: Vec<_> = dataset
            .into_inner()
            .into_par_iter()
            .flat_map_iter(|speech| {
                split_segments(&speech.text, &self.delimiter)
                    .map(|segment| speech.with_text(segment.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        Dataset::new(speeches)
    }
}

impl Default for SplitParagraphs {
    /// Blank line delimiter.
    fn default() -> Self {
        Self {
            delimiter: "\n\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::speech::{Dataset, Speech};
    use crate::transformers::Transform;

    use super::{split_segments, SplitParagraphs};

    #[test]
    fn trailing_segment_dropped() {
        let segments: Vec<_> = split_segments("a\n\nb\n\n", "\n\n").collect();
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn segments_trimmed() {
        let segments: Vec<_> = split_segments("  a \n\n \n\n\tb", "\n\n").collect();
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn records_per_segment() {
        let mut first = Speech::new("1".into(), "2001-01-01".into(), 23, "a\n\nb\n\n".into());
        first.word_count = Some(2);
        let d = Dataset::new(vec![
            first,
            Speech::new("2".into(), "2002-01-01".into(), 4, "   ".into()),
            Speech::new("3".into(), "2003-01-01".into(), 4, "c".into()),
        ]);

        let d = SplitParagraphs::default().transform_own(d);
        let rows: Vec<_> = d
            .speeches()
            .iter()
            .map(|s| (s.id.as_str(), s.text(), s.word_count))
            .collect();
        assert_eq!(
            rows,
            vec![("1", "a", None), ("1", "b", None), ("3", "c", None)]
        );
    }

    #[test]
    fn custom_delimiter() {
        let d = Dataset::new(vec![Speech::new(
            "1".into(),
            "2001-01-01".into(),
            23,
            "x|y||z".into(),
        )]);
        let d = SplitParagraphs::new("|".to_string()).transform_own(d);
        assert_eq!(d.texts(), vec!["x", "y", "z"]);
    }
}
