//! Cleaning pipeline
//!
//! 1. Speeches shorter than `min_speech_length` characters are dropped.
//! 1. Remaining speeches are split into paragraphs (blank-line separated).
//! 1. Paragraphs are trimmed to `max_words_per_paragraph` words.
//! 1. Word/char counts and party names are added.
//! 1. The result is saved as the cleaned dataset.
use std::path::PathBuf;

use log::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::filtering::{self, MinLength};
use crate::io::{DataLayout, Mode};
use crate::speech::Dataset;
use crate::transformers::{
    CharCount, PartyName, SplitParagraphs, Transform, Transformer, TrimWords, WordCount,
};

use super::Pipeline;

pub struct Clean {
    layout: DataLayout,
    config: Config,
}

impl Clean {
    pub fn new(layout: DataLayout, config: Config) -> Self {
        Self { layout, config }
    }

    fn transformer(&self) -> Transformer {
        let mut transformer = Transformer::default();
        transformer
            .add(Box::<SplitParagraphs>::default())
            .add(Box::new(TrimWords::new(self.config.max_words_per_paragraph)))
            .add(Box::<WordCount>::default())
            .add(Box::<CharCount>::default())
            .add(Box::new(PartyName::from_config(&self.config)));
        transformer
    }

    /// Filter and transform a sample, without touching the disk.
    pub fn clean(&self, sample: Dataset) -> Dataset {
        let total = sample.len();
        let filter = MinLength::with_min_size(self.config.min_speech_length);
        let kept = filtering::apply(&filter, sample);
        debug!(
            "{}/{} speeches have at least {} chars",
            kept.len(),
            total,
            filter.min_size()
        );

        self.transformer().transform_own(kept)
    }
}

impl Pipeline<PathBuf> for Clean {
    fn run(&self) -> Result<PathBuf, Error> {
        let sample = self.layout.load(Mode::Sample)?;
        let nb_speeches = sample.len();
        let cleaned = self.clean(sample);
        info!(
            "{} speeches cleaned into {} paragraphs",
            nb_speeches,
            cleaned.len()
        );
        self.layout.save(Mode::Cleaned, &cleaned)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DataPaths};
    use crate::io::{DataLayout, Mode};
    use crate::pipelines::Pipeline;
    use crate::speech::{Dataset, Speech};

    use super::Clean;

    fn config() -> Config {
        Config {
            min_speech_length: 20,
            max_words_per_paragraph: 3,
            ..Config::default()
        }
    }

    #[test]
    fn clean_in_memory() {
        let d = Dataset::new(vec![
            Speech::new("1".into(), "2001-01-01".into(), 23, "zu kurz".into()),
            Speech::new(
                "2".into(),
                "2001-01-01".into(),
                4,
                "Herr Präsident! Meine Damen und Herren!\n\n Wir stimmen zu. \n\n".into(),
            ),
        ]);
        let layout = DataLayout::new(std::path::Path::new("."), &DataPaths::default());
        let cleaned = Clean::new(layout, config()).clean(d);

        let rows: Vec<_> = cleaned
            .speeches()
            .iter()
            .map(|s| {
                (
                    s.id.as_str(),
                    s.text(),
                    s.word_count,
                    s.char_count,
                    s.party.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2", "Herr Präsident! Meine", Some(3), Some(21), Some("CDU")),
                ("2", "Wir stimmen zu.", Some(3), Some(15), Some("CDU")),
            ]
        );
    }

    #[test_log::test]
    fn sample_to_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DataLayout::new(dir.path(), &DataPaths::default());
        let sample = Dataset::new(vec![Speech::new(
            "9".into(),
            "2010-10-10".into(),
            23,
            "Liebe Kolleginnen und Kollegen, heute beraten wir".into(),
        )]);
        layout.save(Mode::Sample, &sample).unwrap();

        Clean::new(layout.clone(), config()).run().unwrap();

        let cleaned = layout.load(Mode::Cleaned).unwrap();
        assert_eq!(cleaned.texts(), vec!["Liebe Kolleginnen und"]);
        assert_eq!(cleaned.speeches()[0].party.as_deref(), Some("SPD"));
    }
}
