//! Sample generation pipeline
//!
//! Loads the raw dump, keeps speeches from the factions/period of interest,
//! samples a fraction of them and saves the sample as CSV.
use std::path::PathBuf;

use log::info;

use crate::config::SamplingParams;
use crate::error::Error;
use crate::io::{DataLayout, Format, Mode};
use crate::processing;

use super::Pipeline;

pub struct Sample {
    layout: DataLayout,
    source: Format,
    params: SamplingParams,
}

impl Sample {
    pub fn new(layout: DataLayout, source: Format, params: SamplingParams) -> Self {
        Self {
            layout,
            source,
            params,
        }
    }
}

impl Pipeline<PathBuf> for Sample {
    fn run(&self) -> Result<PathBuf, Error> {
        let raw = self.layout.load(Mode::Raw(self.source))?;
        info!("Total rows in dataset: {}", raw.len());

        let sampled = processing::sample(raw, &self.params)?;
        self.layout.save(Mode::Sample, &sampled)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DataPaths, SamplingParams};
    use crate::error::Error;
    use crate::io::{DataLayout, Format, Mode};
    use crate::pipelines::Pipeline;
    use crate::speech::{Dataset, Speech};

    use super::Sample;

    #[test]
    fn raw_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DataLayout::new(dir.path(), &DataPaths::default());
        let raw: Dataset = (0..40)
            .map(|i| {
                let date = if i % 2 == 0 { "1998-01-01" } else { "2004-01-01" };
                Speech::new(i.to_string(), date.into(), 23, format!("Rede {i}"))
            })
            .collect();
        layout.save(Mode::Raw(Format::Csv), &raw).unwrap();

        let params = SamplingParams {
            fraction: 0.5,
            ..SamplingParams::default()
        };
        let path = Sample::new(layout.clone(), Format::Csv, params).run().unwrap();
        assert_eq!(path, layout.path(Mode::Sample));

        let sample = layout.load(Mode::Sample).unwrap();
        assert_eq!(sample.len(), 10);
        assert!(sample.speeches().iter().all(|s| s.date == "2004-01-01"));
    }

    #[test]
    fn missing_raw() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DataLayout::new(dir.path(), &DataPaths::default());
        let r = Sample::new(layout, Format::Parquet, SamplingParams::default()).run();
        assert!(matches!(r, Err(Error::NotFound(_))));
    }
}
