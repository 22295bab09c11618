/*! FastText sentiment model.

Wraps a supervised fastText classifier whose labels are sentiment classes
(`__label__positive`, `__label__negative`, ...).
!*/
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::debug;

use crate::error::Error;

use super::{SentimentModel, SentimentScores};

const LABEL_PREFIX: &str = "__label__";

pub struct FastTextSentiment {
    inner: FastTextLib,
    /// Class labels in model order, without prefix.
    labels: Vec<String>,
}

impl FastTextSentiment {
    /// removes __label__ from label start
    fn clean_label(label: &str) -> &str {
        label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
    }

    /// fastText reads a single line per prediction.
    fn clean_text(text: &str) -> String {
        text.replace(char::from(0), "").replace(['\n', '\r'], " ")
    }

    /// Class labels, in the order used by probability vectors.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Score a single text: top label and a probability per class.
    fn predict_one(&self, text: &str) -> Result<(String, Vec<f32>), Error> {
        let predictions = self
            .inner
            .predict(&Self::clean_text(text), -1, 0.0)
            .map_err(Error::FastText)?;

        let mut probabilities = vec![0.0f32; self.labels.len()];
        for prediction in &predictions {
            let label = Self::clean_label(&prediction.label);
            if let Some(idx) = self.labels.iter().position(|l| l == label) {
                probabilities[idx] = prediction.prob;
            }
        }

        // predictions are sorted by decreasing probability
        let top = predictions
            .first()
            .map(|p| Self::clean_label(&p.label).to_string())
            .ok_or_else(|| Error::Model(format!("no prediction for {text:?}")))?;

        Ok((top, probabilities))
    }
}

impl SentimentModel for FastTextSentiment {
    fn predict_sentiment(&self, batch: &[String]) -> Result<SentimentScores, Error> {
        let (labels, probabilities) = batch
            .iter()
            .map(|text| self.predict_one(text))
            .collect::<Result<Vec<_>, Error>>()?
            .into_iter()
            .unzip();
        Ok(SentimentScores::new(labels, probabilities))
    }
}

/// FastTextSentiment builder.
#[derive(Default)]
pub struct FastTextSentimentBuilder<'a> {
    path: Option<&'a Path>,
}

impl<'a> FastTextSentimentBuilder<'a> {
    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextSentimentBuilder<'a> {
        self.path = Some(path);
        self
    }

    pub fn build(&self) -> Result<FastTextSentiment, Error> {
        let path = self
            .path
            .ok_or_else(|| Error::InvalidArgument("No model path provided".to_string()))?;
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Custom(format!("Couldn't parse path {path:?}")))?;

        let mut inner = FastTextLib::new();
        inner.load_model(path_str).map_err(Error::FastText)?;

        let (labels, _) = inner.get_labels().map_err(Error::FastText)?;
        let labels: Vec<String> = labels
            .iter()
            .map(|l| FastTextSentiment::clean_label(l).to_string())
            .collect();
        debug!("loaded sentiment model {:?} with labels {:?}", path, labels);

        Ok(FastTextSentiment { inner, labels })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::Error;
    use crate::sentiment::SentimentModel;

    use super::{FastTextSentiment, FastTextSentimentBuilder};

    #[test]
    fn labels_cleaned() {
        assert_eq!(FastTextSentiment::clean_label("__label__positive"), "positive");
        assert_eq!(FastTextSentiment::clean_label("negative"), "negative");
    }

    #[test]
    fn text_single_line() {
        assert_eq!(
            FastTextSentiment::clean_text("a\nb\r\nc\0"),
            "a b  c".to_string()
        );
    }

    #[test]
    fn missing_model() {
        let r = FastTextSentimentBuilder::default()
            .path(Path::new("does/not/exist.bin"))
            .build();
        assert!(matches!(r, Err(Error::NotFound(_))));
        assert!(matches!(
            FastTextSentimentBuilder::default().build(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    #[ignore = "needs a sentiment.bin fastText model at the crate root"]
    fn predict_batch() {
        let model = FastTextSentimentBuilder::default()
            .path(Path::new("sentiment.bin"))
            .build()
            .unwrap();

        let batch = vec![
            "Das ist ein großartiger Erfolg für unser Land.".to_string(),
            "Diese Politik ist ein Desaster.".to_string(),
        ];
        let scores = model.predict_sentiment(&batch).unwrap();
        assert_eq!(scores.len(), 2);
        for probs in scores.probabilities() {
            assert_eq!(probs.len(), model.labels().len());
        }
    }
}
