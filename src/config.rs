/*! Project parameters.

Everything downstream stages need (vocabulary limits, topic counts, batch sizes, mappings)
lives in a single [Config] value that is passed explicitly to whoever needs it.

[Config::default] holds the reference values; a JSON file can override them with [Config::from_path].
!*/
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use log::debug;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// TF-IDF vectorization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TfidfParams {
    pub max_features: usize,
    pub min_df: usize,
    pub max_df: f64,
    pub ngram_range: (usize, usize),
    pub sublinear_tf: bool,
    pub norm: String,
}

impl Default for TfidfParams {
    fn default() -> Self {
        Self {
            max_features: 1000,
            min_df: 2,
            max_df: 0.8,
            ngram_range: (1, 2),
            sublinear_tf: true,
            norm: "l2".to_string(),
        }
    }
}

/// LDA topic model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LdaParams {
    pub n_topics: usize,
    pub random_state: u64,
    pub max_iter: usize,
    pub learning_method: String,
    /// -1 means all cores.
    pub n_jobs: i32,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            n_topics: 30,
            random_state: 42,
            max_iter: 30,
            learning_method: "online".to_string(),
            n_jobs: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CountVectorizerParams {
    pub max_features: usize,
    pub min_df: usize,
    pub max_df: f64,
    pub ngram_range: (usize, usize),
}

impl Default for CountVectorizerParams {
    fn default() -> Self {
        Self {
            max_features: 1000,
            min_df: 10,
            max_df: 0.9,
            ngram_range: (1, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentParams {
    pub batch_size_gpu: usize,
    pub batch_size_cpu: usize,
    /// Save a checkpoint every N batches.
    pub checkpoint_interval: usize,
}

impl Default for SentimentParams {
    fn default() -> Self {
        Self {
            batch_size_gpu: 256,
            batch_size_cpu: 128,
            checkpoint_interval: 50,
        }
    }
}

/// Data directories, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataPaths {
    pub raw: String,
    pub interim: String,
    pub processed: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            raw: "data/raw".to_string(),
            interim: "data/interim".to_string(),
            processed: "data/processed".to_string(),
        }
    }
}

/// Sampling of the raw dump (see [crate::processing::sample]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SamplingParams {
    /// Keep speeches dated on or after this day.
    pub min_date: String,
    pub faction_ids: Vec<i64>,
    pub fraction: f64,
    pub seed: u64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            min_date: "2000-01-01".to_string(),
            faction_ids: vec![4, 23],
            fraction: 0.5,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Minimum character length for a speech to be included.
    pub min_speech_length: usize,
    /// Maximum words per text segment.
    pub max_words_per_paragraph: usize,
    pub tfidf: TfidfParams,
    pub lda: LdaParams,
    pub count_vectorizer: CountVectorizerParams,
    /// HuggingFace model for topic classification.
    pub bert_topic_model: String,
    pub sentiment: SentimentParams,
    pub data_paths: DataPaths,
    pub random_seed: u64,
    pub sample_size: usize,
    pub sample_fraction: f64,
    pub sampling: SamplingParams,
    /// factionId -> party name
    pub party_id_map: BTreeMap<i64, String>,
    /// party name -> hex color
    pub party_colors: BTreeMap<String, String>,
    /// topic id -> label
    pub topic_label_map: BTreeMap<String, String>,
    /// procedural topics excluded from analysis
    pub control_topics: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let party_id_map = [
            (-1, "Non-MP"),
            (3, "Greens"),
            (4, "CDU"),
            (6, "Left"),
            (7, "DP"),
            (13, "FDP"),
            (14, "Zentrum"),
            (23, "SPD"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect();

        let party_colors = [
            ("CDU", "#000000"),
            ("SPD", "#E3000F"),
            ("FDP", "#FFED00"),
            ("Greens", "#64A12D"),
            ("Left", "#BE3075"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let topic_label_map = [
            ("1", "Wirtschaft & Arbeitsmarkt"),
            ("3", "Staat, Verwaltung & öff. Leistungen"),
            ("4", "Gesetzgebung & Verfassungsfragen"),
            ("6", "Bildung, Forschung & Zukunftspolitik"),
            ("8", "Sozial-, Familien- & Gesellschaftspolitik"),
            ("9", "Europapolitik, Energie & Klima"),
            ("11", "Außen-, Sicherheits- & Menschenrechtspolitik"),
            ("13", "Haushalt & Finanzpolitik"),
            // merged with topic 4
            ("14", "Gesetzgebung & Verfassungsfragen"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let control_topics = ["0", "2", "5", "7", "10", "12"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            min_speech_length: 200,
            max_words_per_paragraph: 300,
            tfidf: TfidfParams::default(),
            lda: LdaParams::default(),
            count_vectorizer: CountVectorizerParams::default(),
            bert_topic_model: "chkla/parlbert-topic-german".to_string(),
            sentiment: SentimentParams::default(),
            data_paths: DataPaths::default(),
            random_seed: 42,
            sample_size: 100,
            sample_fraction: 0.01,
            sampling: SamplingParams::default(),
            party_id_map,
            party_colors,
            topic_label_map,
            control_topics,
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// Missing keys fall back to their default value.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        debug!("loading config from {:?}", path);
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load from `path` if provided, defaults otherwise.
    pub fn from_path_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    pub fn schema() -> RootSchema {
        schema_for!(Config)
    }

    pub fn topic_label(&self, topic_id: &str) -> Option<&str> {
        self.topic_label_map.get(topic_id).map(String::as_str)
    }

    pub fn is_control_topic(&self, topic_id: &str) -> bool {
        self.control_topics.iter().any(|t| t == topic_id)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Config;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.max_words_per_paragraph, 300);
        assert_eq!(c.sentiment.batch_size_cpu, 128);
        assert_eq!(c.party_id_map.get(&4).map(String::as_str), Some("CDU"));
        assert_eq!(c.party_id_map.len(), 8);
        assert_eq!(c.topic_label("14"), c.topic_label("4"));
        assert!(c.is_control_topic("12"));
        assert!(!c.is_control_topic("13"));
    }

    #[test]
    fn partial_override() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"max_words_per_paragraph": 50, "sampling": {{"min_date": "2010-01-01", "faction_ids": [23], "fraction": 1.0, "seed": 1}}}}"#
        )
        .unwrap();

        let c = Config::from_path(f.path()).unwrap();
        assert_eq!(c.max_words_per_paragraph, 50);
        assert_eq!(c.sampling.faction_ids, vec![23]);
        // untouched keys keep their defaults
        assert_eq!(c.min_speech_length, 200);
        assert_eq!(c.party_id_map, Config::default().party_id_map);
    }

    #[test]
    fn json_roundtrip_keeps_party_map() {
        let c = Config::default();
        let s = serde_json::to_string(&c).unwrap();
        let back: Config = serde_json::from_str(&s).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn missing_file() {
        let r = Config::from_path(std::path::Path::new("does/not/exist.json"));
        assert!(matches!(r, Err(Error::NotFound(_))));
    }

    #[test]
    fn schema_has_fields() {
        let schema = serde_json::to_value(Config::schema()).unwrap();
        assert!(schema["properties"]["party_id_map"].is_object());
    }
}
