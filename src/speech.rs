//! Speech records and datasets.
//!
//! A [Dataset] is an ordered collection of [Speech]es.
//! Transforms take a dataset by value and hand back a new one (see [crate::transformers]).
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Faction id of speakers that are not members of parliament.
pub const NON_MP_FACTION: i64 = -1;

/// Blank faction cells mean a Non-MP speaker.
fn faction_or_non_mp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(NON_MP_FACTION))
}

/// One parliamentary utterance along with its metadata.
///
/// `word_count`, `char_count` and `party` are derived columns,
/// left empty until the matching transform runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Speech {
    pub id: String,
    /// ISO date (`YYYY-MM-DD`). Kept as a string so that comparisons stay lexicographic.
    pub date: String,
    #[serde(rename = "factionId", deserialize_with = "faction_or_non_mp")]
    #[schemars(with = "i64")]
    pub faction_id: i64,
    pub text: String,
    #[serde(default)]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub char_count: Option<usize>,
    #[serde(default)]
    pub party: Option<String>,
}

impl Speech {
    pub fn new(id: String, date: String, faction_id: i64, text: String) -> Self {
        Self {
            id,
            date,
            faction_id,
            text,
            word_count: None,
            char_count: None,
            party: None,
        }
    }

    /// Get a reference to the speech's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copy metadata into a new record holding `text`.
    ///
    /// Derived counts are cleared since they describe the old text.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            id: self.id.clone(),
            date: self.date.clone(),
            faction_id: self.faction_id,
            text,
            word_count: None,
            char_count: None,
            party: self.party.clone(),
        }
    }
}

/// Ordered collection of speeches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    speeches: Vec<Speech>,
}

impl Dataset {
    pub fn new(speeches: Vec<Speech>) -> Self {
        Self { speeches }
    }

    pub fn len(&self) -> usize {
        self.speeches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeches.is_empty()
    }

    pub fn speeches(&self) -> &[Speech] {
        &self.speeches
    }

    pub fn into_inner(self) -> Vec<Speech> {
        self.speeches
    }

    /// Texts in dataset order, ready to be fed to a [crate::sentiment::BatchProcessor].
    pub fn texts(&self) -> Vec<String> {
        self.speeches.iter().map(|s| s.text.clone()).collect()
    }

    /// Column names, in serialization order.
    pub fn columns() -> &'static [&'static str] {
        &[
            "id",
            "date",
            "factionId",
            "text",
            "word_count",
            "char_count",
            "party",
        ]
    }
}

impl FromIterator<Speech> for Dataset {
    fn from_iter<I: IntoIterator<Item = Speech>>(iter: I) -> Self {
        Self {
            speeches: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Dataset {
    type Item = Speech;
    type IntoIter = std::vec::IntoIter<Speech>;

    fn into_iter(self) -> Self::IntoIter {
        self.speeches.into_iter()
    }
}
