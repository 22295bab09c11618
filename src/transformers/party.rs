use std::collections::BTreeMap;

use crate::config::Config;
use crate::speech::Dataset;

use super::Transform;

/// Fills the `party` column from the faction id, using the configured `party_id_map`.
///
/// Unknown factions leave the column empty.
pub struct PartyName {
    parties: BTreeMap<i64, String>,
}

impl PartyName {
    pub fn new(parties: BTreeMap<i64, String>) -> Self {
        Self { parties }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.party_id_map.clone())
    }

    /// Party of `faction_id`, if known.
    pub fn party(&self, faction_id: i64) -> Option<&str> {
        self.parties.get(&faction_id).map(String::as_str)
    }
}

impl Transform for PartyName {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        dataset
            .into_iter()
            .map(|mut speech| {
                speech.party = self.party(speech.faction_id).map(str::to_string);
                speech
            })
            .collect()
    }
}

impl Default for PartyName {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
