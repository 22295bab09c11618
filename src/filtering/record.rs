//! Record-level filtering.
use crate::config::SamplingParams;
use crate::speech::Speech;

use super::Filter;

/// Keeps speeches from a set of factions, dated on or after a given day.
///
/// Dates are ISO strings, so that the comparison is lexicographic.
pub struct RecordFilter {
    min_date: String,
    faction_ids: Vec<i64>,
}

impl RecordFilter {
    pub fn new(min_date: String, faction_ids: Vec<i64>) -> Self {
        Self {
            min_date,
            faction_ids,
        }
    }

    pub fn from_params(params: &SamplingParams) -> Self {
        Self::new(params.min_date.clone(), params.faction_ids.clone())
    }
}

impl Filter<&Speech> for RecordFilter {
    fn detect(&self, speech: &Speech) -> bool {
        speech.date.as_str() >= self.min_date.as_str()
            && self.faction_ids.contains(&speech.faction_id)
    }
}

impl Default for RecordFilter {
    /// CDU (4) and SPD (23) speeches from 2000 onwards.
    fn default() -> Self {
        Self::from_params(&SamplingParams::default())
    }
}

/// Keeps speeches whose text is at least `min_size` unicode codepoints long.
pub struct MinLength {
    min_size: usize,
}

impl MinLength {
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the filter's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&Speech> for MinLength {
    fn detect(&self, speech: &Speech) -> bool {
        speech.text().chars().count() >= self.min_size
    }
}

impl Default for MinLength {
    /// Default minimum length is 200 codepoints
    fn default() -> Self {
        Self { min_size: 200 }
    }
}

#[cfg(test)]
mod tests {
    use crate::filtering::Filter;
    use crate::speech::Speech;

    use super::{MinLength, RecordFilter};

    fn speech(date: &str, faction_id: i64, text: &str) -> Speech {
        Speech::new("0".into(), date.into(), faction_id, text.into())
    }

    #[test]
    fn record_filter_default() {
        let f = RecordFilter::default();
        assert!(f.detect(&speech("2000-01-01", 4, "")));
        assert!(f.detect(&speech("2015-06-30", 23, "")));
        assert!(!f.detect(&speech("1999-12-31", 23, "")));
        assert!(!f.detect(&speech("2015-06-30", 3, "")));
    }

    #[test]
    fn min_length_counts_codepoints() {
        let f = MinLength::with_min_size(5);
        assert!(f.detect(&speech("2000-01-01", 4, "héllo")));
        assert!(!f.detect(&speech("2000-01-01", 4, "héll")));
        assert_eq!(MinLength::default().min_size(), &200);
    }
}
