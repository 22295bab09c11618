//! Exploratory summary of a speech dataset.
//!
//! Counts rows, missing and distinct values per column, and gives basic statistics
//! for faction ids and text lengths.
use std::{collections::HashSet, fmt};

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::speech::{Dataset, Speech};
use crate::transformers::char_count;

/// Per-column type, missing and distinct value counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub dtype: &'static str,
    pub missing: usize,
    pub unique: usize,
}

/// Text length statistics, in characters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLengths {
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

/// Smallest and largest faction id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactionRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    /// `None` on an empty dataset.
    pub faction_ids: Option<FactionRange>,
    /// `None` on an empty dataset.
    pub text_lengths: Option<TextLengths>,
}

fn column_type(column: &str) -> &'static str {
    match column {
        "factionId" => "int64",
        "word_count" | "char_count" => "uint64",
        _ => "string",
    }
}

fn min_max<T: PartialOrd + Copy>(values: impl Iterator<Item = T>) -> Option<(T, T)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Column value as a string, `None` when missing.
fn column_value(speech: &Speech, column: &str) -> Option<String> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    match column {
        "id" => non_empty(&speech.id),
        "date" => non_empty(&speech.date),
        "factionId" => Some(speech.faction_id.to_string()),
        "text" => non_empty(&speech.text),
        "word_count" => speech.word_count.map(|c| c.to_string()),
        "char_count" => speech.char_count.map(|c| c.to_string()),
        "party" => speech.party.clone(),
        _ => None,
    }
}

pub fn summarize(dataset: &Dataset) -> Summary {
    let columns = Dataset::columns()
        .iter()
        .map(|&name| {
            let values: Vec<Option<String>> = dataset
                .speeches()
                .iter()
                .map(|s| column_value(s, name))
                .collect();
            let missing = values.iter().filter(|v| v.is_none()).count();
            let unique = values.iter().collect::<HashSet<_>>().len();
            ColumnSummary {
                name,
                dtype: column_type(name),
                missing,
                unique,
            }
        })
        .collect();

    let lengths: Vec<usize> = dataset
        .speeches()
        .iter()
        .map(|s| char_count(s.text()))
        .collect();
    let faction_ids = min_max(dataset.speeches().iter().map(|s| s.faction_id))
        .map(|(min, max)| FactionRange { min, max });

    let text_lengths = min_max(lengths.iter().copied()).map(|(min, max)| TextLengths {
        mean: lengths.iter().sum::<usize>() as f64 / lengths.len() as f64,
        min,
        max,
    });

    Summary {
        rows: dataset.len(),
        columns,
        faction_ids,
        text_lengths,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}, Columns: {}", self.rows, self.columns.len())?;
        writeln!(f, "Columns:")?;
        for c in &self.columns {
            writeln!(
                f,
                "  {} ({}): missing values: {}, unique values: {}",
                c.name, c.dtype, c.missing, c.unique
            )?;
        }
        if let Some(r) = &self.faction_ids {
            writeln!(f, "factionId: min {}, max {}", r.min, r.max)?;
        }
        match &self.text_lengths {
            Some(l) => {
                writeln!(f, "text:")?;
                writeln!(f, "  Average length: {:.0} chars", l.mean)?;
                writeln!(f, "  Min length: {} chars", l.min)?;
                write!(f, "  Max length: {} chars", l.max)
            }
            None => write!(f, "text: no rows"),
        }
    }
}
