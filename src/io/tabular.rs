//! CSV reading and writing.
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::Error;
use crate::speech::{Dataset, Speech};

/// Read a speech dataset from a CSV file with headers.
///
/// Unknown columns are ignored, derived columns are optional.
pub fn read(path: &Path) -> Result<Dataset, Error> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let speeches = reader
        .deserialize::<Speech>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} speeches from {:?}", speeches.len(), path);
    Ok(Dataset::new(speeches))
}

/// Write any serializable records, creating parent directories if needed.
pub fn write_records<T, I>(path: &Path, records: I) -> Result<usize, Error>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut out = csv::WriterBuilder::new().from_path(path)?;
    let mut nb_records = 0;
    for record in records {
        out.serialize(record)?;
        nb_records += 1;
    }
    out.flush()?;

    debug!("wrote {} records to {:?}", nb_records, path);
    Ok(nb_records)
}

/// Write a speech dataset.
pub fn write(path: &Path, dataset: &Dataset) -> Result<usize, Error> {
    write_records(path, dataset.speeches())
}
