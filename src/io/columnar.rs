/*! Parquet reading and writing.

Only the base speech columns (`id`, `date`, `factionId`, `text`) are read and written.
Other columns of the source file are skipped.
!*/
use std::{fs::File, path::Path, sync::Arc};

use log::{debug, warn};
use parquet::{
    data_type::{ByteArray, ByteArrayType, Int64Type},
    file::{
        properties::WriterProperties,
        reader::{FileReader, SerializedFileReader},
        writer::SerializedFileWriter,
    },
    record::{Field, Row},
    schema::parser::parse_message_type,
};

use crate::error::Error;
use crate::speech::{Dataset, Speech, NON_MP_FACTION};

const SPEECH_SCHEMA: &str = "
    message speech {
        REQUIRED BINARY id (UTF8);
        REQUIRED BINARY date (UTF8);
        REQUIRED INT64 factionId;
        REQUIRED BINARY text (UTF8);
    }
";

/// Textual representation of a field, without the quotes [Field]'s `Display` puts around strings.
fn field_to_string(field: &Field) -> String {
    match field {
        Field::Str(s) => s.clone(),
        Field::Bytes(b) => String::from_utf8_lossy(b.data()).into_owned(),
        // timestamps are displayed with their time part
        Field::TimestampMillis(_) | Field::TimestampMicros(_) => {
            field.to_string().chars().take(10).collect()
        }
        Field::Null => String::new(),
        other => other.to_string(),
    }
}

fn field_to_i64(field: &Field) -> Result<i64, Error> {
    match field {
        Field::Byte(v) => Ok(i64::from(*v)),
        Field::Short(v) => Ok(i64::from(*v)),
        Field::Int(v) => Ok(i64::from(*v)),
        Field::Long(v) => Ok(*v),
        Field::UByte(v) => Ok(i64::from(*v)),
        Field::UShort(v) => Ok(i64::from(*v)),
        Field::UInt(v) => Ok(i64::from(*v)),
        Field::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| Error::Custom(format!("invalid factionId {s:?}: {e}"))),
        Field::Null => Ok(NON_MP_FACTION),
        other => Err(Error::Custom(format!("invalid factionId {other}"))),
    }
}

fn row_to_speech(row: &Row) -> Result<Speech, Error> {
    let mut id = None;
    let mut date = None;
    let mut faction_id = None;
    let mut text = None;

    for (name, field) in row.get_column_iter() {
        match name.as_str() {
            "id" => id = Some(field_to_string(field)),
            "date" => date = Some(field_to_string(field)),
            "factionId" => faction_id = Some(field_to_i64(field)?),
            "text" => text = Some(field_to_string(field)),
            _ => (),
        }
    }

    match (id, date, faction_id, text) {
        (Some(id), Some(date), Some(faction_id), Some(text)) => {
            Ok(Speech::new(id, date, faction_id, text))
        }
        _ => Err(Error::Custom(
            "parquet row lacks one of id, date, factionId, text".to_string(),
        )),
    }
}

/// Read a speech dataset from a Parquet file.
pub fn read(path: &Path) -> Result<Dataset, Error> {
    let reader = SerializedFileReader::new(File::open(path)?)?;
    debug!(
        "{:?}: {} rows in {} row groups",
        path,
        reader.metadata().file_metadata().num_rows(),
        reader.num_row_groups()
    );

    let speeches = reader
        .get_row_iter(None)?
        .map(|row| row_to_speech(&row?))
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(Dataset::new(speeches))
}

/// Write the base columns of a dataset in a single row group.
pub fn write(path: &Path, dataset: &Dataset) -> Result<usize, Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if dataset.speeches().iter().any(|s| s.word_count.is_some()) {
        warn!("derived columns are not written to parquet files");
    }

    let schema = Arc::new(parse_message_type(SPEECH_SCHEMA)?);
    let props = Arc::new(WriterProperties::builder().build());
    let file = File::create(path)?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;
    let mut row_group = writer.next_row_group()?;

    let speeches = dataset.speeches();
    let mut column_idx = 0;
    while let Some(mut col_writer) = row_group.next_column()? {
        match column_idx {
            2 => {
                let values: Vec<i64> = speeches.iter().map(|s| s.faction_id).collect();
                col_writer
                    .typed::<Int64Type>()
                    .write_batch(&values, None, None)?;
            }
            idx => {
                let values: Vec<ByteArray> = speeches
                    .iter()
                    .map(|s| match idx {
                        0 => ByteArray::from(s.id.as_str()),
                        1 => ByteArray::from(s.date.as_str()),
                        _ => ByteArray::from(s.text.as_str()),
                    })
                    .collect();
                col_writer
                    .typed::<ByteArrayType>()
                    .write_batch(&values, None, None)?;
            }
        }
        col_writer.close()?;
        column_idx += 1;
    }

    row_group.close()?;
    writer.close()?;

    debug!("wrote {} speeches to {:?}", speeches.len(), path);
    Ok(speeches.len())
}
