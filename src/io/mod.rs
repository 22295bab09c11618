/*!
# IO utilities

Speech dataset loading and saving.

[DataLayout] knows where each dataset lives on disk and loads it given a [Mode].
Actual (de)serialization is done by [tabular] (CSV, used for samples and processed data)
and [columnar] (Parquet, used for the raw dump).
!*/
pub mod columnar;
mod layout;
pub mod tabular;

pub use layout::{load_data, DataLayout, Format, Mode};
