/*! Filtering utilities

Filters operate on [crate::speech::Speech] records and implement [filter::Filter].
A filter returns `true` when the record should be kept.
! */
mod filter;
mod record;

pub use filter::{apply, Filter};
pub use record::{MinLength, RecordFilter};
