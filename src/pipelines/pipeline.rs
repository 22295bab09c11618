//! Pipeline trait.
use crate::error::Error;

/// A preparation stage.
///
/// Stages read their input from a [crate::io::DataLayout] and write their output back to it,
/// returning `T` (usually the path of what was written).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
