//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Parquet(parquet::errors::ParquetError),
    Serde(serde_json::Error),
    Reqwest(reqwest::Error),
    FastText(String),
    /// An expected data file is absent.
    NotFound(PathBuf),
    /// Rejected before any I/O or model call.
    InvalidArgument(String),
    /// The scoring model failed or broke its output contract.
    Model(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Parquet(e) => write!(f, "parquet error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Reqwest(e) => write!(f, "http error: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::NotFound(path) => write!(f, "Data file not found: {}", path.display()),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::Model(msg) => write!(f, "model error: {msg}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<parquet::errors::ParquetError> for Error {
    fn from(e: parquet::errors::ParquetError) -> Error {
        Error::Parquet(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
