//! On-disk layout of the datasets.
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{info, warn};

use crate::config::DataPaths;
use crate::error::Error;
use crate::speech::Dataset;

use super::{columnar, tabular};

/// Storage format of the raw dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Parquet,
    Csv,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parquet" => Ok(Format::Parquet),
            "csv" => Ok(Format::Csv),
            other => Err(Error::InvalidArgument(format!(
                "source must be 'parquet' or 'csv', got {other}"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Parquet => write!(f, "parquet"),
            Format::Csv => write!(f, "csv"),
        }
    }
}

/// Which dataset to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full dump, as downloaded.
    Raw(Format),
    /// Filtered random sample of the dump.
    Sample,
    /// Sample after cleaning.
    Cleaned,
}

impl Mode {
    /// Resolve a mode from a sample flag and a source kind (`auto`, `parquet` or `csv`).
    ///
    /// `auto` means parquet for the full dump. The source kind is ignored for samples.
    pub fn from_flags(use_sample: bool, source: &str) -> Result<Self, Error> {
        if use_sample {
            return Ok(Mode::Sample);
        }
        let format = match source {
            "auto" => Format::Parquet,
            other => other.parse()?,
        };
        Ok(Mode::Raw(format))
    }
}

/// Dataset locations, rooted at a project directory.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
    paths: DataPaths,
}

impl DataLayout {
    pub const RAW_STEM: &'static str = "speeches";
    pub const SAMPLE_FILE: &'static str = "df_sample.csv";
    pub const CLEANED_FILE: &'static str = "df_sample_cleaned.csv";
    pub const SENTIMENT_FILE: &'static str = "sentiment.csv";
    pub const DATA_DIR: &'static str = "data";

    pub fn new(root: &Path, paths: &DataPaths) -> Self {
        Self {
            root: root.to_path_buf(),
            paths: paths.clone(),
        }
    }

    /// `data/` directory under the root, created if absent.
    pub fn data_dir(&self) -> Result<PathBuf, Error> {
        let dir = self.root.join(Self::DATA_DIR);
        if !dir.exists() {
            warn!("{:?} does not exist. Creating", dir);
            std::fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(&self.paths.raw)
    }

    pub fn interim_dir(&self) -> PathBuf {
        self.root.join(&self.paths.interim)
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.join(&self.paths.processed)
    }

    /// Create the data directories if they don't exist.
    pub fn create_dirs(&self) -> Result<(), Error> {
        for dir in [self.raw_dir(), self.interim_dir(), self.processed_dir()] {
            if !dir.exists() {
                warn!("{:?} does not exist. Creating", dir);
                std::fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }

    /// Expected location of the dataset for `mode`.
    pub fn path(&self, mode: Mode) -> PathBuf {
        match mode {
            Mode::Raw(format) => self
                .raw_dir()
                .join(format!("{}.{}", Self::RAW_STEM, format)),
            Mode::Sample => self.raw_dir().join(Self::SAMPLE_FILE),
            Mode::Cleaned => self.processed_dir().join(Self::CLEANED_FILE),
        }
    }

    pub fn sentiment_path(&self) -> PathBuf {
        self.processed_dir().join(Self::SENTIMENT_FILE)
    }

    /// Load the dataset for `mode`.
    ///
    /// Fails with [Error::NotFound] naming the expected path if the file is absent.
    pub fn load(&self, mode: Mode) -> Result<Dataset, Error> {
        let path = self.path(mode);
        if !path.exists() {
            return Err(Error::NotFound(path));
        }

        let dataset = match mode {
            Mode::Raw(Format::Parquet) => columnar::read(&path)?,
            Mode::Raw(Format::Csv) | Mode::Sample | Mode::Cleaned => tabular::read(&path)?,
        };
        info!("loaded {} speeches from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Save `dataset` where [DataLayout::load] would look for it.
    pub fn save(&self, mode: Mode, dataset: &Dataset) -> Result<PathBuf, Error> {
        let path = self.path(mode);
        let nb_written = match mode {
            Mode::Raw(Format::Parquet) => columnar::write(&path, dataset)?,
            Mode::Raw(Format::Csv) | Mode::Sample | Mode::Cleaned => {
                tabular::write(&path, dataset)?
            }
        };
        info!("saved {} speeches to {:?}", nb_written, path);
        Ok(path)
    }
}

/// Load either the sample or the full dump.
///
/// See [Mode::from_flags] for `source` values.
pub fn load_data(layout: &DataLayout, use_sample: bool, source: &str) -> Result<Dataset, Error> {
    let mode = Mode::from_flags(use_sample, source)?;
    layout.load(mode)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{load_data, DataLayout, Format, Mode};
    use crate::config::DataPaths;
    use crate::error::Error;
    use crate::speech::{Dataset, Speech};

    fn layout(root: &Path) -> DataLayout {
        DataLayout::new(root, &DataPaths::default())
    }

    #[test]
    fn expected_paths() {
        let l = layout(Path::new("/project"));
        assert_eq!(
            l.path(Mode::Raw(Format::Parquet)),
            Path::new("/project/data/raw/speeches.parquet")
        );
        assert_eq!(
            l.path(Mode::Raw(Format::Csv)),
            Path::new("/project/data/raw/speeches.csv")
        );
        assert_eq!(
            l.path(Mode::Sample),
            Path::new("/project/data/raw/df_sample.csv")
        );
        assert_eq!(
            l.path(Mode::Cleaned),
            Path::new("/project/data/processed/df_sample_cleaned.csv")
        );
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let l = layout(dir.path());
        match l.load(Mode::Cleaned) {
            Err(Error::NotFound(p)) => assert_eq!(p, l.path(Mode::Cleaned)),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_source_kind() {
        let dir = tempfile::tempdir().unwrap();
        let l = layout(dir.path());
        let r = load_data(&l, false, "xlsx");
        assert!(matches!(r, Err(Error::InvalidArgument(_))));
        assert!("json".parse::<Format>().is_err());
    }

    #[test]
    fn mode_from_flags() {
        assert_eq!(Mode::from_flags(true, "xlsx").unwrap(), Mode::Sample);
        assert_eq!(
            Mode::from_flags(false, "auto").unwrap(),
            Mode::Raw(Format::Parquet)
        );
        assert_eq!(
            Mode::from_flags(false, "csv").unwrap(),
            Mode::Raw(Format::Csv)
        );
    }

    #[test]
    fn save_then_load_each_mode() {
        let dir = tempfile::tempdir().unwrap();
        let l = layout(dir.path());
        let data = l.data_dir().unwrap();
        assert!(data.is_dir());
        assert_eq!(l.data_dir().unwrap(), data);
        l.create_dirs().unwrap();
        assert!(l.interim_dir().is_dir());

        let d = Dataset::new(vec![Speech::new(
            "1".into(),
            "2001-01-01".into(),
            23,
            "Frau Präsidentin".into(),
        )]);

        for mode in [
            Mode::Raw(Format::Parquet),
            Mode::Raw(Format::Csv),
            Mode::Sample,
            Mode::Cleaned,
        ] {
            l.save(mode, &d).unwrap();
            assert_eq!(l.load(mode).unwrap(), d);
        }
    }
}
