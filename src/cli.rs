//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "parlprep",
    about = "parliamentary speeches preparation tool."
)]
pub struct Parlprep {
    #[structopt(
        parse(from_os_str),
        long = "root",
        help = "project root (contains data/)",
        default_value = "."
    )]
    pub root: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "config",
        help = "JSON configuration file. Defaults are used if omitted."
    )]
    pub config: Option<PathBuf>,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
/// Holds every command that is callable by the `parlprep` command.
pub enum Command {
    #[structopt(about = "Download the speeches dataset")]
    Download(Download),
    #[structopt(about = "Filter and sample the raw dataset")]
    Sample(Sample),
    #[structopt(about = "Split, trim and annotate the sample")]
    Clean,
    #[structopt(about = "Print an exploratory summary of a dataset")]
    Eda(Eda),
    #[structopt(about = "Score the cleaned dataset with a sentiment model")]
    Sentiment(Sentiment),
    #[structopt(about = "Print the configuration JSON schema")]
    Schema,
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
///
/// An access token can be provided through the `HF_TOKEN` environment variable.
pub struct Download {
    #[structopt(long = "url", help = "dataset CSV url. Default is the HuggingFace dataset.")]
    pub url: Option<String>,
    #[structopt(
        long = "format",
        help = "stored format (parquet or csv)",
        default_value = "parquet"
    )]
    pub format: String,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(
        long = "source",
        help = "raw dataset format (parquet or csv)",
        default_value = "parquet"
    )]
    pub source: String,
}

#[derive(Debug, StructOpt)]
pub struct Eda {
    #[structopt(
        long = "mode",
        help = "dataset to describe (raw, sample or cleaned)",
        default_value = "sample"
    )]
    pub mode: String,
    #[structopt(
        long = "source",
        help = "raw dataset format, for --mode raw",
        default_value = "parquet"
    )]
    pub source: String,
}

#[derive(Debug, StructOpt)]
/// Sentiment command and parameters.
///
/// The model is a supervised fastText classifier with sentiment labels.
pub struct Sentiment {
    #[structopt(parse(from_os_str), long = "model", help = "Path to the fastText model")]
    pub model: PathBuf,
    #[structopt(
        short = "b",
        long = "batch-size",
        help = "number of texts per model call. Default is the configured CPU batch size."
    )]
    pub batch_size: Option<usize>,
    #[structopt(short = "p", long = "progress", help = "show a progress bar")]
    pub progress: bool,
}
