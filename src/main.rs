//! # Parlprep
//!
//! Data preparation for the German parliamentary speeches corpus.
//!
//! ## Getting started
//!
//! ```sh
//! parlprep 0.1.0
//! parliamentary speeches preparation tool.
//!
//! USAGE:
//!     parlprep [OPTIONS] <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     clean        Split, trim and annotate the sample
//!     download     Download the speeches dataset
//!     eda          Print an exploratory summary of a dataset
//!     help         Prints this message or the help of the given subcommand(s)
//!     schema       Print the configuration JSON schema
//!     sample       Filter and sample the raw dataset
//!     sentiment    Score the cleaned dataset with a sentiment model
//! ```
use std::path::PathBuf;

use parlprep::config::Config;
use parlprep::download::{Downloader, TOKEN_VAR};
use parlprep::error::Error;
use parlprep::io::{DataLayout, Format, Mode};
use parlprep::pipelines::{Clean, Pipeline, Sample, Sentiment};
use parlprep::processing::summarize;
use parlprep::sentiment::FastTextSentimentBuilder;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn eda_mode(mode: &str, source: &str) -> Result<Mode, Error> {
    match mode {
        "raw" => Ok(Mode::Raw(source.parse()?)),
        "sample" => Ok(Mode::Sample),
        "cleaned" => Ok(Mode::Cleaned),
        other => Err(Error::InvalidArgument(format!(
            "mode must be 'raw', 'sample' or 'cleaned', got {other}"
        ))),
    }
}

fn run(opt: cli::Parlprep) -> Result<(), Error> {
    let config = Config::from_path_or_default(opt.config.as_deref())?;
    let layout = DataLayout::new(&opt.root, &config.data_paths);

    match opt.command {
        cli::Command::Download(d) => {
            let format: Format = d.format.parse()?;
            layout.create_dirs()?;
            let dl = match d.url {
                Some(url) => Downloader::new(&url, std::env::var(TOKEN_VAR).ok())?,
                None => Downloader::from_env()?,
            };
            info!("downloading {}", dl.url());
            let path = dl.fetch(&layout, format)?;
            info!("dataset available at {:?}", path);
        }

        cli::Command::Sample(s) => {
            let source: Format = s.source.parse()?;
            let p = Sample::new(layout, source, config.sampling);
            p.run()?;
        }

        cli::Command::Clean => {
            let p = Clean::new(layout, config);
            p.run()?;
        }

        cli::Command::Eda(e) => {
            let mode = eda_mode(&e.mode, &e.source)?;
            let dataset = layout.load(mode)?;
            println!("{}", summarize(&dataset));
        }

        cli::Command::Sentiment(s) => {
            let model = FastTextSentimentBuilder::default()
                .path(&s.model)
                .build()?;
            let batch_size = s.batch_size.unwrap_or(config.sentiment.batch_size_cpu);
            let p = Sentiment::new(layout, model, batch_size, s.progress);
            let path: PathBuf = p.run()?;
            info!("sentiment scores saved to {:?}", path);
        }

        cli::Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&Config::schema())?);
        }
    };
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Parlprep::from_args();
    debug!("cli args\n{:#?}", opt);

    run(opt).map_err(|e| {
        error!("{}", e);
        e
    })
}
