//! Dataset download.
//!
//! Fetches the speeches CSV from the HuggingFace hub and stores it in the raw data directory,
//! optionally converting it to Parquet afterwards.
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::{blocking::Client, header::AUTHORIZATION, Url};

use crate::error::Error;
use crate::io::{tabular, DataLayout, Format, Mode};

pub const DATASET_URL: &str =
    "https://huggingface.co/datasets/emilpartow/german-parliament-speeches/resolve/main/speeches.csv";

/// Environment variable holding an optional HuggingFace access token.
pub const TOKEN_VAR: &str = "HF_TOKEN";

/// holds the url to download and
/// http client that will make the request.
pub struct Downloader {
    url: Url,
    token: Option<String>,
    client: Client,
}

impl Downloader {
    pub fn new(url: &str, token: Option<String>) -> Result<Self, Error> {
        let url = Url::parse(url)
            .map_err(|e| Error::InvalidArgument(format!("invalid url {url}: {e}")))?;
        Ok(Self {
            url,
            token,
            client: Client::new(),
        })
    }

    /// Use [DATASET_URL] and the token from [TOKEN_VAR], if set.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(DATASET_URL, std::env::var(TOKEN_VAR).ok())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// download the url content into `dst`.
    pub fn download_blocking(&self, dst: &Path) -> Result<u64, Error> {
        debug!("downloading {}", &self.url);
        let mut request = self.client.get(self.url.clone());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = request.send()?.error_for_status()?;

        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(dst)?);
        let mut buf = BufReader::new(response);
        let nb_bytes = std::io::copy(&mut buf, &mut out)?;
        out.flush()?;

        info!("downloaded {} bytes to {:?}", nb_bytes, dst);
        Ok(nb_bytes)
    }

    /// Download into the raw directory of `layout`, converting to Parquet if `format` says so.
    ///
    /// Returns the path of the dump in the requested format.
    pub fn fetch(&self, layout: &DataLayout, format: Format) -> Result<PathBuf, Error> {
        let csv_path = layout.path(Mode::Raw(Format::Csv));
        self.download_blocking(&csv_path)?;

        match format {
            Format::Csv => Ok(csv_path),
            Format::Parquet => {
                info!("converting {:?} to parquet", csv_path);
                let dataset = tabular::read(&csv_path)?;
                layout.save(Mode::Raw(Format::Parquet), &dataset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use crate::config::DataPaths;
    use crate::error::Error;
    use crate::io::{DataLayout, Format, Mode};
    use crate::speech::NON_MP_FACTION;

    use super::{Downloader, DATASET_URL, TOKEN_VAR};

    /// Serves `payload` once, returning the url and the raw request.
    fn serve_once(payload: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request_buf = [0u8; 2048];
            let n = stream.read(&mut request_buf).unwrap();
            let headers = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                payload.len()
            );
            stream.write_all(headers.as_bytes()).unwrap();
            stream.write_all(payload.as_bytes()).unwrap();
            stream.flush().unwrap();
            String::from_utf8_lossy(&request_buf[..n]).into_owned()
        });
        (format!("http://{addr}/speeches.csv"), handle)
    }

    #[test]
    fn default_source() {
        let dl = Downloader::from_env().unwrap();
        assert_eq!(dl.url().as_str(), DATASET_URL);
        assert_eq!(TOKEN_VAR, "HF_TOKEN");
    }

    #[test]
    fn invalid_url() {
        assert!(matches!(
            Downloader::new("not a url", None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn fetch_and_convert() {
        let (url, handle) = serve_once(
            "id,date,factionId,text\n1,2001-01-01,23,Guten Morgen\n2,2001-01-02,,Gute Nacht\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let layout = DataLayout::new(dir.path(), &DataPaths::default());

        let dl = Downloader::new(&url, Some("secret".to_string())).unwrap();
        assert_eq!(dl.url().path(), "/speeches.csv");
        let path = dl.fetch(&layout, Format::Parquet).unwrap();

        let request = handle.join().unwrap();
        assert!(request.to_lowercase().contains("authorization: bearer secret"));

        assert_eq!(path, layout.path(Mode::Raw(Format::Parquet)));
        let d = layout.load(Mode::Raw(Format::Parquet)).unwrap();
        assert_eq!(d.texts(), vec!["Guten Morgen", "Gute Nacht"]);
        assert_eq!(d.speeches()[1].faction_id, NON_MP_FACTION);
        assert!(layout.path(Mode::Raw(Format::Csv)).exists());
    }
}
