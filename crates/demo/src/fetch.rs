// File: crates/demo/src/fetch.rs
// Summary: Dataset loading over HTTP (reqwest) or from a local JSON file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chart_core::{parse_records, DataLoadError, Record};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Data(#[from] DataLoadError),
}

/// Where the records come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub async fn load(&self, client: &reqwest::Client) -> Result<Vec<Record>, FetchError> {
        match self {
            Source::Url(url) => fetch_records(client, url).await,
            Source::File(path) => read_records(path).await,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn http_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("doping-chart/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(FetchError::Client)
}

/// GET `url` and parse the body as the dataset array.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<Record>, FetchError> {
    tracing::info!(%url, "fetching dataset");
    let http = |source| FetchError::Http { url: url.to_string(), source };

    let response = client.get(url).send().await.map_err(http)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }
    let body = response.bytes().await.map_err(http)?;
    tracing::debug!(bytes = body.len(), "downloaded dataset");
    Ok(parse_records(&body)?)
}

pub async fn read_records(path: &Path) -> Result<Vec<Record>, FetchError> {
    tracing::info!(path = %path.display(), "reading dataset");
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FetchError::Io { path: path.to_path_buf(), source })?;
    Ok(parse_records(&bytes)?)
}
