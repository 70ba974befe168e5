//! Data Source Module
//! Where the dataset files come from: an HTTP base URL or a local directory.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can hand back the raw bytes of a named dataset file.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError>;

    /// Human readable location, shown in the dashboard header.
    fn describe(&self) -> String;
}

/// Fetches `{base_url}/{file_name}` with a plain GET.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.client.get(self.url_for(file_name)).send().await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        Ok(resp.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Reads `{dir}/{file_name}` from disk.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DataSource for DirSource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.dir.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(FetchError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Pick a source from a user supplied location string.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(DirSource::new(location))
    }
}
