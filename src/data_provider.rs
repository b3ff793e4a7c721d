/// Trait for providing the scores feed, abstracting over HTTP, file and fixture sources
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::types::Scores;

/// Timeout applied to every HTTP feed request
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scores feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no feed configured (set feed_url or feed_file)")]
    NoSource,
}

/// Source of `Scores` snapshots
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the latest snapshot
    async fn fetch_scores(&self) -> Result<Scores, FeedError>;

    /// Human-readable origin, for logs and the status bar
    fn describe(&self) -> String;
}

/// Feed served over HTTP
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FeedError::Http { url: url.clone(), source })?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch_scores(&self) -> Result<Scores, FeedError> {
        debug!("FEED: GET {}", self.url);
        let http_error = |source| FeedError::Http { url: self.url.clone(), source };
        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_error)?
            .text()
            .await
            .map_err(http_error)?;
        parse_scores(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Feed read from a local JSON file
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch_scores(&self) -> Result<Scores, FeedError> {
        debug!("FEED: reading {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io { path: self.path.clone(), source })?;
        parse_scores(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory snapshot (fixtures, development mode, tests)
pub struct StaticFeed {
    scores: Scores,
}

impl StaticFeed {
    pub fn new(scores: Scores) -> Self {
        Self { scores }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch_scores(&self) -> Result<Scores, FeedError> {
        Ok(self.scores.clone())
    }

    fn describe(&self) -> String {
        "fixtures".to_string()
    }
}

pub fn parse_scores(body: &str) -> Result<Scores, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// Build the feed source named by the configuration; a file path wins over a URL
pub fn from_config(config: &Config, file_override: Option<PathBuf>) -> Result<Box<dyn FeedSource>, FeedError> {
    if let Some(path) = file_override.or_else(|| config.feed_file.clone()) {
        return Ok(Box::new(FileFeed::new(path)));
    }
    match &config.feed_url {
        Some(url) => Ok(Box::new(HttpFeed::new(url.clone())?)),
        None => Err(FeedError::NoSource),
    }
}
