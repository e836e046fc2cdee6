//! Content Loader
//!
//! Retrieves `data/content.json` relative to the page location and parses
//! it. Retrieval sits behind [`ContentSource`] so the transport can be
//! swapped out; [`StaticSource`] covers HTTP and local directories.

use super::error::{ContentError, ContentResult};
use super::model::ContentDocument;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Path of the content document relative to the page
pub const CONTENT_PATH: &str = "data/content.json";

/// Where the content document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    /// Served over HTTP(S)
    Remote(Url),
    /// A file on local disk (a static site checkout)
    Local(PathBuf),
}

impl ContentLocation {
    /// Resolve `path` against a page location.
    ///
    /// URLs use URL-join semantics, so `https://host/site/index.html` and
    /// `https://host/site/` both resolve to `https://host/site/<path>`.
    /// Anything else is a filesystem path: a directory, or a page file
    /// whose directory is used.
    pub fn resolve(page: &str, path: &str) -> ContentResult<Self> {
        if page.starts_with("http://") || page.starts_with("https://") {
            let base = Url::parse(page)
                .map_err(|e| ContentError::Location(format!("{}: {}", page, e)))?;
            let url = base
                .join(path)
                .map_err(|e| ContentError::Location(format!("{} + {}: {}", page, path, e)))?;
            return Ok(ContentLocation::Remote(url));
        }

        let base = Path::new(page.strip_prefix("file://").unwrap_or(page));
        let dir = if base.extension().is_some() && !base.is_dir() {
            base.parent().unwrap_or_else(|| Path::new(""))
        } else {
            base
        };
        Ok(ContentLocation::Local(dir.join(path)))
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLocation::Remote(url) => write!(f, "{}", url),
            ContentLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw retrieval result before parsing
#[derive(Debug, Clone)]
pub struct Retrieved {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Retrieved {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport that fetches the content document bytes
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the bytes at `location`, reporting the status received
    async fn retrieve(&self, location: &ContentLocation) -> ContentResult<Retrieved>;
}

/// Static-hosting transport: HTTP(S) through reqwest, local files through tokio
pub struct StaticSource {
    client: Client,
}

impl StaticSource {
    /// Create a source with the given request timeout
    pub fn new(timeout: Duration) -> ContentResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("redlev-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContentError::transport("http client", e.to_string()))?;

        Ok(Self { client })
    }

    async fn retrieve_remote(&self, url: &Url) -> ContentResult<Retrieved> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                e.to_string()
            };
            ContentError::transport(url.as_str(), reason)
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::transport(url.as_str(), e.to_string()))?;

        Ok(Retrieved {
            status,
            body: body.to_vec(),
        })
    }

    async fn retrieve_local(&self, path: &Path) -> ContentResult<Retrieved> {
        match tokio::fs::read(path).await {
            Ok(body) => Ok(Retrieved::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Retrieved {
                status: 404,
                body: Vec::new(),
            }),
            Err(e) => Err(ContentError::transport(
                path.display().to_string(),
                e.to_string(),
            )),
        }
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn retrieve(&self, location: &ContentLocation) -> ContentResult<Retrieved> {
        match location {
            ContentLocation::Remote(url) => self.retrieve_remote(url).await,
            ContentLocation::Local(path) => self.retrieve_local(path).await,
        }
    }
}

/// Fetches and parses the content document
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Load the document at `location`, exactly as received
    pub async fn load(&self, location: &ContentLocation) -> ContentResult<ContentDocument> {
        tracing::debug!(location = %location, "Fetching content document");

        let retrieved = self.source.retrieve(location).await?;
        if !retrieved.is_success() {
            return Err(ContentError::status(location.to_string(), retrieved.status));
        }

        let document = ContentDocument::from_slice(&retrieved.body)?;
        tracing::info!(
            location = %location,
            bytes = retrieved.body.len(),
            "Content document loaded"
        );
        Ok(document)
    }
}
