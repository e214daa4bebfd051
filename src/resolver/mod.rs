//! Startup content resolution
//!
//! Picks the authoritative document from three sources, in order:
//!
//! 1. the saved draft in local storage
//! 2. the static default file (a URL or a file under the public directory)
//! 3. the built-in default document
//!
//! Each step runs only after the previous one came up empty. Every failure
//! falls through to the next step, so resolution itself never fails.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::{default_content, parse_document, SiteContent};
use crate::storage::{ContentGateway, KeyValueStore};

/// Where the static default document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from disk
    File(PathBuf),
}

impl StaticSource {
    /// Interpret the `static_content` setting. URLs are used as-is, anything
    /// else is a path relative to the public directory.
    pub fn from_config(config: &SiteConfig, public_dir: &Path) -> Option<Self> {
        let location = config.static_content.trim();
        if location.is_empty() {
            return None;
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            Some(Self::Url(location.to_string()))
        } else {
            Some(Self::File(public_dir.join(location.trim_start_matches('/'))))
        }
    }
}

/// Which resolution step produced the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Draft,
    Static,
    Default,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentSource::Draft => "saved draft",
            ContentSource::Static => "static content file",
            ContentSource::Default => "built-in default",
        };
        f.write_str(name)
    }
}

/// A resolved document and its origin
#[derive(Debug, Clone)]
pub struct Resolved {
    pub content: SiteContent,
    pub source: ContentSource,
}

/// Resolves the initial document
pub struct ContentResolver {
    static_source: Option<StaticSource>,
    /// `None` when no HTTP client could be built; URL sources are skipped
    client: Option<reqwest::Client>,
}

impl ContentResolver {
    /// Create a resolver. `timeout` bounds the static file fetch.
    pub fn new(static_source: Option<StaticSource>, timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Failed to build HTTP client, static URLs are skipped: {}", e);
                None
            }
        };
        Self {
            static_source,
            client,
        }
    }

    /// Resolver configured from `_config.yml` settings
    pub fn from_config(config: &SiteConfig, public_dir: &Path) -> Self {
        Self::new(
            StaticSource::from_config(config, public_dir),
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    pub fn static_source(&self) -> Option<&StaticSource> {
        self.static_source.as_ref()
    }

    /// Resolve the authoritative document. Never fails and writes nothing.
    ///
    /// The store is read on the calling task. For stores backed by disk,
    /// load on a blocking thread and call [`ContentResolver::resolve_from`].
    pub async fn resolve<S: KeyValueStore>(&self, gateway: &ContentGateway<S>) -> Resolved {
        self.resolve_from(gateway.load()).await
    }

    /// Resolve given the already loaded saved draft, if any
    pub async fn resolve_from(&self, saved: Option<SiteContent>) -> Resolved {
        if let Some(content) = saved {
            tracing::info!("Using {}", ContentSource::Draft);
            return Resolved {
                content,
                source: ContentSource::Draft,
            };
        }

        if let Some(content) = self.fetch_static().await {
            tracing::info!("Using {}", ContentSource::Static);
            return Resolved {
                content,
                source: ContentSource::Static,
            };
        }

        tracing::info!("Using {}", ContentSource::Default);
        Resolved {
            content: default_content(),
            source: ContentSource::Default,
        }
    }

    async fn fetch_static(&self) -> Option<SiteContent> {
        let body = match self.static_source.as_ref()? {
            StaticSource::Url(url) => self.fetch_url(url).await?,
            StaticSource::File(path) => match tokio::fs::read(path).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Static content {:?} not readable: {}", path, e);
                    return None;
                }
            },
        };

        match parse_document(&body) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Ignoring static content: {}", e);
                None
            }
        }
    }

    async fn fetch_url(&self, url: &str) -> Option<Vec<u8>> {
        let client = self.client.as_ref()?;
        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Fetching {} returned {}", url, response.status());
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::debug!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}
