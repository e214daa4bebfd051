//! folio-rs: content engine and admin editor for a single-document portfolio
//!
//! The whole site lives in one JSON document. At startup it is resolved
//! from a saved draft, the static content file, or the built-in default;
//! the admin surface edits a draft copy and commits it back to local
//! storage.

pub mod commands;
pub mod config;
pub mod content;
pub mod draft;
pub mod resolver;
pub mod server;
pub mod state;
pub mod storage;

use anyhow::Result;
use std::path::{Path, PathBuf};

use resolver::ContentResolver;
use state::ContentState;
use storage::{ContentGateway, FileStore};

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public directory, holding the static content file
    pub public_dir: PathBuf,
    /// Local storage directory for the saved draft
    pub storage_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let storage_dir = base_dir.join(&config.storage_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            storage_dir,
        })
    }

    /// Gateway to the saved draft under the storage directory
    pub fn gateway(&self) -> ContentGateway<FileStore> {
        ContentGateway::new(FileStore::new(&self.storage_dir), &self.config.storage_key)
            .with_size_limit(self.config.max_document_bytes)
    }

    /// Resolver for the configured static content file
    pub fn resolver(&self) -> ContentResolver {
        ContentResolver::from_config(&self.config, &self.public_dir)
    }

    /// Resolve the content and start a draft from it. The saved draft is
    /// read on a blocking thread.
    pub async fn load_state(&self) -> ContentState<FileStore> {
        let gateway = self.gateway();
        let loader = gateway.clone();
        let saved = tokio::task::spawn_blocking(move || loader.load())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load saved draft: {}", e);
                None
            });
        let resolved = self.resolver().resolve_from(saved).await;
        ContentState::from_resolved(gateway, resolved)
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }
}
