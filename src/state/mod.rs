//! Application-scoped content state
//!
//! One `ContentState` is created at startup and handed to whatever needs
//! the content: the CLI commands own it directly, the admin server shares
//! it behind a lock.

use thiserror::Error;

use crate::content::{default_content, ContentError, SiteContent};
use crate::draft::{DraftError, DraftStore};
use crate::resolver::{ContentResolver, ContentSource, Resolved};
use crate::storage::{ContentGateway, KeyValueStore, StorageError};

/// Failure of an admin action
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Resolved content plus the draft being edited against it
pub struct ContentState<S> {
    gateway: ContentGateway<S>,
    resolved: Resolved,
    draft: DraftStore,
}

impl<S: KeyValueStore> ContentState<S> {
    /// Resolve the initial document and start a draft from it
    pub async fn init(gateway: ContentGateway<S>, resolver: &ContentResolver) -> Self {
        let resolved = resolver.resolve(&gateway).await;
        Self::from_resolved(gateway, resolved)
    }

    pub fn from_resolved(gateway: ContentGateway<S>, resolved: Resolved) -> Self {
        let draft = DraftStore::new(resolved.content.clone());
        Self {
            gateway,
            resolved,
            draft,
        }
    }

    /// The content the rest of the site renders
    pub fn resolved(&self) -> &SiteContent {
        &self.resolved.content
    }

    /// Where the resolved content came from
    pub fn source(&self) -> ContentSource {
        self.resolved.source
    }

    pub fn gateway(&self) -> &ContentGateway<S> {
        &self.gateway
    }

    pub fn draft(&self) -> &DraftStore {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftStore {
        &mut self.draft
    }

    /// Persist the draft and publish it as the resolved content
    pub fn commit(&mut self) -> Result<(), AdminError> {
        if let Err(e) = self.draft.commit(&self.gateway) {
            tracing::error!("Commit failed: {}", e);
            return Err(e.into());
        }
        self.publish(self.draft.draft().clone());
        Ok(())
    }

    /// Replace the draft with an exported file and persist it immediately.
    ///
    /// Nothing changes unless the file parses, validates and saves.
    pub fn import(&mut self, bytes: &[u8]) -> Result<(), AdminError> {
        let content = match self.gateway.import_from_file(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Rejected import: {}", e);
                return Err(e.into());
            }
        };
        if let Err(e) = self.gateway.save(&content) {
            tracing::error!("Import could not be saved: {}", e);
            return Err(e.into());
        }
        self.draft.reinitialize(content.clone());
        self.publish(content);
        tracing::info!("Imported content");
        Ok(())
    }

    /// Portable file form of the current draft
    pub fn export(&self) -> Result<Vec<u8>, AdminError> {
        Ok(self.gateway.export_to_file(self.draft.draft())?)
    }

    /// Delete the saved draft and start over from the built-in default
    pub fn reset(&mut self) -> Result<(), AdminError> {
        self.gateway.clear()?;
        let content = default_content();
        self.draft.reinitialize(content.clone());
        self.resolved = Resolved {
            content,
            source: ContentSource::Default,
        };
        tracing::info!("Reset content to the built-in default");
        Ok(())
    }

    fn publish(&mut self, content: SiteContent) {
        self.resolved = Resolved {
            content,
            source: ContentSource::Draft,
        };
    }
}

/// Static passcode gate in front of the admin surface
#[derive(Debug, Clone)]
pub struct AdminGate {
    passcode: String,
}

impl AdminGate {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
        }
    }

    /// Whether `attempt` matches the configured passcode
    pub fn check(&self, attempt: &str) -> bool {
        attempt == self.passcode
    }
}
