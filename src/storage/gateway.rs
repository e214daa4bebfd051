//! Content persistence gateway

use crate::content::{parse_document, to_pretty_json, ContentError, SiteContent};

use super::{KeyValueStore, StorageError};

/// Reads and writes the one persisted content document
#[derive(Debug, Clone)]
pub struct ContentGateway<S> {
    store: S,
    key: String,
    max_document_bytes: Option<usize>,
}

impl<S: KeyValueStore> ContentGateway<S> {
    /// Create a gateway storing the document under `key`
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            max_document_bytes: None,
        }
    }

    /// Refuse to save documents whose serialized form exceeds `limit` bytes
    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.max_document_bytes = Some(limit);
        self
    }

    /// The underlying key-value store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key the document is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted document.
    ///
    /// Returns `None` when nothing is stored, the store cannot be read, or
    /// the stored value fails the shallow validity check.
    pub fn load(&self) -> Option<SiteContent> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read saved draft {:?}: {}", self.key, e);
                return None;
            }
        };

        match parse_document(&raw) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Ignoring saved draft {:?}: {}", self.key, e);
                None
            }
        }
    }

    /// Serialize and persist the document.
    ///
    /// On failure the previously stored value is left as it was.
    pub fn save(&self, content: &SiteContent) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(content)?;
        if let Some(limit) = self.max_document_bytes {
            if serialized.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    size: serialized.len(),
                    limit,
                });
            }
        }
        self.store.set(&self.key, &serialized)?;
        tracing::debug!("Saved draft {:?} ({} bytes)", self.key, serialized.len());
        Ok(())
    }

    /// Delete the persisted document. Clearing an empty store succeeds.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }

    /// Portable file form of a document. Touches no storage.
    pub fn export_to_file(&self, content: &SiteContent) -> Result<Vec<u8>, StorageError> {
        let mut text = to_pretty_json(content)?;
        text.push('\n');
        Ok(text.into_bytes())
    }

    /// Parse an exported file back into a document.
    ///
    /// Only parses and validates; persisting the result is up to the caller.
    pub fn import_from_file(&self, bytes: &[u8]) -> Result<SiteContent, ContentError> {
        parse_document(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_content;
    use crate::storage::MemoryStore;

    fn gateway() -> ContentGateway<MemoryStore> {
        ContentGateway::new(MemoryStore::new(), "draft")
    }

    #[test]
    fn test_load_absent() {
        assert!(gateway().load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let gateway = gateway();
        let mut content = default_content();
        content.hero.name = "Someone Else".to_string();
        gateway.save(&content).unwrap();
        assert_eq!(gateway.load(), Some(content));
    }

    #[test]
    fn test_load_rejects_invalid_stored_value() {
        let gateway = gateway();
        gateway.store().set("draft", "{\"foo\": 1}").unwrap();
        assert!(gateway.load().is_none());
        gateway.store().set("draft", "not json").unwrap();
        assert!(gateway.load().is_none());
    }

    #[test]
    fn test_failed_save_keeps_previous_document() {
        let store = MemoryStore::new();
        let first = default_content();
        let size = serde_json::to_string(&first).unwrap().len();
        let gateway = ContentGateway::new(store.with_quota(size + 16), "draft");
        gateway.save(&first).unwrap();

        let mut bigger = first.clone();
        bigger.about.bio = "x".repeat(1024);
        let err = gateway.save(&bigger).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(gateway.load(), Some(first));
    }

    #[test]
    fn test_size_limit() {
        let gateway = gateway().with_size_limit(64);
        let err = gateway.save(&default_content()).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 64, .. }));
        assert!(gateway.load().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let gateway = gateway();
        gateway.clear().unwrap();
        gateway.save(&default_content()).unwrap();
        gateway.clear().unwrap();
        gateway.clear().unwrap();
        assert!(gateway.load().is_none());
    }

    #[test]
    fn test_export_import_round_trip() {
        let gateway = gateway();
        let mut content = default_content();
        content.projects[0]
            .links
            .insert("GitHub".to_string(), "https://github.com/x".to_string());
        content.contact.social.set("twitter", "https://twitter.com/x");
        content.contact.social.set("github", "https://github.com/other");

        let bytes = gateway.export_to_file(&content).unwrap();
        assert!(bytes.starts_with(b"{\n  \"siteSettings\""));
        assert_eq!(gateway.import_from_file(&bytes).unwrap(), content);
        // Export is pure
        assert!(gateway.load().is_none());
    }

    #[test]
    fn test_import_errors() {
        let gateway = gateway();
        assert!(matches!(
            gateway.import_from_file(b"{oops"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            gateway.import_from_file(b"{\"foo\": 1}"),
            Err(ContentError::Schema(_))
        ));
    }
}
