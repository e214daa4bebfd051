//! Draft store
//!
//! Holds the editable working copy of the document next to the baseline it
//! was last resolved or committed from. Edits are in-memory only; `commit`
//! is the one operation that touches storage.

pub mod list;
mod path;

pub use list::{sections, ListSection};
pub use path::FieldPath;

use serde_json::Value;
use thiserror::Error;

use crate::content::{document_from_value, SiteContent};
use crate::storage::{ContentGateway, KeyValueStore, StorageError};

/// Errors raised by draft edits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("index {index} is out of range for {section} (length {len})")]
    IndexOutOfRange {
        section: String,
        index: usize,
        len: usize,
    },

    #[error("no editable field at {0:?}")]
    InvalidPath(String),

    #[error("invalid value for {path}: {reason}")]
    InvalidValue { path: String, reason: String },
}

/// The in-memory working copy of the document
#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: SiteContent,
    baseline: SiteContent,
}

impl DraftStore {
    /// Start editing from a resolved document
    pub fn new(content: SiteContent) -> Self {
        Self {
            draft: content.clone(),
            baseline: content,
        }
    }

    /// The working copy
    pub fn draft(&self) -> &SiteContent {
        &self.draft
    }

    /// The last resolved or committed document
    pub fn baseline(&self) -> &SiteContent {
        &self.baseline
    }

    /// Whether the draft differs from the baseline
    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /// Restart from new externally resolved content, dropping pending edits
    pub fn reinitialize(&mut self, content: SiteContent) {
        self.draft = content.clone();
        self.baseline = content;
    }

    /// Throw away pending edits
    pub fn discard(&mut self) {
        self.draft = self.baseline.clone();
    }

    /// Apply a typed in-place edit
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut SiteContent),
    {
        f(&mut self.draft);
    }

    /// Apply a fallible edit to a copy, keeping it only if it succeeds
    pub fn try_edit<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut SiteContent) -> Result<(), E>,
    {
        let mut next = self.draft.clone();
        f(&mut next)?;
        self.draft = next;
        Ok(())
    }

    /// Read one field of the draft by dotted path
    pub fn field(&self, path: &str) -> Result<Value, DraftError> {
        let path = FieldPath::parse(path)?;
        let root = self.to_value(&path)?;
        path.get(&root).cloned()
    }

    /// Replace one field of the draft by dotted path.
    ///
    /// The updated document must still deserialize; otherwise the draft is
    /// left untouched.
    pub fn set_field(&mut self, path: &str, value: Value) -> Result<(), DraftError> {
        let path = FieldPath::parse(path)?;
        self.update_value(&path, |root| path.assign(root, value))
    }

    /// Remove a key from an open map (`projects.N.links`, `contact.social`)
    /// or clear an optional field
    pub fn unset_field(&mut self, path: &str) -> Result<(), DraftError> {
        let path = FieldPath::parse(path)?;
        self.update_value(&path, |root| path.remove(root))
    }

    pub fn list_items<'a, L: ListSection>(
        &'a self,
        section: &L,
    ) -> Result<&'a [L::Item], DraftError> {
        Ok(section.items(&self.draft)?.as_slice())
    }

    /// Insert into a list; `None` or an index past the end appends
    pub fn list_insert<L: ListSection>(
        &mut self,
        section: &L,
        item: L::Item,
        index: Option<usize>,
    ) -> Result<(), DraftError> {
        list::insert_item(section.items_mut(&mut self.draft)?, item, index);
        Ok(())
    }

    /// Replace one list item, returning the old one
    pub fn list_update<L: ListSection>(
        &mut self,
        section: &L,
        index: usize,
        item: L::Item,
    ) -> Result<L::Item, DraftError> {
        let name = section.name();
        list::replace_item(section.items_mut(&mut self.draft)?, index, item, &name)
    }

    /// Remove and return one list item
    pub fn list_remove<L: ListSection>(
        &mut self,
        section: &L,
        index: usize,
    ) -> Result<L::Item, DraftError> {
        let name = section.name();
        list::remove_item(section.items_mut(&mut self.draft)?, index, &name)
    }

    /// Move a list item from `from` to `to`
    pub fn list_move<L: ListSection>(
        &mut self,
        section: &L,
        from: usize,
        to: usize,
    ) -> Result<(), DraftError> {
        let name = section.name();
        list::move_item(section.items_mut(&mut self.draft)?, from, to, &name)
    }

    /// Insert a JSON item into the list at a dotted path
    pub fn insert_at_path(
        &mut self,
        path: &str,
        item: Value,
        index: Option<usize>,
    ) -> Result<(), DraftError> {
        let path = FieldPath::parse(path)?;
        self.update_value(&path, |root| {
            list::insert_item(list_at(&path, root)?, item, index);
            Ok(())
        })
    }

    /// Remove the item at `index` from the list at a dotted path
    pub fn remove_at_path(&mut self, path: &str, index: usize) -> Result<(), DraftError> {
        let path = FieldPath::parse(path)?;
        let name = path.to_string();
        self.update_value(&path, |root| {
            list::remove_item(list_at(&path, root)?, index, &name).map(|_| ())
        })
    }

    /// Move an item within the list at a dotted path
    pub fn move_at_path(&mut self, path: &str, from: usize, to: usize) -> Result<(), DraftError> {
        let path = FieldPath::parse(path)?;
        let name = path.to_string();
        self.update_value(&path, |root| {
            list::move_item(list_at(&path, root)?, from, to, &name)
        })
    }

    /// Persist the draft. On success it becomes the new baseline; on
    /// failure nothing changes.
    pub fn commit<S: KeyValueStore>(
        &mut self,
        gateway: &ContentGateway<S>,
    ) -> Result<(), StorageError> {
        let projects = self.draft.duplicate_project_ids();
        if !projects.is_empty() {
            tracing::warn!(
                "Duplicate project ids, only the first of each is reachable: {}",
                projects.join(", ")
            );
        }
        let posts = self.draft.duplicate_post_ids();
        if !posts.is_empty() {
            tracing::warn!(
                "Duplicate post ids, only the first of each is reachable: {}",
                posts.join(", ")
            );
        }

        gateway.save(&self.draft)?;
        self.baseline = self.draft.clone();
        tracing::info!("Committed draft");
        Ok(())
    }

    fn to_value(&self, path: &FieldPath) -> Result<Value, DraftError> {
        serde_json::to_value(&self.draft).map_err(|e| DraftError::InvalidValue {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Run `f` on the JSON form of the draft and swap the result in only if
    /// it still reads back as a document
    fn update_value<F>(&mut self, path: &FieldPath, f: F) -> Result<(), DraftError>
    where
        F: FnOnce(&mut Value) -> Result<(), DraftError>,
    {
        let mut root = self.to_value(path)?;
        f(&mut root)?;
        let next = document_from_value(root).map_err(|e| DraftError::InvalidValue {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        self.draft = next;
        Ok(())
    }
}

fn list_at<'a>(path: &FieldPath, root: &'a mut Value) -> Result<&'a mut Vec<Value>, DraftError> {
    path.get_mut(root)?
        .as_array_mut()
        .ok_or_else(|| DraftError::InvalidPath(path.to_string()))
}
