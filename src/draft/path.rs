//! Dotted field paths into the serialized document
//!
//! Paths use the wire names of the JSON form: `hero.ctaPrimary`,
//! `about.education.1.gpa`, `projects.0.links.GitHub`. A numeric segment
//! indexes into a list; any other segment names an object key.

use serde_json::{Map, Value};
use std::fmt;

use super::DraftError;

/// Optional project fields that may be absent from the serialized form and
/// can therefore be created or removed by path
const OPTIONAL_PROJECT_FIELDS: [&str; 1] = ["isGenAI"];

/// A parsed dotted path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self, DraftError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(DraftError::InvalidPath(path.to_string()));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(DraftError::InvalidPath(path.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the last segment is a key the document may gain or lose:
    /// an entry of a project's `links`, a `contact.social` provider, or an
    /// optional project field
    fn is_open_key(&self) -> bool {
        let n = self.segments.len();
        let last = self.segments[n - 1].as_str();
        match &self.segments[..n - 1] {
            [section, social] if section == "contact" && social == "social" => {
                last != "linkedin" && last != "github"
            }
            [section, _, links] if section == "projects" && links == "links" => true,
            [section, _] if section == "projects" => OPTIONAL_PROJECT_FIELDS.contains(&last),
            _ => false,
        }
    }

    /// Resolve the path to an existing value
    pub fn get<'a>(&self, root: &'a Value) -> Result<&'a Value, DraftError> {
        let mut node = root;
        for (depth, segment) in self.segments.iter().enumerate() {
            node = match node {
                Value::Object(map) => map.get(segment).ok_or_else(|| self.invalid())?,
                Value::Array(items) => {
                    let index = self.index_at(depth)?;
                    items.get(index).ok_or_else(|| self.out_of_range(depth, items.len()))?
                }
                _ => return Err(self.invalid()),
            };
        }
        Ok(node)
    }

    /// Resolve the path to an existing value, mutably
    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Result<&'a mut Value, DraftError> {
        let mut node = root;
        for (depth, segment) in self.segments.iter().enumerate() {
            node = match node {
                Value::Object(map) => map.get_mut(segment).ok_or_else(|| self.invalid())?,
                Value::Array(items) => {
                    let index = self.index_at(depth)?;
                    let len = items.len();
                    items
                        .get_mut(index)
                        .ok_or_else(|| self.out_of_range(depth, len))?
                }
                _ => return Err(self.invalid()),
            };
        }
        Ok(node)
    }

    /// Replace the value at the path. Only open keys may be created.
    pub fn assign(&self, root: &mut Value, value: Value) -> Result<(), DraftError> {
        let (last, parent) = self.split_last();
        let open = self.is_open_key();
        match parent.get_mut(root)? {
            Value::Object(map) => {
                if !map.contains_key(last) && !open {
                    return Err(self.invalid());
                }
                map.insert(last.clone(), value);
                Ok(())
            }
            Value::Array(items) => {
                let index = self.index_at(self.segments.len() - 1)?;
                let len = items.len();
                let slot = items
                    .get_mut(index)
                    .ok_or_else(|| self.out_of_range(self.segments.len() - 1, len))?;
                *slot = value;
                Ok(())
            }
            _ => Err(self.invalid()),
        }
    }

    /// Remove an open key. Removing a key that is not there is a no-op.
    pub fn remove(&self, root: &mut Value) -> Result<(), DraftError> {
        if !self.is_open_key() {
            return Err(self.invalid());
        }
        let (last, parent) = self.split_last();
        let map: &mut Map<String, Value> = parent
            .get_mut(root)?
            .as_object_mut()
            .ok_or_else(|| self.invalid())?;
        map.shift_remove(last);
        Ok(())
    }

    fn split_last(&self) -> (&String, FieldPath) {
        let n = self.segments.len();
        (
            &self.segments[n - 1],
            FieldPath {
                segments: self.segments[..n - 1].to_vec(),
            },
        )
    }

    fn index_at(&self, depth: usize) -> Result<usize, DraftError> {
        self.segments[depth]
            .parse::<usize>()
            .map_err(|_| self.invalid())
    }

    fn out_of_range(&self, depth: usize, len: usize) -> DraftError {
        DraftError::IndexOutOfRange {
            section: self.segments[..depth].join("."),
            index: self.segments[depth].parse().unwrap_or(usize::MAX),
            len,
        }
    }

    fn invalid(&self) -> DraftError {
        DraftError::InvalidPath(self.to_string())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
