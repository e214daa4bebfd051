//! Field and list edits on the saved draft

use anyhow::Result;
use serde_json::Value;

use super::{edit_and_commit, parse_value};
use crate::content::fields::parse_list;
use crate::Folio;

/// Set one field. With `as_list` the value is comma-separated text stored
/// as a list of trimmed, non-empty strings. Text fields take the value as
/// written; other fields read it as JSON when it parses.
pub async fn set(folio: &Folio, path: &str, value: &str, as_list: bool) -> Result<()> {
    edit_and_commit(folio, |state| {
        let draft = state.draft_mut();
        let value = if as_list {
            Value::from(parse_list(value))
        } else if let Ok(Value::String(_)) = draft.field(path) {
            Value::String(value.to_string())
        } else {
            parse_value(value)
        };
        draft.set_field(path, value)?;
        Ok(())
    })
    .await?;
    println!("Updated {}", path);
    Ok(())
}

/// Remove a key from an open map such as `projects.0.links`
pub async fn unset(folio: &Folio, path: &str) -> Result<()> {
    edit_and_commit(folio, |state| {
        state.draft_mut().unset_field(path)?;
        Ok(())
    })
    .await?;
    println!("Removed {}", path);
    Ok(())
}

/// Insert an item into the list at `path`
pub async fn insert(folio: &Folio, path: &str, item: &str, index: Option<usize>) -> Result<()> {
    let item = parse_value(item);
    edit_and_commit(folio, |state| {
        state.draft_mut().insert_at_path(path, item, index)?;
        Ok(())
    })
    .await?;
    println!("Inserted into {}", path);
    Ok(())
}

/// Remove the item at `index` from the list at `path`
pub async fn remove(folio: &Folio, path: &str, index: usize) -> Result<()> {
    edit_and_commit(folio, |state| {
        state.draft_mut().remove_at_path(path, index)?;
        Ok(())
    })
    .await?;
    println!("Removed {}.{}", path, index);
    Ok(())
}

/// Move an item within the list at `path`
pub async fn move_item(folio: &Folio, path: &str, from: usize, to: usize) -> Result<()> {
    edit_and_commit(folio, |state| {
        state.draft_mut().move_at_path(path, from, to)?;
        Ok(())
    })
    .await?;
    println!("Moved {}.{} to {}", path, from, to);
    Ok(())
}
