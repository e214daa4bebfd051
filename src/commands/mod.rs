//! CLI commands
//!
//! Every mutating command follows the same cycle: resolve the content,
//! apply the edit to the draft, commit.

pub mod edit;
pub mod get;
pub mod init;
pub mod list;
pub mod new;
pub mod reset;
pub mod show;
pub mod transfer;

use anyhow::Result;
use serde_json::Value;

use crate::state::ContentState;
use crate::storage::FileStore;
use crate::Folio;

/// Resolve, apply `edit` to the draft, and commit
pub(crate) async fn edit_and_commit<F>(folio: &Folio, edit: F) -> Result<ContentState<FileStore>>
where
    F: FnOnce(&mut ContentState<FileStore>) -> Result<()>,
{
    let mut state = folio.load_state().await;
    edit(&mut state)?;
    state.commit()?;
    Ok(state)
}

/// Interpret a command-line value: JSON when it parses, a plain string
/// otherwise
pub fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_value("Jane Doe"), json!("Jane Doe"));
        assert_eq!(parse_value("\"3.90\""), json!("3.90"));
    }
}
