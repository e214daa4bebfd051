//! Print the resolved content

use anyhow::Result;

use crate::Folio;

/// Print the whole document, one field of it, or only where it came from
pub async fn run(folio: &Folio, path: Option<&str>, source: bool) -> Result<()> {
    let state = folio.load_state().await;
    if source {
        println!("{}", state.source());
        return Ok(());
    }

    let value = match path {
        Some(path) => state.draft().field(path)?,
        None => serde_json::to_value(state.resolved())?,
    };
    match value {
        serde_json::Value::String(text) => println!("{}", text),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }
    Ok(())
}
