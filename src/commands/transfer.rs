//! Export and import the content document

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::Folio;

/// Write the draft as pretty JSON to `output`, or to stdout when `output`
/// is `-`
pub async fn export(folio: &Folio, output: Option<&Path>) -> Result<()> {
    let state = folio.load_state().await;
    let bytes = state.export()?;

    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| folio.base_dir.join(&folio.config.export_file));
    if target.as_os_str() == "-" {
        std::io::stdout().write_all(&bytes)?;
        return Ok(());
    }

    fs::write(&target, &bytes).with_context(|| format!("Failed to write {:?}", target))?;
    println!("Exported {} content to {:?}", state.source(), target);
    Ok(())
}

/// Replace the saved draft with the contents of `file`
pub async fn import(folio: &Folio, file: &Path) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {:?}", file))?;
    let mut state = folio.load_state().await;
    state.import(&bytes)?;
    println!("Imported {:?}", file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{default_content, parse_document};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_then_import() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let file = dir.path().join("backup.json");
        export(&folio, Some(&file)).await.unwrap();
        let text = fs::read_to_string(&file).unwrap();
        assert!(text.starts_with("{\n  \"siteSettings\""));
        assert_eq!(parse_document(&text).unwrap(), default_content());

        let edited = text.replace("\"tagline\": \"", "\"tagline\": \"New. ");
        fs::write(&file, edited).unwrap();
        import(&folio, &file).await.unwrap();

        let saved = folio.gateway().load().unwrap();
        assert!(saved.site_settings.tagline.starts_with("New. "));
    }

    #[tokio::test]
    async fn test_import_rejects_foreign_json() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let file = dir.path().join("other.json");
        fs::write(&file, r#"{"foo": 1}"#).unwrap();

        assert!(import(&folio, &file).await.is_err());
        assert!(folio.gateway().load().is_none());
    }
}
