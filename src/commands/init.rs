//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{default_content, to_pretty_json};
use crate::Folio;

const CONFIG_TEMPLATE: &str = r#"# Folio Configuration

# Site
title: Portfolio
url: http://localhost:4000

# Directory
public_dir: public
storage_dir: .folio

# Content
## Key the saved draft is stored under
storage_key: folio_portfolio_draft
## Static default document: an http(s) URL or a path under public_dir
static_content: content/content.json
fetch_timeout_secs: 10
max_document_bytes: 5242880
export_file: content.json

# Admin
## Prefer the FOLIO_ADMIN_PASSCODE environment variable
# admin_passcode:
server:
  ip: localhost
  port: 4000
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let content_dir = target_dir.join("public/content");
    fs::create_dir_all(&content_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    // Seed the static content file with the built-in document
    let mut document = to_pretty_json(&default_content())?;
    document.push('\n');
    fs::write(content_dir.join("content.json"), document)?;

    fs::write(target_dir.join(".gitignore"), ".folio/\n")?;

    Ok(())
}

/// Run the init command with an existing Folio instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_document;
    use crate::resolver::ContentSource;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.storage_key, "folio_portfolio_draft");
        let seeded = fs::read(dir.path().join("public/content/content.json")).unwrap();
        assert_eq!(parse_document(seeded).unwrap(), default_content());

        assert!(init_site(dir.path()).is_err());
    }

    #[tokio::test]
    async fn test_initialized_site_resolves_static_file() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let state = folio.load_state().await;
        assert_eq!(state.source(), ContentSource::Static);
    }
}
