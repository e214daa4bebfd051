//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Passcode used when neither the environment nor the config provides one
pub const FALLBACK_ADMIN_PASSCODE: &str = "folio2026";

/// Environment variable holding the admin passcode
pub const ADMIN_PASSCODE_ENV: &str = "FOLIO_ADMIN_PASSCODE";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub public_dir: String,
    pub storage_dir: String,

    // Content
    /// Key the saved draft is stored under
    pub storage_key: String,
    /// Static default document: an http(s) URL, or a path relative to
    /// `public_dir`. Empty disables this resolution step.
    pub static_content: String,
    pub fetch_timeout_secs: u64,
    /// Largest serialized document accepted by a save
    pub max_document_bytes: usize,
    /// File name offered for exports
    pub export_file: String,

    // Admin
    pub admin_passcode: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            url: "http://localhost:4000".to_string(),

            public_dir: "public".to_string(),
            storage_dir: ".folio".to_string(),

            storage_key: "folio_portfolio_draft".to_string(),
            static_content: "content/content.json".to_string(),
            fetch_timeout_secs: 10,
            max_document_bytes: 5 * 1024 * 1024,
            export_file: "content.json".to_string(),

            admin_passcode: None,
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Expected admin passcode: an explicit override (CLI flag or
    /// environment), then the config file, then the built-in fallback
    pub fn admin_passcode(&self, override_value: Option<&str>) -> String {
        override_value
            .filter(|p| !p.is_empty())
            .or(self.admin_passcode.as_deref().filter(|p| !p.is_empty()))
            .unwrap_or(FALLBACK_ADMIN_PASSCODE)
            .to_string()
    }
}

/// Admin server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.static_content, "content/content.json");
        assert_eq!(config.max_document_bytes, 5 * 1024 * 1024);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
storage_key: my_draft
static_content: https://example.com/content.json
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(config.storage_key, "my_draft");
        assert_eq!(config.static_content, "https://example.com/content.json");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_admin_passcode_precedence() {
        let mut config = SiteConfig::default();
        assert_eq!(config.admin_passcode(None), FALLBACK_ADMIN_PASSCODE);

        config.admin_passcode = Some("from-config".to_string());
        assert_eq!(config.admin_passcode(None), "from-config");
        assert_eq!(config.admin_passcode(Some("")), "from-config");
        assert_eq!(config.admin_passcode(Some("from-env")), "from-env");
    }
}
