//! Configuration module

mod site;

pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::{ADMIN_PASSCODE_ENV, FALLBACK_ADMIN_PASSCODE};
