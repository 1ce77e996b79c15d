//! Server settings.
//!
//! Deployment configuration comes from the environment; every value has a
//! typed accessor with an explicit override for embedding hosts and tests.

use std::path::{Path, PathBuf};

use mapserv_service_sdk::ServerInterface;

/// Environment variable naming the native service module directory.
pub const MODULES_DIR_ENV: &str = "MAPSERV_MODULES_DIR";

/// Resolved server configuration.
///
/// Implements [`ServerInterface`] so it can double as the opaque server
/// context handed to modules during self-registration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    modules_dir: Option<PathBuf>,
    version: String,
}

impl ServerSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            modules_dir: std::env::var_os(MODULES_DIR_ENV).map(PathBuf::from),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the module directory.
    pub fn with_modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = Some(dir.into());
        self
    }

    /// Directory scanned for native service modules, if configured.
    pub fn modules_dir(&self) -> Option<&Path> {
        self.modules_dir.as_deref()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ServerInterface for ServerSettings {
    fn version(&self) -> &str {
        &self.version
    }

    fn config_value(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
