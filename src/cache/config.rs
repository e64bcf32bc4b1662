//! Cache configuration.
//!
//! Controls the view cache via the `[cache]` section of `vitrine.toml`.

use serde::Deserialize;

/// View cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Serve repeated views from memory until a mutation invalidates them.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl From<&crate::config::CacheSettings> for CacheConfig {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
        }
    }
}

impl CacheConfig {
    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}
