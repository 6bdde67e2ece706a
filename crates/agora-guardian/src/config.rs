//! Site settings loading.
//!
//! Settings normally arrive from a TOML file maintained alongside the
//! deployment. Every field has a default, so a file only names what it
//! overrides:
//!
//! ```toml
//! title = "Example Forum"
//! must_approve_users = true
//! developer_emails = ["ops@example.com"]
//! ```

use std::path::Path;

use agora_contracts::{
    error::{AgoraError, AgoraResult},
    settings::SiteSettings,
};

/// Parse `s` as TOML site settings.
///
/// Returns `AgoraError::ConfigError` if the TOML is malformed or does not
/// match the `SiteSettings` schema.
pub fn settings_from_toml_str(s: &str) -> AgoraResult<SiteSettings> {
    toml::from_str(s).map_err(|e| AgoraError::ConfigError {
        reason: format!("failed to parse settings TOML: {}", e),
    })
}

/// Read the file at `path` and parse it as TOML site settings.
pub fn settings_from_file(path: &Path) -> AgoraResult<SiteSettings> {
    let contents = std::fs::read_to_string(path).map_err(|e| AgoraError::ConfigError {
        reason: format!("failed to read settings file '{}': {}", path.display(), e),
    })?;
    settings_from_toml_str(&contents)
}
