//! Default path resolution for the configuration file
//!
//! Uses the XDG config directory when available, with a sensible fallback.

use std::path::PathBuf;

/// Returns the default path of the deployment configuration file.
///
/// - Linux/macOS: `~/.config/powerdock/config.ini`
/// - Fallback: `/etc/powerdock/config.ini`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/etc"))
        .join("powerdock")
        .join("config.ini")
}
