//! CLI settings management
//!
//! Settings cover the CLI's own behavior: which configuration file to
//! edit, how to print, and which template generator command `generate`
//! invokes. They are distinct from the deployment configuration itself.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI settings, stored at `~/.config/powerdock/cli.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliSettings {
    /// Path of the deployment configuration file to edit
    pub config_file: PathBuf,

    /// Default output format ("table" or "json")
    pub output_format: String,

    /// Enable verbose logging by default
    pub verbose: bool,

    /// Command invoked by `generate`, called with the config file path
    pub template_command: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            config_file: powerdock_core::default_config_path(),
            output_format: "table".to_string(),
            verbose: false,
            template_command: "powerdock-template-gen".to_string(),
        }
    }
}

impl CliSettings {
    /// Load settings from file or create defaults.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if path.exists() {
            let content =
                std::fs::read_to_string(&path).context("Failed to read CLI settings file")?;
            toml::from_str(&content).context("Failed to parse CLI settings file")
        } else {
            let settings = Self::default();
            settings.save()?;
            Ok(settings)
        }
    }

    /// Save settings to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize CLI settings")?;
        std::fs::write(&path, content).context("Failed to write CLI settings file")?;

        Ok(())
    }

    /// Settings file path.
    fn settings_path() -> Result<PathBuf> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config")
        } else {
            return Err(anyhow::anyhow!("Cannot determine config directory"));
        };

        Ok(config_dir.join("powerdock").join("cli.toml"))
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(config_file) = std::env::var("POWERDOCK_CONFIG") {
            self.config_file = PathBuf::from(config_file);
        }

        if let Ok(format) = std::env::var("POWERDOCK_FORMAT") {
            if format == "table" || format == "json" {
                self.output_format = format;
            }
        }

        if let Ok(verbose) = std::env::var("POWERDOCK_VERBOSE") {
            self.verbose = verbose.to_lowercase() == "true" || verbose == "1";
        }

        if let Ok(command) = std::env::var("POWERDOCK_TEMPLATE_CMD") {
            self.template_command = command;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CliSettings::default();
        assert_eq!(settings.output_format, "table");
        assert!(!settings.verbose);
        assert_eq!(settings.template_command, "powerdock-template-gen");
        assert!(settings.config_file.ends_with("powerdock/config.ini"));
    }

    #[test]
    fn test_settings_toml_roundtrip() {
        let settings = CliSettings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: CliSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("POWERDOCK_CONFIG", "/tmp/other.ini");
        std::env::set_var("POWERDOCK_FORMAT", "json");
        std::env::set_var("POWERDOCK_VERBOSE", "true");
        std::env::set_var("POWERDOCK_TEMPLATE_CMD", "my-generator");

        let mut settings = CliSettings::default();
        settings.apply_env_overrides();

        assert_eq!(settings.config_file, PathBuf::from("/tmp/other.ini"));
        assert_eq!(settings.output_format, "json");
        assert!(settings.verbose);
        assert_eq!(settings.template_command, "my-generator");

        // An unknown format value is ignored
        std::env::set_var("POWERDOCK_FORMAT", "xml");
        let mut settings = CliSettings::default();
        settings.apply_env_overrides();
        assert_eq!(settings.output_format, "table");

        // Clean up
        std::env::remove_var("POWERDOCK_CONFIG");
        std::env::remove_var("POWERDOCK_FORMAT");
        std::env::remove_var("POWERDOCK_VERBOSE");
        std::env::remove_var("POWERDOCK_TEMPLATE_CMD");
    }
}
