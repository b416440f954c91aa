//! General deployment settings, persisted as the `[GENERAL]` section

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deployment-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Number of active units, always within [1, 8]. Unit sections
    /// beyond this count persist in the file but are inert.
    pub num_pcs: u8,
    /// Directory where deployment artifacts are generated
    pub deployment_path: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            num_pcs: 2,
            deployment_path: default_deployment_path(),
        }
    }
}

/// Default deployment output directory, under the user's home.
pub fn default_deployment_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("esp-pc-controller")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_general_config() {
        let general = GeneralConfig::default();
        assert_eq!(general.num_pcs, 2);
        assert!(general.deployment_path.ends_with("esp-pc-controller"));
    }
}
