//! Load, save, and backup of the persisted configuration file

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::error::{PowerdockError, Result};

/// Handle on the persisted configuration file.
///
/// All operations are blocking and assume exclusive single-operator use
/// of the file; there is no locking.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the persisted configuration. When no file exists yet, the
    /// default configuration is built, persisted immediately, and
    /// returned.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            Config::from_ini(&content)
        } else {
            let config = Config::default();
            self.save(&config)?;
            Ok(config)
        }
    }

    /// Serialize every section back to disk, fully overwriting prior
    /// content. I/O failures surface to the caller and are not retried.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, config.to_ini())?;
        Ok(())
    }

    /// Copy the persisted file to a timestamped sibling, returning the
    /// backup path. Fails with [`PowerdockError::MissingConfig`] when
    /// nothing has been persisted yet.
    pub fn backup(&self) -> Result<PathBuf> {
        if !self.path.exists() {
            return Err(PowerdockError::MissingConfig(self.path.clone()));
        }
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let backup_path = self.path.with_file_name(format!("config_backup_{}.ini", ts));
        fs::copy(&self.path, &backup_path)?;
        Ok(backup_path)
    }
}
