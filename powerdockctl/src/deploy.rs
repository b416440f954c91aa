//! External collaborators: template generator and OS folder-open
//!
//! Both run as synchronous subprocesses. Output is captured and a
//! nonzero exit is treated as failure; a missing program is reported as
//! a configuration problem rather than a crash.

use std::io;
use std::path::Path;
use std::process::Command;

use powerdock_core::{PowerdockError, Result};
use tracing::{debug, info};

/// Runner for the external template generator.
///
/// The generator consumes the persisted configuration file path and
/// produces deployment artifacts under the configured deployment path.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    command: String,
}

impl TemplateGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the generator against the persisted configuration file,
    /// returning its captured stdout.
    pub fn run(&self, config_path: &Path) -> Result<String> {
        info!("Running template generator: {}", self.command);

        let output = Command::new(&self.command)
            .arg(config_path)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PowerdockError::MissingCollaborator(self.command.clone())
                } else {
                    PowerdockError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PowerdockError::Subprocess(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        debug!("Template generator finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Open `path` in the system file browser.
pub fn open_folder(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PowerdockError::Config(format!(
            "Folder does not exist: {}",
            path.display()
        )));
    }

    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    let status = Command::new(program).arg(path).status().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PowerdockError::MissingCollaborator(program.to_string())
        } else {
            PowerdockError::Io(e)
        }
    })?;

    if !status.success() {
        return Err(PowerdockError::Subprocess(format!(
            "{} exited with {}",
            program, status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_generator_is_reported() {
        let generator = TemplateGenerator::new("powerdock-no-such-generator");
        let err = generator.run(&PathBuf::from("config.ini")).unwrap_err();
        assert!(matches!(err, PowerdockError::MissingCollaborator(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_generator_failure_captures_stderr() {
        // `false` exists everywhere on unix and always exits nonzero
        let generator = TemplateGenerator::new("false");
        let err = generator.run(&PathBuf::from("config.ini")).unwrap_err();
        assert!(matches!(err, PowerdockError::Subprocess(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_generator_success_captures_stdout() {
        let generator = TemplateGenerator::new("echo");
        let stdout = generator.run(&PathBuf::from("config.ini")).unwrap();
        assert!(stdout.contains("config.ini"));
    }

    #[test]
    fn test_open_missing_folder_errors() {
        let err = open_folder(&PathBuf::from("/no/such/folder/anywhere")).unwrap_err();
        assert!(matches!(err, PowerdockError::Config(_)));
    }
}
