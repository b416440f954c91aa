//! Error types for the powerdock tools

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for powerdock operations
#[derive(Error, Debug)]
pub enum PowerdockError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parsing errors (malformed configuration file)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit index out of range
    #[error("Unit out of range: {unit} (must be 1-{max})")]
    InvalidUnit { unit: usize, max: usize },

    /// No persisted configuration file exists yet
    #[error("No configuration file at {}", .0.display())]
    MissingConfig(PathBuf),

    /// External collaborator (template generator, folder opener) not found
    #[error("Collaborator not found: {0}")]
    MissingCollaborator(String),

    /// Subprocess exited with failure
    #[error("Subprocess failed: {0}")]
    Subprocess(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for powerdock operations
pub type Result<T> = std::result::Result<T, PowerdockError>;
