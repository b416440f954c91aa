//! API key generation
//!
//! Produces the 256-bit base64-encoded key used to encrypt traffic to
//! the device management API. Bytes come from the operating system
//! CSPRNG; a non-cryptographic source is never acceptable here.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Fixed name of the key side file.
pub const KEY_FILE_NAME: &str = "api_key.txt";

/// Length of the raw key in bytes.
pub const KEY_LEN: usize = 32;

/// A freshly generated API encryption key, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Generate a fresh key from the OS secure random source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The single line written to the key file and pasted into the
    /// device secrets, e.g. `api_key: "..."`.
    pub fn secret_line(&self) -> String {
        format!("api_key: \"{}\"\n", self.0)
    }

    /// Write the key file into `dir`, overwriting any previous key.
    /// Returns the path of the written file.
    pub fn persist(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(KEY_FILE_NAME);
        fs::write(&path, self.secret_line())?;
        Ok(path)
    }
}
