//! powerdockctl library
//!
//! CLI internals for the powerdock deployment editor, exposed for
//! integration tests.

pub mod cli;
pub mod deploy;
pub mod format;
pub mod settings;
