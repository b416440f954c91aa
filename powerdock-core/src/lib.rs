//! Powerdock Core Library
//!
//! Shared configuration model, ESP32 pin tables, and API key generation
//! for the powerdock deployment tools. This crate is used by both the
//! CLI editor and the standalone key generator.

pub mod config;
pub mod editor;
pub mod error;
pub mod ini;
pub mod keygen;
pub mod pins;

// Re-export commonly used types
pub use config::{
    default_config_path, unit_section, Config, ConfigStore, DeviceConfig, GeneralConfig,
    UnitConfig, DEVICE_SECTION, GENERAL_SECTION, MAC_PREFIX,
};
pub use editor::{clamp_unit_count, ConfigEditor};
pub use error::*;
pub use keygen::ApiKey;
pub use pins::{GpioPair, GPIO_PAIRS, MAX_UNITS};
