//! Configuration types for powerdock
//!
//! The deployment configuration is a flat key-value file grouped into
//! named sections: one device section, one general section, and exactly
//! [`MAX_UNITS`] per-unit sections. Every save rewrites the whole file;
//! partial writes are not supported.
//!
//! Units beyond the active count (`num_pcs`) persist in the file but are
//! inert: they are neither rendered into templates nor shown as active.

mod device;
mod general;
mod paths;
mod store;
mod unit;

pub use device::DeviceConfig;
pub use general::{default_deployment_path, GeneralConfig};
pub use paths::default_config_path;
pub use store::ConfigStore;
pub use unit::{UnitConfig, MAC_PREFIX};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::ini::Document;
use crate::pins::MAX_UNITS;

/// Section name for the device settings.
pub const DEVICE_SECTION: &str = "ESP32";
/// Section name for the general settings.
pub const GENERAL_SECTION: &str = "GENERAL";

/// Section name for unit `n` (1-based): `UNIT1`..`UNIT8`.
pub fn unit_section(n: usize) -> String {
    format!("UNIT{}", n)
}

/// The full deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub device: DeviceConfig,
    pub general: GeneralConfig,
    /// Always exactly [`MAX_UNITS`] entries; `general.num_pcs` decides
    /// how many are live.
    pub units: Vec<UnitConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let device = DeviceConfig::default();
        let base = device.ip_base();
        let units = (1..=MAX_UNITS)
            .map(|n| UnitConfig::default_for(n, &base))
            .collect();
        Self {
            device,
            general: GeneralConfig::default(),
            units,
        }
    }
}

impl Config {
    /// The live units: the first `num_pcs` entries.
    pub fn active_units(&self) -> &[UnitConfig] {
        let count = (self.general.num_pcs as usize).min(self.units.len());
        &self.units[..count]
    }

    /// Serialize to INI text, all sections in fixed order.
    pub fn to_ini(&self) -> String {
        let mut doc = Document::new();

        let section = doc.section_mut(DEVICE_SECTION);
        section.set("device_name", &self.device.device_name);
        section.set("friendly_name", &self.device.friendly_name);
        section.set("static_ip", &self.device.static_ip);
        section.set("gateway", &self.device.gateway);
        section.set("subnet", &self.device.subnet);
        section.set("dns", &self.device.dns);

        let section = doc.section_mut(GENERAL_SECTION);
        section.set("num_pcs", self.general.num_pcs.to_string());
        section.set(
            "deployment_path",
            self.general.deployment_path.display().to_string(),
        );

        for (i, unit) in self.units.iter().enumerate() {
            let section = doc.section_mut(&unit_section(i + 1));
            section.set("name", &unit.name);
            section.set("mac_address", &unit.mac_address);
            section.set("ip_address", &unit.ip_address);
            section.set("on_button_gpio", &unit.on_button_gpio);
            section.set("off_button_gpio", &unit.off_button_gpio);
        }

        doc.render()
    }

    /// Parse from INI text.
    ///
    /// Missing keys fall back to their defaults and unknown keys are
    /// ignored; a malformed `num_pcs` is treated as the default and
    /// clamped rather than rejected.
    pub fn from_ini(content: &str) -> Result<Self> {
        let doc = Document::parse(content)?;
        let defaults = Config::default();

        let get = |section: &str, key: &str, fallback: &str| -> String {
            doc.section(section)
                .and_then(|s| s.get(key))
                .unwrap_or(fallback)
                .to_string()
        };

        let device = DeviceConfig {
            device_name: get(DEVICE_SECTION, "device_name", &defaults.device.device_name),
            friendly_name: get(
                DEVICE_SECTION,
                "friendly_name",
                &defaults.device.friendly_name,
            ),
            static_ip: get(DEVICE_SECTION, "static_ip", &defaults.device.static_ip),
            gateway: get(DEVICE_SECTION, "gateway", &defaults.device.gateway),
            subnet: get(DEVICE_SECTION, "subnet", &defaults.device.subnet),
            dns: get(DEVICE_SECTION, "dns", &defaults.device.dns),
        };

        let num_pcs = doc
            .section(GENERAL_SECTION)
            .and_then(|s| s.get("num_pcs"))
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(crate::editor::clamp_unit_count)
            .unwrap_or(defaults.general.num_pcs);

        let general = GeneralConfig {
            num_pcs,
            deployment_path: PathBuf::from(get(
                GENERAL_SECTION,
                "deployment_path",
                &defaults.general.deployment_path.display().to_string(),
            )),
        };

        let base = device.ip_base();
        let units = (1..=MAX_UNITS)
            .map(|n| {
                let fallback = UnitConfig::default_for(n, &base);
                let section = unit_section(n);
                UnitConfig {
                    name: get(&section, "name", &fallback.name),
                    mac_address: get(&section, "mac_address", &fallback.mac_address),
                    ip_address: get(&section, "ip_address", &fallback.ip_address),
                    on_button_gpio: get(&section, "on_button_gpio", &fallback.on_button_gpio),
                    off_button_gpio: get(&section, "off_button_gpio", &fallback.off_button_gpio),
                }
            })
            .collect();

        Ok(Self {
            device,
            general,
            units,
        })
    }
}
