//! Device network settings, persisted as the `[ESP32]` section

use serde::{Deserialize, Serialize};

/// Network identity of the controller device.
///
/// All fields are free-form strings; the device firmware is the
/// authority on what it accepts, so nothing beyond presence is enforced
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device identifier (hostname-style)
    pub device_name: String,
    /// Human-readable display name
    pub friendly_name: String,
    /// Static IP assigned to the device
    pub static_ip: String,
    /// Network gateway
    pub gateway: String,
    /// Subnet mask
    pub subnet: String,
    /// DNS server
    pub dns: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_name: "pc-controller".to_string(),
            friendly_name: "PC Controller".to_string(),
            static_ip: "192.168.1.50".to_string(),
            gateway: "192.168.1.1".to_string(),
            subnet: "255.255.255.0".to_string(),
            dns: "192.168.1.1".to_string(),
        }
    }
}

impl DeviceConfig {
    /// First three octets of the static IP, used as the subnet base when
    /// deriving default unit addresses. Falls back to `192.168.1` when
    /// the static IP is not a dotted quad.
    pub fn ip_base(&self) -> String {
        let octets: Vec<&str> = self.static_ip.split('.').collect();
        if octets.len() == 4 {
            octets[..3].join(".")
        } else {
            "192.168.1".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_config() {
        let device = DeviceConfig::default();
        assert_eq!(device.device_name, "pc-controller");
        assert_eq!(device.static_ip, "192.168.1.50");
        assert_eq!(device.subnet, "255.255.255.0");
    }

    #[test]
    fn test_ip_base() {
        let mut device = DeviceConfig::default();
        assert_eq!(device.ip_base(), "192.168.1");

        device.static_ip = "10.0.20.5".to_string();
        assert_eq!(device.ip_base(), "10.0.20");

        device.static_ip = "not-an-ip".to_string();
        assert_eq!(device.ip_base(), "192.168.1");
    }
}
