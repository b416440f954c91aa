//! Per-unit settings, persisted as the `[UNIT1]`..`[UNIT8]` sections

use serde::{Deserialize, Serialize};

use crate::pins;

/// Vendor prefix for derived unit MAC addresses.
pub const MAC_PREFIX: &str = "AA:BB:CC:DD:EE";

/// One controlled machine: its wake target and the GPIO lines wired to
/// its power switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConfig {
    /// Display name
    pub name: String,
    /// Hardware MAC address of the controlled machine
    pub mac_address: String,
    /// IP address of the controlled machine
    pub ip_address: String,
    /// GPIO line pulsing the power-on signal
    pub on_button_gpio: String,
    /// GPIO line pulsing the power-off signal
    pub off_button_gpio: String,
}

impl UnitConfig {
    /// Deterministic defaults for unit `n` (1-based) on the given subnet
    /// base: MAC ends in the two-digit unit index, IP is `base.(100+n-1)`,
    /// and the GPIO pair comes from the fixed pin pool.
    pub fn default_for(n: usize, ip_base: &str) -> Self {
        let pair = pins::GPIO_PAIRS[(n - 1) % pins::MAX_UNITS];
        Self {
            name: format!("PC{}", n),
            mac_address: format!("{}:{:02}", MAC_PREFIX, n),
            ip_address: format!("{}.{}", ip_base, 100 + n - 1),
            on_button_gpio: pair.on_name(),
            off_button_gpio: pair.off_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::{pair_for_unit, MAX_UNITS};

    #[test]
    fn test_default_generation_rule() {
        for n in 1..=MAX_UNITS {
            let unit = UnitConfig::default_for(n, "192.168.1");
            assert_eq!(unit.name, format!("PC{}", n));
            assert!(unit.mac_address.ends_with(&format!("{:02}", n)));
            assert_eq!(unit.ip_address, format!("192.168.1.{}", 100 + n - 1));

            let pair = pair_for_unit(n).unwrap();
            assert_eq!(unit.on_button_gpio, pair.on_name());
            assert_eq!(unit.off_button_gpio, pair.off_name());
        }
    }

    #[test]
    fn test_unit_one_defaults() {
        let unit = UnitConfig::default_for(1, "192.168.1");
        assert_eq!(unit.mac_address, "AA:BB:CC:DD:EE:01");
        assert_eq!(unit.ip_address, "192.168.1.100");
        assert_eq!(unit.on_button_gpio, "GPIO16");
        assert_eq!(unit.off_button_gpio, "GPIO17");
    }

    #[test]
    fn test_defaults_follow_subnet_base() {
        let unit = UnitConfig::default_for(3, "10.0.20");
        assert_eq!(unit.ip_address, "10.0.20.102");
    }
}
