//! ESP32 pin assignments for unit power control
//!
//! Each controlled unit needs two digital output lines: one to pulse the
//! power-on signal and one for power-off. The pairs below stay clear of
//! GPIO0/GPIO2/GPIO6-11 (boot strapping and flash wiring) and GPIO34-39
//! (input-only, no output driver).

/// Maximum number of controlled units per device.
pub const MAX_UNITS: usize = 8;

/// A power-on/power-off GPIO output pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioPair {
    /// Pin driving the power-on line
    pub on: u8,
    /// Pin driving the power-off line
    pub off: u8,
}

impl GpioPair {
    /// Pin name as written to the configuration file, e.g. `GPIO16`.
    pub fn on_name(&self) -> String {
        format!("GPIO{}", self.on)
    }

    pub fn off_name(&self) -> String {
        format!("GPIO{}", self.off)
    }
}

/// Fixed ordered pool of known-safe output pairs, one per unit slot.
pub const GPIO_PAIRS: [GpioPair; MAX_UNITS] = [
    GpioPair { on: 16, off: 17 },
    GpioPair { on: 18, off: 19 },
    GpioPair { on: 21, off: 22 },
    GpioPair { on: 23, off: 25 },
    GpioPair { on: 26, off: 27 },
    GpioPair { on: 32, off: 33 },
    GpioPair { on: 12, off: 13 },
    GpioPair { on: 14, off: 15 },
];

/// The GPIO pair assigned to unit `n` (1-based).
pub fn pair_for_unit(unit: usize) -> Option<GpioPair> {
    if (1..=MAX_UNITS).contains(&unit) {
        Some(GPIO_PAIRS[unit - 1])
    } else {
        None
    }
}

/// Whether a pin can be freely driven as an output on a stock ESP32 devkit.
pub fn is_safe_output_pin(pin: u8) -> bool {
    matches!(pin, 12..=19 | 21..=23 | 25..=27 | 32 | 33)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_covers_all_units() {
        for n in 1..=MAX_UNITS {
            assert!(pair_for_unit(n).is_some());
        }
        assert!(pair_for_unit(0).is_none());
        assert!(pair_for_unit(MAX_UNITS + 1).is_none());
    }

    #[test]
    fn test_pool_pins_are_safe_and_distinct() {
        let mut seen = Vec::new();
        for pair in GPIO_PAIRS {
            assert!(is_safe_output_pin(pair.on), "GPIO{} unsafe", pair.on);
            assert!(is_safe_output_pin(pair.off), "GPIO{} unsafe", pair.off);
            assert!(!seen.contains(&pair.on));
            assert!(!seen.contains(&pair.off));
            seen.push(pair.on);
            seen.push(pair.off);
        }
    }

    #[test]
    fn test_unsafe_pins_rejected() {
        // Boot strapping / flash pins
        for pin in [0u8, 2, 6, 7, 8, 9, 10, 11] {
            assert!(!is_safe_output_pin(pin));
        }
        // Input-only pins
        for pin in 34..=39 {
            assert!(!is_safe_output_pin(pin));
        }
    }

    #[test]
    fn test_first_pair_names() {
        let pair = pair_for_unit(1).unwrap();
        assert_eq!(pair.on_name(), "GPIO16");
        assert_eq!(pair.off_name(), "GPIO17");
    }
}
