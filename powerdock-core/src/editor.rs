//! Draft-based configuration editing
//!
//! The editor owns an in-memory draft of the configuration, decoupled
//! from any UI toolkit. Edits apply to the draft only; nothing reaches
//! the store until an explicit [`ConfigEditor::save`].

use crate::config::{Config, ConfigStore, UnitConfig};
use crate::error::{PowerdockError, Result};
use crate::pins::MAX_UNITS;

/// Clamp a requested active unit count into [1, [`MAX_UNITS`]].
pub fn clamp_unit_count(n: i64) -> u8 {
    n.clamp(1, MAX_UNITS as i64) as u8
}

/// In-memory editing session over a [`ConfigStore`].
#[derive(Debug)]
pub struct ConfigEditor {
    store: ConfigStore,
    draft: Config,
}

impl ConfigEditor {
    /// Load the persisted configuration into a fresh draft, creating the
    /// default file when none exists yet.
    pub fn open(store: ConfigStore) -> Result<Self> {
        let draft = store.load()?;
        Ok(Self { store, draft })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn draft(&self) -> &Config {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Config {
        &mut self.draft
    }

    /// Mutable access to unit `n` (1-based).
    pub fn unit_mut(&mut self, n: usize) -> Result<&mut UnitConfig> {
        if (1..=MAX_UNITS).contains(&n) {
            Ok(&mut self.draft.units[n - 1])
        } else {
            Err(PowerdockError::InvalidUnit {
                unit: n,
                max: MAX_UNITS,
            })
        }
    }

    /// Clamp and apply the active unit count. Returns the applied value.
    pub fn set_active_units(&mut self, n: i64) -> u8 {
        let clamped = clamp_unit_count(n);
        self.draft.general.num_pcs = clamped;
        clamped
    }

    /// Apply the active unit count from raw text input. Invalid input
    /// (empty, non-numeric) is silently ignored and the current value
    /// returned, so transient states during typing never error.
    pub fn set_active_units_str(&mut self, input: &str) -> u8 {
        match input.trim().parse::<i64>() {
            Ok(n) => self.set_active_units(n),
            Err(_) => self.draft.general.num_pcs,
        }
    }

    /// The units currently visible as active. Presentation only: all
    /// units persist on save regardless.
    pub fn visible_units(&self) -> &[UnitConfig] {
        self.draft.active_units()
    }

    /// Commit the full draft to the store. On failure the draft is left
    /// untouched so the operator can retry.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.draft)
    }
}
