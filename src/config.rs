//! Combat configuration.
//!
//! `CombatConfig` holds the runtime knobs of the combat processor. Fixed
//! balance numbers live in [`crate::constants`]; anything here can be
//! changed per processor or loaded from JSON.

use crate::constants::MAX_HEALS_PER_FIGHT;
use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// Runtime configuration for a [`crate::CombatProcessor`].
///
/// Missing fields take their default values when deserialized.
///
/// # Examples
///
/// ```rust
/// use herofight::CombatConfig;
///
/// let config = CombatConfig::default();
/// assert_eq!(config.max_heals_per_fight, 3);
///
/// let config = CombatConfig::from_json(r#"{ "max_heals_per_fight": 1 }"#).unwrap();
/// assert_eq!(config.max_heals_per_fight, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Lethal hits the hero may survive per fight by healing.
    pub max_heals_per_fight: u32,
}

impl CombatConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many heals the hero gets per fight.
    pub fn with_max_heals_per_fight(mut self, heals: u32) -> Self {
        self.max_heals_per_fight = heals;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidConfig`] if the text is not a valid config.
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        serde_json::from_str(json).map_err(|e| CombatError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, CombatError> {
        serde_json::to_string(self).map_err(|e| CombatError::InvalidConfig(e.to_string()))
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_heals_per_fight: MAX_HEALS_PER_FIGHT,
        }
    }
}
