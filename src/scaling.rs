//! Level scaling curves.
//!
//! Every derived stat in the crate (weapon damage, monster health, armor,
//! experience reward) is a function of the owner's current level. A
//! `LevelScaling` describes that function so stats are computed on read
//! instead of being cached at construction.

use crate::combatant::StatValue;
use serde::{Deserialize, Serialize};

/// A monotonically non-decreasing function of level.
///
/// # Examples
///
/// ```rust
/// use herofight::LevelScaling;
///
/// let damage = LevelScaling::per_level(10.0);
/// assert_eq!(damage.at(1), 10.0);
/// assert_eq!(damage.at(51), 510.0);
///
/// let armor = LevelScaling::Flat(3.0);
/// assert_eq!(armor.at(40), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LevelScaling {
    /// Same value at every level.
    Flat(StatValue),

    /// `base + per_level * level`.
    Linear {
        base: StatValue,
        per_level: StatValue,
    },
}

impl LevelScaling {
    /// A curve that is exactly `per_level * level`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herofight::LevelScaling;
    ///
    /// let health = LevelScaling::per_level(100.0);
    /// assert_eq!(health.at(50), 5000.0);
    /// ```
    pub fn per_level(per_level: StatValue) -> Self {
        LevelScaling::Linear {
            base: 0.0,
            per_level,
        }
    }

    /// A curve that never changes.
    pub fn none() -> Self {
        LevelScaling::Flat(0.0)
    }

    /// Evaluate the curve at `level`.
    pub fn at(&self, level: u32) -> StatValue {
        match *self {
            LevelScaling::Flat(value) => value,
            LevelScaling::Linear { base, per_level } => {
                base + per_level * StatValue::from(level)
            }
        }
    }
}

impl Default for LevelScaling {
    fn default() -> Self {
        LevelScaling::none()
    }
}
