//! Weapons module.
//!
//! A weapon is the damage-producing capability a combatant carries. It
//! only knows how hard it hits at a given wielder level; armor and health
//! are handled by [`crate::combatant::Combatant::take_hit`] on the
//! receiving side.

use crate::combatant::StatValue;
use crate::scaling::LevelScaling;
use std::fmt;

/// Trait for anything that can deal damage.
///
/// Weapons are stateless and deterministic - the same wielder level always
/// produces the same damage. Implementations must return a non-negative
/// value; a negative one is a data bug and aborts the fight with
/// [`crate::CombatError::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use herofight::{LevelWeapon, Weapon};
///
/// let bow = LevelWeapon::bow();
/// assert_eq!(bow.damage(1), 10.0);
/// assert_eq!(bow.damage(51), 510.0);
/// ```
pub trait Weapon: fmt::Debug + Send + Sync {
    /// Display name of the weapon.
    fn name(&self) -> &str;

    /// Raw damage dealt by one attack at the wielder's `level`.
    fn damage(&self, level: u32) -> StatValue;
}

/// A weapon whose damage follows a [`LevelScaling`] curve.
///
/// Covers every built-in weapon, including the natural attacks monsters
/// use.
///
/// # Examples
///
/// ```rust
/// use herofight::{LevelScaling, LevelWeapon, Weapon};
///
/// let club = LevelWeapon::new("Club", LevelScaling::Linear { base: 4.0, per_level: 2.0 });
/// assert_eq!(club.name(), "Club");
/// assert_eq!(club.damage(3), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LevelWeapon {
    name: String,
    scaling: LevelScaling,
}

impl LevelWeapon {
    /// Create a weapon from a name and a damage curve.
    pub fn new(name: impl Into<String>, scaling: LevelScaling) -> Self {
        Self {
            name: name.into(),
            scaling,
        }
    }

    /// The hunter's bow: 10 damage per level.
    pub fn bow() -> Self {
        Self::new("Bow", LevelScaling::per_level(10.0))
    }

    /// The mage's staff: 12 damage per level.
    pub fn staff() -> Self {
        Self::new("Staff", LevelScaling::per_level(12.0))
    }

    /// The warrior's sword: 8 damage per level.
    pub fn sword() -> Self {
        Self::new("Sword", LevelScaling::per_level(8.0))
    }

    /// The damage curve of this weapon.
    pub fn scaling(&self) -> LevelScaling {
        self.scaling
    }
}

impl Weapon for LevelWeapon {
    fn name(&self) -> &str {
        &self.name
    }

    fn damage(&self, level: u32) -> StatValue {
        self.scaling.at(level)
    }
}
