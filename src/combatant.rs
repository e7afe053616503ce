//! Combatant stat model.
//!
//! The `Combatant` trait is the capability set shared by heroes and
//! monsters: health, armor, a weapon, taking hits, healing and death
//! detection. The mitigation and healing math lives here once, in
//! [`apply_hit`] and [`apply_heal`], so both sides of a fight resolve
//! damage identically.

use crate::error::CombatError;
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};

/// Numeric type used for every stat value.
pub type StatValue = f64;

/// Anything that can take part in a fight.
///
/// # Examples
///
/// ```rust
/// use herofight::{Combatant, Hero, HeroClass};
///
/// let mut hero = Hero::new(HeroClass::Hunter);
/// assert!(!hero.is_dead());
///
/// // 50 damage minus 5 armor
/// let net = hero.take_hit(50.0).unwrap();
/// assert_eq!(net, 45.0);
/// assert_eq!(hero.health(), 55.0);
/// ```
pub trait Combatant {
    /// Type name used in the combat log, e.g. `Hunter` or `MedusaTheGorgon`.
    fn name(&self) -> &str;

    /// Current level, always at least 1.
    fn level(&self) -> u32;

    /// Current health, in `[0, max_health]`.
    fn health(&self) -> StatValue;

    /// Maximum health at the current level.
    fn max_health(&self) -> StatValue;

    /// Flat damage reduction applied to every hit taken.
    fn armor(&self) -> StatValue;

    /// The weapon this combatant attacks with.
    fn weapon(&self) -> &dyn Weapon;

    /// Apply one incoming hit.
    ///
    /// Returns the damage left after armor, before health is clamped at
    /// zero. Fails with [`CombatError::InvalidArgument`] for negative or
    /// non-finite damage, leaving health untouched.
    fn take_hit(&mut self, damage: StatValue) -> Result<StatValue, CombatError>;

    /// Restore `level * heal rate` health, never beyond `max_health`.
    ///
    /// Returns the amount actually restored.
    fn heal(&mut self) -> StatValue;

    /// Whether health has dropped to zero.
    fn is_dead(&self) -> bool {
        self.health() <= 0.0
    }

    /// Raw damage of one attack at the current level.
    fn attack_damage(&self) -> StatValue {
        self.weapon().damage(self.level())
    }

    /// Snapshot of the current stats.
    fn stat_block(&self) -> StatBlock {
        StatBlock {
            name: self.name().to_string(),
            level: self.level(),
            health: self.health(),
            max_health: self.max_health(),
            armor: self.armor(),
            attack_damage: self.attack_damage(),
        }
    }
}

/// Resolve a hit against `health` and `armor`.
///
/// Returns `(new_health, net_damage)` where `net_damage = max(damage - armor, 0)`
/// and `new_health = max(health - net_damage, 0)`.
///
/// # Examples
///
/// ```rust
/// use herofight::combatant::apply_hit;
///
/// assert_eq!(apply_hit(100.0, 5.0, 50.0).unwrap(), (55.0, 45.0));
/// assert_eq!(apply_hit(100.0, 5.0, 3.0).unwrap(), (100.0, 0.0));
/// assert_eq!(apply_hit(10.0, 0.0, 510.0).unwrap(), (0.0, 510.0));
/// assert!(apply_hit(100.0, 5.0, -1.0).is_err());
/// ```
pub fn apply_hit(
    health: StatValue,
    armor: StatValue,
    damage: StatValue,
) -> Result<(StatValue, StatValue), CombatError> {
    if !damage.is_finite() {
        return Err(CombatError::not_finite("damage"));
    }
    if damage < 0.0 {
        return Err(CombatError::negative_damage(damage));
    }
    let net = (damage - armor).max(0.0);
    Ok(((health - net).max(0.0), net))
}

/// Resolve a heal of `amount` against `health`, clamped at `max_health`.
///
/// Returns `(new_health, restored)`.
pub fn apply_heal(
    health: StatValue,
    max_health: StatValue,
    amount: StatValue,
) -> (StatValue, StatValue) {
    let healed = (health + amount.max(0.0)).min(max_health);
    (healed, healed - health)
}

/// Read-only snapshot of a combatant's stats.
///
/// Serializable so fights can be recorded alongside their log.
///
/// # Examples
///
/// ```rust
/// use herofight::{Combatant, Hero, HeroClass};
///
/// let block = Hero::new(HeroClass::Mage).stat_block();
/// assert_eq!(block.name, "Mage");
/// assert_eq!(block.level, 1);
/// assert_eq!(block.attack_damage, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Type name of the combatant.
    pub name: String,

    /// Level at snapshot time.
    pub level: u32,

    /// Health at snapshot time.
    pub health: StatValue,

    /// Maximum health at snapshot time.
    pub max_health: StatValue,

    /// Armor at snapshot time.
    pub armor: StatValue,

    /// Raw damage of one attack at snapshot time.
    pub attack_damage: StatValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_hit_reduces_by_armor() {
        assert_eq!(apply_hit(100.0, 5.0, 30.0).unwrap(), (75.0, 25.0));
    }

    #[test]
    fn test_apply_hit_armor_absorbs_everything() {
        assert_eq!(apply_hit(40.0, 10.0, 10.0).unwrap(), (40.0, 0.0));
    }

    #[test]
    fn test_apply_hit_clamps_at_zero() {
        let (health, net) = apply_hit(20.0, 5.0, 500.0).unwrap();
        assert_eq!(health, 0.0);
        assert_eq!(net, 495.0);
    }

    #[test]
    fn test_apply_hit_rejects_bad_damage() {
        assert!(matches!(
            apply_hit(100.0, 0.0, -0.5),
            Err(CombatError::InvalidArgument(_))
        ));
        assert!(matches!(
            apply_hit(100.0, 0.0, f64::NAN),
            Err(CombatError::InvalidArgument(_))
        ));
        assert!(matches!(
            apply_hit(100.0, 0.0, f64::INFINITY),
            Err(CombatError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_apply_heal_clamps_at_max() {
        assert_eq!(apply_heal(95.0, 100.0, 10.0), (100.0, 5.0));
        assert_eq!(apply_heal(0.0, 100.0, 10.0), (10.0, 10.0));
        assert_eq!(apply_heal(100.0, 100.0, 10.0), (100.0, 0.0));
    }

    #[test]
    fn test_apply_heal_zero_rate() {
        assert_eq!(apply_heal(30.0, 100.0, 0.0), (30.0, 0.0));
    }
}
