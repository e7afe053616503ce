//! Hero progression engine.
//!
//! A [`Hero`] is the player-side combatant. On top of the shared
//! [`Combatant`] capabilities it accumulates experience and levels up.
//! Maximum health, armor and weapon damage are read from the current level
//! every time, so a level gained mid-session shows up immediately in the
//! next attack or hit taken.

use crate::combatant::{apply_heal, apply_hit, Combatant, StatValue};
use crate::constants::{
    HEAL_PER_LEVEL, INITIAL_ARMOR, INITIAL_EXPERIENCE, INITIAL_LEVEL, INITIAL_MAX_HEALTH,
    MAXIMUM_EXPERIENCE,
};
use crate::error::CombatError;
use crate::weapon::{LevelWeapon, Weapon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hero classes. Each one fights with a different weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    /// Fights with a bow (10 damage per level).
    Hunter,
    /// Fights with a staff (12 damage per level).
    Mage,
    /// Fights with a sword (8 damage per level).
    Warrior,
}

impl HeroClass {
    /// Name used in the combat log.
    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Hunter => "Hunter",
            HeroClass::Mage => "Mage",
            HeroClass::Warrior => "Warrior",
        }
    }

    /// The weapon a fresh hero of this class carries.
    pub fn starting_weapon(&self) -> LevelWeapon {
        match self {
            HeroClass::Hunter => LevelWeapon::bow(),
            HeroClass::Mage => LevelWeapon::staff(),
            HeroClass::Warrior => LevelWeapon::sword(),
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The hero: a combatant that gains experience and levels up.
///
/// # Examples
///
/// ```rust
/// use herofight::{Combatant, Hero, HeroClass};
/// use herofight::constants::MAXIMUM_EXPERIENCE;
///
/// let mut hero = Hero::new(HeroClass::Hunter);
/// assert_eq!(hero.level(), 1);
/// assert_eq!(hero.max_health(), 100.0);
///
/// let leveled = hero.gain_experience(MAXIMUM_EXPERIENCE).unwrap();
/// assert!(leveled);
/// assert_eq!(hero.level(), 2);
/// assert_eq!(hero.experience(), 0.0);
/// assert_eq!(hero.max_health(), 200.0);
/// assert_eq!(hero.attack_damage(), 20.0);
/// ```
#[derive(Debug)]
pub struct Hero {
    class: HeroClass,
    level: u32,
    experience: StatValue,
    health: StatValue,
    weapon: Box<dyn Weapon>,
}

impl Hero {
    /// Create a level-1 hero at full health with the class's weapon.
    pub fn new(class: HeroClass) -> Self {
        Self::with_weapon(class, class.starting_weapon())
    }

    /// Create a level-1 hero at full health carrying `weapon`.
    pub fn with_weapon(class: HeroClass, weapon: impl Weapon + 'static) -> Self {
        Self {
            class,
            level: INITIAL_LEVEL,
            experience: INITIAL_EXPERIENCE,
            health: INITIAL_MAX_HEALTH,
            weapon: Box::new(weapon),
        }
    }

    /// The hero's class.
    pub fn class(&self) -> HeroClass {
        self.class
    }

    /// Experience towards the next level, in `[0, MAXIMUM_EXPERIENCE)`.
    pub fn experience(&self) -> StatValue {
        self.experience
    }

    /// Add experience, levelling up once if the threshold is reached.
    ///
    /// When `experience + amount >= MAXIMUM_EXPERIENCE` the remainder
    /// modulo `MAXIMUM_EXPERIENCE` is kept and the level goes up by exactly
    /// one, however large `amount` is. Returns whether a level was gained.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidArgument`] for negative or non-finite amounts.
    pub fn gain_experience(&mut self, amount: StatValue) -> Result<bool, CombatError> {
        if !amount.is_finite() {
            return Err(CombatError::not_finite("experience"));
        }
        if amount < 0.0 {
            tracing::warn!(amount, "rejected negative experience gain");
            return Err(CombatError::negative_experience(amount));
        }

        let total = self.experience + amount;
        if total >= MAXIMUM_EXPERIENCE {
            self.experience = total % MAXIMUM_EXPERIENCE;
            self.level = self.level.saturating_add(1);
            tracing::debug!(
                hero = self.class.name(),
                level = self.level,
                experience = self.experience,
                "hero levelled up"
            );
            Ok(true)
        } else {
            self.experience = total;
            Ok(false)
        }
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        self.class.name()
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn health(&self) -> StatValue {
        self.health
    }

    fn max_health(&self) -> StatValue {
        INITIAL_MAX_HEALTH * StatValue::from(self.level)
    }

    fn armor(&self) -> StatValue {
        INITIAL_ARMOR * StatValue::from(self.level)
    }

    fn weapon(&self) -> &dyn Weapon {
        self.weapon.as_ref()
    }

    fn take_hit(&mut self, damage: StatValue) -> Result<StatValue, CombatError> {
        let (health, net) = apply_hit(self.health, self.armor(), damage).map_err(|e| {
            tracing::warn!(hero = self.class.name(), damage, "rejected hit");
            e
        })?;
        self.health = health;
        Ok(net)
    }

    fn heal(&mut self) -> StatValue {
        let amount = HEAL_PER_LEVEL * StatValue::from(self.level);
        let (health, restored) = apply_heal(self.health, self.max_health(), amount);
        self.health = health;
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_up(hero: &mut Hero, levels: u32) {
        for _ in 0..levels {
            hero.gain_experience(MAXIMUM_EXPERIENCE).unwrap();
        }
    }

    #[test]
    fn test_initial_values() {
        let hero = Hero::new(HeroClass::Mage);
        assert_eq!(hero.level(), INITIAL_LEVEL);
        assert_eq!(hero.experience(), INITIAL_EXPERIENCE);
        assert_eq!(hero.max_health(), INITIAL_MAX_HEALTH);
        assert_eq!(hero.health(), INITIAL_MAX_HEALTH);
        assert_eq!(hero.armor(), INITIAL_ARMOR);
        assert_eq!(hero.weapon().name(), "Staff");
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Hero::new(HeroClass::Hunter).name(), "Hunter");
        assert_eq!(HeroClass::Warrior.to_string(), "Warrior");
    }

    #[test]
    fn test_derived_stats_follow_level() {
        let mut hero = Hero::new(HeroClass::Warrior);
        level_up(&mut hero, 4);
        assert_eq!(hero.level(), 5);
        assert_eq!(hero.max_health(), 500.0);
        assert_eq!(hero.armor(), 25.0);
        assert_eq!(hero.attack_damage(), 40.0);
        // Levelling does not refill health.
        assert_eq!(hero.health(), INITIAL_MAX_HEALTH);
    }

    #[test]
    fn test_large_gain_levels_once() {
        let mut hero = Hero::new(HeroClass::Hunter);
        assert!(hero.gain_experience(250.0).unwrap());
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.experience(), 50.0);
    }

    #[test]
    fn test_gain_below_threshold() {
        let mut hero = Hero::new(HeroClass::Hunter);
        assert!(!hero.gain_experience(60.0).unwrap());
        assert!(!hero.gain_experience(39.0).unwrap());
        assert_eq!(hero.experience(), 99.0);
        assert!(hero.gain_experience(1.0).unwrap());
        assert_eq!(hero.experience(), 0.0);
        assert_eq!(hero.level(), 2);
    }

    #[test]
    fn test_level_saturates_at_max() {
        let mut hero = Hero::new(HeroClass::Hunter);
        hero.level = u32::MAX;
        assert!(hero.gain_experience(MAXIMUM_EXPERIENCE + 20.0).unwrap());
        assert_eq!(hero.level(), u32::MAX);
        assert_eq!(hero.experience(), 20.0);
    }

    #[test]
    fn test_rejects_bad_experience() {
        let mut hero = Hero::new(HeroClass::Hunter);
        assert!(hero.gain_experience(-1.0).is_err());
        assert!(hero.gain_experience(f64::NAN).is_err());
        assert_eq!(hero.experience(), INITIAL_EXPERIENCE);
        assert_eq!(hero.level(), INITIAL_LEVEL);
    }

    #[test]
    fn test_heal_restores_per_level() {
        let mut hero = Hero::new(HeroClass::Hunter);
        hero.take_hit(1000.0).unwrap();
        assert!(hero.is_dead());
        assert_eq!(hero.heal(), HEAL_PER_LEVEL);
        assert_eq!(hero.health(), HEAL_PER_LEVEL);
        assert!(!hero.is_dead());
    }

    #[test]
    fn test_heal_at_full_health_is_noop() {
        let mut hero = Hero::new(HeroClass::Mage);
        assert_eq!(hero.heal(), 0.0);
        assert_eq!(hero.health(), hero.max_health());
    }

    #[test]
    fn test_custom_weapon() {
        let hero = Hero::with_weapon(
            HeroClass::Warrior,
            LevelWeapon::new("Greataxe", crate::LevelScaling::Flat(33.0)),
        );
        assert_eq!(hero.weapon().name(), "Greataxe");
        assert_eq!(hero.attack_damage(), 33.0);
    }
}
