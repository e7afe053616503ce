//! Monster stat supplier.
//!
//! Monsters are fixed-level combatants. Health, armor, attack damage and
//! experience reward all come from a [`MonsterProfile`] evaluated at the
//! monster's level. Monsters never gain experience and never heal.

use crate::combatant::{apply_hit, Combatant, StatValue};
use crate::error::CombatError;
use crate::scaling::LevelScaling;
use crate::weapon::{LevelWeapon, Weapon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-level stat curves for one kind of monster.
///
/// # Examples
///
/// ```rust
/// use herofight::{MonsterKind, LevelScaling};
///
/// let profile = MonsterKind::MedusaTheGorgon.profile();
/// assert_eq!(profile.health.at(1), 100.0);
/// assert_eq!(profile.armor, LevelScaling::none());
/// assert_eq!(profile.experience.at(1), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterProfile {
    /// Name of the monster's natural attack.
    pub attack: String,

    /// Maximum health curve.
    pub health: LevelScaling,

    /// Armor curve.
    pub armor: LevelScaling,

    /// Attack damage curve.
    pub damage: LevelScaling,

    /// Experience granted to the hero on kill.
    pub experience: LevelScaling,
}

/// Built-in monster kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// No armor, hits hard, worth 4 XP per level.
    MedusaTheGorgon,
    /// Fragile with a sliver of flat armor.
    Goblin,
    /// Tough and armored, slow to bring down.
    Troll,
}

impl MonsterKind {
    /// Name used in the combat log.
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::MedusaTheGorgon => "MedusaTheGorgon",
            MonsterKind::Goblin => "Goblin",
            MonsterKind::Troll => "Troll",
        }
    }

    /// Stat curves for this kind.
    pub fn profile(&self) -> MonsterProfile {
        match self {
            MonsterKind::MedusaTheGorgon => MonsterProfile {
                attack: "Petrifying Gaze".to_string(),
                health: LevelScaling::per_level(100.0),
                armor: LevelScaling::none(),
                damage: LevelScaling::per_level(10.0),
                experience: LevelScaling::per_level(4.0),
            },
            MonsterKind::Goblin => MonsterProfile {
                attack: "Rusty Dagger".to_string(),
                health: LevelScaling::per_level(40.0),
                armor: LevelScaling::Flat(1.0),
                damage: LevelScaling::per_level(6.0),
                experience: LevelScaling::per_level(2.0),
            },
            MonsterKind::Troll => MonsterProfile {
                attack: "Club".to_string(),
                health: LevelScaling::per_level(150.0),
                armor: LevelScaling::per_level(3.0),
                damage: LevelScaling::per_level(9.0),
                experience: LevelScaling::per_level(6.0),
            },
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A monster at a fixed level.
///
/// # Examples
///
/// ```rust
/// use herofight::{Combatant, Monster, MonsterKind};
///
/// let medusa = Monster::new(MonsterKind::MedusaTheGorgon, 50).unwrap();
/// assert_eq!(medusa.name(), "MedusaTheGorgon");
/// assert_eq!(medusa.health(), 5000.0);
/// assert_eq!(medusa.attack_damage(), 500.0);
/// assert_eq!(medusa.experience_reward(), 200.0);
/// ```
#[derive(Debug, Clone)]
pub struct Monster {
    name: String,
    level: u32,
    health: StatValue,
    profile: MonsterProfile,
    weapon: LevelWeapon,
}

impl Monster {
    /// Create a built-in monster at full health.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidArgument`] if `level` is 0.
    pub fn new(kind: MonsterKind, level: u32) -> Result<Self, CombatError> {
        Self::custom(kind.name(), kind.profile(), level)
    }

    /// Create a monster from an arbitrary profile at full health.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidArgument`] if `level` is 0.
    pub fn custom(
        name: impl Into<String>,
        profile: MonsterProfile,
        level: u32,
    ) -> Result<Self, CombatError> {
        if level == 0 {
            return Err(CombatError::InvalidArgument(
                "monster level must be at least 1".to_string(),
            ));
        }
        let weapon = LevelWeapon::new(profile.attack.clone(), profile.damage);
        Ok(Self {
            name: name.into(),
            level,
            health: profile.health.at(level),
            profile,
            weapon,
        })
    }

    /// Experience the hero gains for killing this monster.
    pub fn experience_reward(&self) -> StatValue {
        self.profile.experience.at(self.level)
    }

    /// The stat curves this monster was built from.
    pub fn profile(&self) -> &MonsterProfile {
        &self.profile
    }
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn health(&self) -> StatValue {
        self.health
    }

    fn max_health(&self) -> StatValue {
        self.profile.health.at(self.level)
    }

    fn armor(&self) -> StatValue {
        self.profile.armor.at(self.level)
    }

    fn weapon(&self) -> &dyn Weapon {
        &self.weapon
    }

    fn take_hit(&mut self, damage: StatValue) -> Result<StatValue, CombatError> {
        let (health, net) = apply_hit(self.health, self.armor(), damage).map_err(|e| {
            tracing::warn!(monster = %self.name, damage, "rejected hit");
            e
        })?;
        self.health = health;
        Ok(net)
    }

    fn heal(&mut self) -> StatValue {
        0.0
    }
}
