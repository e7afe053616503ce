//! # herofight - Deterministic Hero-versus-Monster Combat
//!
//! Resolves turn-based fights between a hero and a monster and records
//! them as an auditable, human-readable log:
//! - **Deterministic** resolution (same combatants → same log)
//! - **Level-derived** stats (health, armor and damage are read from the
//!   current level, never cached)
//! - **Experience overflow** leveling with modulo wraparound
//! - **Bounded healing** that lets a hero survive a few lethal hits per fight
//!
//! ## Core Concepts
//!
//! ### Turn Loop
//!
//! ```text
//! [Hero attacks] → monster dead? → [Monster attacks] → hero dead? → heal or die
//! ```
//!
//! 1. **Combatants** expose health, armor and a weapon
//! 2. **Weapons** turn the wielder's level into raw damage
//! 3. **Armor** subtracts a flat amount from every hit taken
//! 4. **CombatProcessor** alternates attacks and writes the log
//!
//! ## Example
//!
//! ```rust
//! use herofight::*;
//! use herofight::constants::MAXIMUM_EXPERIENCE;
//!
//! let mut processor = CombatProcessor::new(Hero::new(HeroClass::Hunter));
//! for _ in 0..50 {
//!     processor.hero_mut().gain_experience(MAXIMUM_EXPERIENCE).unwrap();
//! }
//!
//! let mut medusa = Monster::new(MonsterKind::MedusaTheGorgon, 1).unwrap();
//! processor.fight(&mut medusa).unwrap();
//!
//! assert_eq!(
//!     processor.logger(),
//!     &[
//!         "The Hunter hits the MedusaTheGorgon dealing 510 damage to it.".to_string(),
//!         "The monster dies. (4 XP gained.)".to_string(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`combatant`] - Shared combatant capabilities and damage math
//! - [`weapon`] - Damage-producing weapons
//! - [`scaling`] - Level scaling curves
//! - [`hero`] - Hero progression
//! - [`monster`] - Monster stat profiles
//! - [`processor`] - The combat turn loop and log
//! - [`config`] - Runtime configuration
//! - [`constants`] - Balance constants
//! - [`error`] - Error types

pub mod combatant;
pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod monster;
pub mod processor;
pub mod scaling;
pub mod weapon;

// Re-export main types for convenience
pub use combatant::{Combatant, StatBlock, StatValue};
pub use config::CombatConfig;
pub use error::CombatError;
pub use hero::{Hero, HeroClass};
pub use monster::{Monster, MonsterKind, MonsterProfile};
pub use processor::{CombatProcessor, FightOutcome, FightReport, FightState};
pub use scaling::LevelScaling;
pub use weapon::{LevelWeapon, Weapon};
