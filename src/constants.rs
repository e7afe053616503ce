//! Balance constants shared by heroes, monsters and the combat processor.
//!
//! Hero stats scale linearly from the initial values below. Monster
//! profiles in [`crate::monster`] use the same per-level shape so the two
//! sides of a fight stay comparable.

use crate::combatant::StatValue;

/// Level every hero starts at.
pub const INITIAL_LEVEL: u32 = 1;

/// Experience every hero starts with.
pub const INITIAL_EXPERIENCE: StatValue = 0.0;

/// Experience needed for one level. Experience always stays below this.
pub const MAXIMUM_EXPERIENCE: StatValue = 100.0;

/// Maximum health at level 1. Scales linearly with level.
pub const INITIAL_MAX_HEALTH: StatValue = 100.0;

/// Armor at level 1. Scales linearly with level.
pub const INITIAL_ARMOR: StatValue = 5.0;

/// Health restored by one heal, per hero level.
pub const HEAL_PER_LEVEL: StatValue = 10.0;

/// Heals a hero may use in a single fight before a lethal hit is final.
pub const MAX_HEALS_PER_FIGHT: u32 = 3;
