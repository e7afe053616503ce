//! Combat processor module.
//!
//! Provides the `CombatProcessor` type, which is the main entry point
//! for resolving fights. It owns the hero, runs the turn loop against one
//! monster per call and keeps a human-readable combat log.

use crate::combatant::{Combatant, StatBlock, StatValue};
use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::hero::Hero;
use crate::monster::Monster;
use serde::{Deserialize, Serialize};

/// Who won a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    HeroWon,
    MonsterWon,
}

/// Lifecycle of the processor's most recent fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightState {
    /// No fight has been started yet.
    NotStarted,
    /// A fight is running, or was aborted by an error.
    InProgress,
    /// The last fight finished.
    Resolved(FightOutcome),
}

/// Summary of one resolved fight.
///
/// The stat blocks are taken after the fight ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightReport {
    /// Who won.
    pub outcome: FightOutcome,

    /// Fight-iterations played. One iteration is a hero attack followed by
    /// the monster's counter-attack, if it is still alive.
    pub fights: u32,

    /// Heals the hero used to survive lethal hits.
    pub heals_used: u32,

    /// Experience granted to the hero.
    pub experience_gained: StatValue,

    /// Hero stats after the fight.
    pub hero: StatBlock,

    /// Monster stats after the fight.
    pub monster: StatBlock,
}

/// Resolves fights between one hero and a sequence of monsters.
///
/// The turn loop is strictly sequential:
/// 1. The hero attacks; if the monster dies the hero gains its experience
///    reward and wins.
/// 2. The monster counter-attacks; if the hero dies it heals when it still
///    has heals left this fight, otherwise the monster wins.
///
/// Every event appends one line to the log. The log is never cleared, so
/// repeated fights on the same processor read as one continuous story.
///
/// # Examples
///
/// ```rust
/// use herofight::*;
///
/// let mut processor = CombatProcessor::new(Hero::new(HeroClass::Hunter));
/// let mut goblin = Monster::new(MonsterKind::Goblin, 1).unwrap();
///
/// let report = processor.fight(&mut goblin).unwrap();
/// assert_eq!(report.outcome, FightOutcome::HeroWon);
/// assert_eq!(report.fights, 5);
/// assert_eq!(
///     processor.logger().last().unwrap(),
///     "The monster dies. (2 XP gained.)"
/// );
/// ```
#[derive(Debug)]
pub struct CombatProcessor {
    hero: Hero,
    config: CombatConfig,
    logger: Vec<String>,
    state: FightState,
}

impl CombatProcessor {
    /// Create a processor for `hero` with the default configuration.
    pub fn new(hero: Hero) -> Self {
        Self::with_config(hero, CombatConfig::default())
    }

    /// Create a processor for `hero` with a custom configuration.
    pub fn with_config(hero: Hero, config: CombatConfig) -> Self {
        Self {
            hero,
            config,
            logger: Vec::new(),
            state: FightState::NotStarted,
        }
    }

    /// The hero.
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// Mutable access to the hero between fights.
    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    /// Give the hero back, dropping the processor and its log.
    pub fn into_hero(self) -> Hero {
        self.hero
    }

    /// The active configuration.
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Every log line written so far, oldest first.
    pub fn logger(&self) -> &[String] {
        &self.logger
    }

    /// State of the most recent fight.
    pub fn state(&self) -> FightState {
        self.state
    }

    /// Fight `monster` until one side dies.
    ///
    /// If either side is already dead the fight resolves immediately
    /// without writing to the log.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidArgument`] if a weapon yields negative or
    /// non-finite damage, or the monster's experience reward is invalid.
    /// The fight is abandoned at that point: lines already written stay in
    /// the log and the state remains [`FightState::InProgress`].
    ///
    /// [`CombatError::InvalidArgument`] before any attack if neither side
    /// can get through the other's armor.
    pub fn fight(&mut self, monster: &mut Monster) -> Result<FightReport, CombatError> {
        self.state = FightState::InProgress;

        let mut fights = 0;
        let mut heals_used = 0;
        let mut experience_gained = 0.0;

        if !self.hero.is_dead() && !monster.is_dead() {
            self.ensure_progress(monster)?;
        }

        let outcome = loop {
            if self.hero.is_dead() {
                break FightOutcome::MonsterWon;
            }
            if monster.is_dead() {
                break FightOutcome::HeroWon;
            }
            fights += 1;

            // Hero strikes first
            let dealt = monster.take_hit(self.hero.attack_damage())?;
            tracing::debug!(
                fight = fights,
                attacker = self.hero.name(),
                defender = monster.name(),
                damage = dealt,
                remaining = monster.health(),
                "hit"
            );
            let line = hit_line(self.hero.name(), monster.name(), dealt);
            self.logger.push(line);

            if monster.is_dead() {
                let reward = monster.experience_reward();
                self.logger.push(monster_death_line(reward));
                self.hero.gain_experience(reward)?;
                experience_gained = reward;
                break FightOutcome::HeroWon;
            }

            // Counter-attack
            let taken = self.hero.take_hit(monster.attack_damage())?;
            tracing::debug!(
                fight = fights,
                attacker = monster.name(),
                defender = self.hero.name(),
                damage = taken,
                remaining = self.hero.health(),
                "hit"
            );
            let line = hit_line(monster.name(), self.hero.name(), taken);
            self.logger.push(line);

            if self.hero.is_dead() {
                if heals_used < self.config.max_heals_per_fight {
                    heals_used += 1;
                    let restored = self.hero.heal();
                    tracing::debug!(fight = fights, restored, heals_used, "hero healed");
                    self.logger.push(heal_line(restored));
                    if !self.hero.is_dead() {
                        continue;
                    }
                }
                self.logger
                    .push(hero_death_line(self.hero.level(), fights));
                break FightOutcome::MonsterWon;
            }
        };

        self.state = FightState::Resolved(outcome);
        tracing::info!(
            hero = self.hero.name(),
            monster = monster.name(),
            ?outcome,
            fights,
            heals_used,
            "fight resolved"
        );

        Ok(FightReport {
            outcome,
            fights,
            heals_used,
            experience_gained,
            hero: self.hero.stat_block(),
            monster: monster.stat_block(),
        })
    }

    /// Reject a stalemate where neither side deals net damage.
    ///
    /// Levels and armor cannot change until one side dies, so a fight that
    /// starts without net damage on either side would never end.
    fn ensure_progress(&self, monster: &Monster) -> Result<(), CombatError> {
        let hero_net = (self.hero.attack_damage() - monster.armor()).max(0.0);
        let monster_net = (monster.attack_damage() - self.hero.armor()).max(0.0);
        if hero_net > 0.0 || monster_net > 0.0 {
            return Ok(());
        }
        tracing::warn!(
            hero = self.hero.name(),
            monster = monster.name(),
            "rejected fight with no net damage on either side"
        );
        Err(CombatError::InvalidArgument(format!(
            "neither the {} nor the {} can deal damage through armor",
            self.hero.name(),
            monster.name()
        )))
    }
}

fn hit_line(attacker: &str, defender: &str, damage: StatValue) -> String {
    format!(
        "The {} hits the {} dealing {} damage to it.",
        attacker, defender, damage
    )
}

fn monster_death_line(experience: StatValue) -> String {
    format!("The monster dies. ({} XP gained.)", experience)
}

fn heal_line(restored: StatValue) -> String {
    format!("The hero heals for {} health.", restored)
}

fn hero_death_line(level: u32, fights: u32) -> String {
    format!("The hero dies on level {} after {} fights.", level, fights)
}
