use crate::errors::{CreatureError, CreatureResult};
use schema::{CreatureType, Move};
use serde::{Deserialize, Serialize};
use std::fmt;

// Level-derived stats: base = floor + level * scale
const HP_FLOOR: u32 = 20;
const HP_PER_LEVEL: u32 = 5;
const STAT_FLOOR: u32 = 5;
const STAT_PER_LEVEL: u32 = 2;

/// Persistent status affliction. Nothing in the battle engine applies these yet;
/// the slot exists so effects can be added without changing `Creature`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    Sleep(u8),
    Poison,
    Burn,
    Freeze,
    Paralysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl CreatureStats {
    /// Default stat line for a creature of the given level.
    pub fn for_level(level: u8) -> Self {
        let level = level as u32;
        let other = STAT_FLOOR + level * STAT_PER_LEVEL;
        CreatureStats {
            max_hp: HP_FLOOR + level * HP_PER_LEVEL,
            attack: other,
            defense: other,
            speed: other,
        }
    }
}

/// One combatant. HP is kept private so that `0 <= current_hp <= max_hp` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub name: String,
    pub creature_type: CreatureType,
    pub level: u8,
    max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    current_hp: u32,
    pub moves: Vec<Move>,
    pub status: Option<StatusCondition>,
}

impl Creature {
    /// Create a creature at full HP with level-derived stats.
    pub fn new(
        name: impl Into<String>,
        creature_type: CreatureType,
        level: u8,
        moves: Vec<Move>,
    ) -> CreatureResult<Self> {
        Self::builder(name, creature_type, level).with_moves(moves).build()
    }

    pub fn builder(
        name: impl Into<String>,
        creature_type: CreatureType,
        level: u8,
    ) -> CreatureBuilder {
        CreatureBuilder::new(name, creature_type, level)
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Current HP as a fraction of max HP, in `[0, 1]`.
    pub fn hp_fraction(&self) -> f64 {
        self.current_hp as f64 / self.max_hp as f64
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Subtract HP, stopping at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP, stopping at max HP. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp - self.current_hp);
        self.current_hp += restored;
        restored
    }

    /// Restore all HP and clear any status condition.
    pub fn full_heal(&mut self) {
        self.current_hp = self.max_hp;
        self.status = None;
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv.{}) - {}/{} HP",
            self.name, self.level, self.current_hp, self.max_hp
        )
    }
}

/// Builds a `Creature`, taking any stat that is not given from the level-derived default.
///
/// # Example
/// ```
/// use trapper_mastering::{Creature, CreatureType, Move};
///
/// let creature = Creature::builder("Flamepup", CreatureType::Fire, 10)
///     .with_attack(20)
///     .with_moves(vec![Move::new("Ember", CreatureType::Fire, 40)])
///     .build()
///     .unwrap();
/// assert_eq!(creature.attack, 20);
/// assert_eq!(creature.current_hp(), creature.max_hp());
/// ```
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
    name: String,
    creature_type: CreatureType,
    level: u8,
    max_hp: Option<u32>,
    attack: Option<u32>,
    defense: Option<u32>,
    speed: Option<u32>,
    moves: Vec<Move>,
    current_hp: Option<u32>,
}

impl CreatureBuilder {
    pub fn new(name: impl Into<String>, creature_type: CreatureType, level: u8) -> Self {
        Self {
            name: name.into(),
            creature_type,
            level,
            max_hp: None,
            attack: None,
            defense: None,
            speed: None,
            moves: Vec::new(),
            current_hp: None,
        }
    }

    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = Some(max_hp);
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = Some(defense);
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_stats(self, stats: CreatureStats) -> Self {
        self.with_max_hp(stats.max_hp)
            .with_attack(stats.attack)
            .with_defense(stats.defense)
            .with_speed(stats.speed)
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Start below full HP. Clamped to max HP on build.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> CreatureResult<Creature> {
        if self.level == 0 {
            return Err(CreatureError::ZeroLevel);
        }
        let defaults = CreatureStats::for_level(self.level);
        let max_hp = positive_stat("max_hp", self.max_hp, defaults.max_hp)?;
        let attack = positive_stat("attack", self.attack, defaults.attack)?;
        let defense = positive_stat("defense", self.defense, defaults.defense)?;
        let speed = positive_stat("speed", self.speed, defaults.speed)?;

        Ok(Creature {
            name: self.name,
            creature_type: self.creature_type,
            level: self.level,
            max_hp,
            attack,
            defense,
            speed,
            current_hp: self.current_hp.unwrap_or(max_hp).min(max_hp),
            moves: self.moves,
            status: None,
        })
    }
}

fn positive_stat(stat: &'static str, given: Option<u32>, default: u32) -> CreatureResult<u32> {
    match given {
        Some(0) => Err(CreatureError::ZeroStat { stat }),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}
