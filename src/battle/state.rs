use crate::battle::calculators::DamageRoll;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a battle stands. Every variant except `Ongoing` is terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Ongoing,
    PlayerWin,
    PlayerLose,
    Caught,
    RanAway,
}

impl BattleOutcome {
    pub fn is_terminal(self) -> bool {
        self != BattleOutcome::Ongoing
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    EncounterStarted {
        wild: String,
        level: u8,
    },
    AttackResolved {
        attacker: String,
        defender: String,
        move_name: String,
        roll: DamageRoll,
        remaining_hp: u32,
    },
    NoMovesAvailable {
        creature: String,
    },
    ItemUsed {
        item: String,
        target: String,
        restored: u32,
    },
    CatchSucceeded {
        creature: String,
        item: String,
        sent_to_storage: bool,
    },
    CatchFailed {
        creature: String,
        item: String,
    },
    EscapeSucceeded,
    EscapeFailed,
    WildDefeated {
        wild: String,
        reward: u32,
    },
    PlayerDefeated {
        creature: String,
    },
}

impl BattleEvent {
    /// Formats the event into the single human-readable log line shown to the player.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::EncounterStarted { wild, level } => {
                format!("A wild {} (Lv.{}) appeared!", wild, level)
            }
            BattleEvent::AttackResolved {
                attacker,
                defender,
                move_name,
                roll,
                remaining_hp,
            } => match roll {
                DamageRoll::Missed => format!("{} used {}! But it missed!", attacker, move_name),
                DamageRoll::Hit {
                    damage,
                    effectiveness,
                } => format!(
                    "{} used {}! {}{} took {} damage ({} HP left).",
                    attacker,
                    move_name,
                    Self::format_effectiveness(*effectiveness),
                    defender,
                    damage,
                    remaining_hp
                ),
            },
            BattleEvent::NoMovesAvailable { creature } => {
                format!("{} has no moves and hesitates.", creature)
            }
            BattleEvent::ItemUsed {
                item,
                target,
                restored,
            } => format!("Used a {}! {} recovered {} HP.", item, target, restored),
            BattleEvent::CatchSucceeded {
                creature,
                item,
                sent_to_storage,
            } => {
                let mut line = format!("Gotcha! {} was caught with a {}!", creature, item);
                if *sent_to_storage {
                    line.push_str(" It was sent to storage.");
                }
                line
            }
            BattleEvent::CatchFailed { creature, item } => {
                format!("The {} failed! {} broke free.", item, creature)
            }
            BattleEvent::EscapeSucceeded => "Got away safely!".to_string(),
            BattleEvent::EscapeFailed => "Couldn't get away!".to_string(),
            BattleEvent::WildDefeated { wild, reward } => {
                if *reward > 0 {
                    format!("Wild {} fainted! You won and earned ${}.", wild, reward)
                } else {
                    format!("Wild {} fainted! You won.", wild)
                }
            }
            BattleEvent::PlayerDefeated { creature } => {
                format!("{} fainted! You lost the battle.", creature)
            }
        }
    }

    fn format_effectiveness(multiplier: f64) -> &'static str {
        match multiplier {
            m if m == 0.0 => "It had no effect! ",
            m if m > 1.0 => "It's super effective! ",
            m if m < 1.0 => "It's not very effective... ",
            _ => "",
        }
    }
}

/// Event bus for collecting battle events in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

const MIN_VARIANCE: f64 = 0.85;
const MAX_VARIANCE: f64 = 1.0;

#[derive(Debug, Clone)]
enum RngSource {
    Scripted { outcomes: Vec<u8>, index: usize },
    Seeded(StdRng),
}

/// The battle's only source of randomness.
///
/// A scripted generator replays fixed outcomes in `1..=100`, which every draw maps
/// onto its own range: `1` is the lowest value a draw can produce and `100` the highest.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// A reproducible generator: equal seeds give equal battles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    fn next_scripted(outcomes: &[u8], index: &mut usize, reason: &str) -> u8 {
        let Some(&outcome) = outcomes.get(*index) else {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        *index += 1;
        outcome.clamp(1, 100)
    }

    /// Uniform integer in `1..=100`.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        let outcome = match &mut self.source {
            RngSource::Scripted { outcomes, index } => Self::next_scripted(outcomes, index, reason),
            RngSource::Seeded(rng) => rng.random_range(1..=100),
        };
        debug!(reason, outcome, "rng outcome");
        outcome
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_unit(&mut self, reason: &str) -> f64 {
        let value = match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                (Self::next_scripted(outcomes, index, reason) - 1) as f64 / 100.0
            }
            RngSource::Seeded(rng) => rng.random::<f64>(),
        };
        debug!(reason, value, "rng unit");
        value
    }

    /// Uniform damage variance factor in `[0.85, 1.0]`.
    pub fn next_variance(&mut self, reason: &str) -> f64 {
        let value = match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                let step = (Self::next_scripted(outcomes, index, reason) - 1) as f64 / 99.0;
                MIN_VARIANCE + (MAX_VARIANCE - MIN_VARIANCE) * step
            }
            RngSource::Seeded(rng) => rng.random_range(MIN_VARIANCE..=MAX_VARIANCE),
        };
        debug!(reason, value, "rng variance");
        value
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize, reason: &str) -> usize {
        assert!(len > 0, "next_index called with an empty range for: '{}'", reason);
        let value = match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                (Self::next_scripted(outcomes, index, reason) - 1) as usize % len
            }
            RngSource::Seeded(rng) => rng.random_range(0..len),
        };
        debug!(reason, value, "rng index");
        value
    }

    /// Uniform integer in `low..=high`.
    pub fn next_in_range(&mut self, low: u8, high: u8, reason: &str) -> u8 {
        let (low, high) = (low.min(high), low.max(high));
        let span = (high - low) as usize + 1;
        let value = match &mut self.source {
            RngSource::Scripted { outcomes, index } => {
                low + ((Self::next_scripted(outcomes, index, reason) - 1) as usize % span) as u8
            }
            RngSource::Seeded(rng) => rng.random_range(low..=high),
        };
        debug!(reason, value, "rng range");
        value
    }
}

/// HP readout for one side of the battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatureView {
    pub name: String,
    pub level: u8,
    pub current_hp: u32,
    pub max_hp: u32,
}

/// Read-only copy of everything a presentation layer needs to draw a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleSnapshot {
    pub outcome: BattleOutcome,
    pub player: CreatureView,
    pub wild: CreatureView,
    pub log: Vec<String>,
}
