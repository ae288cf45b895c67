use crate::creature_types::CreatureType;
use serde::{Deserialize, Serialize};

fn default_accuracy() -> u8 {
    100
}

/// An attack a creature can use in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub move_type: CreatureType,
    pub power: u32,
    /// Hit chance as a percentage (1-100).
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
}

impl Move {
    /// Create a move that never misses.
    pub fn new(name: impl Into<String>, move_type: CreatureType, power: u32) -> Self {
        Move {
            name: name.into(),
            move_type,
            power,
            accuracy: default_accuracy(),
        }
    }

    /// Set the hit chance, clamped into 1..=100.
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.clamp(1, 100);
        self
    }

    pub fn is_same_type(&self, creature_type: CreatureType) -> bool {
        self.move_type == creature_type
    }
}
