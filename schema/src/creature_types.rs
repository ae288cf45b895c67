use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Elemental affiliation of a creature or a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CreatureType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
    Ground,
    Flying,
    Ancient,
}

impl CreatureType {
    /// Multiplier applied when a move of type `attacking` hits a creature of type `defending`.
    /// Returns: 4.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: CreatureType, defending: CreatureType) -> f64 {
        use CreatureType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) => 4.0,
            (Fire, Water) | (Fire, Fire) | (Fire, Rock) => 0.5,

            // Water
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 4.0,
            (Water, Grass) | (Water, Water) => 0.5,

            // Grass
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 4.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,

            // Electric
            (Electric, Water) | (Electric, Flying) => 4.0,
            (Electric, Electric) => 0.5,
            (Electric, Ground) => 0.0,

            // Everything not listed is neutral
            _ => 1.0,
        }
    }
}
