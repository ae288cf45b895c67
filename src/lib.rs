// In: src/lib.rs

//! Trapper-Mastering Battle Engine
//!
//! The turn-based encounter logic of a small creature collection game: damage
//! resolution, capture attempts, healing items and escape attempts between the
//! player's active creature and a wild creature.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod encounters;
pub mod errors;
pub mod inventory;
pub mod player;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    heal_amount, item_kind, trap_multiplier, CreatureType, ItemKind, Move, BASIC_TRAP, GREAT_TRAP,
    HYPER_POTION, POTION, SUPER_POTION, ULTRA_TRAP,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine and state.
pub use battle::calculators::{calculate_attack_outcome, calculate_damage, DamageRoll};
pub use battle::catch::{calculate_catch_probability, get_catch_chance_description};
pub use battle::engine::Battle;
pub use battle::escape::calculate_escape_probability;
pub use battle::state::{
    BattleEvent, BattleOutcome, BattleSnapshot, CreatureView, EventBus, TurnRng,
};

// Runtime types around a battle.
pub use config::BattleRules;
pub use creature::{Creature, CreatureBuilder, CreatureStats, StatusCondition};
pub use encounters::{creature_catalog, spawn_wild_creature, CreatureCatalog, Habitat};
pub use inventory::Inventory;
pub use player::{Party, Trainer};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, BattleStateError, CreatureError, DataError,
    DataResult, InventoryError,
};
