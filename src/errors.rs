use crate::battle::state::BattleOutcome;
use thiserror::Error;

/// Main error type for the Trapper-Mastering battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error related to invalid player actions
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
    /// Error related to creature construction
    #[error("Creature error: {0}")]
    Creature(#[from] CreatureError),
    /// Error related to creature or rules data
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// The player has no creature that can fight
    #[error("No usable creature in the party")]
    NoUsableCreature,
    /// A mutating action was attempted after the battle reached a terminal state
    #[error("Battle already ended with result {outcome:?}")]
    BattleAlreadyEnded { outcome: BattleOutcome },
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Move index is out of bounds for the active creature
    #[error("Invalid move index {index} (creature knows {move_count} moves)")]
    InvalidMoveIndex { index: usize, move_count: usize },
}

/// Errors raised by the concrete inventory. The battle engine reports these
/// to its caller as a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Item unavailable: {0}")]
    ItemUnavailable(String),
}

/// Errors related to creature construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreatureError {
    #[error("Creature level must be at least 1")]
    ZeroLevel,
    #[error("Creature stat {stat} must be positive")]
    ZeroStat { stat: &'static str },
}

/// Errors related to loading creature templates and battle rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Failed to parse {source_name}: {details}")]
    Parse {
        source_name: String,
        details: String,
    },
    #[error("Unknown creature: {0}")]
    UnknownCreature(String),
    #[error("Creature catalog has no wild creatures")]
    EmptyCatalog,
    #[error(transparent)]
    Creature(#[from] CreatureError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CreatureError
pub type CreatureResult<T> = Result<T, CreatureError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;
