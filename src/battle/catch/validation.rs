use crate::creature::Creature;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatchError {
    /// The named item is not a capture item
    NotATrap { item: String },
    /// Target creature is already fainted
    TargetFainted { creature: String },
}

/// Validate a catch attempt and return the trap's catch multiplier if it may proceed
pub fn can_attempt_catch(target: &Creature, item_name: &str) -> Result<f64, CatchError> {
    let Some(multiplier) = schema::trap_multiplier(item_name) else {
        return Err(CatchError::NotATrap {
            item: item_name.to_string(),
        });
    };

    if target.is_fainted() {
        return Err(CatchError::TargetFainted {
            creature: target.name.clone(),
        });
    }

    Ok(multiplier)
}
