use crate::errors::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tuning constants for catch, escape and reward rules.
///
/// Any field left out of a RON document keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRules {
    pub catch_base_rate: f64,
    pub catch_level_scale: f64,
    pub escape_base_chance: f64,
    pub escape_speed_weight: f64,
    pub reward_per_level: u32,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            catch_base_rate: 0.5,
            catch_level_scale: 10.0,
            escape_base_chance: 0.25,
            escape_speed_weight: 0.5,
            reward_per_level: 10,
        }
    }
}

impl BattleRules {
    pub fn from_ron(source: &str) -> DataResult<Self> {
        ron::from_str(source).map_err(|e| DataError::Parse {
            source_name: "battle rules".to_string(),
            details: e.to_string(),
        })
    }

    /// Load rules from a RON file on disk.
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DataError::Parse {
            source_name: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&content)
    }
}
