use phf::phf_map;
use serde::{Deserialize, Serialize};

/// What an inventory item does when used in battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A capture item. The multiplier scales the capture probability.
    Trap { catch_multiplier: f64 },
    /// Restores up to `amount` HP to the active creature.
    Heal { amount: u32 },
}

pub const BASIC_TRAP: &str = "Basic Trap";
pub const GREAT_TRAP: &str = "Great Trap";
pub const ULTRA_TRAP: &str = "Ultra Trap";
pub const POTION: &str = "Potion";
pub const SUPER_POTION: &str = "Super Potion";
pub const HYPER_POTION: &str = "Hyper Potion";

static ITEM_TABLE: phf::Map<&'static str, ItemKind> = phf_map! {
    "Basic Trap" => ItemKind::Trap { catch_multiplier: 1.0 },
    "Great Trap" => ItemKind::Trap { catch_multiplier: 1.5 },
    "Ultra Trap" => ItemKind::Trap { catch_multiplier: 2.0 },
    "Potion" => ItemKind::Heal { amount: 20 },
    "Super Potion" => ItemKind::Heal { amount: 50 },
    "Hyper Potion" => ItemKind::Heal { amount: 200 },
};

/// Look up the definition of an item by its display name.
pub fn item_kind(name: &str) -> Option<ItemKind> {
    ITEM_TABLE.get(name).copied()
}

pub fn trap_multiplier(name: &str) -> Option<f64> {
    match item_kind(name)? {
        ItemKind::Trap { catch_multiplier } => Some(catch_multiplier),
        ItemKind::Heal { .. } => None,
    }
}

pub fn heal_amount(name: &str) -> Option<u32> {
    match item_kind(name)? {
        ItemKind::Heal { amount } => Some(amount),
        ItemKind::Trap { .. } => None,
    }
}
