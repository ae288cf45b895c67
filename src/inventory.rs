use crate::errors::InventoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item counts keyed by item name. Items whose count drops to zero are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.items.entry(name.to_string()).or_insert(0) += count;
    }

    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Remove one unit of `name`.
    pub fn take(&mut self, name: &str) -> Result<(), InventoryError> {
        match self.items.get_mut(name) {
            Some(count) if *count > 1 => {
                *count -= 1;
                Ok(())
            }
            Some(_) => {
                self.items.remove(name);
                Ok(())
            }
            None => Err(InventoryError::ItemUnavailable(name.to_string())),
        }
    }

    /// Items in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_take() {
        let mut inventory = Inventory::new();
        inventory.add("Potion", 2);
        inventory.add("Potion", 1);
        assert_eq!(inventory.count("Potion"), 3);

        assert_eq!(inventory.take("Potion"), Ok(()));
        assert_eq!(inventory.count("Potion"), 2);
    }

    #[test]
    fn test_last_unit_removes_entry() {
        let mut inventory = Inventory::new();
        inventory.add("Basic Trap", 1);
        assert_eq!(inventory.take("Basic Trap"), Ok(()));
        assert_eq!(inventory.count("Basic Trap"), 0);
        assert_eq!(inventory.iter().count(), 0);
        assert_eq!(
            inventory.take("Basic Trap"),
            Err(InventoryError::ItemUnavailable("Basic Trap".to_string()))
        );
    }

    #[test]
    fn test_adding_zero_is_ignored() {
        let mut inventory = Inventory::new();
        inventory.add("Great Trap", 0);
        assert_eq!(inventory.iter().count(), 0);
    }
}
