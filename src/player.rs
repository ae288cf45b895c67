use crate::creature::Creature;
use crate::errors::BattleStateError;
use crate::inventory::Inventory;
use schema::{BASIC_TRAP, POTION};
use serde::Serialize;

/// Creatures a trainer may carry; further captures go to storage.
pub const PARTY_LIMIT: usize = 6;
pub const STARTING_MONEY: u32 = 500;
pub const STARTING_TRAPS: u32 = 5;
pub const STARTING_POTIONS: u32 = 3;

/// What a battle needs from the player's side: the party, the item bag, and a purse.
pub trait Party {
    /// The active party, in order.
    fn creatures(&self) -> &[Creature];

    fn creature_mut(&mut self, index: usize) -> Option<&mut Creature>;

    /// Add a creature. Returns true if it joined the party, false if it went to storage.
    fn add_creature(&mut self, creature: Creature) -> bool;

    fn get_item_count(&self, name: &str) -> u32;

    /// Consume one unit of `name`. Returns false if none are held.
    fn use_item(&mut self, name: &str) -> bool;

    fn award_money(&mut self, amount: u32);

    /// Index of the first creature that can still fight.
    fn active_index(&self) -> Option<usize> {
        self.creatures()
            .iter()
            .position(|creature| !creature.is_fainted())
    }

    fn active_creature(&self) -> Result<&Creature, BattleStateError> {
        self.active_index()
            .and_then(|index| self.creatures().get(index))
            .ok_or(BattleStateError::NoUsableCreature)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Trainer {
    pub name: String,
    pub money: u32,
    pub inventory: Inventory,
    party: Vec<Creature>,
    storage: Vec<Creature>,
}

impl Trainer {
    /// A new trainer with the starting purse and item bag, and no creatures.
    pub fn new(name: impl Into<String>) -> Self {
        let mut inventory = Inventory::new();
        inventory.add(BASIC_TRAP, STARTING_TRAPS);
        inventory.add(POTION, STARTING_POTIONS);

        Trainer {
            name: name.into(),
            money: STARTING_MONEY,
            inventory,
            party: Vec::new(),
            storage: Vec::new(),
        }
    }

    pub fn party(&self) -> &[Creature] {
        &self.party
    }

    /// Overflow creatures caught while the party was full.
    pub fn storage(&self) -> &[Creature] {
        &self.storage
    }

    /// Fully heal every creature in the party.
    pub fn heal_party(&mut self) {
        for creature in &mut self.party {
            creature.full_heal();
        }
    }
}

impl Party for Trainer {
    fn creatures(&self) -> &[Creature] {
        &self.party
    }

    fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.party.get_mut(index)
    }

    fn add_creature(&mut self, creature: Creature) -> bool {
        if self.party.len() < PARTY_LIMIT {
            self.party.push(creature);
            true
        } else {
            self.storage.push(creature);
            false
        }
    }

    fn get_item_count(&self, name: &str) -> u32 {
        self.inventory.count(name)
    }

    fn use_item(&mut self, name: &str) -> bool {
        self.inventory.take(name).is_ok()
    }

    fn award_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }
}
