use crate::battle::state::TurnRng;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::player::{Party, Trainer};
use schema::{CreatureType, Move};

pub fn ember() -> Move {
    Move::new("Ember", CreatureType::Fire, 40)
}

pub fn scratch() -> Move {
    Move::new("Scratch", CreatureType::Normal, 40)
}

pub fn tackle() -> Move {
    Move::new("Tackle", CreatureType::Normal, 40)
}

/// Level 10 Fire creature with level-derived stats (70 HP, 25 atk/def/spd)
/// knowing Ember (index 0) and Scratch (index 1).
///
/// Against `wild_creature()`, Scratch deals 8-10 and Ember always knocks out.
pub fn player_creature() -> Creature {
    Creature::builder("PlayerMon", CreatureType::Fire, 10)
        .with_moves(vec![ember(), scratch()])
        .build()
        .unwrap()
}

/// Level 5 Grass creature with level-derived stats (45 HP, 15 atk/def/spd)
/// knowing only Tackle, which always deals 3 to `player_creature()`.
pub fn wild_creature() -> Creature {
    Creature::builder("WildMon", CreatureType::Grass, 5)
        .with_moves(vec![tackle()])
        .build()
        .unwrap()
}

/// A fresh trainer holding the given creatures, in order.
pub fn trainer_with(creatures: Vec<Creature>) -> Trainer {
    let mut trainer = Trainer::new("Ash");
    for creature in creatures {
        trainer.add_creature(creature);
    }
    trainer
}

/// Creates a `TurnRng` instance with a long list of default values (50).
/// Useful for tests where the specific RNG outcome is not important, preventing panics from exhaustion.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Helper function to assert that a boolean Result is Ok and true.
pub fn assert_ok_true(result: BattleResult<bool>) -> bool {
    let value = assert_ok(result);
    assert!(value, "Expected true but got false");
    value
}

/// Helper function to assert that a boolean Result is Ok and false.
pub fn assert_ok_false(result: BattleResult<bool>) -> bool {
    let value = assert_ok(result);
    assert!(!value, "Expected false but got true");
    value
}
