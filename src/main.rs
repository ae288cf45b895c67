//! A scripted playthrough: pick a starter, win a fight, then weaken and trap a
//! second wild creature. Set `TRAPPER_SEED` for a repeatable run and
//! `TRAPPER_RULES` to load tuning from a RON file.

use std::env;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trapper_mastering::{
    calculate_catch_probability, creature_catalog, get_catch_chance_description,
    spawn_wild_creature, trap_multiplier, Battle, BattleEngineError, BattleOutcome, BattleRules,
    Habitat, Party, Trainer, TurnRng, BASIC_TRAP, POTION,
};

const STARTER: &str = "Flamepup";
const MAX_TURNS: usize = 50;

fn main() -> Result<(), BattleEngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rules = match env::var("TRAPPER_RULES") {
        Ok(path) => BattleRules::load(Path::new(&path))?,
        Err(_) => BattleRules::default(),
    };
    let mut rng = seeded_rng();

    let catalog = creature_catalog()?;
    let starters: Vec<&str> = catalog.starter_names().collect();
    println!("Starters on offer: {}", starters.join(", "));

    let mut trainer = Trainer::new("Player");
    trainer.add_creature(catalog.starter(STARTER)?);
    println!("You chose {}!\n", STARTER);

    println!("--- Encounter 1: fight ---");
    let wild = spawn_wild_creature(Habitat::Grass, &mut rng)?;
    let mut battle = Battle::with_rules(&mut trainer, wild, rules.clone(), rng)?;
    let mut turns = 0;
    while battle.outcome() == BattleOutcome::Ongoing && turns < MAX_TURNS {
        let low_hp = battle.player_creature()?.hp_fraction() < 0.4;
        if !(low_hp && battle.use_heal_item(POTION)?) {
            battle.player_attack(strongest_move(&battle)?)?;
        }
        turns += 1;
    }
    print_log(battle.log());
    rng = battle.into_rng();

    trainer.heal_party();
    println!("\nYour party was healed. Money: ${}\n", trainer.money);

    println!("--- Encounter 2: capture ---");
    let wild = spawn_wild_creature(Habitat::Rock, &mut rng)?;
    let mut battle = Battle::with_rules(&mut trainer, wild, rules, rng)?;
    let multiplier = trap_multiplier(BASIC_TRAP).unwrap_or(1.0);
    let mut turns = 0;
    while battle.outcome() == BattleOutcome::Ongoing && turns < MAX_TURNS {
        let chance = calculate_catch_probability(battle.wild_creature(), multiplier, battle.rules());
        let weakened = battle.wild_creature().hp_fraction() <= 0.5;
        let has_traps = battle.player().get_item_count(BASIC_TRAP) > 0;

        if (weakened || chance >= 0.4) && has_traps {
            info!(chance = get_catch_chance_description(chance), "throwing a trap");
            battle.attempt_catch(BASIC_TRAP)?;
        } else if has_traps {
            // Scratch only, so the target is not knocked out.
            battle.player_attack(0)?;
        } else if !battle.attempt_run()? {
            warn!("out of traps and could not get away");
        }
        turns += 1;
    }
    print_log(battle.log());

    let snapshot = battle.get_battle_state()?;
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("\nFinal battle state:\n{}", json),
        Err(e) => warn!(error = %e, "could not serialize the battle state"),
    }
    drop(battle);

    println!("\nParty:");
    for creature in trainer.party() {
        println!("  {}", creature);
    }
    if !trainer.storage().is_empty() {
        println!("Storage: {} creature(s)", trainer.storage().len());
    }
    println!("Bag:");
    for (item, count) in trainer.inventory.iter() {
        println!("  {} x{}", item, count);
    }
    println!("Money: ${}", trainer.money);

    Ok(())
}

fn seeded_rng() -> TurnRng {
    match env::var("TRAPPER_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => {
                info!(seed, "using fixed seed");
                TurnRng::seeded(seed)
            }
            Err(_) => {
                warn!(value = %raw, "TRAPPER_SEED is not a number, using a random seed");
                TurnRng::new_random()
            }
        },
        Err(_) => TurnRng::new_random(),
    }
}

/// Index of the active creature's highest-power move.
fn strongest_move<P: Party + ?Sized>(battle: &Battle<'_, P>) -> Result<usize, BattleEngineError> {
    let moves = &battle.player_creature()?.moves;
    Ok(moves
        .iter()
        .enumerate()
        .max_by_key(|(_, m)| m.power)
        .map(|(index, _)| index)
        .unwrap_or(0))
}

fn print_log(log: &[String]) {
    for line in log {
        println!("{}", line);
    }
}
