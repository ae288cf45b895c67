use crate::battle::engine::Battle;
use crate::battle::state::{BattleEvent, BattleOutcome, TurnRng};
use crate::battle::tests::common::{
    assert_ok, player_creature, predictable_rng, scratch, tackle, trainer_with, wild_creature,
};
use crate::creature::Creature;
use crate::errors::{ActionError, BattleEngineError};
use crate::player::Party;
use crate::player::STARTING_MONEY;
use pretty_assertions::assert_eq;
use rstest::rstest;
use schema::{CreatureType, Move};

#[test]
fn test_player_attack_then_wild_retaliates() {
    let mut trainer = trainer_with(vec![player_creature()]);
    let mut battle = assert_ok(Battle::new(&mut trainer, wild_creature(), predictable_rng()));

    let outcome = assert_ok(battle.player_attack(1));

    assert_eq!(outcome, BattleOutcome::Ongoing);
    assert_eq!(battle.wild_creature().current_hp(), 36);
    assert_eq!(assert_ok(battle.player_creature()).current_hp(), 67);
    assert_eq!(
        battle.log(),
        &[
            "A wild WildMon (Lv.5) appeared!".to_string(),
            "PlayerMon used Scratch! Wild WildMon took 9 damage (36 HP left).".to_string(),
            "Wild WildMon used Tackle! PlayerMon took 3 damage (67 HP left).".to_string(),
        ]
    );
    assert_eq!(battle.events().len(), battle.log().len());
}

#[test]
fn test_knockout_ends_battle_before_retaliation() {
    let mut trainer = trainer_with(vec![player_creature()]);
    {
        // Only two draws: a retaliation would exhaust the script and panic.
        let rng = TurnRng::new_for_test(vec![50, 50]);
        let mut battle = assert_ok(Battle::new(&mut trainer, wild_creature(), rng));

        let outcome = assert_ok(battle.player_attack(0));

        assert_eq!(outcome, BattleOutcome::PlayerWin);
        assert!(battle.wild_creature().is_fainted());
        assert_eq!(assert_ok(battle.player_creature()).current_hp(), 70);
        assert_eq!(
            battle.log().last().map(String::as_str),
            Some("Wild WildMon fainted! You won and earned $50.")
        );
        assert!(battle.log()[1].contains("It's super effective!"));
    }
    assert_eq!(trainer.money, STARTING_MONEY + 50);
}

#[test]
fn test_retaliation_can_faint_player_creature() {
    let weakened = Creature::builder("PlayerMon", CreatureType::Fire, 10)
        .with_moves(vec![scratch()])
        .with_hp(3)
        .build()
        .unwrap();
    let mut trainer = trainer_with(vec![weakened]);
    let mut battle = assert_ok(Battle::new(&mut trainer, wild_creature(), predictable_rng()));

    let outcome = assert_ok(battle.player_attack(0));

    assert_eq!(outcome, BattleOutcome::PlayerLose);
    assert!(assert_ok(battle.player_creature()).is_fainted());
    assert_eq!(
        battle.log().last().map(String::as_str),
        Some("PlayerMon fainted! You lost the battle.")
    );
}

#[test]
fn test_missed_attack_leaves_wild_untouched() {
    let clumsy = Creature::builder("PlayerMon", CreatureType::Fire, 10)
        .with_moves(vec![Move::new("Wild Swing", CreatureType::Normal, 80).with_accuracy(50)])
        .build()
        .unwrap();
    let mut trainer = trainer_with(vec![clumsy]);
    // Accuracy roll 60 misses a 50% move; the wild creature then hits with 50, 50.
    let rng = TurnRng::new_for_test(vec![60, 50, 50]);
    let mut battle = assert_ok(Battle::new(&mut trainer, wild_creature(), rng));

    assert_ok(battle.player_attack(0));

    assert_eq!(battle.wild_creature().current_hp(), 45);
    assert_eq!(battle.log()[1], "PlayerMon used Wild Swing! But it missed!");
    assert_eq!(assert_ok(battle.player_creature()).current_hp(), 67);
}

#[rstest]
#[case(5, 2)]
#[case(2, 2)]
#[case(usize::MAX, 2)]
fn test_invalid_move_index_is_rejected(#[case] index: usize, #[case] move_count: usize) {
    let mut trainer = trainer_with(vec![player_creature()]);
    let mut battle = assert_ok(Battle::new(
        &mut trainer,
        wild_creature(),
        TurnRng::new_for_test(vec![]),
    ));

    let result = battle.player_attack(index);

    assert!(matches!(
        result,
        Err(BattleEngineError::Action(ActionError::InvalidMoveIndex { index: i, move_count: n }))
            if i == index && n == move_count
    ));
    assert_eq!(battle.log().len(), 1);
    assert_eq!(battle.wild_creature().current_hp(), 45);
    assert_eq!(battle.outcome(), BattleOutcome::Ongoing);
}

#[rstest]
#[case(1, "Tackle")]
#[case(2, "Vine Whip")]
#[case(3, "Tackle")]
fn test_wild_picks_move_from_rng(#[case] choice: u8, #[case] expected_move: &str) {
    let wild = Creature::builder("WildMon", CreatureType::Grass, 5)
        .with_moves(vec![tackle(), Move::new("Vine Whip", CreatureType::Grass, 45)])
        .build()
        .unwrap();
    let mut trainer = trainer_with(vec![player_creature()]);
    let rng = TurnRng::new_for_test(vec![50, 50, choice, 50, 50]);
    let mut battle = assert_ok(Battle::new(&mut trainer, wild, rng));

    assert_ok(battle.player_attack(1));

    match battle.events().events().last() {
        Some(BattleEvent::AttackResolved {
            attacker,
            move_name,
            ..
        }) => {
            assert_eq!(attacker, "Wild WildMon");
            assert_eq!(move_name, expected_move);
        }
        other => panic!("Expected the wild creature's attack, got {:?}", other),
    }
}

#[test]
fn test_wild_without_moves_hesitates() {
    let wild = Creature::builder("Stump", CreatureType::Rock, 5)
        .build()
        .unwrap();
    let mut trainer = trainer_with(vec![player_creature()]);
    let rng = TurnRng::new_for_test(vec![50, 50]);
    let mut battle = assert_ok(Battle::new(&mut trainer, wild, rng));

    let outcome = assert_ok(battle.player_attack(1));

    assert_eq!(outcome, BattleOutcome::Ongoing);
    assert_eq!(
        battle.log().last().map(String::as_str),
        Some("Wild Stump has no moves and hesitates.")
    );
    assert_eq!(assert_ok(battle.player_creature()).current_hp(), 70);
}

#[test]
fn test_battle_uses_first_conscious_party_member() {
    let mut fainted = player_creature();
    fainted.name = "Sleepy".to_string();
    fainted.take_damage(u32::MAX);
    let mut trainer = trainer_with(vec![fainted, player_creature()]);

    let mut battle = assert_ok(Battle::new(&mut trainer, wild_creature(), predictable_rng()));
    assert_eq!(assert_ok(battle.player_creature()).name, "PlayerMon");

    assert_ok(battle.player_attack(1));
    drop(battle);

    assert_eq!(trainer.creatures()[0].current_hp(), 0);
    assert_eq!(trainer.creatures()[1].current_hp(), 67);
}
