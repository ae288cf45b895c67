use crate::battle::state::TurnRng;
use crate::creature::Creature;
use schema::{CreatureType, Move};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Result of resolving one attack against one defender.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum DamageRoll {
    Missed,
    Hit { damage: u32, effectiveness: f64 },
}

impl DamageRoll {
    pub fn damage(&self) -> u32 {
        match self {
            DamageRoll::Missed => 0,
            DamageRoll::Hit { damage, .. } => *damage,
        }
    }
}

/// Resolve an attack: accuracy check, then damage.
///
/// Consumes one draw for accuracy and, on a hit, one for damage variance.
/// Neither creature is modified.
pub fn calculate_attack_outcome(
    attacker: &Creature,
    move_used: &Move,
    defender: &Creature,
    rng: &mut TurnRng,
) -> DamageRoll {
    let accuracy_roll = rng.next_outcome("accuracy check");
    if accuracy_roll > move_used.accuracy {
        debug!(move_name = %move_used.name, accuracy_roll, "move missed");
        return DamageRoll::Missed;
    }

    let level_factor = (2.0 * attacker.level as f64 / 5.0) + 2.0;
    let attack_ratio = attacker.attack as f64 / defender.defense.max(1) as f64;
    let mut damage = level_factor * move_used.power as f64 * attack_ratio / 50.0 + 2.0;

    let effectiveness =
        CreatureType::type_effectiveness(move_used.move_type, defender.creature_type);

    if move_used.is_same_type(attacker.creature_type) {
        damage *= STAB_MULTIPLIER;
    }
    damage *= effectiveness;
    damage *= rng.next_variance("damage variance");

    // Truncated, so a tiny hit can deal 0.
    let damage = damage as u32;
    debug!(move_name = %move_used.name, damage, effectiveness, "move hit");
    DamageRoll::Hit {
        damage,
        effectiveness,
    }
}

/// Damage `attacker` would deal to `defender` with `move_used`; 0 on a miss.
pub fn calculate_damage(
    attacker: &Creature,
    move_used: &Move,
    defender: &Creature,
    rng: &mut TurnRng,
) -> u32 {
    calculate_attack_outcome(attacker, move_used, defender, rng).damage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn attacker() -> Creature {
        Creature::builder("Attacker", CreatureType::Fire, 10)
            .with_attack(20)
            .build()
            .unwrap()
    }

    fn defender(creature_type: CreatureType) -> Creature {
        Creature::builder("Defender", creature_type, 5)
            .with_defense(10)
            .build()
            .unwrap()
    }

    fn ember() -> Move {
        Move::new("Ember", CreatureType::Fire, 40)
    }

    #[test]
    fn test_missed_attack_deals_no_damage() {
        let mv = ember().with_accuracy(70);
        let mut rng = TurnRng::new_for_test(vec![71]);

        let roll = calculate_attack_outcome(&attacker(), &mv, &defender(CreatureType::Grass), &mut rng);
        assert_eq!(roll, DamageRoll::Missed);
    }

    #[test]
    fn test_miss_is_reproducible_with_seed() {
        let mv = ember().with_accuracy(1);
        let target = defender(CreatureType::Normal);
        let mut first = TurnRng::seeded(99);
        let mut second = TurnRng::seeded(99);
        for _ in 0..50 {
            let a = calculate_damage(&attacker(), &mv, &target, &mut first);
            let b = calculate_damage(&attacker(), &mv, &target, &mut second);
            assert_eq!(a, b);
        }
    }

    #[rstest]
    // level factor 6, raw 6 * 40 * 2 / 50 + 2 = 11.6, STAB 17.4
    #[case(CreatureType::Grass, 4.0, 69)]
    #[case(CreatureType::Normal, 1.0, 17)]
    #[case(CreatureType::Water, 0.5, 8)]
    fn test_damage_formula_at_max_variance(
        #[case] defender_type: CreatureType,
        #[case] effectiveness: f64,
        #[case] expected: u32,
    ) {
        let mut rng = TurnRng::new_for_test(vec![100, 100]);
        let roll = calculate_attack_outcome(&attacker(), &ember(), &defender(defender_type), &mut rng);
        assert_eq!(
            roll,
            DamageRoll::Hit {
                damage: expected,
                effectiveness
            }
        );
    }

    #[test]
    fn test_minimum_variance_and_no_stab() {
        let tackle = Move::new("Tackle", CreatureType::Normal, 40);
        let mut rng = TurnRng::new_for_test(vec![1, 1]);
        // 11.6 * 0.85 = 9.86
        let damage = calculate_damage(&attacker(), &tackle, &defender(CreatureType::Normal), &mut rng);
        assert_eq!(damage, 9);
    }

    #[test]
    fn test_immune_defender_takes_zero_on_hit() {
        let spark = Creature::new("Spark", CreatureType::Electric, 10, vec![]).unwrap();
        let shock = Move::new("Thunder Shock", CreatureType::Electric, 40);
        let mut rng = TurnRng::new_for_test(vec![50, 50]);

        let roll = calculate_attack_outcome(&spark, &shock, &defender(CreatureType::Ground), &mut rng);
        assert_eq!(
            roll,
            DamageRoll::Hit {
                damage: 0,
                effectiveness: 0.0
            }
        );
    }

    #[test]
    fn test_fire_beats_grass_more_than_water_on_average() {
        let grass = defender(CreatureType::Grass);
        let water = defender(CreatureType::Water);
        let mut rng = TurnRng::seeded(2024);
        let trials = 200;

        let grass_total: u32 = (0..trials)
            .map(|_| calculate_damage(&attacker(), &ember(), &grass, &mut rng))
            .sum();
        let water_total: u32 = (0..trials)
            .map(|_| calculate_damage(&attacker(), &ember(), &water, &mut rng))
            .sum();

        assert!(grass_total > water_total);
    }

    #[test]
    fn test_calculation_does_not_mutate_creatures() {
        let source = attacker();
        let target = defender(CreatureType::Grass);
        let mut rng = TurnRng::new_for_test(vec![100, 100]);

        calculate_damage(&source, &ember(), &target, &mut rng);
        assert_eq!(source.current_hp(), source.max_hp());
        assert_eq!(target.current_hp(), target.max_hp());
    }
}
