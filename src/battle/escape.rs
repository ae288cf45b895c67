use crate::battle::state::TurnRng;
use crate::config::BattleRules;
use crate::creature::Creature;

/// Probability in `(0, 1]` that `runner` escapes from `wild`.
///
/// Formula: escape_base_chance + escape_speed_weight * runner_speed / wild_speed, capped at 1
pub fn calculate_escape_probability(runner: &Creature, wild: &Creature, rules: &BattleRules) -> f64 {
    let speed_ratio = runner.speed as f64 / wild.speed.max(1) as f64;
    let probability = rules.escape_base_chance + rules.escape_speed_weight * speed_ratio;
    probability.clamp(f64::MIN_POSITIVE, 1.0)
}

/// Roll for escape success. Returns true if the player gets away.
pub fn roll_escape_success(escape_probability: f64, rng: &mut TurnRng) -> bool {
    rng.next_unit("escape roll") < escape_probability
}
