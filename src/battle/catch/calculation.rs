use crate::battle::state::TurnRng;
use crate::config::BattleRules;
use crate::creature::Creature;

/// Probability in `(0, 1]` that a trap captures `target`.
///
/// Formula: base_rate * trap_multiplier * hp_multiplier * level_multiplier, capped at 1
/// - hp_multiplier: (max_hp * 3 - current_hp * 2) / (max_hp * 3), falls as HP rises
/// - level_multiplier: level_scale / (level_scale + level), falls as level rises
pub fn calculate_catch_probability(
    target: &Creature,
    trap_multiplier: f64,
    rules: &BattleRules,
) -> f64 {
    let max_hp = target.max_hp() as f64;
    let current_hp = target.current_hp() as f64;
    let hp_multiplier = (max_hp * 3.0 - current_hp * 2.0) / (max_hp * 3.0);

    let level_scale = rules.catch_level_scale.max(f64::MIN_POSITIVE);
    let level_multiplier = level_scale / (level_scale + target.level as f64);

    let probability = rules.catch_base_rate * trap_multiplier * hp_multiplier * level_multiplier;
    probability.clamp(f64::MIN_POSITIVE, 1.0)
}

/// Roll for catch success. Returns true if the catch succeeds.
pub fn roll_catch_success(catch_probability: f64, rng: &mut TurnRng) -> bool {
    rng.next_unit("catch roll") < catch_probability
}

/// Get a descriptive catch chance category for display purposes
pub fn get_catch_chance_description(catch_probability: f64) -> &'static str {
    match catch_probability {
        p if p >= 0.8 => "Excellent",
        p if p >= 0.6 => "Very Good",
        p if p >= 0.4 => "Good",
        p if p >= 0.2 => "Fair",
        p if p >= 0.1 => "Poor",
        _ => "Very Poor",
    }
}
