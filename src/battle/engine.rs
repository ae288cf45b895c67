use crate::battle::calculators::{calculate_attack_outcome, DamageRoll};
use crate::battle::catch::{
    calculate_catch_probability, can_attempt_catch, roll_catch_success, CatchError,
};
use crate::battle::escape::{calculate_escape_probability, roll_escape_success};
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattleSnapshot, CreatureView, EventBus, TurnRng,
};
use crate::config::BattleRules;
use crate::creature::Creature;
use crate::errors::{ActionError, BattleResult, BattleStateError};
use crate::player::Party;
use schema::Move;
use tracing::{debug, info};

/// One encounter between the player's active creature and a wild creature.
///
/// The player's party is borrowed for the whole encounter; the wild creature is
/// owned by the battle. Every action runs to completion, and the battle accepts
/// no further actions once its outcome is terminal.
pub struct Battle<'a, P: Party + ?Sized> {
    player: &'a mut P,
    active_index: usize,
    wild: Creature,
    outcome: BattleOutcome,
    events: EventBus,
    log: Vec<String>,
    rules: BattleRules,
    rng: TurnRng,
}

impl<'a, P: Party + ?Sized> Battle<'a, P> {
    /// Start a battle with the default rules.
    pub fn new(player: &'a mut P, wild: Creature, rng: TurnRng) -> BattleResult<Self> {
        Self::with_rules(player, wild, BattleRules::default(), rng)
    }

    /// Start a battle. Fails with `NoUsableCreature` if every party member has fainted.
    pub fn with_rules(
        player: &'a mut P,
        wild: Creature,
        rules: BattleRules,
        rng: TurnRng,
    ) -> BattleResult<Self> {
        let active_index = player
            .active_index()
            .ok_or(BattleStateError::NoUsableCreature)?;

        let mut battle = Battle {
            player,
            active_index,
            wild,
            outcome: BattleOutcome::Ongoing,
            events: EventBus::new(),
            log: Vec::new(),
            rules,
            rng,
        };
        battle.record(BattleEvent::EncounterStarted {
            wild: battle.wild.name.clone(),
            level: battle.wild.level,
        });
        Ok(battle)
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    pub fn player(&self) -> &P {
        &*self.player
    }

    pub fn player_creature(&self) -> BattleResult<&Creature> {
        Ok(self
            .player
            .creatures()
            .get(self.active_index)
            .ok_or(BattleStateError::NoUsableCreature)?)
    }

    pub fn player_creature_mut(&mut self) -> BattleResult<&mut Creature> {
        Ok(self
            .player
            .creature_mut(self.active_index)
            .ok_or(BattleStateError::NoUsableCreature)?)
    }

    pub fn wild_creature(&self) -> &Creature {
        &self.wild
    }

    pub fn wild_creature_mut(&mut self) -> &mut Creature {
        &mut self.wild
    }

    /// Hand the random source back, e.g. to reuse it for the next encounter.
    pub fn into_rng(self) -> TurnRng {
        self.rng
    }

    /// Attack with the active creature's move at `move_index`. If the wild creature
    /// survives, it strikes back.
    pub fn player_attack(&mut self, move_index: usize) -> BattleResult<BattleOutcome> {
        self.ensure_ongoing()?;

        let moves = &self.player_creature()?.moves;
        let move_used = moves
            .get(move_index)
            .cloned()
            .ok_or(ActionError::InvalidMoveIndex {
                index: move_index,
                move_count: moves.len(),
            })?;

        self.player_strikes(&move_used)?;
        if self.check_battle_end()?.is_terminal() {
            return Ok(self.outcome);
        }

        self.wild_turn()?;
        Ok(self.outcome)
    }

    /// Throw one `item_name` trap at the wild creature.
    ///
    /// Returns false without touching the battle if the item is not a trap, none
    /// are held, or the target has already fainted. A failed throw costs the
    /// trap and gives the wild creature a turn.
    pub fn attempt_catch(&mut self, item_name: &str) -> BattleResult<bool> {
        self.ensure_ongoing()?;

        let trap_multiplier = match can_attempt_catch(&self.wild, item_name) {
            Ok(multiplier) => multiplier,
            Err(CatchError::NotATrap { item }) => {
                debug!(item = %item, "catch refused: not a trap");
                return Ok(false);
            }
            Err(CatchError::TargetFainted { creature }) => {
                debug!(creature = %creature, "catch refused: target fainted");
                return Ok(false);
            }
        };

        if !self.player.use_item(item_name) {
            debug!(item = item_name, "catch refused: item unavailable");
            return Ok(false);
        }

        let catch_probability = calculate_catch_probability(&self.wild, trap_multiplier, &self.rules);
        debug!(catch_probability, "catch attempted");

        if roll_catch_success(catch_probability, &mut self.rng) {
            let joined_party = self.player.add_creature(self.wild.clone());
            self.finish(
                BattleOutcome::Caught,
                BattleEvent::CatchSucceeded {
                    creature: self.wild.name.clone(),
                    item: item_name.to_string(),
                    sent_to_storage: !joined_party,
                },
            );
            return Ok(true);
        }

        self.record(BattleEvent::CatchFailed {
            creature: self.wild.name.clone(),
            item: item_name.to_string(),
        });
        self.wild_turn()?;
        Ok(false)
    }

    /// Use one `item_name` healing item on the active creature. The wild creature
    /// then takes its turn.
    ///
    /// Returns false without touching the battle if the item does not heal or none are held.
    pub fn use_heal_item(&mut self, item_name: &str) -> BattleResult<bool> {
        self.ensure_ongoing()?;

        let Some(amount) = schema::heal_amount(item_name) else {
            debug!(item = item_name, "heal refused: not a healing item");
            return Ok(false);
        };
        if !self.player.use_item(item_name) {
            debug!(item = item_name, "heal refused: item unavailable");
            return Ok(false);
        }

        let target = self.player_creature_mut()?;
        let restored = target.heal(amount);
        let target_name = target.name.clone();
        self.record(BattleEvent::ItemUsed {
            item: item_name.to_string(),
            target: target_name,
            restored,
        });

        self.wild_turn()?;
        Ok(true)
    }

    /// Try to flee. On failure the wild creature takes its turn.
    pub fn attempt_run(&mut self) -> BattleResult<bool> {
        self.ensure_ongoing()?;

        let escape_probability =
            calculate_escape_probability(self.player_creature()?, &self.wild, &self.rules);
        debug!(escape_probability, "escape attempted");

        if roll_escape_success(escape_probability, &mut self.rng) {
            self.finish(BattleOutcome::RanAway, BattleEvent::EscapeSucceeded);
            return Ok(true);
        }

        self.record(BattleEvent::EscapeFailed);
        self.wild_turn()?;
        Ok(false)
    }

    /// Read-only view for presentation layers.
    pub fn get_battle_state(&self) -> BattleResult<BattleSnapshot> {
        Ok(BattleSnapshot {
            outcome: self.outcome,
            player: view_of(self.player_creature()?),
            wild: view_of(&self.wild),
            log: self.log.clone(),
        })
    }

    /// Re-check both creatures for fainting and apply the matching terminal result.
    ///
    /// Idempotent: a battle that has already ended is left as it is. A fainted wild
    /// creature wins over a fainted player creature.
    pub fn check_battle_end(&mut self) -> BattleResult<BattleOutcome> {
        if self.outcome.is_terminal() {
            return Ok(self.outcome);
        }

        if self.wild.is_fainted() {
            let reward = self
                .rules
                .reward_per_level
                .saturating_mul(self.wild.level as u32);
            self.player.award_money(reward);
            self.finish(
                BattleOutcome::PlayerWin,
                BattleEvent::WildDefeated {
                    wild: self.wild.name.clone(),
                    reward,
                },
            );
        } else if self.player_creature()?.is_fainted() {
            let creature = self.player_creature()?.name.clone();
            self.finish(
                BattleOutcome::PlayerLose,
                BattleEvent::PlayerDefeated { creature },
            );
        }

        Ok(self.outcome)
    }

    /// Settles any faint applied from outside an action before letting the action run.
    fn ensure_ongoing(&mut self) -> BattleResult<()> {
        if self.check_battle_end()?.is_terminal() {
            return Err(BattleStateError::BattleAlreadyEnded {
                outcome: self.outcome,
            }
            .into());
        }
        Ok(())
    }

    fn player_strikes(&mut self, move_used: &Move) -> BattleResult<()> {
        let attacker = self
            .player
            .creatures()
            .get(self.active_index)
            .ok_or(BattleStateError::NoUsableCreature)?;
        let roll = calculate_attack_outcome(attacker, move_used, &self.wild, &mut self.rng);
        let attacker_name = attacker.name.clone();

        self.wild.take_damage(roll.damage());
        self.record(BattleEvent::AttackResolved {
            attacker: attacker_name,
            defender: format!("Wild {}", self.wild.name),
            move_name: move_used.name.clone(),
            roll,
            remaining_hp: self.wild.current_hp(),
        });
        Ok(())
    }

    /// The wild creature's fixed policy: attack with a uniformly chosen move.
    fn wild_turn(&mut self) -> BattleResult<()> {
        if self.wild.is_fainted() {
            return Ok(());
        }
        let move_used = match self.wild.moves.len() {
            0 => {
                self.record(BattleEvent::NoMovesAvailable {
                    creature: format!("Wild {}", self.wild.name),
                });
                return Ok(());
            }
            1 => self.wild.moves[0].clone(),
            count => {
                let index = self.rng.next_index(count, "wild move choice");
                self.wild.moves[index].clone()
            }
        };

        let defender = self
            .player
            .creature_mut(self.active_index)
            .ok_or(BattleStateError::NoUsableCreature)?;
        let roll: DamageRoll =
            calculate_attack_outcome(&self.wild, &move_used, defender, &mut self.rng);
        defender.take_damage(roll.damage());
        let defender_name = defender.name.clone();
        let remaining_hp = defender.current_hp();

        self.record(BattleEvent::AttackResolved {
            attacker: format!("Wild {}", self.wild.name),
            defender: defender_name,
            move_name: move_used.name,
            roll,
            remaining_hp,
        });

        self.check_battle_end()?;
        Ok(())
    }

    fn finish(&mut self, outcome: BattleOutcome, event: BattleEvent) {
        info!(?outcome, wild = %self.wild.name, "battle ended");
        self.outcome = outcome;
        self.record(event);
    }

    fn record(&mut self, event: BattleEvent) {
        self.log.push(event.format());
        self.events.push(event);
    }
}

fn view_of(creature: &Creature) -> CreatureView {
    CreatureView {
        name: creature.name.clone(),
        level: creature.level,
        current_hp: creature.current_hp(),
        max_hp: creature.max_hp(),
    }
}
