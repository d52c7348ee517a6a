//! Battle state machine.
//!
//! [`Battle`] owns the enemy, borrows the player, and is the only way to
//! mutate either during combat. Every public operation either applies fully
//! or returns a [`BattleError`] without touching state.
//!
//! Flow per call to [`Battle::submit_action`]:
//!
//! 1. validate phase and turn holder
//! 2. resolve the action (see [`crate::action::resolve_action`])
//! 3. clamp vitals, update guard and action points, log the event
//! 4. [`Battle::check_battle_end`]
//! 5. hand the turn on, starting a new round when the order is exhausted

mod errors;
mod phase;
mod report;
mod snapshot;

pub use errors::BattleError;
pub use phase::{BattleOutcome, BattlePhase};
pub use report::{BattleEvent, BattleReport};
pub use snapshot::{BattleData, SnapshotError};

use crate::action::{
    ActionEffect, ActionOutcome, BattleAction, EnemyPolicy, ResolveContext, RuleBasedPolicy,
    resolve_action,
};
use crate::combatant::{CanBeDamaged, DropEntry, Enemy, Equipment, HasStats, Player, Side};
use crate::config::BattleConfig;
use crate::error::GameError;
use crate::reward::ProgressionLedger;
use crate::rng::RngOracle;
use crate::stats::Vitals;
use crate::turn::{TurnOrder, player_action_points};
use crate::typing::{TypingChallenge, TypingPerformance};

/// Mutable state of one battle. Read-only outside this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleState {
    phase: BattlePhase,
    order: TurnOrder,
    round: u32,
    turn_count: u32,
    action_points_remaining: u32,
    guarding: Option<Side>,
    reward_points: u32,
    challenge: Option<TypingChallenge>,
}

impl BattleState {
    fn idle() -> Self {
        Self {
            phase: BattlePhase::Idle,
            order: TurnOrder::compute(&[]),
            round: 0,
            turn_count: 0,
            action_points_remaining: 0,
            guarding: None,
            reward_points: 0,
            challenge: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    /// Current round, starting at 1. Zero before `start()`.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Number of actions resolved so far.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn action_points_remaining(&self) -> u32 {
        self.action_points_remaining
    }

    /// Side whose guard is up, if any.
    pub fn guarding(&self) -> Option<Side> {
        self.guarding
    }

    pub fn reward_points(&self) -> u32 {
        self.reward_points
    }

    pub fn challenge(&self) -> Option<&TypingChallenge> {
        self.challenge.as_ref()
    }
}

/// Forwards reward points to the battle total and the external ledger.
struct Tally<'a, 'l> {
    earned: &'a mut u32,
    external: Option<&'a mut (dyn ProgressionLedger + 'l)>,
}

impl ProgressionLedger for Tally<'_, '_> {
    fn record_points(&mut self, points: u32) {
        *self.earned = self.earned.saturating_add(points);
        if let Some(ledger) = self.external.as_deref_mut() {
            ledger.record_points(points);
        }
    }
}

/// A single player-vs-enemy battle.
pub struct Battle<'p> {
    player: &'p mut Player,
    enemy: Enemy,
    config: BattleConfig,
    policy: Box<dyn EnemyPolicy>,
    ledger: Option<&'p mut dyn ProgressionLedger>,
    state: BattleState,
    events: Vec<BattleEvent>,
}

impl<'p> Battle<'p> {
    /// Creates an idle battle. Call [`Battle::start`] before submitting actions.
    pub fn new(player: &'p mut Player, enemy: Enemy) -> Self {
        Self {
            player,
            enemy,
            config: BattleConfig::default(),
            policy: Box::new(RuleBasedPolicy),
            ledger: None,
            state: BattleState::idle(),
            events: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Reports every point the player earns to `ledger` as well.
    pub fn with_ledger(mut self, ledger: &'p mut dyn ProgressionLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    // ===== queries =====

    pub fn phase(&self) -> BattlePhase {
        self.state.phase
    }

    pub fn is_active(&self) -> bool {
        self.state.phase.is_active()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    /// Equipment access between turns. Stat changes apply from the next
    /// action; turn order only changes from the next round.
    pub fn player_equipment_mut(&mut self) -> &mut Equipment {
        self.player.equipment_mut()
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Every resolved action, oldest first.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// The combatant whose turn it is.
    pub fn current_turn_actor(&self) -> Result<Side, BattleError> {
        if !self.state.phase.is_active() {
            return Err(BattleError::invalid_transition(
                self.state.phase,
                "query the current actor",
            ));
        }
        self.state.order.current().ok_or(BattleError::invalid_transition(
            self.state.phase,
            "query the current actor",
        ))
    }

    /// Actions the player may take per round against this enemy.
    pub fn calculate_player_action_points(&self) -> u32 {
        player_action_points(
            self.player.effective_stats().agility,
            self.enemy.effective_stats().agility,
            &self.config,
        )
    }

    pub fn current_challenge(&self) -> Option<&TypingChallenge> {
        self.state.challenge.as_ref()
    }

    // ===== transitions =====

    /// Idle → Active. Computes the first round's order.
    pub fn start(&mut self) -> Result<(), BattleError> {
        if self.state.phase != BattlePhase::Idle {
            return Err(self.reject(BattleError::invalid_transition(self.state.phase, "start")));
        }

        self.state.phase = BattlePhase::Active;
        self.state.round = 1;
        self.begin_round();
        self.begin_turn();

        tracing::info!(
            player = self.player.name(),
            enemy = self.enemy.name(),
            order = ?self.state.order.sides(),
            action_points = self.state.action_points_remaining,
            "battle started"
        );

        self.check_battle_end();
        Ok(())
    }

    /// Records the word the player is currently typing, so a save taken
    /// mid-attempt can restore it. Cleared when the player's action resolves.
    pub fn set_challenge(&mut self, challenge: TypingChallenge) -> Result<(), BattleError> {
        if !self.state.phase.is_active() {
            return Err(self.reject(BattleError::invalid_transition(
                self.state.phase,
                "set a challenge",
            )));
        }
        self.state.challenge = Some(challenge);
        Ok(())
    }

    /// Resolves one action for `side`, which must hold the turn.
    ///
    /// Player attacks and skills need a `performance`; enemy actions ignore it.
    pub fn submit_action(
        &mut self,
        side: Side,
        action: BattleAction,
        performance: Option<&TypingPerformance>,
    ) -> Result<ActionOutcome, BattleError> {
        let expected = match self.current_turn_actor() {
            Ok(actor) => actor,
            Err(_) => {
                return Err(self.reject(BattleError::invalid_transition(
                    self.state.phase,
                    "submit an action",
                )));
            }
        };
        if side != expected {
            return Err(self.reject(BattleError::NotActorsTurn {
                expected,
                got: side,
            }));
        }

        let ctx = ResolveContext::new(&self.config)
            .with_target_guarding(self.state.guarding == Some(side.opponent()));
        let mut tally = Tally {
            earned: &mut self.state.reward_points,
            external: self.ledger.as_deref_mut(),
        };
        let resolved = match side {
            Side::Player => resolve_action(
                &mut *self.player,
                &mut self.enemy,
                action,
                performance,
                ctx,
                &mut tally,
            ),
            Side::Enemy => {
                resolve_action(&mut self.enemy, &mut *self.player, action, None, ctx, &mut tally)
            }
        };
        let outcome = resolved.map_err(|error| self.reject(error.into()))?;

        self.player.clamp_vitals();
        self.enemy.clamp_vitals();
        self.state.turn_count += 1;

        if outcome.guard_consumed {
            self.state.guarding = None;
        }
        if action == BattleAction::Defend {
            self.state.guarding = Some(side);
        }
        if side == Side::Player {
            self.state.challenge = None;
            self.state.action_points_remaining = self.state.action_points_remaining.saturating_sub(1);
        }

        tracing::debug!(
            round = self.state.round,
            turn = self.state.turn_count,
            actor = %side,
            action = action.as_str(),
            effect = ?outcome.effect,
            reward = outcome.reward.points(),
            player_hp = self.player.health().current(),
            enemy_hp = self.enemy.health().current(),
            "action resolved"
        );

        self.events.push(BattleEvent {
            round: self.state.round,
            turn: self.state.turn_count,
            outcome: outcome.clone(),
        });

        if outcome.effect == ActionEffect::Fled {
            self.finish(BattleOutcome::Fled);
        } else if self.check_battle_end().is_none() {
            let keeps_turn = side == Side::Player && self.state.action_points_remaining > 0;
            if !keeps_turn {
                self.advance_turn();
            }
        }

        Ok(outcome)
    }

    /// Lets the enemy policy pick an action and submits it.
    pub fn run_enemy_turn(&mut self) -> Result<ActionOutcome, BattleError> {
        let action = self.policy.choose(&self.enemy, &self.config);
        self.submit_action(Side::Enemy, action, None)
    }

    /// Moves an active battle to Victory or Defeat when a side is out of
    /// health. Returns the outcome once the battle is over.
    pub fn check_battle_end(&mut self) -> Option<BattleOutcome> {
        if self.state.phase.is_active() {
            if self.enemy.is_defeated() {
                self.finish(BattleOutcome::Victory);
            } else if self.player.is_defeated() {
                self.finish(BattleOutcome::Defeat);
            }
        }
        self.state.phase.outcome()
    }

    // ===== results =====

    /// Summary for the encounter collaborator. `None` until the battle ends.
    pub fn report(&self) -> Option<BattleReport> {
        let outcome = self.state.phase.outcome()?;
        Some(BattleReport {
            outcome,
            enemy_name: self.enemy.name().to_owned(),
            reward_points: self.state.reward_points,
            rounds: self.state.round,
            turns: self.state.turn_count,
            drops_eligible: outcome == BattleOutcome::Victory,
        })
    }

    /// Rolls the enemy's drop table. Empty unless the battle was won.
    ///
    /// Player fortune raises every entry's chance by
    /// `fortune × fortune_drop_bonus_per_mille` per mille.
    pub fn roll_drops(&self, rng: &(impl RngOracle + ?Sized), battle_seed: u64) -> Vec<&DropEntry> {
        if self.state.phase != BattlePhase::Victory {
            return Vec::new();
        }
        let bonus = self
            .player
            .effective_stats()
            .fortune
            .saturating_mul(self.config.fortune_drop_bonus_per_mille);
        self.enemy.roll_drops(rng, battle_seed, bonus)
    }

    // ===== save / load =====

    /// Captures an in-progress battle.
    pub fn snapshot(&self) -> Result<BattleData, BattleError> {
        if !self.state.phase.is_active() {
            return Err(BattleError::invalid_transition(self.state.phase, "snapshot"));
        }
        let health = self.enemy.health();
        Ok(BattleData {
            enemy_name: self.enemy.name().to_owned(),
            enemy_health: health.current(),
            enemy_max_health: health.maximum(),
            current_challenge: self.state.challenge.clone(),
            enemy_mana: Some(self.enemy.mana().current()),
            round: self.state.round,
            turn_count: self.state.turn_count,
            turn_order: Some(self.state.order.sides().to_vec()),
            turn_position: self.state.order.position(),
            action_points_remaining: Some(self.state.action_points_remaining),
            guarding: self.state.guarding,
            reward_points: self.state.reward_points,
        })
    }

    /// Rebuilds an active battle from a snapshot with the default config.
    pub fn restore(
        player: &'p mut Player,
        enemy: Enemy,
        data: &BattleData,
    ) -> Result<Self, SnapshotError> {
        Self::restore_with_config(player, enemy, data, BattleConfig::default())
    }

    /// Rebuilds an active battle from a snapshot.
    ///
    /// `enemy` must be the same enemy the snapshot was taken from (name and max
    /// health are checked); its vitals are overwritten from the snapshot. A saved
    /// round order is reused as-is, so an equipment change made mid-round does
    /// not reshuffle the turn that was in progress.
    pub fn restore_with_config(
        player: &'p mut Player,
        enemy: Enemy,
        data: &BattleData,
        config: BattleConfig,
    ) -> Result<Self, SnapshotError> {
        if data.enemy_name != enemy.name() {
            return Err(SnapshotError::EnemyMismatch {
                saved: data.enemy_name.clone(),
                supplied: enemy.name().to_owned(),
            });
        }
        let max_health = enemy.health().maximum();
        if data.enemy_max_health != max_health {
            return Err(SnapshotError::MaxHealthMismatch {
                saved: data.enemy_max_health,
                actual: max_health,
            });
        }
        if data.enemy_health == 0 || data.enemy_health > max_health {
            return Err(SnapshotError::EnemyHealthOutOfRange {
                health: data.enemy_health,
                max: max_health,
            });
        }
        if data.round == 0 {
            return Err(SnapshotError::InvalidRound);
        }
        if player.is_defeated() {
            return Err(SnapshotError::PlayerDefeated);
        }

        let mut battle = Battle::new(player, enemy).with_config(config);
        let mana = data
            .enemy_mana
            .unwrap_or_else(|| battle.enemy.mana().current());
        battle.enemy.set_vitals(Vitals::new(data.enemy_health, mana));

        // Stats may have changed since the round began; the saved order wins.
        battle.begin_round();
        let order = match &data.turn_order {
            Some(sides) => TurnOrder::from_sides(sides).ok_or(SnapshotError::InvalidTurnOrder)?,
            None => battle.state.order.clone(),
        };
        battle.state.order =
            order
                .with_position(data.turn_position)
                .ok_or(SnapshotError::InvalidTurnPosition {
                    position: data.turn_position,
                })?;
        if let Some(points) = data.action_points_remaining {
            battle.state.action_points_remaining =
                points.min(battle.config.max_action_points.max(1));
        }
        battle.state.phase = BattlePhase::Active;
        battle.state.round = data.round;
        battle.state.turn_count = data.turn_count;
        battle.state.guarding = data.guarding;
        battle.state.reward_points = data.reward_points;
        battle.state.challenge = data.current_challenge.clone();

        tracing::info!(
            enemy = battle.enemy.name(),
            enemy_hp = data.enemy_health,
            round = data.round,
            "battle restored"
        );
        Ok(battle)
    }

    // ===== internals =====

    /// Computes the order and player action points for the current round.
    fn begin_round(&mut self) {
        let player_agility = self.player.effective_stats().agility;
        let enemy_agility = self.enemy.effective_stats().agility;
        self.state.order = TurnOrder::compute(&[
            (Side::Player, player_agility),
            (Side::Enemy, enemy_agility),
        ]);
        self.state.action_points_remaining =
            player_action_points(player_agility, enemy_agility, &self.config);
    }

    /// A guard lasts until its owner's next turn.
    fn begin_turn(&mut self) {
        let Some(actor) = self.state.order.current() else {
            return;
        };
        if self.state.guarding == Some(actor) {
            self.state.guarding = None;
            tracing::debug!(%actor, "guard expired");
        }
    }

    fn advance_turn(&mut self) {
        if !self.state.order.advance() {
            self.state.round += 1;
            self.begin_round();
            tracing::debug!(
                round = self.state.round,
                order = ?self.state.order.sides(),
                "round started"
            );
        }
        self.begin_turn();
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.state.phase = outcome.into();
        self.state.challenge = None;
        tracing::info!(
            %outcome,
            rounds = self.state.round,
            turns = self.state.turn_count,
            reward_points = self.state.reward_points,
            "battle ended"
        );
    }

    fn reject(&self, error: BattleError) -> BattleError {
        tracing::warn!(
            code = error.error_code(),
            phase = %self.state.phase,
            %error,
            "battle operation rejected"
        );
        error
    }
}
