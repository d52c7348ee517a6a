//! Action resolver.
//!
//! Validation happens before the first mutation, so a rejected action leaves
//! both combatants untouched. The only mutation that can precede the effect is
//! the skill's mana cost, which is itself validated first.

use super::{ActionEffect, ActionError, ActionOutcome, BattleAction};
use crate::combat::{apply_guard, calculate_damage};
use crate::combatant::{CanBeDamaged, Combatant, ScalingStat, Side, SkillEffect};
use crate::config::BattleConfig;
use crate::rating::RatingScalar;
use crate::reward::{ProgressionLedger, RewardResult};
use crate::typing::TypingPerformance;

/// Battle-level facts the resolver needs but does not own.
#[derive(Clone, Copy, Debug)]
pub struct ResolveContext<'a> {
    pub config: &'a BattleConfig,
    /// The target is guarding and takes reduced damage from the next hit.
    pub target_guarding: bool,
}

impl<'a> ResolveContext<'a> {
    pub fn new(config: &'a BattleConfig) -> Self {
        Self {
            config,
            target_guarding: false,
        }
    }

    pub fn with_target_guarding(mut self, guarding: bool) -> Self {
        self.target_guarding = guarding;
        self
    }
}

/// Resolves one action of `actor` against `target`.
///
/// Player attacks and skills require a [`TypingPerformance`]: its rating scalar
/// multiplies the attack and its reward is recorded in `ledger`. Enemy actions
/// ignore any performance and use a neutral scalar.
///
/// A Miss still spends the skill's mana and the turn, deals nothing, and is
/// worth zero points.
pub fn resolve_action<A, T, L>(
    actor: &mut A,
    target: &mut T,
    action: BattleAction,
    performance: Option<&TypingPerformance>,
    ctx: ResolveContext<'_>,
    ledger: &mut L,
) -> Result<ActionOutcome, ActionError>
where
    A: Combatant + ?Sized,
    T: Combatant + ?Sized,
    L: ProgressionLedger + ?Sized,
{
    if actor.is_defeated() {
        return Err(ActionError::ActorDefeated);
    }

    let side = actor.side();
    let performance = typed_performance(side, action, performance)?;
    let scalar = performance
        .map(|p| p.scalar())
        .unwrap_or(RatingScalar::NEUTRAL);
    let missed = performance.is_some_and(|p| p.is_miss());

    let mut outcome = ActionOutcome {
        actor: side,
        target: target.side(),
        action,
        effect: ActionEffect::Missed,
        mana_spent: 0,
        reward: RewardResult::NONE,
        performance,
        guard_consumed: false,
        target_defeated: false,
    };

    match action {
        BattleAction::Flee => {
            if side != Side::Player {
                return Err(ActionError::FleeNotAllowed);
            }
            outcome.target = side;
            outcome.effect = ActionEffect::Fled;
        }
        BattleAction::Defend => {
            outcome.target = side;
            outcome.effect = ActionEffect::Guard;
        }
        BattleAction::Attack => {
            if target.is_defeated() {
                return Err(ActionError::TargetDefeated);
            }
            if !missed {
                let attack = actor.effective_stats().strength;
                let dealt = strike(target, attack, 0, scalar, &ctx, &mut outcome.guard_consumed);
                outcome.effect = ActionEffect::Damage { amount: dealt };
            }
        }
        BattleAction::Skill(index) => {
            let skill = actor
                .skill(index)
                .cloned()
                .ok_or(ActionError::UnknownSkill { index })?;
            if skill.effect.is_heal() {
                outcome.target = side;
            } else if target.is_defeated() {
                return Err(ActionError::TargetDefeated);
            }

            actor.spend_mana(skill.mana_cost)?;
            outcome.mana_spent = skill.mana_cost;

            if !missed {
                let stats = actor.effective_stats();
                outcome.effect = match skill.effect {
                    SkillEffect::Damage { power, scaling } => {
                        let attack = scaling.of(&stats);
                        let dealt =
                            strike(target, attack, power, scalar, &ctx, &mut outcome.guard_consumed);
                        ActionEffect::Damage { amount: dealt }
                    }
                    SkillEffect::Heal { amount } => ActionEffect::Heal {
                        amount: actor.heal(scalar.scale(amount)),
                    },
                    SkillEffect::Drain { power } => {
                        let attack = ScalingStat::Willpower.of(&stats);
                        let dealt =
                            strike(target, attack, power, scalar, &ctx, &mut outcome.guard_consumed);
                        ActionEffect::Drain {
                            damage: dealt,
                            healed: actor.heal(dealt / 2),
                        }
                    }
                };
            }
        }
    }

    if let Some(performance) = &performance {
        outcome.reward = RewardResult::for_performance(performance);
        ledger.record_points(outcome.reward.points());
    }
    outcome.target_defeated = target.is_defeated();

    Ok(outcome)
}

/// Picks the performance that applies to this action, if any.
fn typed_performance(
    side: Side,
    action: BattleAction,
    performance: Option<&TypingPerformance>,
) -> Result<Option<TypingPerformance>, ActionError> {
    match (side, action) {
        (Side::Player, BattleAction::Attack | BattleAction::Skill(_)) => performance
            .copied()
            .map(Some)
            .ok_or(ActionError::PerformanceRequired),
        _ => Ok(None),
    }
}

/// Computes and applies one hit, returning the health actually removed.
fn strike<T: CanBeDamaged + ?Sized>(
    target: &mut T,
    attack: u32,
    power: u32,
    scalar: RatingScalar,
    ctx: &ResolveContext<'_>,
    guard_consumed: &mut bool,
) -> u32 {
    let config = ctx.config;
    let defense = target.effective_stats().defense();
    let mut damage = calculate_damage(attack, power, scalar, defense, config.minimum_damage);

    if damage > 0 && ctx.target_guarding {
        damage = apply_guard(damage, config.defend_reduction_percent, config.minimum_damage);
        *guard_consumed = true;
    }

    target.take_damage(damage)
}
