//! Enemy action selection.

use super::BattleAction;
use crate::combatant::{CanAct, CanBeDamaged, Enemy, HasStats, SkillEffect};
use crate::config::BattleConfig;

/// Chooses the action for an enemy turn.
///
/// Implementations must be deterministic: the same enemy state and config
/// always yield the same action.
pub trait EnemyPolicy: Send + Sync {
    fn choose(&self, enemy: &Enemy, config: &BattleConfig) -> BattleAction;
}

/// Default enemy behavior.
///
/// 1. At or below the heal threshold, use the first affordable heal skill.
/// 2. Otherwise use the affordable damaging skill with the highest power
///    (earliest index on ties).
/// 3. Otherwise attack.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedPolicy;

impl EnemyPolicy for RuleBasedPolicy {
    fn choose(&self, enemy: &Enemy, config: &BattleConfig) -> BattleAction {
        let mana = enemy.mana().current();
        let affordable = || {
            enemy
                .skills()
                .iter()
                .enumerate()
                .filter(move |(_, skill)| skill.mana_cost <= mana)
        };

        if enemy.health().percent() <= config.enemy_heal_threshold_percent {
            if let Some((index, _)) = affordable().find(|(_, skill)| skill.effect.is_heal()) {
                tracing::debug!(enemy = enemy.name(), index, "enemy policy: heal");
                return BattleAction::Skill(index);
            }
        }

        let strongest = affordable()
            .filter_map(|(index, skill)| match skill.effect {
                SkillEffect::Heal { .. } => None,
                effect => effect.damage_power().map(|power| (index, power)),
            })
            .fold(None, |best: Option<(usize, u32)>, (index, power)| match best {
                Some((_, best_power)) if best_power >= power => best,
                _ => Some((index, power)),
            });

        match strongest {
            Some((index, _)) => BattleAction::Skill(index),
            None => BattleAction::Attack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{ScalingStat, Skill};
    use crate::stats::StatBlock;

    fn base() -> StatBlock {
        StatBlock::new(100, 20, 10, 10, 10, 10)
    }

    #[test]
    fn attacks_without_skills() {
        let enemy = Enemy::new("cron", 1, base());
        assert_eq!(
            RuleBasedPolicy.choose(&enemy, &BattleConfig::default()),
            BattleAction::Attack
        );
    }

    #[test]
    fn picks_strongest_affordable_damage_skill() {
        let enemy = Enemy::new("cron", 1, base())
            .with_skill(Skill::damage("ping", 2, 4, ScalingStat::Strength))
            .with_skill(Skill::damage("nuke", 50, 40, ScalingStat::Strength))
            .with_skill(Skill::drain("leech", 5, 8))
            .with_skill(Skill::damage("poke", 1, 8, ScalingStat::Willpower));

        // nuke is unaffordable; leech and poke tie at 8, the earlier one wins.
        assert_eq!(
            RuleBasedPolicy.choose(&enemy, &BattleConfig::default()),
            BattleAction::Skill(2)
        );
    }

    #[test]
    fn heals_when_low() {
        let mut enemy = Enemy::new("cron", 1, base())
            .with_skill(Skill::damage("ping", 2, 4, ScalingStat::Strength))
            .with_skill(Skill::heal("respawn", 5, 30));
        let config = BattleConfig::default();

        assert_eq!(RuleBasedPolicy.choose(&enemy, &config), BattleAction::Skill(0));

        enemy.take_damage(70);
        assert_eq!(RuleBasedPolicy.choose(&enemy, &config), BattleAction::Skill(1));
    }

    #[test]
    fn low_health_without_mana_falls_back_to_damage() {
        let mut enemy = Enemy::new("cron", 1, StatBlock::new(100, 4, 10, 10, 10, 10))
            .with_skill(Skill::heal("respawn", 5, 30))
            .with_skill(Skill::damage("ping", 2, 4, ScalingStat::Strength));
        enemy.take_damage(90);

        assert_eq!(
            RuleBasedPolicy.choose(&enemy, &BattleConfig::default()),
            BattleAction::Skill(1)
        );
    }
}
