use arrayvec::ArrayVec;

use super::skill::Skill;
use super::{CanAct, CanBeDamaged, HasStats, Side};
use crate::config::BattleConfig;
use crate::rng::{RngOracle, compute_seed};
use crate::stats::{StatBlock, Vitals};

/// One entry in an enemy's drop table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropEntry {
    pub item: String,
    /// Base chance in percent (0-100).
    pub chance_percent: u32,
}

impl DropEntry {
    pub fn new(item: impl Into<String>, chance_percent: u32) -> Self {
        Self {
            item: item.into(),
            chance_percent: chance_percent.min(100),
        }
    }
}

/// Serializable enemy descriptor, as supplied by content files or the encounter
/// generator. [`EnemyTemplate::spawn`] builds a fresh [`Enemy`] at full health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<DropEntry>,
}

impl EnemyTemplate {
    pub fn spawn(&self) -> Enemy {
        let mut enemy = Enemy::new(self.name.clone(), self.level, self.stats);
        for skill in &self.skills {
            if enemy.skills.try_push(skill.clone()).is_err() {
                tracing::warn!(enemy = %self.name, "skill list full, extra skills ignored");
                break;
            }
        }
        for drop in &self.drops {
            if enemy.drops.try_push(drop.clone()).is_err() {
                tracing::warn!(enemy = %self.name, "drop table full, extra drops ignored");
                break;
            }
        }
        enemy
    }
}

/// An enemy combatant. Owned exclusively by its battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    name: String,
    level: u32,
    base: StatBlock,
    vitals: Vitals,
    skills: ArrayVec<Skill, { BattleConfig::MAX_SKILLS }>,
    drops: ArrayVec<DropEntry, { BattleConfig::MAX_DROPS }>,
}

impl Enemy {
    /// Creates an enemy at full health and mana with no skills or drops.
    pub fn new(name: impl Into<String>, level: u32, base: StatBlock) -> Self {
        Self {
            name: name.into(),
            level,
            base,
            vitals: Vitals::new(base.max_health, base.max_mana),
            skills: ArrayVec::new(),
            drops: ArrayVec::new(),
        }
    }

    /// Adds a skill (builder pattern). Skills beyond capacity are dropped.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        if let Err(rejected) = self.skills.try_push(skill) {
            tracing::warn!(
                enemy = %self.name,
                skill = %rejected.element().name,
                "skill list full, skill not added"
            );
        }
        self
    }

    /// Adds a drop table entry (builder pattern). Entries beyond capacity are dropped.
    pub fn with_drop(mut self, drop: DropEntry) -> Self {
        if let Err(rejected) = self.drops.try_push(drop) {
            tracing::warn!(
                enemy = %self.name,
                item = %rejected.element().item,
                "drop table full, entry not added"
            );
        }
        self
    }

    /// Drop table, consulted only when the enemy is defeated.
    pub fn drops(&self) -> &[DropEntry] {
        &self.drops
    }

    /// Overwrites stored vitals, clamped to the enemy's maximums.
    pub fn set_vitals(&mut self, vitals: Vitals) {
        self.vitals = vitals;
        self.clamp_vitals();
    }

    /// Rolls every drop table entry independently.
    ///
    /// Each entry succeeds when a d1000 roll is at or below
    /// `chance_percent × 10 + bonus_per_mille`.
    pub fn roll_drops(
        &self,
        rng: &(impl RngOracle + ?Sized),
        battle_seed: u64,
        bonus_per_mille: u32,
    ) -> Vec<&DropEntry> {
        self.drops
            .iter()
            .enumerate()
            .filter(|(index, entry)| {
                let seed = compute_seed(battle_seed, 0, Side::Enemy.index(), *index as u32);
                let threshold = entry
                    .chance_percent
                    .saturating_mul(10)
                    .saturating_add(bonus_per_mille);
                rng.roll_per_mille(seed) <= threshold
            })
            .map(|(_, entry)| entry)
            .collect()
    }
}

impl HasStats for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn base_stats(&self) -> &StatBlock {
        &self.base
    }
}

impl CanAct for Enemy {
    fn side(&self) -> Side {
        Side::Enemy
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

impl CanBeDamaged for Enemy {
    fn vitals(&self) -> Vitals {
        self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedRng, PcgRng};

    fn slime() -> Enemy {
        Enemy::new("slime", 1, StatBlock::new(30, 0, 4, 2, 3, 1))
            .with_drop(DropEntry::new("goo", 50))
            .with_drop(DropEntry::new("core dump", 1))
    }

    #[test]
    fn drops_are_queryable() {
        let enemy = slime();
        assert_eq!(enemy.drops().len(), 2);
        assert_eq!(enemy.drops()[0].item, "goo");
    }

    #[test]
    fn low_roll_wins_every_drop() {
        // FixedRng(0) always rolls 1.
        let enemy = slime();
        let drops = enemy.roll_drops(&FixedRng(0), 9, 0);
        assert_eq!(drops.len(), 2);
    }

    #[test]
    fn high_roll_loses_unless_bonus_covers_it() {
        // FixedRng(999) always rolls 1000.
        let enemy = slime();
        assert!(enemy.roll_drops(&FixedRng(999), 9, 0).is_empty());
        assert_eq!(enemy.roll_drops(&FixedRng(999), 9, 500).len(), 1);
    }

    #[test]
    fn rolls_are_reproducible() {
        let enemy = slime();
        let a = enemy.roll_drops(&PcgRng, 1234, 0);
        let b = enemy.roll_drops(&PcgRng, 1234, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn template_spawns_full_enemy() {
        let template = EnemyTemplate {
            name: "cron job".into(),
            level: 3,
            stats: StatBlock::new(60, 20, 9, 5, 7, 2),
            skills: vec![Skill::heal("respawn", 5, 10)],
            drops: vec![DropEntry::new("crontab", 25)],
        };
        let enemy = template.spawn();
        assert_eq!(enemy.health().current(), 60);
        assert_eq!(enemy.mana().current(), 20);
        assert_eq!(enemy.skills().len(), 1);
        assert_eq!(enemy.drops().len(), 1);
    }

    #[test]
    fn oversized_chance_and_bonus_do_not_overflow() {
        let enemy = Enemy::new("heap", 1, StatBlock::new(30, 0, 4, 2, 3, 1)).with_drop(DropEntry {
            item: "bitflip".into(),
            chance_percent: u32::MAX,
        });
        assert_eq!(enemy.roll_drops(&FixedRng(999), 3, u32::MAX).len(), 1);
    }

    #[test]
    fn builders_stop_at_capacity() {
        let mut enemy = Enemy::new("fork bomb", 1, StatBlock::new(30, 0, 4, 2, 3, 1));
        for i in 0..=BattleConfig::MAX_DROPS {
            enemy = enemy
                .with_drop(DropEntry::new(format!("pid {i}"), 10))
                .with_skill(Skill::heal(format!("spawn {i}"), 1, 1));
        }
        assert_eq!(enemy.drops().len(), BattleConfig::MAX_DROPS);
        assert_eq!(enemy.skills().len(), BattleConfig::MAX_SKILLS);
        assert_eq!(enemy.drops().last().map(|d| d.item.as_str()), Some("pid 7"));
    }
}
