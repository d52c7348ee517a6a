use arrayvec::{ArrayVec, CapacityError};

use super::equipment::Equipment;
use super::skill::Skill;
use super::{CanAct, CanBeDamaged, HasStats, Side};
use crate::config::BattleConfig;
use crate::stats::{StatBlock, StatDelta, Vitals};

/// The player character.
///
/// Owned outside the battle: a [`crate::Battle`] borrows it for its lifetime,
/// and the same player carries its vitals and equipment across many battles.
///
/// # Invariants
///
/// - `base` is the only stored stat source; equipment deltas are read on demand
/// - stored `vitals` are clamped on read against effective maximums
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    level: u32,
    base: StatBlock,
    vitals: Vitals,
    equipment: Equipment,
    skills: ArrayVec<Skill, { BattleConfig::MAX_SKILLS }>,
}

impl Player {
    /// Creates a player at full health and mana with no equipment.
    pub fn new(name: impl Into<String>, level: u32, base: StatBlock) -> Self {
        Self {
            name: name.into(),
            level,
            base,
            vitals: Vitals::new(base.max_health, base.max_mana),
            equipment: Equipment::empty(),
            skills: ArrayVec::new(),
        }
    }

    /// Adds a skill (builder pattern). Skills beyond capacity are dropped.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        if let Err(rejected) = self.learn_skill(skill) {
            tracing::warn!(
                player = %self.name,
                skill = %rejected.element().name,
                "skill list full, skill not learned"
            );
        }
        self
    }

    /// Equips an item (builder pattern).
    pub fn with_item(mut self, item: super::Item) -> Self {
        self.equipment.equip(item);
        self
    }

    pub fn learn_skill(&mut self, skill: Skill) -> Result<(), CapacityError<Skill>> {
        self.skills.try_push(skill)
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn equipment_mut(&mut self) -> &mut Equipment {
        &mut self.equipment
    }

    /// Overwrites stored vitals, e.g. when a save slot is loaded.
    pub fn set_vitals(&mut self, vitals: Vitals) {
        self.vitals = vitals;
        self.clamp_vitals();
    }

    /// Refills health and mana to their effective maximums.
    pub fn restore_full(&mut self) {
        let stats = self.effective_stats();
        self.vitals = Vitals::new(stats.max_health, stats.max_mana);
    }
}

impl HasStats for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn base_stats(&self) -> &StatBlock {
        &self.base
    }

    fn stat_deltas(&self) -> StatDelta {
        self.equipment.total_deltas()
    }
}

impl CanAct for Player {
    fn side(&self) -> Side {
        Side::Player
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

impl CanBeDamaged for Player {
    fn vitals(&self) -> Vitals {
        self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
