//! Stat aggregation: base stats + active equipment deltas → effective stats.
//!
//! Effective stats are a pure computation over the combatant's current base
//! stats and equipment snapshot. Nothing is cached: every call re-reads the
//! slots, so an equipment change between turns is visible on the next read.

use super::block::StatBlock;
use crate::combatant::HasStats;

/// Computes effective stats for any combatant.
///
/// Enemies contribute no deltas, so their effective stats equal their base stats.
/// Idempotent and side-effect free.
pub fn effective_stats<C: HasStats + ?Sized>(combatant: &C) -> StatBlock {
    combatant.stat_deltas().apply(combatant.base_stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Enemy, EquipmentSlot, Item, Player};
    use crate::stats::{StatDelta, StatKind};

    fn sword() -> Item {
        Item::new(
            "rusty sword",
            EquipmentSlot::Weapon,
            StatDelta::single(StatKind::Strength, 5),
        )
    }

    fn cloak() -> Item {
        Item::new(
            "hidden cloak",
            EquipmentSlot::Armor,
            StatDelta::single(StatKind::Willpower, 3).with(StatKind::Agility, -2),
        )
    }

    #[test]
    fn player_sums_occupied_slots() {
        let mut player = Player::new("root", 1, StatBlock::default());
        player.equipment_mut().equip(sword());
        player.equipment_mut().equip(cloak());

        let stats = effective_stats(&player);
        assert_eq!(stats.strength, 15);
        assert_eq!(stats.willpower, 13);
        assert_eq!(stats.agility, 8);
        assert_eq!(stats.max_health, 100);
    }

    #[test]
    fn empty_slots_contribute_nothing() {
        let player = Player::new("root", 1, StatBlock::default());
        assert_eq!(effective_stats(&player), StatBlock::default());
    }

    #[test]
    fn is_idempotent() {
        let mut player = Player::new("root", 1, StatBlock::default());
        player.equipment_mut().equip(sword());
        assert_eq!(effective_stats(&player), effective_stats(&player));
    }

    #[test]
    fn reflects_equipment_changes_immediately() {
        let mut player = Player::new("root", 1, StatBlock::default());
        player.equipment_mut().equip(sword());
        assert_eq!(effective_stats(&player).strength, 15);

        player.equipment_mut().unequip(EquipmentSlot::Weapon);
        assert_eq!(effective_stats(&player).strength, 10);
    }

    #[test]
    fn enemy_effective_equals_base() {
        let base = StatBlock::new(50, 0, 8, 4, 6, 2);
        let enemy = Enemy::new("daemon", 2, base);
        assert_eq!(effective_stats(&enemy), base);
    }
}
