//! Equipment slots for the player.
//!
//! Slot contents are owned by the inventory collaborator; the battle engine only
//! reads them. Every occupied slot contributes its item's flat [`StatDelta`].

use crate::stats::StatDelta;

/// Equipment slots, in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub const COUNT: usize = 3;

    const fn index(self) -> usize {
        match self {
            Self::Weapon => 0,
            Self::Armor => 1,
            Self::Accessory => 2,
        }
    }
}

/// An equippable item with flat stat deltas.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deltas: StatDelta,
}

impl Item {
    pub fn new(name: impl Into<String>, slot: EquipmentSlot, deltas: StatDelta) -> Self {
        Self {
            name: name.into(),
            slot,
            deltas,
        }
    }
}

/// Currently equipped items, one optional item per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [Option<Item>; EquipmentSlot::COUNT],
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item into its own slot, returning whatever was there before.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let index = item.slot.index();
        self.slots[index].replace(item)
    }

    /// Empties a slot, returning its item if any was equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slots[slot.index()].take()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    /// Occupied slots in slot order.
    pub fn equipped(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().flatten()
    }

    /// Sum of the deltas of every occupied slot.
    pub fn total_deltas(&self) -> StatDelta {
        self.equipped().map(|item| item.deltas).sum()
    }
}
