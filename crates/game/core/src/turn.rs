//! Turn arbitration.
//!
//! A round's order is computed once, at round start, from effective agility:
//! highest agility first, player before enemy on ties. Stat changes during the
//! round only affect the next round's order.

use core::cmp::Reverse;

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use crate::combatant::Side;
use crate::config::BattleConfig;

/// The per-round turn queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOrder {
    queue: ArrayVec<Side, { BattleConfig::MAX_COMBATANTS }>,
    cursor: usize,
}

impl TurnOrder {
    /// Orders combatants by descending agility, ties broken by [`Side`] ordering.
    pub fn compute(entries: &[(Side, u32)]) -> Self {
        let mut sorted: ArrayVec<(Side, u32), { BattleConfig::MAX_COMBATANTS }> =
            entries
                .iter()
                .copied()
                .take(BattleConfig::MAX_COMBATANTS)
                .collect();
        sorted.sort_by_key(|&(side, agility)| (Reverse(agility), side));

        Self {
            queue: sorted.into_iter().map(|(side, _)| side).collect(),
            cursor: 0,
        }
    }

    /// The combatant whose turn it is, `None` once the round is exhausted.
    pub fn current(&self) -> Option<Side> {
        self.queue.get(self.cursor).copied()
    }

    /// Moves to the next combatant. Returns `false` when the round is over.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.queue.len() {
            self.cursor += 1;
        }
        !self.is_exhausted()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    pub fn sides(&self) -> &[Side] {
        &self.queue
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Rebuilds a saved order as-is. Every side must appear exactly once.
    pub fn from_sides(sides: &[Side]) -> Option<Self> {
        let queue: ArrayVec<Side, { BattleConfig::MAX_COMBATANTS }> =
            ArrayVec::try_from(sides).ok()?;
        if !Side::iter().all(|side| queue.contains(&side)) {
            return None;
        }
        Some(Self { queue, cursor: 0 })
    }

    /// Restores a saved cursor position. Out-of-range positions are rejected.
    pub fn with_position(mut self, cursor: usize) -> Option<Self> {
        if cursor >= self.queue.len() {
            return None;
        }
        self.cursor = cursor;
        Some(self)
    }
}

/// How many actions the player may take in one round.
///
/// ```text
/// points = clamp(1 + max(0, player_agility − enemy_agility) / step, 1, max_points)
/// ```
///
/// Monotonic non-decreasing in player agility and never below 1.
pub fn player_action_points(player_agility: u32, enemy_agility: u32, config: &BattleConfig) -> u32 {
    let advantage = player_agility.saturating_sub(enemy_agility);
    let step = config.action_point_agility_step.max(1);
    let cap = config.max_action_points.max(1);
    (1 + advantage / step).min(cap)
}
