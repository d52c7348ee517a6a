use super::BattleOutcome;
use crate::action::ActionOutcome;

/// One resolved action, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvent {
    pub round: u32,
    /// 1-based index of the action across the whole battle.
    pub turn: u32,
    pub outcome: ActionOutcome,
}

/// What the encounter collaborator receives once a battle is over.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub enemy_name: String,
    /// EX points earned by the player across the battle.
    pub reward_points: u32,
    pub rounds: u32,
    pub turns: u32,
    /// The enemy's drop table may be rolled. Only true on Victory.
    pub drops_eligible: bool,
}

impl BattleReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == BattleOutcome::Victory
    }
}
