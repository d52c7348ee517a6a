/// Lifecycle phase of a battle.
///
/// ```text
/// Idle ──start()──▶ Active ──▶ Victory | Defeat | Fled
/// ```
///
/// Terminal phases have no outgoing transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    Idle,
    Active,
    Victory,
    Defeat,
    Fled,
}

impl BattlePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat | Self::Fled)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Outcome of a terminal phase, `None` otherwise.
    pub const fn outcome(self) -> Option<BattleOutcome> {
        match self {
            Self::Victory => Some(BattleOutcome::Victory),
            Self::Defeat => Some(BattleOutcome::Defeat),
            Self::Fled => Some(BattleOutcome::Fled),
            Self::Idle | Self::Active => None,
        }
    }
}

/// How a battle ended, reported back to the encounter collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

impl From<BattleOutcome> for BattlePhase {
    fn from(outcome: BattleOutcome) -> Self {
        match outcome {
            BattleOutcome::Victory => Self::Victory,
            BattleOutcome::Defeat => Self::Defeat,
            BattleOutcome::Fled => Self::Fled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_end_phases_are_terminal() {
        assert!(!BattlePhase::Idle.is_terminal());
        assert!(!BattlePhase::Active.is_terminal());
        for outcome in [BattleOutcome::Victory, BattleOutcome::Defeat, BattleOutcome::Fled] {
            let phase = BattlePhase::from(outcome);
            assert!(phase.is_terminal());
            assert_eq!(phase.outcome(), Some(outcome));
        }
    }
}
