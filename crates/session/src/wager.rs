//! Pre-answer gold wagers.

use battle_core::{AnswerQuality, BattleConfig};

/// Stake level chosen before answering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WagerStake {
    #[default]
    None,
    Low,
    High,
    /// Everything the player can currently afford.
    AllIn,
}

impl WagerStake {
    /// Gold at stake given the configured amounts and the available balance.
    pub fn amount(&self, config: &BattleConfig, available: u32) -> u32 {
        match self {
            Self::None => 0,
            Self::Low => config.wager_low,
            Self::High => config.wager_high,
            Self::AllIn => available,
        }
    }
}

/// Outcome of one settled wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WagerSettlement {
    pub stake: u32,
    /// `+stake` when won, `-stake` when forfeited.
    pub delta: i64,
}

impl WagerSettlement {
    pub fn won(&self) -> bool {
        self.delta > 0
    }
}

/// Pending stake plus the running net across the encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WagerLedger {
    pending: Option<u32>,
    net: i64,
}

impl WagerLedger {
    pub fn pending(&self) -> Option<u32> {
        self.pending
    }

    pub fn net(&self) -> i64 {
        self.net
    }

    pub(crate) fn place(&mut self, stake: u32) {
        self.pending = (stake > 0).then_some(stake);
    }

    /// Settles the pending stake against an answer.
    ///
    /// Perfect and Correct answers double the stake (net `+stake`); anything
    /// else, Partial included, forfeits it.
    pub(crate) fn settle(&mut self, quality: AnswerQuality) -> Option<WagerSettlement> {
        let stake = self.pending.take()?;
        let delta = if quality.is_correct() {
            i64::from(stake)
        } else {
            -i64::from(stake)
        };
        self.net += delta;
        Some(WagerSettlement { stake, delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_once_per_placement() {
        let mut ledger = WagerLedger::default();
        ledger.place(25);

        let won = ledger.settle(AnswerQuality::Perfect).unwrap();
        assert!(won.won());
        assert_eq!(ledger.settle(AnswerQuality::Perfect), None);

        ledger.place(10);
        let lost = ledger.settle(AnswerQuality::Partial).unwrap();
        assert_eq!(lost.delta, -10);
        assert_eq!(ledger.net(), 15);
    }

    #[test]
    fn stake_amounts_follow_config() {
        let config = BattleConfig::default();

        assert_eq!(WagerStake::None.amount(&config, 100), 0);
        assert_eq!(WagerStake::Low.amount(&config, 100), 10);
        assert_eq!(WagerStake::High.amount(&config, 100), 25);
        assert_eq!(WagerStake::AllIn.amount(&config, 73), 73);
    }
}
