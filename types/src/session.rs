//! The redemption flow, modeled as one explicit state machine over the
//! session ledger (balance, redeemed-set, history) instead of a handful of
//! independent booleans. Rendering lives elsewhere; everything here is
//! plain data and transitions.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::redemption::RedemptionEntry;
use crate::redemption::RedemptionStatus;
use crate::reward::Reward;
use crate::reward::RewardId;

/// Why a confirmation was refused. The ledger is never mutated on an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedeemError {
    #[error("{missing} more points needed ({cost} required, {balance} available)")]
    InsufficientBalance {
        cost: u32,
        balance: u32,
        missing: u32,
    },
    #[error("reward was already redeemed this session")]
    AlreadyRedeemed,
    #[error("no redemption is awaiting confirmation for this reward")]
    NothingPending,
}

/// Where the flow currently is.
///
/// `Success` and `Rejected` are transient notices. Each carries a serial;
/// [`RedemptionSession::dismiss_notice`] only clears a notice whose serial
/// matches, so a dismiss timer left over from a superseded notice cannot
/// blank the one currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RedeemFlow {
    #[default]
    Idle,
    /// A reward was selected; waiting for confirm or cancel.
    Pending(RewardId),
    Success {
        reward: RewardId,
        serial: u64,
    },
    Rejected {
        reward: RewardId,
        error: RedeemError,
        serial: u64,
    },
}

/// In-memory session state for the rewards screen. Resets on reload; no
/// persistence exists in this scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionSession {
    balance: u32,
    redeemed: BTreeSet<RewardId>,
    /// Newest first.
    history: Vec<RedemptionEntry>,
    flow: RedeemFlow,
    notice_serial: u64,
    next_entry_id: u64,
}

impl RedemptionSession {
    /// Starts a session from the given balance and history seed (newest
    /// first). Entry ids for new redemptions continue past the seed's.
    pub fn new(balance: u32, history: Vec<RedemptionEntry>) -> Self {
        let next_entry_id = history.iter().map(|e| e.id + 1).max().unwrap_or(1);
        Self {
            balance,
            redeemed: BTreeSet::new(),
            history,
            flow: RedeemFlow::Idle,
            notice_serial: 0,
            next_entry_id,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn history(&self) -> &[RedemptionEntry] {
        &self.history
    }

    pub fn flow(&self) -> &RedeemFlow {
        &self.flow
    }

    pub fn is_redeemed(&self, id: RewardId) -> bool {
        self.redeemed.contains(&id)
    }

    pub fn can_afford(&self, reward: &Reward) -> bool {
        self.balance >= reward.points_cost
    }

    /// Whether this reward's card is the one awaiting confirmation.
    pub fn is_pending(&self, id: RewardId) -> bool {
        self.flow == RedeemFlow::Pending(id)
    }

    /// Selects a reward for redemption, entering `Pending`. No balance
    /// validation happens here (the view disables unaffordable buttons);
    /// an already-redeemed id is refused so it can never re-enter the
    /// confirmation step.
    pub fn request_redeem(&mut self, id: RewardId) {
        if self.is_redeemed(id) {
            return;
        }
        self.flow = RedeemFlow::Pending(id);
    }

    /// Discards a pending selection. Never touches the ledger.
    pub fn cancel(&mut self) {
        if matches!(self.flow, RedeemFlow::Pending(_)) {
            self.flow = RedeemFlow::Idle;
        }
    }

    /// Confirms the pending redemption of `reward`, dated `today`.
    ///
    /// On success the cost is deducted, the id enters the redeemed-set and
    /// a `Completed` entry is prepended to the history. On any error the
    /// ledger is unchanged and the flow moves to `Rejected` so the view can
    /// show why, rather than silently dropping back to idle.
    pub fn confirm(&mut self, reward: &Reward, today: NaiveDate) -> Result<(), RedeemError> {
        if let Err(error) = self.check_confirmable(reward) {
            self.flow = RedeemFlow::Rejected {
                reward: reward.id,
                error,
                serial: self.next_serial(),
            };
            return Err(error);
        }

        self.balance -= reward.points_cost;
        self.redeemed.insert(reward.id);
        self.history.insert(
            0,
            RedemptionEntry {
                id: self.next_entry_id,
                reward_name: reward.name.clone(),
                date: today,
                points_cost: reward.points_cost,
                status: RedemptionStatus::Completed,
            },
        );
        self.next_entry_id += 1;
        self.flow = RedeemFlow::Success {
            reward: reward.id,
            serial: self.next_serial(),
        };
        Ok(())
    }

    /// Clears the Success/Rejected notice identified by `serial`. A stale
    /// serial (from a notice that has since been superseded) is ignored.
    pub fn dismiss_notice(&mut self, serial: u64) {
        let current = match self.flow {
            RedeemFlow::Success { serial, .. } | RedeemFlow::Rejected { serial, .. } => serial,
            _ => return,
        };
        if current == serial {
            self.flow = RedeemFlow::Idle;
        }
    }

    fn check_confirmable(&self, reward: &Reward) -> Result<(), RedeemError> {
        if self.flow != RedeemFlow::Pending(reward.id) {
            return Err(RedeemError::NothingPending);
        }
        if self.is_redeemed(reward.id) {
            return Err(RedeemError::AlreadyRedeemed);
        }
        if self.balance < reward.points_cost {
            return Err(RedeemError::InsufficientBalance {
                cost: reward.points_cost,
                balance: self.balance,
                missing: reward.points_cost - self.balance,
            });
        }
        Ok(())
    }

    fn next_serial(&mut self) -> u64 {
        self.notice_serial += 1;
        self.notice_serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardCategory;

    fn reward(id: u32, cost: u32) -> Reward {
        Reward {
            id: RewardId(id),
            name: format!("Reward {id}"),
            description: "A test reward".into(),
            points_cost: cost,
            category: RewardCategory::Food,
            image: "/assets/img/rewards/test.jpg".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn successful_confirm_deducts_and_records() {
        let mut session = RedemptionSession::new(120, vec![]);
        let r = reward(1, 100);

        session.request_redeem(r.id);
        assert!(session.is_pending(r.id));

        session.confirm(&r, today()).unwrap();

        assert_eq!(session.balance(), 20);
        assert!(session.is_redeemed(r.id));
        let entry = &session.history()[0];
        assert_eq!(entry.reward_name, r.name);
        assert_eq!(entry.points_cost, 100);
        assert_eq!(entry.date, today());
        assert_eq!(entry.status, RedemptionStatus::Completed);
        assert!(matches!(
            session.flow(),
            RedeemFlow::Success { reward, .. } if *reward == r.id
        ));
    }

    #[test]
    fn insufficient_balance_leaves_ledger_untouched() {
        let mut session = RedemptionSession::new(50, vec![]);
        let r = reward(1, 100);

        session.request_redeem(r.id);
        let err = session.confirm(&r, today()).unwrap_err();

        assert_eq!(
            err,
            RedeemError::InsufficientBalance {
                cost: 100,
                balance: 50,
                missing: 50
            }
        );
        assert_eq!(session.balance(), 50);
        assert!(!session.is_redeemed(r.id));
        assert!(session.history().is_empty());
        assert!(matches!(
            session.flow(),
            RedeemFlow::Rejected { reward, error, .. }
                if *reward == r.id && *error == err
        ));
    }

    #[test]
    fn cancel_never_mutates_the_ledger() {
        let seed = vec![RedemptionEntry {
            id: 7,
            reward_name: "Seeded".into(),
            date: today(),
            points_cost: 30,
            status: RedemptionStatus::Completed,
        }];
        let mut session = RedemptionSession::new(120, seed.clone());

        session.request_redeem(RewardId(1));
        session.cancel();

        assert_eq!(*session.flow(), RedeemFlow::Idle);
        assert_eq!(session.balance(), 120);
        assert_eq!(session.history(), seed.as_slice());
        assert!(!session.is_redeemed(RewardId(1)));

        // Cancel outside Pending is a no-op too.
        session.cancel();
        assert_eq!(*session.flow(), RedeemFlow::Idle);
    }

    #[test]
    fn redeemed_id_cannot_reenter_pending() {
        let mut session = RedemptionSession::new(200, vec![]);
        let r = reward(1, 100);

        session.request_redeem(r.id);
        session.confirm(&r, today()).unwrap();

        session.request_redeem(r.id);
        assert!(!session.is_pending(r.id));
    }

    #[test]
    fn confirm_without_matching_pending_is_rejected() {
        let mut session = RedemptionSession::new(120, vec![]);
        let selected = reward(1, 100);
        let other = reward(2, 50);

        let err = session.confirm(&other, today()).unwrap_err();
        assert_eq!(err, RedeemError::NothingPending);
        assert_eq!(session.balance(), 120);

        session.request_redeem(selected.id);
        let err = session.confirm(&other, today()).unwrap_err();
        assert_eq!(err, RedeemError::NothingPending);
        assert_eq!(session.balance(), 120);
        assert!(session.history().is_empty());
    }

    #[test]
    fn stale_dismiss_is_ignored() {
        let mut session = RedemptionSession::new(300, vec![]);
        let first = reward(1, 100);
        let second = reward(2, 100);

        session.request_redeem(first.id);
        session.confirm(&first, today()).unwrap();
        let RedeemFlow::Success { serial: stale, .. } = *session.flow() else {
            panic!("expected success notice");
        };

        // A second redemption inside the dismiss window supersedes the
        // first notice.
        session.request_redeem(second.id);
        session.confirm(&second, today()).unwrap();
        let RedeemFlow::Success {
            serial: current, ..
        } = *session.flow()
        else {
            panic!("expected success notice");
        };
        assert_ne!(stale, current);

        session.dismiss_notice(stale);
        assert!(matches!(session.flow(), RedeemFlow::Success { .. }));

        session.dismiss_notice(current);
        assert_eq!(*session.flow(), RedeemFlow::Idle);
    }

    #[test]
    fn history_stays_newest_first() {
        let mut session = RedemptionSession::new(300, vec![]);
        let first = reward(1, 100);
        let second = reward(2, 50);

        session.request_redeem(first.id);
        session.confirm(&first, today()).unwrap();
        session.request_redeem(second.id);
        session.confirm(&second, today()).unwrap();

        let names: Vec<_> = session
            .history()
            .iter()
            .map(|e| e.reward_name.as_str())
            .collect();
        assert_eq!(names, vec!["Reward 2", "Reward 1"]);
    }

    #[test]
    fn entry_ids_continue_past_the_seed() {
        let seed = vec![
            RedemptionEntry {
                id: 12,
                reward_name: "Newest seeded".into(),
                date: today(),
                points_cost: 10,
                status: RedemptionStatus::Completed,
            },
            RedemptionEntry {
                id: 11,
                reward_name: "Older seeded".into(),
                date: today(),
                points_cost: 10,
                status: RedemptionStatus::Completed,
            },
        ];
        let mut session = RedemptionSession::new(120, seed);
        let r = reward(1, 100);

        session.request_redeem(r.id);
        session.confirm(&r, today()).unwrap();

        assert_eq!(session.history()[0].id, 13);
    }

    #[test]
    fn rejected_notice_dismisses_by_serial() {
        let mut session = RedemptionSession::new(50, vec![]);
        let r = reward(1, 100);

        session.request_redeem(r.id);
        session.confirm(&r, today()).unwrap_err();
        let RedeemFlow::Rejected { serial, .. } = *session.flow() else {
            panic!("expected rejected notice");
        };

        session.dismiss_notice(serial + 1);
        assert!(matches!(session.flow(), RedeemFlow::Rejected { .. }));
        session.dismiss_notice(serial);
        assert_eq!(*session.flow(), RedeemFlow::Idle);
    }
}
