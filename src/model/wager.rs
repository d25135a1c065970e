//! Wager records and their lifecycle transitions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::types::{CategoryId, Confidence, UserId, WagerId, WagerStatus};
use crate::error::WagerError;

/// An informal wager between a creator and, once matched, an opponent.
///
/// Created PENDING with no opponent; transitions once to OPEN when an
/// opponent accepts, once to RESOLVED when an outcome is recorded, and
/// optionally once more to REDEEMED when paid out. Confidence is fixed
/// for the wager's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    /// Unique identifier.
    pub id: WagerId,
    /// Free-text description of the claim.
    pub description: String,
    /// User who created the wager. Always set.
    pub creator_id: UserId,
    /// User who took the other side. Unset exactly while PENDING.
    pub opponent_id: Option<UserId>,
    /// Category the wager is filed under.
    pub category_id: CategoryId,
    /// Creator-stated probability that the claim is true.
    pub confidence: Confidence,
    /// Lifecycle state.
    pub status: WagerStatus,
    /// Whether the creator's claim turned out true. Meaningful only once
    /// the wager is RESOLVED or REDEEMED.
    pub outcome: Option<bool>,
    /// When the wager was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Wager {
    /// Create a new pending wager with no opponent and no outcome.
    pub fn new(
        id: WagerId,
        description: impl Into<String>,
        creator_id: UserId,
        category_id: CategoryId,
        confidence: Confidence,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            creator_id,
            opponent_id: None,
            category_id,
            confidence,
            status: WagerStatus::Pending,
            outcome: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Match an opponent against a pending wager (PENDING → OPEN).
    ///
    /// The creator cannot take the other side of their own wager.
    pub fn accept(&mut self, opponent_id: UserId) -> Result<(), WagerError> {
        if self.status != WagerStatus::Pending {
            return Err(WagerError::NotPending { wager_id: self.id });
        }
        if opponent_id == self.creator_id {
            return Err(WagerError::SelfAcceptance { wager_id: self.id });
        }
        self.opponent_id = Some(opponent_id);
        self.status = WagerStatus::Open;
        Ok(())
    }

    /// Record the outcome of an open wager (OPEN → RESOLVED).
    pub fn resolve(&mut self, outcome: bool) -> Result<(), WagerError> {
        if self.status != WagerStatus::Open {
            return Err(WagerError::NotOpen { wager_id: self.id });
        }
        self.outcome = Some(outcome);
        self.status = WagerStatus::Resolved;
        Ok(())
    }

    /// Mark a resolved wager as paid out (RESOLVED → REDEEMED).
    ///
    /// Redeeming changes no computed units; the wager keeps counting for
    /// statistics but drops out of the debt ledger.
    pub fn redeem(&mut self) -> Result<(), WagerError> {
        if self.status != WagerStatus::Resolved {
            return Err(WagerError::NotResolved { wager_id: self.id });
        }
        self.status = WagerStatus::Redeemed;
        Ok(())
    }

    /// Settlement view of the wager: `(opponent_id, outcome)` if it has
    /// been resolved (or redeemed) against a matched opponent.
    ///
    /// Everything else is inert for settlement and statistics and is
    /// skipped by the computations, never treated as an error.
    pub fn settlement(&self) -> Option<(UserId, bool)> {
        if !matches!(self.status, WagerStatus::Resolved | WagerStatus::Redeemed) {
            return None;
        }
        Some((self.opponent_id?, self.outcome?))
    }
}
