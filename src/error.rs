//! Unified error types for the settlement core.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{UserId, WagerId};

/// Unified error type for the settlement core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wager validation or lifecycle error.
    #[error("wager error: {0}")]
    Wager(#[from] WagerError),

    /// Statistics aggregation error.
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),
}

/// Wager validation and lifecycle errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WagerError {
    /// Confidence must lie strictly inside (0, 1); the endpoints make
    /// the implied odds ratio undefined.
    #[error("confidence {0} outside the open interval (0, 1)")]
    ConfidenceOutOfRange(Decimal),

    /// Only a pending wager can be accepted.
    #[error("wager {wager_id} is not pending acceptance")]
    NotPending {
        /// The wager that was not pending.
        wager_id: WagerId,
    },

    /// A creator cannot take the other side of their own wager.
    #[error("wager {wager_id} cannot be accepted by its own creator")]
    SelfAcceptance {
        /// The wager the creator tried to accept.
        wager_id: WagerId,
    },

    /// Only an open wager can be resolved.
    #[error("wager {wager_id} is not open for resolution")]
    NotOpen {
        /// The wager that was not open.
        wager_id: WagerId,
    },

    /// Only a resolved wager can be redeemed.
    #[error("wager {wager_id} is not resolved and cannot be redeemed")]
    NotResolved {
        /// The wager that was not resolved.
        wager_id: WagerId,
    },
}

/// Statistics aggregation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A wager references a user id absent from the supplied user set.
    /// The snapshot is incoherent; no partial result is produced.
    #[error("wager {wager_id} references unknown user {user_id}")]
    UnknownUser {
        /// The wager carrying the dangling reference.
        wager_id: WagerId,
        /// The user id with no matching record.
        user_id: UserId,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, CoreError>;
