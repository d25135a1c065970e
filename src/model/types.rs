//! Identifiers, user and category records, confidence, and wager status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::WagerError;

/// Unique user identifier.
pub type UserId = i64;

/// Unique category identifier.
pub type CategoryId = i64;

/// Unique wager identifier.
pub type WagerId = i64;

/// A participant who can create or accept wagers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Unique display name.
    pub name: String,
}

/// Grouping label for wagers. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Unique display name.
    pub name: String,
}

/// Lifecycle state of a wager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum WagerStatus {
    /// Created, waiting for an opponent.
    Pending,
    /// Matched with an opponent, outcome unknown.
    Open,
    /// Outcome recorded; counts for both the ledger and statistics.
    Resolved,
    /// Paid out. Terminal; still counts for statistics but carries no
    /// outstanding debt.
    Redeemed,
}

/// Creator-stated probability that their claim is true.
///
/// Valid values lie strictly inside (0, 1); the endpoints make the
/// implied odds ratio undefined and are rejected at construction, so the
/// odds model downstream never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Confidence(Decimal);

impl Confidence {
    /// Validate and wrap a probability.
    pub fn new(value: Decimal) -> Result<Self, WagerError> {
        if value <= Decimal::ZERO || value >= Decimal::ONE {
            return Err(WagerError::ConfidenceOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The stated probability.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Probability of the complementary outcome.
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.0
    }

    /// Whether the creator claims the more likely side (p >= 0.5).
    /// Exactly 0.5 counts as the favorite side: ratio 1, a fair bet.
    pub fn is_favorite(&self) -> bool {
        self.0 >= Decimal::new(5, 1)
    }
}

impl TryFrom<Decimal> for Confidence {
    type Error = WagerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
