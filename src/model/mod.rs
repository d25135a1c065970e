//! Record types supplied by the storage collaborator.
//!
//! This module holds:
//! - User, category, and wager records with their identifiers
//! - The validated [`Confidence`] probability newtype
//! - Wager lifecycle transitions (PENDING → OPEN → RESOLVED → REDEEMED)

pub mod types;
pub mod wager;

pub use types::{Category, CategoryId, Confidence, User, UserId, WagerId, WagerStatus};
pub use wager::Wager;
