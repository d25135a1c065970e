//! Settlement and statistics core for informal wagers.
//!
//! Each wager carries a confidence: the creator's stated probability that
//! their claim is true. Confidence converts to an implied-odds stake in
//! flat "units":
//!
//! ```text
//! confidence 0.8, claim true  → creator wins  1.00 unit  (flat)
//! confidence 0.8, claim false → creator loses 4.00 units (0.8 / 0.2)
//! confidence 0.3, claim true  → creator wins  2.33 units (0.7 / 0.3)
//! confidence 0.3, claim false → creator loses 1.00 unit  (flat)
//! ```
//!
//! The storage layer loads users, categories, and wagers, then calls the
//! two computations independently on the same snapshot:
//!
//! - [`ledger::compute_debts`]: who owes whom, accumulated pairwise over
//!   resolved wagers
//! - [`stats::compute_stats`]: per-user wins, losses, net units, trophy
//!   results, and category breakdowns over resolved and redeemed wagers
//!
//! Both are pure functions over borrowed data; serializing their results
//! to a transport format is the caller's job.
//!
//! # Modules
//!
//! - [`model`]: wager, user, and category records with lifecycle rules
//! - [`odds`]: confidence-to-units conversion
//! - [`ledger`]: pairwise debt accumulation
//! - [`stats`]: per-user performance aggregation
//! - [`error`]: unified error types

pub mod error;
pub mod ledger;
pub mod model;
pub mod odds;
pub mod stats;

pub use error::{CoreError, Result};
pub use ledger::{compute_debts, DebtEntry};
pub use model::{Category, Confidence, User, Wager, WagerStatus};
pub use stats::{compute_stats, UserStats};
