//! Implied-odds conversion from stated confidence to stake units.

use rust_decimal::Decimal;

use crate::model::Confidence;

/// Stake multiplier implied by a stated confidence.
///
/// Quoted from the creator's side: `p / (1 - p)` when the creator claims
/// the favorite (p >= 0.5), `(1 - p) / p` when they claim the underdog.
pub fn odds_ratio(confidence: Confidence) -> Decimal {
    if confidence.is_favorite() {
        confidence.value() / confidence.complement()
    } else {
        confidence.complement() / confidence.value()
    }
}

/// Signed unit result credited to the wager's creator.
///
/// The side claiming the less likely event risks a flat unit to win the
/// implied-odds payout; the side claiming the more likely event risks the
/// payout to win a flat unit. A confidence of exactly 0.5 lands in the
/// favorite branch with ratio 1, an even-money wager.
///
/// The opponent's result for the same wager is always the exact negation,
/// so every settled wager is zero-sum. Neither branch can yield zero.
pub fn compute_units(confidence: Confidence, outcome: bool) -> Decimal {
    let ratio = odds_ratio(confidence);
    match (confidence.is_favorite(), outcome) {
        // Favorite side: flat unit to win, ratio at risk.
        (true, true) => Decimal::ONE,
        (true, false) => -ratio,
        // Underdog side: ratio to win, flat unit at risk.
        (false, true) => ratio,
        (false, false) => Decimal::NEGATIVE_ONE,
    }
}
