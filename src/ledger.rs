//! Pairwise debt accumulation over resolved wagers.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::model::{UserId, Wager, WagerStatus};
use crate::odds::compute_units;

/// Label used when a user id has no entry in the name mapping. The
/// ledger is a display artifact and tolerates missing names.
const UNKNOWN_USER: &str = "Unknown";

/// One accumulated debt between two users, in stake units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtEntry {
    /// Display name of the user who owes.
    pub debtor: String,
    /// Display name of the user who is owed.
    pub creditor: String,
    /// Always positive, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// Accumulate pairwise debts across all resolved wagers.
///
/// Only RESOLVED wagers with a matched opponent count; REDEEMED wagers
/// have already been paid out and carry no outstanding debt. Debts in
/// opposite directions between the same two users are reported as two
/// separate entries, never netted against each other.
///
/// Output rows appear in first-appearance order of each (debtor,
/// creditor) pair, so identical input yields identical output.
#[instrument(skip_all, fields(wagers = wagers.len()))]
pub fn compute_debts(wagers: &[Wager], user_names: &HashMap<UserId, String>) -> Vec<DebtEntry> {
    let mut totals: HashMap<(UserId, UserId), Decimal> = HashMap::new();
    let mut order: Vec<(UserId, UserId)> = Vec::new();

    for wager in wagers {
        if wager.status != WagerStatus::Resolved {
            continue;
        }
        let (Some(opponent_id), Some(outcome)) = (wager.opponent_id, wager.outcome) else {
            continue;
        };

        let units = compute_units(wager.confidence, outcome);
        // Positive units mean the creator won and is owed.
        let key = if units > Decimal::ZERO {
            (opponent_id, wager.creator_id)
        } else {
            (wager.creator_id, opponent_id)
        };

        *totals.entry(key).or_insert_with(|| {
            order.push(key);
            Decimal::ZERO
        }) += units.abs();
    }

    let mut entries = Vec::with_capacity(order.len());
    for key in order {
        let total = totals[&key];
        // Totals are sums of positive amounts; filter anyway.
        if total <= Decimal::ZERO {
            continue;
        }
        let mut amount = total.round_dp(2);
        amount.rescale(2);
        entries.push(DebtEntry {
            debtor: display_name(user_names, key.0),
            creditor: display_name(user_names, key.1),
            amount,
        });
    }

    debug!(entries = entries.len(), "debt ledger computed");
    entries
}

fn display_name(user_names: &HashMap<UserId, String>, id: UserId) -> String {
    user_names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Confidence;
    use crate::odds::compute_units as units_for;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const ALICE: UserId = 1;
    const BOB: UserId = 2;
    const CAROL: UserId = 3;

    fn names() -> HashMap<UserId, String> {
        [(ALICE, "Alice"), (BOB, "Bob"), (CAROL, "Carol")]
            .into_iter()
            .map(|(id, name)| (id, name.to_string()))
            .collect()
    }

    fn resolved(
        id: i64,
        creator: UserId,
        opponent: UserId,
        confidence: Decimal,
        outcome: bool,
    ) -> Wager {
        let confidence = Confidence::new(confidence).unwrap();
        let mut wager = Wager::new(id, format!("wager {id}"), creator, 100, confidence);
        wager.accept(opponent).unwrap();
        wager.resolve(outcome).unwrap();
        wager
    }

    fn entry(debtor: &str, creditor: &str, amount: Decimal) -> DebtEntry {
        DebtEntry {
            debtor: debtor.to_string(),
            creditor: creditor.to_string(),
            amount,
        }
    }

    #[test]
    fn favorite_win_costs_opponent_a_flat_unit() {
        // Alice claims at 0.8 and is right: Bob owes the flat unit.
        let wagers = vec![resolved(1, ALICE, BOB, dec!(0.8), true)];
        let debts = compute_debts(&wagers, &names());
        assert_eq!(debts, vec![entry("Bob", "Alice", dec!(1.00))]);
    }

    #[test]
    fn underdog_loss_costs_creator_a_flat_unit() {
        // Alice claims at 0.3 and is wrong: she owes the flat unit.
        let wagers = vec![resolved(1, ALICE, BOB, dec!(0.3), false)];
        let debts = compute_debts(&wagers, &names());
        assert_eq!(debts, vec![entry("Alice", "Bob", dec!(1.00))]);
    }

    #[test]
    fn underdog_win_pays_the_rounded_ratio() {
        // Alice claims at 0.3 and is right: Bob owes 0.7/0.3 ≈ 2.33.
        let wagers = vec![resolved(1, ALICE, BOB, dec!(0.3), true)];
        let debts = compute_debts(&wagers, &names());
        assert_eq!(debts, vec![entry("Bob", "Alice", dec!(2.33))]);
    }

    #[test]
    fn reciprocal_debts_are_not_netted() {
        // Each wins an even-money wager off the other: two entries, not zero.
        let wagers = vec![
            resolved(1, ALICE, BOB, dec!(0.5), true),
            resolved(2, BOB, ALICE, dec!(0.5), true),
        ];
        let debts = compute_debts(&wagers, &names());
        assert_eq!(
            debts,
            vec![
                entry("Bob", "Alice", dec!(1.00)),
                entry("Alice", "Bob", dec!(1.00)),
            ]
        );
    }

    #[test]
    fn same_direction_debts_accumulate() {
        let wagers = vec![
            resolved(1, ALICE, BOB, dec!(0.8), true),
            resolved(2, ALICE, BOB, dec!(0.3), true),
            resolved(3, CAROL, BOB, dec!(0.5), true),
        ];
        let debts = compute_debts(&wagers, &names());
        // Bob owes Alice 1 + 2.333… and Carol a flat unit, pair order
        // following first appearance.
        assert_eq!(
            debts,
            vec![
                entry("Bob", "Alice", dec!(3.33)),
                entry("Bob", "Carol", dec!(1.00)),
            ]
        );
    }

    #[test]
    fn inert_wagers_contribute_nothing() {
        let confidence = Confidence::new(dec!(0.6)).unwrap();

        let pending = Wager::new(1, "still unmatched", ALICE, 100, confidence);

        let mut open = Wager::new(2, "matched, unresolved", ALICE, 100, confidence);
        open.accept(BOB).unwrap();

        let mut redeemed = resolved(3, ALICE, BOB, dec!(0.5), true);
        redeemed.redeem().unwrap();

        let debts = compute_debts(&[pending, open, redeemed], &names());
        assert_eq!(debts, vec![]);
    }

    #[test]
    fn unresolvable_names_use_placeholder() {
        let wagers = vec![resolved(1, ALICE, 99, dec!(0.5), false)];
        let debts = compute_debts(&wagers, &names());
        assert_eq!(debts, vec![entry("Alice", "Unknown", dec!(1.00))]);
    }

    #[test]
    fn entries_are_positive_and_never_self_owed() {
        let wagers = vec![
            resolved(1, ALICE, BOB, dec!(0.9), false),
            resolved(2, BOB, CAROL, dec!(0.25), true),
            resolved(3, CAROL, ALICE, dec!(0.5), false),
        ];
        for debt in compute_debts(&wagers, &names()) {
            assert!(debt.amount > dec!(0));
            assert_ne!(debt.debtor, debt.creditor);
        }
    }

    #[test]
    fn amount_always_matches_absolute_units() {
        // The debtor/creditor branch and the signed-units computation are
        // written independently; check they agree wager by wager.
        for (value, outcome) in [
            (dec!(0.8), true),
            (dec!(0.8), false),
            (dec!(0.3), true),
            (dec!(0.3), false),
            (dec!(0.5), true),
        ] {
            let wagers = vec![resolved(1, ALICE, BOB, value, outcome)];
            let debts = compute_debts(&wagers, &names());
            let expected = units_for(Confidence::new(value).unwrap(), outcome)
                .abs()
                .round_dp(2);
            assert_eq!(debts.len(), 1);
            assert_eq!(debts[0].amount, expected);
        }
    }

    #[test]
    fn empty_input_yields_empty_ledger() {
        assert_eq!(compute_debts(&[], &names()), vec![]);
        assert_eq!(compute_debts(&[], &HashMap::new()), vec![]);
    }
}
