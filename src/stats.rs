//! Per-user performance aggregation over settled wagers.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::StatsError;
use crate::model::{CategoryId, User, UserId, Wager};
use crate::odds::compute_units;

/// Label used when a category id has no entry in the name mapping.
const UNKNOWN_CATEGORY: &str = "Unknown";

/// A user's single most extreme wager result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrophyWager {
    /// Description of the wager that set the record.
    pub description: String,
    /// Signed units the user took away from it.
    pub units: Decimal,
}

/// Win/loss tally within one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    /// Wagers won in this category.
    pub wins: u32,
    /// Wagers lost in this category.
    pub losses: u32,
}

/// Aggregated performance for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// User identifier.
    pub id: UserId,
    /// User display name.
    pub name: String,
    /// Settled wagers won.
    pub wins: u32,
    /// Settled wagers lost.
    pub losses: u32,
    /// Sum of signed unit results across all settled wagers.
    pub net_units: Decimal,
    /// Largest positive single-wager result, if any.
    pub biggest_upset: Option<TrophyWager>,
    /// Most negative single-wager result, if any.
    pub worst_beat: Option<TrophyWager>,
    /// Win/loss tallies keyed by category name.
    pub by_category: BTreeMap<String, CategoryRecord>,
}

impl UserStats {
    fn zeroed(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            wins: 0,
            losses: 0,
            net_units: Decimal::ZERO,
            biggest_upset: None,
            worst_beat: None,
            by_category: BTreeMap::new(),
        }
    }
}

/// Compute per-user statistics over resolved and redeemed wagers.
///
/// Returns one [`UserStats`] per input user, in input order. Wagers are
/// folded in ascending id order so extremum ties resolve
/// deterministically: the first result encountered keeps the trophy.
///
/// A wager referencing a creator or opponent absent from `users` aborts
/// the whole computation; the snapshot is incoherent and no partial
/// result is produced.
#[instrument(skip_all, fields(users = users.len(), wagers = wagers.len()))]
pub fn compute_stats(
    users: &[User],
    wagers: &[Wager],
    category_names: &HashMap<CategoryId, String>,
) -> Result<Vec<UserStats>, StatsError> {
    let mut stats: Vec<UserStats> = users.iter().map(UserStats::zeroed).collect();
    let index: HashMap<UserId, usize> = users
        .iter()
        .enumerate()
        .map(|(i, user)| (user.id, i))
        .collect();

    let mut settled: Vec<(&Wager, UserId, bool)> = wagers
        .iter()
        .filter_map(|w| w.settlement().map(|(opponent_id, outcome)| (w, opponent_id, outcome)))
        .collect();
    settled.sort_by_key(|(wager, _, _)| wager.id);

    for (wager, opponent_id, outcome) in settled {
        let creator = *index.get(&wager.creator_id).ok_or(StatsError::UnknownUser {
            wager_id: wager.id,
            user_id: wager.creator_id,
        })?;
        let opponent = *index.get(&opponent_id).ok_or(StatsError::UnknownUser {
            wager_id: wager.id,
            user_id: opponent_id,
        })?;

        let units = compute_units(wager.confidence, outcome);
        record_result(&mut stats[creator], &wager.description, units);
        record_result(&mut stats[opponent], &wager.description, -units);

        // The literal outcome decides the category winner; it always
        // agrees with the sign of the creator's units.
        let category = category_names
            .get(&wager.category_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY);
        record_category(&mut stats[creator], category, outcome);
        record_category(&mut stats[opponent], category, !outcome);
    }

    debug!(users = stats.len(), "user statistics computed");
    Ok(stats)
}

fn record_result(stats: &mut UserStats, description: &str, units: Decimal) {
    stats.net_units += units;
    if units > Decimal::ZERO {
        stats.wins += 1;
        match &stats.biggest_upset {
            // Strict inequality: an equal later result keeps the trophy.
            Some(best) if units <= best.units => {}
            _ => {
                stats.biggest_upset = Some(TrophyWager {
                    description: description.to_string(),
                    units,
                })
            }
        }
    } else {
        stats.losses += 1;
        match &stats.worst_beat {
            Some(worst) if units >= worst.units => {}
            _ => {
                stats.worst_beat = Some(TrophyWager {
                    description: description.to_string(),
                    units,
                })
            }
        }
    }
}

fn record_category(stats: &mut UserStats, category: &str, won: bool) {
    let record = stats.by_category.entry(category.to_string()).or_default();
    if won {
        record.wins += 1;
    } else {
        record.losses += 1;
    }
}
