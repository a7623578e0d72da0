//! Standings calculation.
//!
//! Pure read-only views derived from the roster and the episode log:
//! ranking order, per-episode rating deltas, elimination status. These are
//! recomputed on demand and never stored.

use serde::Serialize;

use crate::models::{Contestant, ContestantId, Episode};

/// One row of the standings table.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsEntry {
    pub rank: u32,
    pub contestant_id: ContestantId,
    pub name: String,
    pub image_url: Option<String>,
    pub rating: i64,
    pub delta: i64,
    pub eliminated: bool,
}

/// Rating change from the most recent episode that touched the contestant.
pub fn rating_delta(contestant: &Contestant) -> i64 {
    let history = &contestant.rating_history;
    if history.len() >= 2 {
        history[history.len() - 1] - history[history.len() - 2]
    } else {
        0
    }
}

/// Whether any recorded episode eliminated the contestant.
pub fn is_eliminated(id: ContestantId, episodes: &[Episode]) -> bool {
    episodes.iter().any(|e| e.eliminates(id))
}

/// Current standings: stable sort by rating descending.
///
/// Contestants with equal ratings keep their roster order.
pub fn standings(roster: &[Contestant], episodes: &[Episode]) -> Vec<StandingsEntry> {
    let mut ordered: Vec<&Contestant> = roster.iter().collect();
    ordered.sort_by_key(|c| std::cmp::Reverse(c.current_rating));

    ordered
        .iter()
        .enumerate()
        .map(|(i, c)| StandingsEntry {
            rank: i as u32 + 1,
            contestant_id: c.id,
            name: c.name.clone(),
            image_url: c.image_url.clone(),
            rating: c.current_rating,
            delta: rating_delta(c),
            eliminated: is_eliminated(c.id, episodes),
        })
        .collect()
}
