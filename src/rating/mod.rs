//! Rating update engine.
//!
//! Converts an episode's categorical results (winner, top performer,
//! bottom performer, eliminated) into rating adjustments for every
//! affected contestant. The engine is pure: it takes a roster snapshot,
//! returns a new one, and keeps no state between calls. Persistence and
//! presentation live elsewhere.
//!
//! Every expectation is evaluated between *pre-episode* ratings on both
//! sides, so each opponent contributes a fixed increment and the order
//! contestants are processed in cannot bias the result. The increments
//! land sequentially on the contestant's working rating (rounded at each
//! step), and that working rating carries from one category pass into the
//! next when a contestant appears in several categories.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Contestant, ContestantId, Episode};

/// Maximum rating swing per single pairwise comparison.
pub const K_FACTOR: f64 = 32.0;

/// Outcome value credited per opponent, by category.
const WIN_SCORE: f64 = 1.0;
const TOP_SCORE: f64 = 0.75;
const BOTTOM_SCORE: f64 = 0.25;
const ELIMINATED_SCORE: f64 = 0.0;

/// Probability-weighted expected outcome for rating `a` against rating `b`.
///
/// Returns 0.5 at equal ratings and stays strictly inside (0, 1) for
/// finite inputs.
pub fn expected_score(a: f64, b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((b - a) / 400.0))
}

/// One episode's categorical results: the engine's input.
///
/// The four lists keep their submission order and are not required to be
/// disjoint. A contestant named in several lists chains one adjustment
/// pass per list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub winners: Vec<ContestantId>,
    pub eliminated: Vec<ContestantId>,
    pub top_performers: Vec<ContestantId>,
    pub bottom_performers: Vec<ContestantId>,
}

impl EpisodeResult {
    /// True when no contestant is named in any category.
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
            && self.eliminated.is_empty()
            && self.top_performers.is_empty()
            && self.bottom_performers.is_empty()
    }
}

impl From<&Episode> for EpisodeResult {
    fn from(episode: &Episode) -> Self {
        Self {
            winners: episode.winners.clone(),
            eliminated: episode.eliminated.clone(),
            top_performers: episode.top_performers.clone(),
            bottom_performers: episode.bottom_performers.clone(),
        }
    }
}

/// Apply an episode's results to the roster, returning the updated roster.
///
/// The input roster is the pre-episode baseline: passes mutate only the
/// returned copy, so every opponent lookup below reads frozen ratings.
/// Category passes run winners, then top performers (minus winners), then
/// bottom performers, then eliminated; group members iterate in submitted
/// list order and opponents in roster order. Ids that match no roster
/// member are skipped. Contestants the episode never names come back
/// unchanged, and every touched contestant gains exactly one history
/// entry: the final post-episode rating.
pub fn apply_episode(roster: &[Contestant], result: &EpisodeResult) -> Vec<Contestant> {
    let mut updated: Vec<Contestant> = roster.to_vec();
    let mut touched: HashSet<ContestantId> = HashSet::new();

    // Winners score a full win against everyone outside the top-performer
    // group.
    for &id in &result.winners {
        let Some(own) = baseline_of(roster, id) else {
            continue;
        };
        let opponents = opponent_ratings(roster, |c| {
            !result.top_performers.contains(&c.id) && c.id != id
        });
        run_pass(&mut updated, &mut touched, id, own, &opponents, WIN_SCORE);
    }

    // Top performers that did not also win score against the bottom group.
    for &id in &result.top_performers {
        if result.winners.contains(&id) {
            continue;
        }
        let Some(own) = baseline_of(roster, id) else {
            continue;
        };
        let opponents =
            opponent_ratings(roster, |c| result.bottom_performers.contains(&c.id));
        run_pass(&mut updated, &mut touched, id, own, &opponents, TOP_SCORE);
    }

    // Bottom performers score against winners and top performers.
    for &id in &result.bottom_performers {
        let Some(own) = baseline_of(roster, id) else {
            continue;
        };
        let opponents = opponent_ratings(roster, |c| {
            result.top_performers.contains(&c.id) || result.winners.contains(&c.id)
        });
        run_pass(&mut updated, &mut touched, id, own, &opponents, BOTTOM_SCORE);
    }

    // Eliminated contestants lose to everyone left in the competition.
    for &id in &result.eliminated {
        let Some(own) = baseline_of(roster, id) else {
            continue;
        };
        let opponents = opponent_ratings(roster, |c| {
            !result.eliminated.contains(&c.id) && c.id != id
        });
        run_pass(
            &mut updated,
            &mut touched,
            id,
            own,
            &opponents,
            ELIMINATED_SCORE,
        );
    }

    for contestant in &mut updated {
        if touched.contains(&contestant.id) {
            let rating = contestant.current_rating;
            contestant.rating_history.push(rating);
        }
    }

    updated
}

/// Pre-episode rating of a roster member, if present.
fn baseline_of(roster: &[Contestant], id: ContestantId) -> Option<i64> {
    roster.iter().find(|c| c.id == id).map(|c| c.current_rating)
}

/// Baseline ratings of roster members matching the filter, in roster order.
fn opponent_ratings<F>(roster: &[Contestant], keep: F) -> Vec<i64>
where
    F: Fn(&Contestant) -> bool,
{
    roster
        .iter()
        .filter(|c| keep(c))
        .map(|c| c.current_rating)
        .collect()
}

/// Run one category pass for a single contestant: fold its working rating
/// over the opponent set, rounding after each opponent.
fn run_pass(
    updated: &mut [Contestant],
    touched: &mut HashSet<ContestantId>,
    id: ContestantId,
    own_baseline: i64,
    opponents: &[i64],
    outcome: f64,
) {
    let Some(contestant) = updated.iter_mut().find(|c| c.id == id) else {
        return;
    };

    let own = own_baseline as f64;
    contestant.current_rating = opponents.iter().fold(contestant.current_rating, |rating, &opp| {
        (rating as f64 + K_FACTOR * (outcome - expected_score(own, opp as f64))).round() as i64
    });
    touched.insert(id);
}
