//! Episode model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ContestantId, EpisodeId};

/// A recorded episode with its categorical results.
///
/// Episodes are immutable once recorded. The four result lists keep their
/// submission order and are not required to be disjoint; a contestant may
/// legally appear in more than one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique identifier (sequential)
    pub id: EpisodeId,

    /// Episode number as aired
    pub number: u32,

    /// Episode title
    pub title: String,

    /// Date the episode was recorded in the tracker
    pub date: NaiveDate,

    /// Contestants who won the episode
    pub winners: Vec<ContestantId>,

    /// Contestants eliminated this episode
    pub eliminated: Vec<ContestantId>,

    /// Contestants called out as top performers
    pub top_performers: Vec<ContestantId>,

    /// Contestants called out as bottom performers
    pub bottom_performers: Vec<ContestantId>,
}

impl Episode {
    /// Create a new episode with empty result lists.
    pub fn new(id: EpisodeId, number: u32, title: String, date: NaiveDate) -> Self {
        Self {
            id,
            number,
            title,
            date,
            winners: Vec::new(),
            eliminated: Vec::new(),
            top_performers: Vec::new(),
            bottom_performers: Vec::new(),
        }
    }

    /// Builder method to set the winners.
    pub fn with_winners(mut self, winners: Vec<ContestantId>) -> Self {
        self.winners = winners;
        self
    }

    /// Builder method to set the eliminated contestants.
    pub fn with_eliminated(mut self, eliminated: Vec<ContestantId>) -> Self {
        self.eliminated = eliminated;
        self
    }

    /// Builder method to set the top performers.
    pub fn with_top_performers(mut self, top_performers: Vec<ContestantId>) -> Self {
        self.top_performers = top_performers;
        self
    }

    /// Builder method to set the bottom performers.
    pub fn with_bottom_performers(mut self, bottom_performers: Vec<ContestantId>) -> Self {
        self.bottom_performers = bottom_performers;
        self
    }

    /// Whether any result list names the given contestant.
    pub fn touches(&self, id: ContestantId) -> bool {
        self.winners.contains(&id)
            || self.eliminated.contains(&id)
            || self.top_performers.contains(&id)
            || self.bottom_performers.contains(&id)
    }

    /// Whether this episode eliminated the given contestant.
    pub fn eliminates(&self, id: ContestantId) -> bool {
        self.eliminated.contains(&id)
    }
}
