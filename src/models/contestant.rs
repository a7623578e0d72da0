//! Contestant model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ContestantId;

/// Violations of the contestant rating-history invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContestantError {
    #[error("rating history must not be empty")]
    EmptyHistory,

    #[error("rating history must start with the initial rating")]
    HistoryBaseline,

    #[error("current rating must equal the last history entry")]
    CurrentMismatch,
}

/// A contestant in the competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    /// Unique identifier (sequential)
    pub id: ContestantId,

    /// Display name
    pub name: String,

    /// Portrait URL for the dashboard
    pub image_url: Option<String>,

    /// Rating the contestant entered the competition with
    pub initial_rating: i64,

    /// Rating after the most recent episode that touched this contestant
    pub current_rating: i64,

    /// Rating after every episode that touched this contestant.
    /// The first entry is always the initial rating.
    pub rating_history: Vec<i64>,
}

impl Contestant {
    /// Create a new contestant with a single-entry history.
    pub fn new(id: ContestantId, name: String, initial_rating: i64) -> Self {
        Self {
            id,
            name,
            image_url: None,
            initial_rating,
            current_rating: initial_rating,
            rating_history: vec![initial_rating],
        }
    }

    /// Builder method to set the portrait URL.
    pub fn with_image_url(mut self, url: String) -> Self {
        self.image_url = Some(url);
        self
    }

    /// Check the rating-history invariants.
    pub fn validate(&self) -> Result<(), ContestantError> {
        let first = *self
            .rating_history
            .first()
            .ok_or(ContestantError::EmptyHistory)?;
        if first != self.initial_rating {
            return Err(ContestantError::HistoryBaseline);
        }
        if self.rating_history.last() != Some(&self.current_rating) {
            return Err(ContestantError::CurrentMismatch);
        }
        Ok(())
    }
}
