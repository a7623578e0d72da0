//! Sequential integer entity ids.
//!
//! Ids are small integers assigned at creation time as `max(existing) + 1`,
//! which is how the roster and the episode log reference each other on disk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a contestant in the roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContestantId(pub u64);

impl ContestantId {
    /// Next sequential id after the given existing ids.
    pub fn next(existing: impl Iterator<Item = ContestantId>) -> ContestantId {
        ContestantId(existing.map(|id| id.0).max().map_or(1, |m| m + 1))
    }

    /// Get the raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContestantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContestantId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifier for a recorded episode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EpisodeId(pub u64);

impl EpisodeId {
    /// Next sequential id after the given existing ids.
    pub fn next(existing: impl Iterator<Item = EpisodeId>) -> EpisodeId {
        EpisodeId(existing.map(|id| id.0).max().map_or(1, |m| m + 1))
    }

    /// Get the raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EpisodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contestant_id_next_empty() {
        assert_eq!(ContestantId::next(std::iter::empty()), ContestantId(1));
    }

    #[test]
    fn test_contestant_id_next_after_existing() {
        let ids = [ContestantId(1), ContestantId(4), ContestantId(2)];
        assert_eq!(ContestantId::next(ids.into_iter()), ContestantId(5));
    }

    #[test]
    fn test_episode_id_next() {
        assert_eq!(EpisodeId::next(std::iter::empty()), EpisodeId(1));
        let ids = [EpisodeId(7)];
        assert_eq!(EpisodeId::next(ids.into_iter()), EpisodeId(8));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ContestantId(42)), "42");
        assert_eq!(format!("{}", EpisodeId(3)), "3");
    }

    #[test]
    fn test_id_serialization_transparent() {
        let id = ContestantId(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");

        let back: ContestantId = serde_json::from_str("9").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_ordering() {
        assert!(ContestantId(1) < ContestantId(2));
        assert_eq!(ContestantId::from(5).value(), 5);
    }
}
