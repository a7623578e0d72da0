//! # Season Tracker
//!
//! A local rating tracker for elimination-show contestants.
//!
//! Ratings follow the logistic pairwise comparison model, but episodes
//! report categorical results (winner, top performer, bottom performer,
//! eliminated) instead of explicit matches; the rating engine converts
//! those categories into per-contestant adjustments.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (contestants, episodes, ids)
//! - **rating**: The rating update engine
//! - **calculate**: Standings and derived metrics computation
//! - **storage**: Flat-file JSONL persistence
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation
//! - **seed**: Sample data for an empty store

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod rating;
pub mod seed;
pub mod storage;

pub use models::*;

/// Parse a comma-separated contestant id list (e.g., "1,4,7").
///
/// An empty string is a valid empty list; any non-numeric entry makes the
/// whole list invalid.
pub fn parse_id_list(s: &str) -> Option<Vec<ContestantId>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(Vec::new());
    }

    s.split(',')
        .map(|part| part.trim().parse::<u64>().ok().map(ContestantId::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_single() {
        assert_eq!(parse_id_list("3"), Some(vec![ContestantId::from(3)]));
    }

    #[test]
    fn test_parse_id_list_multiple() {
        assert_eq!(
            parse_id_list("1,4,7"),
            Some(vec![
                ContestantId::from(1),
                ContestantId::from(4),
                ContestantId::from(7)
            ])
        );
    }

    #[test]
    fn test_parse_id_list_with_spaces() {
        assert_eq!(
            parse_id_list(" 2, 5 "),
            Some(vec![ContestantId::from(2), ContestantId::from(5)])
        );
    }

    #[test]
    fn test_parse_id_list_empty() {
        assert_eq!(parse_id_list(""), Some(Vec::new()));
        assert_eq!(parse_id_list("   "), Some(Vec::new()));
    }

    #[test]
    fn test_parse_id_list_invalid() {
        assert_eq!(parse_id_list("abc"), None);
        assert_eq!(parse_id_list("1,x"), None);
    }

    #[test]
    fn test_parse_id_list_trailing_comma() {
        assert_eq!(parse_id_list("1,2,"), None);
    }
}
