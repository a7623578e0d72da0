//! Sample data.
//!
//! The demo roster and premiere episode the dashboard ships with when the
//! store is empty. The premiere is applied through the rating engine so
//! the stored histories are consistent with it.

use chrono::NaiveDate;

use crate::models::{Contestant, ContestantId, Episode, EpisodeId};
use crate::rating::{apply_episode, EpisodeResult};
use crate::storage::{save_episodes, save_roster, StorageConfig, StorageError};

/// The four demo contestants, all starting at 1500.
pub fn sample_roster() -> Vec<Contestant> {
    let names = ["Chef Alex", "Chef Bianca", "Chef Carlos", "Chef Dani"];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Contestant::new(ContestantId(i as u64 + 1), name.to_string(), 1500)
                .with_image_url("/api/placeholder/150/150".to_string())
        })
        .collect()
}

/// The demo premiere: Bianca wins, Carlos goes home.
pub fn premiere_episode() -> Episode {
    Episode::new(
        EpisodeId(1),
        1,
        "Season Premiere".to_string(),
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid premiere date"),
    )
    .with_winners(vec![ContestantId(2)])
    .with_eliminated(vec![ContestantId(3)])
    .with_top_performers(vec![ContestantId(2), ContestantId(4)])
    .with_bottom_performers(vec![ContestantId(1), ContestantId(3)])
}

/// Write the sample roster and premiere episode to the store, replacing
/// whatever is there. Returns the rated roster and the episode log.
pub fn seed_store(
    config: &StorageConfig,
) -> Result<(Vec<Contestant>, Vec<Episode>), StorageError> {
    let roster = sample_roster();
    let episode = premiere_episode();

    let rated = apply_episode(&roster, &EpisodeResult::from(&episode));
    let episodes = vec![episode];

    save_roster(config, &rated)?;
    save_episodes(config, &episodes)?;

    Ok((rated, episodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_episodes, load_roster};
    use tempfile::TempDir;

    #[test]
    fn test_sample_roster_shape() {
        let roster = sample_roster();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].name, "Chef Alex");
        assert_eq!(roster[3].id, ContestantId(4));
        assert!(roster.iter().all(|c| c.current_rating == 1500));
    }

    #[test]
    fn test_seed_store_rates_the_premiere() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let (rated, episodes) = seed_store(&config).unwrap();

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].number, 1);

        let rating = |id: u64| {
            rated
                .iter()
                .find(|c| c.id == ContestantId(id))
                .unwrap()
                .current_rating
        };
        assert_eq!(rating(1), 1484);
        assert_eq!(rating(2), 1532);
        assert_eq!(rating(3), 1436);
        assert_eq!(rating(4), 1516);
    }

    #[test]
    fn test_seed_store_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        seed_store(&config).unwrap();

        let roster = load_roster(&config).unwrap();
        let episodes = load_episodes(&config).unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(episodes.len(), 1);
        assert!(roster.iter().all(|c| c.validate().is_ok()));
    }
}
