//! Flat-file persistence.
//!
//! JSONL files under the data directory are the system of record:
//! - `contestants.jsonl` — the roster
//! - `episodes.jsonl` — the episode log
//!
//! The rating engine never touches this module. Callers load a roster
//! snapshot, run the engine, and save the result.

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

use tracing::warn;

use crate::models::{Contestant, Episode};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn contestants_path(&self) -> PathBuf {
        self.data_dir.join(EntityType::Contestant.filename())
    }

    pub fn episodes_path(&self) -> PathBuf {
        self.data_dir.join(EntityType::Episode.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read the roster from disk. A missing file is an empty roster.
pub fn load_roster(config: &StorageConfig) -> Result<Vec<Contestant>, StorageError> {
    let roster = JsonlReader::<Contestant>::for_entity(config, EntityType::Contestant).read_all()?;
    for contestant in &roster {
        if let Err(e) = contestant.validate() {
            warn!("Contestant {} failed invariant check: {}", contestant.id, e);
        }
    }
    Ok(roster)
}

/// Replace the stored roster.
pub fn save_roster(config: &StorageConfig, roster: &[Contestant]) -> Result<usize, StorageError> {
    JsonlWriter::<Contestant>::for_entity(config, EntityType::Contestant).write_all(roster)
}

/// Read the episode log from disk. A missing file is an empty log.
pub fn load_episodes(config: &StorageConfig) -> Result<Vec<Episode>, StorageError> {
    JsonlReader::<Episode>::for_entity(config, EntityType::Episode).read_all()
}

/// Replace the stored episode log.
pub fn save_episodes(config: &StorageConfig, episodes: &[Episode]) -> Result<usize, StorageError> {
    JsonlWriter::<Episode>::for_entity(config, EntityType::Episode).write_all(episodes)
}

/// Append one episode to the log.
pub fn append_episode(config: &StorageConfig, episode: &Episode) -> Result<(), StorageError> {
    JsonlWriter::<Episode>::for_entity(config, EntityType::Episode).append(episode)
}
