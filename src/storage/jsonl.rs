//! JSONL (JSON Lines) storage.
//!
//! Each line is a valid JSON object representing one entity. Unparseable
//! lines are skipped with a warning rather than failing the whole read.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// Entity types stored as JSONL files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Contestant,
    Episode,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Contestant => "contestants.jsonl",
            EntityType::Episode => "episodes.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.data_dir.join(entity.filename()))
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} entities to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.data_dir.join(entity.filename()))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        name: String,
        value: u32,
    }

    #[test]
    fn test_jsonl_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.jsonl");

        let entities = vec![
            TestEntity {
                id: "1".to_string(),
                name: "First".to_string(),
                value: 100,
            },
            TestEntity {
                id: "2".to_string(),
                name: "Second".to_string(),
                value: 200,
            },
        ];

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let count = writer.write_all(&entities).unwrap();
        assert_eq!(count, 2);

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let read_entities = reader.read_all().unwrap();

        assert_eq!(read_entities.len(), 2);
        assert_eq!(read_entities[0], entities[0]);
        assert_eq!(read_entities[1], entities[1]);
    }

    #[test]
    fn test_jsonl_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("append.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);

        writer
            .append(&TestEntity {
                id: "1".to_string(),
                name: "First".to_string(),
                value: 100,
            })
            .unwrap();
        writer
            .append(&TestEntity {
                id: "2".to_string(),
                name: "Second".to_string(),
                value: 200,
            })
            .unwrap();

        let entities = reader.read_all().unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_jsonl_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let entities = reader.read_all().unwrap();

        assert!(entities.is_empty());
    }

    #[test]
    fn test_write_all_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("overwrite.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);

        writer
            .write_all(&[TestEntity {
                id: "1".to_string(),
                name: "Old".to_string(),
                value: 1,
            }])
            .unwrap();
        assert_eq!(reader.read_all().unwrap().len(), 1);

        writer
            .write_all(&[
                TestEntity {
                    id: "2".to_string(),
                    name: "New1".to_string(),
                    value: 2,
                },
                TestEntity {
                    id: "3".to_string(),
                    name: "New2".to_string(),
                    value: 3,
                },
            ])
            .unwrap();

        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].name, "New1");
    }

    #[test]
    fn test_read_all_skips_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad_lines.jsonl");

        std::fs::write(
            &path,
            r#"{"id":"1","name":"Good","value":1}
not-valid-json
{"id":"2","name":"Also Good","value":2}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let entities = reader.read_all().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Good");
        assert_eq!(entities[1].name, "Also Good");
    }

    #[test]
    fn test_reader_exists() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("exists.jsonl");
        std::fs::write(&present, "").unwrap();

        assert!(JsonlReader::<TestEntity>::new(present).exists());
        assert!(!JsonlReader::<TestEntity>::new(temp_dir.path().join("missing.jsonl")).exists());
    }

    #[test]
    fn test_entity_type_filenames() {
        assert_eq!(EntityType::Contestant.filename(), "contestants.jsonl");
        assert_eq!(EntityType::Episode.filename(), "episodes.jsonl");
    }

    #[test]
    fn test_for_entity_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let writer: JsonlWriter<TestEntity> =
            JsonlWriter::for_entity(&config, EntityType::Contestant);
        assert_eq!(writer.path, config.contestants_path());
    }
}
