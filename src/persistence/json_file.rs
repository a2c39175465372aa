// Copyright 2025 Cowboy AI, LLC.

//! JSON file state store
//!
//! Persists the durable slice as one JSON blob at a fixed path, the
//! file-system analog of a browser's keyed local storage.

use super::{DurableState, StateStore};
use crate::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// State store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that reads and writes the given path
    ///
    /// The file does not need to exist yet; the first [`StateStore::load`]
    /// then reports an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> DomainResult<Option<DurableState>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::PersistenceError(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        let state = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        Ok(Some(state))
    }

    async fn save(&self, state: &DurableState) -> DomainResult<()> {
        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::PersistenceError(format!(
                    "Failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            DomainError::PersistenceError(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hackathon::{Group, Hackathon};

    #[tokio::test]
    async fn test_missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));

        let mut hackathon = Hackathon::new("Spring Event").unwrap();
        hackathon.add_group(Group::new("Alpha").unwrap());
        let mut state = DurableState::default();
        state.active_hackathon_id = Some(hackathon.id);
        state.hackathons.insert(hackathon.id, hackathon);

        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn test_corrupt_blob_surfaces_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(DomainError::SerializationError(_))
        ));
    }
}
