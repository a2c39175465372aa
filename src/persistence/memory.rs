// Copyright 2025 Cowboy AI, LLC.

//! In-memory state store
//!
//! Keeps the durable slice in a process-local blob. Used by tests and by
//! ephemeral sessions that accept losing their data on exit.

use super::{DurableState, StateStore};
use crate::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State store backed by process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    blob: Arc<RwLock<Option<DurableState>>>,
}

impl MemoryStateStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a durable slice
    pub fn with_state(state: DurableState) -> Self {
        Self {
            blob: Arc::new(RwLock::new(Some(state))),
        }
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self) -> DomainResult<Option<DurableState>> {
        Ok(self.blob.read().await.clone())
    }

    async fn save(&self, state: &DurableState) -> DomainResult<()> {
        *self.blob.write().await = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hackathon::Hackathon;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStateStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        let hackathon = Hackathon::new("Spring Event").unwrap();
        let mut state = DurableState::default();
        state.active_hackathon_id = Some(hackathon.id);
        state.hackathons.insert(hackathon.id, hackathon);

        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));
    }
}
