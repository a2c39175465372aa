// Copyright 2025 Cowboy AI, LLC.

//! # Persistence Layer
//!
//! Stores the durable slice of the application state as a single
//! serialized blob behind the [`StateStore`] port. The port is injected
//! into the store rather than reached for globally, so the domain can be
//! exercised in-memory without a real storage backend.
//!
//! The durable slice deliberately excludes session state: roles reset on
//! every fresh load.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStateStore;

use crate::errors::DomainResult;
use crate::hackathon::Hackathon;
use crate::identifiers::HackathonId;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The durable slice of the application state
///
/// This is the exact shape of the persisted blob: the hackathon registry
/// and the active id, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurableState {
    /// Every known hackathon, in creation order
    pub hackathons: IndexMap<HackathonId, Hackathon>,
    /// Id of the hackathon currently being configured/judged/viewed
    pub active_hackathon_id: Option<HackathonId>,
}

/// Port for loading and saving the durable slice
///
/// Implementations must treat `load` and `save` as potentially slow or
/// failing; the store reads once at startup and writes through after
/// every committed state change, logging (not propagating) save failures.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the durable slice, or `None` when nothing was saved yet
    async fn load(&self) -> DomainResult<Option<DurableState>>;

    /// Persist the durable slice, replacing any previous snapshot
    async fn save(&self, state: &DurableState) -> DomainResult<()>;
}
