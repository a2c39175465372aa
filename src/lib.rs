// Copyright 2025 Cowboy AI, LLC.

//! # Hackathon Domain
//!
//! Domain core for a browser-resident hackathon judging dashboard: the
//! state store that tracks concurrent hackathon events, the role-gated
//! command surface, and the leaderboard aggregation engine.
//!
//! This crate provides the fundamental building blocks:
//! - **Entities**: Hackathon, Group, Criterion, and Score value objects
//! - **Session Roles**: A closed tagged variant resolved from static access codes
//! - **Commands**: Requests to change state, applied by a pure reducer
//! - **State**: The single source of truth, transitioned immutably
//! - **Leaderboard**: Ranked, averaged read model derived from raw submissions
//! - **Persistence Port**: The durable slice behind an injected load/save port
//! - **Sample-Data Port**: An external generator proposing event setups
//!
//! ## Design Principles
//!
//! 1. **Purity**: The reducer is a total function `(state, command) -> state`;
//!    it never performs I/O, never suspends, and never throws
//! 2. **Immutability**: Consumers receive snapshots; all changes go through
//!    command dispatch
//! 3. **Isolation**: Each hackathon owns its groups, criteria, and scores;
//!    mutations apply only to the active event
//! 4. **Explicit Boundaries**: Persistence and sample-data generation are
//!    injected async ports that fail loudly and never corrupt committed state

#![warn(missing_docs)]

mod commands;
mod errors;
mod hackathon;
mod identifiers;
mod leaderboard;
mod sample_data;
mod session;
mod state;
mod store;
pub mod persistence;

// Re-export core types
pub use commands::HackathonCommand;
pub use errors::{DomainError, DomainResult};
pub use hackathon::{Criterion, Group, Hackathon, Score};
pub use identifiers::{CriterionId, GroupId, HackathonId};
pub use leaderboard::{compute_leaderboard, CriterionAverage, Leaderboard, RankedGroup};
pub use persistence::{DurableState, JsonFileStore, MemoryStateStore, StateStore};
pub use sample_data::{
    CriterionSeed, FixtureGenerator, GroupSeed, SampleData, SampleDataGenerator,
    UnconfiguredGenerator,
};
pub use session::{AccessCodes, Session};
pub use state::{AppState, DEFAULT_HACKATHON_NAME};
pub use store::HackathonStore;
