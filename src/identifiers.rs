// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for hackathons, groups, and criteria

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Hackathon ID - identifies one isolated event instance
///
/// Each hackathon owns its own groups, criteria, and score submissions.
/// Ids are random v4 UUIDs, generated at creation time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HackathonId(Uuid);

impl HackathonId {
    /// Create a new random hackathon ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for HackathonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HackathonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<HackathonId> for Uuid {
    fn from(id: HackathonId) -> Self {
        id.0
    }
}

impl From<&HackathonId> for Uuid {
    fn from(id: &HackathonId) -> Self {
        id.0
    }
}

/// Group ID - only meaningful within a hackathon context
///
/// Groups are not global entities - they're local identifiers within
/// one hackathon. They don't have identity across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Create a new random group ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GroupId> for Uuid {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

impl From<&GroupId> for Uuid {
    fn from(id: &GroupId) -> Self {
        id.0
    }
}

/// Criterion ID - only meaningful within a hackathon context
///
/// Criteria are the named, bounded-scale judging dimensions of one
/// hackathon. Score submissions reference them by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriterionId(Uuid);

impl CriterionId {
    /// Create a new random criterion ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CriterionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CriterionId> for Uuid {
    fn from(id: CriterionId) -> Self {
        id.0
    }
}

impl From<&CriterionId> for Uuid {
    fn from(id: &CriterionId) -> Self {
        id.0
    }
}
