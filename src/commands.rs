// Copyright 2025 Cowboy AI, LLC.

//! Domain commands for the hackathon store
//!
//! Commands represent requests to change state. They are applied by the
//! pure reducer, which is total: a command whose preconditions do not
//! hold leaves the state unchanged rather than failing. See the policy
//! table on [`AppState::apply`](crate::AppState::apply).

use crate::hackathon::{Criterion, Group, Score};
use crate::identifiers::{CriterionId, GroupId, HackathonId};
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Enum wrapper for all commands accepted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HackathonCommand {
    /// Append a criterion to the active hackathon
    AddCriterion(Criterion),
    /// Remove a criterion from the active hackathon by id
    RemoveCriterion(CriterionId),
    /// Append a group to the active hackathon
    AddGroup(Group),
    /// Remove a group from the active hackathon by id
    RemoveGroup(GroupId),
    /// Append a score submission to the active hackathon
    SubmitScore(Score),
    /// Replace the active hackathon's groups and criteria wholesale,
    /// resetting its submissions
    SetSampleData {
        /// Replacement groups
        groups: Vec<Group>,
        /// Replacement criteria
        criteria: Vec<Criterion>,
    },
    /// Create a fresh empty hackathon and make it active, retaining the
    /// previous one as a browsable archive
    CreateHackathon {
        /// Display name of the new event
        name: String,
    },
    /// Make an existing hackathon the active one
    SwitchHackathon(HackathonId),
    /// Install a resolved session role
    Login(Session),
    /// Clear the session unconditionally
    Logout,
}
