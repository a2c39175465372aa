// Copyright 2025 Cowboy AI, LLC.

//! Application state and the pure command reducer
//!
//! [`AppState`] is the single source of truth: the registry of hackathons,
//! the id of the active one, and the current session. All transitions go
//! through [`AppState::apply`], which is pure and total - it never mutates
//! its input and never fails, for any command.

use crate::commands::HackathonCommand;
use crate::hackathon::Hackathon;
use crate::identifiers::HackathonId;
use crate::persistence::DurableState;
use crate::session::Session;
use chrono::Utc;
use indexmap::IndexMap;

/// Name given to the hackathon created on first run
pub const DEFAULT_HACKATHON_NAME: &str = "My Hackathon";

/// The full application state tree
///
/// Owned exclusively by the store; consumers read immutable snapshots and
/// request changes by dispatching commands. Two invariants hold at all
/// times after construction:
///
/// - the registry is never empty,
/// - `active_hackathon_id`, when set, keys an existing registry entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    hackathons: IndexMap<HackathonId, Hackathon>,
    active_hackathon_id: Option<HackathonId>,
    session: Session,
}

impl AppState {
    /// First-run state: one default hackathon, active, no session
    pub fn bootstrap() -> Self {
        let hackathon = default_hackathon();
        let id = hackathon.id;
        let mut hackathons = IndexMap::new();
        hackathons.insert(id, hackathon);
        Self {
            hackathons,
            active_hackathon_id: Some(id),
            session: Session::Anonymous,
        }
    }

    /// Rebuild state from the durable slice
    ///
    /// The session always resets to [`Session::Anonymous`] - it is never
    /// part of the durable slice. A corrupt slice is repaired rather than
    /// rejected: an empty registry falls back to [`AppState::bootstrap`],
    /// and an active id that keys no entry falls back to the first entry.
    pub fn from_durable(durable: DurableState) -> Self {
        if durable.hackathons.is_empty() {
            return Self::bootstrap();
        }
        let active_hackathon_id = durable
            .active_hackathon_id
            .filter(|id| durable.hackathons.contains_key(id))
            .or_else(|| durable.hackathons.keys().next().copied());
        Self {
            hackathons: durable.hackathons,
            active_hackathon_id,
            session: Session::Anonymous,
        }
    }

    /// Extract the durable slice of this state
    pub fn to_durable(&self) -> DurableState {
        DurableState {
            hackathons: self.hackathons.clone(),
            active_hackathon_id: self.active_hackathon_id,
        }
    }

    /// Apply a command, producing the next state
    ///
    /// Pure and total: the input state is untouched and every command
    /// yields a valid next state. Commands whose preconditions do not hold
    /// are silent no-ops by policy, not incidental null-safety:
    ///
    /// | Command | Missed precondition | Result |
    /// |---|---|---|
    /// | `AddCriterion`, `AddGroup`, `SubmitScore`, `SetSampleData` | no active hackathon | unchanged |
    /// | `RemoveCriterion`, `RemoveGroup` | id absent from the active hackathon | unchanged |
    /// | `CreateHackathon` | blank name | unchanged |
    /// | `SwitchHackathon` | id absent from the registry | unchanged |
    /// | `Login`, `Logout` | - | always applied |
    pub fn apply(&self, command: &HackathonCommand) -> Self {
        let mut next = self.clone();
        match command {
            HackathonCommand::AddCriterion(criterion) => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.add_criterion(criterion.clone());
                }
            }
            HackathonCommand::RemoveCriterion(id) => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.remove_criterion(id);
                }
            }
            HackathonCommand::AddGroup(group) => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.add_group(group.clone());
                }
            }
            HackathonCommand::RemoveGroup(id) => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.remove_group(id);
                }
            }
            HackathonCommand::SubmitScore(score) => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.submit_score(score.clone());
                }
            }
            HackathonCommand::SetSampleData { groups, criteria } => {
                if let Some(hackathon) = next.active_hackathon_mut() {
                    hackathon.set_sample_data(groups.clone(), criteria.clone());
                }
            }
            HackathonCommand::CreateHackathon { name } => {
                if let Ok(hackathon) = Hackathon::new(name.clone()) {
                    next.active_hackathon_id = Some(hackathon.id);
                    next.hackathons.insert(hackathon.id, hackathon);
                }
            }
            HackathonCommand::SwitchHackathon(id) => {
                if next.hackathons.contains_key(id) {
                    next.active_hackathon_id = Some(*id);
                }
            }
            HackathonCommand::Login(session) => {
                next.session = session.clone();
            }
            HackathonCommand::Logout => {
                next.session = Session::Anonymous;
            }
        }
        next
    }

    /// The hackathon registry, in creation order
    pub fn hackathons(&self) -> &IndexMap<HackathonId, Hackathon> {
        &self.hackathons
    }

    /// Registry entries sorted newest-first, for event switchers
    pub fn hackathons_by_recency(&self) -> Vec<&Hackathon> {
        let mut all: Vec<&Hackathon> = self.hackathons.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Id of the active hackathon
    pub fn active_hackathon_id(&self) -> Option<HackathonId> {
        self.active_hackathon_id
    }

    /// The active hackathon
    pub fn active_hackathon(&self) -> Option<&Hackathon> {
        self.active_hackathon_id
            .and_then(|id| self.hackathons.get(&id))
    }

    /// The current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn active_hackathon_mut(&mut self) -> Option<&mut Hackathon> {
        let id = self.active_hackathon_id?;
        self.hackathons.get_mut(&id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::bootstrap()
    }
}

fn default_hackathon() -> Hackathon {
    Hackathon {
        id: HackathonId::new(),
        name: DEFAULT_HACKATHON_NAME.to_string(),
        created_at: Utc::now(),
        criteria: Vec::new(),
        groups: Vec::new(),
        scores: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hackathon::{Criterion, Group, Score};
    use std::collections::HashMap;

    #[test]
    fn test_bootstrap_creates_one_active_hackathon() {
        let state = AppState::bootstrap();
        assert_eq!(state.hackathons().len(), 1);
        let active = state.active_hackathon().unwrap();
        assert_eq!(active.name, DEFAULT_HACKATHON_NAME);
        assert_eq!(state.session(), &Session::Anonymous);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let state = AppState::bootstrap();
        let snapshot = state.clone();

        let group = Group::new("Alpha").unwrap();
        let _next = state.apply(&HackathonCommand::AddGroup(group));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_groups_keep_insertion_order_through_add_and_remove() {
        let alpha = Group::new("Alpha").unwrap();
        let beta = Group::new("Beta").unwrap();
        let gamma = Group::new("Gamma").unwrap();

        let state = AppState::bootstrap()
            .apply(&HackathonCommand::AddGroup(alpha.clone()))
            .apply(&HackathonCommand::AddGroup(beta.clone()))
            .apply(&HackathonCommand::AddGroup(gamma.clone()))
            .apply(&HackathonCommand::RemoveGroup(beta.id));

        let names: Vec<&str> = state
            .active_hackathon()
            .unwrap()
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_remove_unknown_id_is_structural_noop() {
        let state = AppState::bootstrap()
            .apply(&HackathonCommand::AddGroup(Group::new("Alpha").unwrap()));
        let next = state.apply(&HackathonCommand::RemoveGroup(
            crate::identifiers::GroupId::new(),
        ));
        assert_eq!(state, next);
    }

    #[test]
    fn test_submit_score_is_strictly_additive() {
        let group = Group::new("Alpha").unwrap();
        let state = AppState::bootstrap().apply(&HackathonCommand::AddGroup(group.clone()));

        let before = state.active_hackathon().unwrap().scores.len();
        let next = state.apply(&HackathonCommand::SubmitScore(Score::new(
            group.id,
            "Pat",
            HashMap::new(),
        )));
        let scores = &next.active_hackathon().unwrap().scores;
        assert_eq!(scores.len(), before + 1);

        // resubmission is not deduplicated
        let again = next.apply(&HackathonCommand::SubmitScore(Score::new(
            group.id,
            "Pat",
            HashMap::new(),
        )));
        assert_eq!(again.active_hackathon().unwrap().scores.len(), before + 2);
    }

    #[test]
    fn test_create_hackathon_archives_previous() {
        let group = Group::new("Alpha").unwrap();
        let criterion = Criterion::new("Innovation", 10).unwrap();
        let state = AppState::bootstrap()
            .apply(&HackathonCommand::AddGroup(group.clone()))
            .apply(&HackathonCommand::AddGroup(Group::new("Beta").unwrap()))
            .apply(&HackathonCommand::AddCriterion(criterion));
        let original_id = state.active_hackathon_id().unwrap();

        let next = state.apply(&HackathonCommand::CreateHackathon {
            name: "Spring Event".to_string(),
        });
        assert_eq!(next.hackathons().len(), 2);
        let active = next.active_hackathon().unwrap();
        assert_eq!(active.name, "Spring Event");
        assert!(active.groups.is_empty());
        assert!(active.criteria.is_empty());
        assert_ne!(next.active_hackathon_id().unwrap(), original_id);

        // the original event is untouched and reachable again
        let back = next.apply(&HackathonCommand::SwitchHackathon(original_id));
        let original = back.active_hackathon().unwrap();
        assert_eq!(original.groups.len(), 2);
        assert_eq!(original.criteria.len(), 1);
    }

    #[test]
    fn test_create_hackathon_with_blank_name_is_noop() {
        let state = AppState::bootstrap();
        let next = state.apply(&HackathonCommand::CreateHackathon {
            name: "   ".to_string(),
        });
        assert_eq!(state, next);
    }

    #[test]
    fn test_switch_to_unknown_hackathon_is_noop() {
        let state = AppState::bootstrap();
        let next = state.apply(&HackathonCommand::SwitchHackathon(HackathonId::new()));
        assert_eq!(state, next);
    }

    #[test]
    fn test_login_and_logout_transition_session() {
        let state = AppState::bootstrap().apply(&HackathonCommand::Login(Session::Judge {
            name: "Pat".to_string(),
        }));
        assert_eq!(state.session().judge_name(), Some("Pat"));

        let state = state.apply(&HackathonCommand::Logout);
        assert_eq!(state.session(), &Session::Anonymous);
    }

    #[test]
    fn test_mutations_without_active_hackathon_are_noops() {
        let state = AppState {
            hackathons: IndexMap::new(),
            active_hackathon_id: None,
            session: Session::Anonymous,
        };
        let next = state.apply(&HackathonCommand::AddGroup(Group::new("Alpha").unwrap()));
        assert_eq!(state, next);
    }

    #[test]
    fn test_durable_round_trip_resets_session() {
        let state = AppState::bootstrap()
            .apply(&HackathonCommand::AddGroup(Group::new("Alpha").unwrap()))
            .apply(&HackathonCommand::Login(Session::Admin));

        let restored = AppState::from_durable(state.to_durable());
        assert_eq!(restored.hackathons(), state.hackathons());
        assert_eq!(restored.active_hackathon_id(), state.active_hackathon_id());
        assert_eq!(restored.session(), &Session::Anonymous);
    }

    #[test]
    fn test_from_durable_repairs_dangling_active_id() {
        let state = AppState::bootstrap();
        let mut durable = state.to_durable();
        durable.active_hackathon_id = Some(HackathonId::new());

        let restored = AppState::from_durable(durable);
        assert_eq!(restored.active_hackathon_id(), state.active_hackathon_id());
    }

    #[test]
    fn test_from_durable_empty_slice_bootstraps() {
        let restored = AppState::from_durable(DurableState::default());
        assert_eq!(restored.hackathons().len(), 1);
        assert!(restored.active_hackathon().is_some());
    }
}
