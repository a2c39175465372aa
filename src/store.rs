// Copyright 2025 Cowboy AI, LLC.

//! The hackathon store - command surface over the reducer
//!
//! Owns the application state and the injected persistence port. The
//! durable slice is read once at startup and written through after every
//! dispatched command; session transitions never touch persistence.

use crate::commands::HackathonCommand;
use crate::errors::DomainResult;
use crate::hackathon::Hackathon;
use crate::identifiers::HackathonId;
use crate::leaderboard::{compute_leaderboard, Leaderboard};
use crate::persistence::StateStore;
use crate::sample_data::SampleDataGenerator;
use crate::session::{AccessCodes, Session};
use crate::state::AppState;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Single-writer store over the application state
///
/// The UI layer holds one of these, reads immutable snapshots through the
/// accessors, and requests changes via [`HackathonStore::dispatch`] and
/// the session methods. Nothing else ever holds a mutable reference to
/// the state tree.
#[derive(Debug)]
pub struct HackathonStore<S: StateStore> {
    state: AppState,
    codes: AccessCodes,
    persistence: S,
}

impl<S: StateStore> HackathonStore<S> {
    /// Open the store, reading the durable slice once
    ///
    /// A missing slice bootstraps first-run state; a failing or corrupt
    /// read is logged and degrades to first-run state rather than
    /// failing the session. The session always starts at
    /// [`Session::Anonymous`].
    pub async fn open(persistence: S) -> Self {
        Self::with_codes(persistence, AccessCodes::default()).await
    }

    /// Open the store with non-default access codes
    pub async fn with_codes(persistence: S, codes: AccessCodes) -> Self {
        let state = match persistence.load().await {
            Ok(Some(durable)) => AppState::from_durable(durable),
            Ok(None) => AppState::bootstrap(),
            Err(e) => {
                warn!("Failed to load durable state, starting fresh: {e}");
                AppState::bootstrap()
            }
        };
        Self {
            state,
            codes,
            persistence,
        }
    }

    /// Apply a command and write the durable slice through
    ///
    /// A failing save is logged and the store keeps operating in memory
    /// for the rest of the session; the committed state is never rolled
    /// back.
    pub async fn dispatch(&mut self, command: HackathonCommand) {
        debug!(?command, "dispatching command");
        self.state = self.state.apply(&command);
        if let Err(e) = self.persistence.save(&self.state.to_durable()).await {
            warn!("Failed to persist state, continuing in memory: {e}");
        }
    }

    /// Resolve an access code and install the resulting session
    ///
    /// On failure the session is unchanged and the error describes what
    /// to surface: re-prompt for a name on
    /// [`DomainError::NameRequired`](crate::DomainError::NameRequired),
    /// reject otherwise.
    pub fn login(&mut self, code: &str, name: Option<&str>) -> DomainResult<&Session> {
        let session = self.codes.resolve(code, name)?;
        self.state = self.state.apply(&HackathonCommand::Login(session));
        Ok(self.state.session())
    }

    /// Clear the session unconditionally
    pub fn logout(&mut self) {
        self.state = self.state.apply(&HackathonCommand::Logout);
    }

    /// Enter read-only public viewing, no code required
    pub fn view_as_public(&mut self) {
        self.state = self
            .state
            .apply(&HackathonCommand::Login(Session::Public));
    }

    /// Generate sample data for a topic and install it wholesale
    ///
    /// Awaits the generator port; on any failure the error is returned
    /// and existing state is left untouched. On success the active
    /// hackathon's groups and criteria are replaced and its submissions
    /// reset, in one terminal dispatch.
    pub async fn generate_sample_data(
        &mut self,
        generator: &dyn SampleDataGenerator,
        topic: &str,
    ) -> DomainResult<()> {
        let (groups, criteria) = generator.generate(topic).await?.materialize()?;
        self.dispatch(HackathonCommand::SetSampleData { groups, criteria })
            .await;
        Ok(())
    }

    /// Immutable snapshot of the full state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The hackathon registry, in creation order
    pub fn hackathons(&self) -> &IndexMap<HackathonId, Hackathon> {
        self.state.hackathons()
    }

    /// Id of the active hackathon
    pub fn active_hackathon_id(&self) -> Option<HackathonId> {
        self.state.active_hackathon_id()
    }

    /// The active hackathon
    pub fn active_hackathon(&self) -> Option<&Hackathon> {
        self.state.active_hackathon()
    }

    /// The current session
    pub fn session(&self) -> &Session {
        self.state.session()
    }

    /// Leaderboard of the active hackathon
    pub fn leaderboard(&self) -> Leaderboard {
        match self.state.active_hackathon() {
            Some(hackathon) => Leaderboard::for_hackathon(hackathon),
            None => compute_leaderboard(&[], &[], &[]),
        }
    }
}
