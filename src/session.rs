// Copyright 2025 Cowboy AI, LLC.

//! Session roles and access-code resolution
//!
//! Roles are a closed tagged variant consumed via exhaustive matching;
//! there are no stringly-typed role comparisons anywhere in the crate.
//! Access codes are static shared secrets, not real authentication.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// The current session role
///
/// Session state is never persisted durably; every fresh load starts
/// at [`Session::Anonymous`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// No session; the login screen is showing
    Anonymous,
    /// Full configuration and judging rights
    Admin,
    /// Scoring rights, attributed to a named judge
    Judge {
        /// Display name the judge logged in with
        name: String,
    },
    /// Read-only access to live results, no code required
    Public,
}

impl Session {
    /// Whether this session may configure groups and criteria
    pub fn can_configure(&self) -> bool {
        matches!(self, Session::Admin)
    }

    /// Whether this session may submit scores
    pub fn can_judge(&self) -> bool {
        matches!(self, Session::Admin | Session::Judge { .. })
    }

    /// Whether this session may view aggregated results
    pub fn can_view(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }

    /// The judge display name, when logged in as a judge
    pub fn judge_name(&self) -> Option<&str> {
        match self {
            Session::Judge { name } => Some(name),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::Anonymous
    }
}

/// The shared access codes gating the two privileged roles
///
/// These are static shared secrets displayed to event operators; the
/// defaults match the dashboard's published codes. Public viewing needs
/// no code and goes through [`Session::Public`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCodes {
    /// Code granting [`Session::Admin`]
    pub admin: String,
    /// Code granting [`Session::Judge`]; requires a display name
    pub judge: String,
}

impl Default for AccessCodes {
    fn default() -> Self {
        Self {
            admin: "admin123".to_string(),
            judge: "judge123".to_string(),
        }
    }
}

impl AccessCodes {
    /// Resolve an access code (and optional judge name) to a session role
    ///
    /// Codes are compared case-insensitively on the trimmed input. The
    /// judge code additionally requires a non-empty display name; when it
    /// is missing the caller should re-prompt for the name while keeping
    /// the entered code ([`DomainError::NameRequired`]).
    pub fn resolve(&self, code: &str, name: Option<&str>) -> DomainResult<Session> {
        let code = code.trim();
        if code.eq_ignore_ascii_case(&self.admin) {
            return Ok(Session::Admin);
        }
        if code.eq_ignore_ascii_case(&self.judge) {
            let name = name.map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(DomainError::NameRequired);
            }
            return Ok(Session::Judge {
                name: name.to_string(),
            });
        }
        Err(DomainError::InvalidCredentials)
    }
}
