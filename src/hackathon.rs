// Copyright 2025 Cowboy AI, LLC.

//! Hackathon aggregate and its value objects
//!
//! A Hackathon is the unit of isolation: it owns its judging criteria, its
//! competing groups, and the append-only sequence of score submissions.
//! All mutations are scoped to exactly one hackathon.

use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{CriterionId, GroupId, HackathonId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named, bounded-scale judging dimension
///
/// Criteria are immutable once created; the only lifecycle operation after
/// creation is removal from their hackathon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique identifier of this criterion
    pub id: CriterionId,
    /// Display name, e.g. "Innovation" or "Technical Complexity"
    pub name: String,
    /// Maximum score a judge may award on this criterion
    pub max_score: u32,
}

impl Criterion {
    /// Create a criterion with a fresh id
    ///
    /// The name must be non-empty after trimming and the maximum score
    /// must be positive.
    pub fn new(name: impl Into<String>, max_score: u32) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Criterion name must not be empty".to_string(),
            ));
        }
        if max_score == 0 {
            return Err(DomainError::ValidationError(
                "Criterion max score must be positive".to_string(),
            ));
        }
        Ok(Self {
            id: CriterionId::new(),
            name,
            max_score,
        })
    }
}

/// A competing team being judged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier of this group
    pub id: GroupId,
    /// Display name of the team
    pub name: String,
}

impl Group {
    /// Create a group with a fresh id
    ///
    /// The name must be non-empty after trimming.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Group name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: GroupId::new(),
            name,
        })
    }
}

/// One judge's full rubric entry for one group
///
/// Score submissions are append-only: they are never mutated or deleted,
/// and nothing deduplicates resubmissions from the same judge. Each
/// submission counts once toward the group's judge count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// The group this submission is for
    pub group_id: GroupId,
    /// Display name of the submitting judge
    pub judge_name: String,
    /// Awarded values keyed by criterion id
    pub values: HashMap<CriterionId, f64>,
}

impl Score {
    /// Create a submission from a raw value mapping
    ///
    /// No validation against the criteria set happens here; this is the
    /// reducer-level path. Use [`Score::validated`] at the edge where
    /// submissions enter the system.
    pub fn new(
        group_id: GroupId,
        judge_name: impl Into<String>,
        values: HashMap<CriterionId, f64>,
    ) -> Self {
        Self {
            group_id,
            judge_name: judge_name.into(),
            values,
        }
    }

    /// Create a submission checked against the current criteria set
    ///
    /// Every key in `values` must reference a criterion in `criteria`;
    /// unknown ids are rejected. Finite values are clamped into
    /// `[0, max_score]`; non-finite values are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hackathon_domain::{Criterion, GroupId, Score};
    /// use std::collections::HashMap;
    ///
    /// let innovation = Criterion::new("Innovation", 10).unwrap();
    /// let group_id = GroupId::new();
    ///
    /// let mut values = HashMap::new();
    /// values.insert(innovation.id, 14.0);
    ///
    /// let score = Score::validated(group_id, "Pat", values, &[innovation.clone()]).unwrap();
    /// // 14 exceeds the maximum of 10 and is clamped
    /// assert_eq!(score.values[&innovation.id], 10.0);
    /// ```
    pub fn validated(
        group_id: GroupId,
        judge_name: impl Into<String>,
        values: HashMap<CriterionId, f64>,
        criteria: &[Criterion],
    ) -> DomainResult<Self> {
        let mut checked = HashMap::with_capacity(values.len());
        for (criterion_id, value) in values {
            let criterion = criteria
                .iter()
                .find(|c| c.id == criterion_id)
                .ok_or_else(|| {
                    DomainError::ValidationError(format!(
                        "Score references unknown criterion {criterion_id}"
                    ))
                })?;
            if !value.is_finite() {
                return Err(DomainError::ValidationError(format!(
                    "Score value for criterion {} is not a finite number",
                    criterion.name
                )));
            }
            checked.insert(criterion_id, value.clamp(0.0, f64::from(criterion.max_score)));
        }
        Ok(Self::new(group_id, judge_name, checked))
    }
}

/// One isolated hackathon event
///
/// Holds the ordered criteria and groups configured for the event plus
/// every score submission received so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    /// Unique identifier of this event
    pub id: HackathonId,
    /// Display name of the event
    pub name: String,
    /// When the event was created
    pub created_at: DateTime<Utc>,
    /// Judging criteria, in insertion order
    pub criteria: Vec<Criterion>,
    /// Competing groups, in insertion order
    pub groups: Vec<Group>,
    /// Score submissions, append-only in arrival order
    pub scores: Vec<Score>,
}

impl Hackathon {
    /// Create an empty hackathon with a fresh id and creation timestamp
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Hackathon name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: HackathonId::new(),
            name,
            created_at: Utc::now(),
            criteria: Vec::new(),
            groups: Vec::new(),
            scores: Vec::new(),
        })
    }

    /// Append a criterion
    pub fn add_criterion(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    /// Remove the criterion with the given id; no-op if absent
    ///
    /// Existing score submissions that reference the removed criterion are
    /// retained; the aggregation engine tolerates the dangling reference.
    pub fn remove_criterion(&mut self, id: &CriterionId) {
        self.criteria.retain(|c| c.id != *id);
    }

    /// Append a group
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Remove the group with the given id; no-op if absent
    ///
    /// Score submissions for the removed group are retained but no longer
    /// surface on the leaderboard.
    pub fn remove_group(&mut self, id: &GroupId) {
        self.groups.retain(|g| g.id != *id);
    }

    /// Append a score submission
    pub fn submit_score(&mut self, score: Score) {
        self.scores.push(score);
    }

    /// Replace groups and criteria wholesale and reset all submissions
    pub fn set_sample_data(&mut self, groups: Vec<Group>, criteria: Vec<Criterion>) {
        self.groups = groups;
        self.criteria = criteria;
        self.scores.clear();
    }

    /// Look up a group by id
    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == *id)
    }

    /// Look up a criterion by id
    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == *id)
    }
}
