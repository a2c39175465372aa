// Copyright 2025 Cowboy AI, LLC.

//! Sample-data generation port
//!
//! An external service proposes a candidate set of groups and criteria for
//! a topic; on success the caller replaces the active hackathon's setup
//! wholesale via [`crate::HackathonCommand::SetSampleData`]. The call may
//! be abandoned mid-flight without affecting store consistency - nothing
//! is applied until the single terminal dispatch.

use crate::errors::{DomainError, DomainResult};
use crate::hackathon::{Criterion, Group};
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// A proposed group, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroupSeed {
    /// The name of the hackathon team
    pub name: String,
}

/// A proposed criterion, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CriterionSeed {
    /// The name of the criterion, e.g. "Innovation"
    pub name: String,
    /// The maximum score for this criterion, typically 10 or 20
    pub max_score: u32,
}

/// The fixed-shape payload a generator returns
///
/// Ids are minted locally by [`SampleData::materialize`]; the external
/// service only proposes names and scales. [`SampleData::response_schema`]
/// exposes the JSON schema so a live implementation can hand it to its
/// model as the required response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SampleData {
    /// Proposed team names
    pub groups: Vec<GroupSeed>,
    /// Proposed judging criteria
    pub criteria: Vec<CriterionSeed>,
}

impl SampleData {
    /// JSON schema of this payload, for schema-constrained generation
    pub fn response_schema() -> schemars::schema::RootSchema {
        schema_for!(SampleData)
    }

    /// Assign fresh ids to every seed, yielding domain entities
    ///
    /// Seeds with blank names or a zero maximum score are rejected, so a
    /// malformed generator response never reaches the store.
    pub fn materialize(self) -> DomainResult<(Vec<Group>, Vec<Criterion>)> {
        let groups = self
            .groups
            .into_iter()
            .map(|seed| Group::new(seed.name))
            .collect::<DomainResult<Vec<_>>>()?;
        let criteria = self
            .criteria
            .into_iter()
            .map(|seed| Criterion::new(seed.name, seed.max_score))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((groups, criteria))
    }
}

/// Port for the sample-data generation service
#[async_trait]
pub trait SampleDataGenerator: Send + Sync {
    /// Propose groups and criteria for the given topic
    ///
    /// Implementations must fail explicitly - never silently - when the
    /// underlying credential is absent or the call errors, leaving the
    /// caller's state untouched.
    async fn generate(&self, topic: &str) -> DomainResult<SampleData>;
}

/// Deterministic generator returning a canned payload
///
/// Stands in for the live service in tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator;

#[async_trait]
impl SampleDataGenerator for FixtureGenerator {
    async fn generate(&self, topic: &str) -> DomainResult<SampleData> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(DomainError::ValidationError(
                "Sample-data topic must not be empty".to_string(),
            ));
        }
        Ok(SampleData {
            groups: vec![
                GroupSeed {
                    name: format!("{topic} Pioneers"),
                },
                GroupSeed {
                    name: format!("Team {topic}"),
                },
                GroupSeed {
                    name: format!("{topic} Collective"),
                },
            ],
            criteria: vec![
                CriterionSeed {
                    name: "Innovation".to_string(),
                    max_score: 10,
                },
                CriterionSeed {
                    name: "Technical Complexity".to_string(),
                    max_score: 20,
                },
                CriterionSeed {
                    name: "Presentation".to_string(),
                    max_score: 10,
                },
            ],
        })
    }
}

/// Generator standing in for a service with no credential configured
///
/// Always fails with the missing-credential error, for exercising the
/// failure path end to end.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl SampleDataGenerator for UnconfiguredGenerator {
    async fn generate(&self, _topic: &str) -> DomainResult<SampleData> {
        Err(DomainError::ExternalServiceError {
            service: "sample-data".to_string(),
            message: "API key is not configured".to_string(),
        })
    }
}
