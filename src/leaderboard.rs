// Copyright 2025 Cowboy AI, LLC.

//! Leaderboard aggregation
//!
//! Converts a hackathon's raw score submissions into a ranked read model.
//! [`compute_leaderboard`] is pure and deterministic: recomputing over the
//! same inputs yields an identical leaderboard, and the order in which
//! submissions arrived never affects totals.
//!
//! Averaging happens per criterion first - each criterion's running sum is
//! divided by the group's submission count - and the per-criterion averages
//! are then summed into the total. This is not equivalent to summing all
//! raw values and dividing once, except when every judge scores every
//! criterion.

use crate::hackathon::{Criterion, Group, Hackathon, Score};
use crate::identifiers::{CriterionId, GroupId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Average awarded on one criterion for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionAverage {
    /// The criterion being averaged
    pub criterion_id: CriterionId,
    /// Display name of the criterion
    pub name: String,
    /// Mean awarded value across the group's submissions, full precision
    pub average: f64,
}

impl CriterionAverage {
    /// The average rounded to 2 decimal places for display
    pub fn rounded(&self) -> f64 {
        round2(self.average)
    }
}

/// One group's aggregated standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGroup {
    /// The group this entry ranks
    pub group_id: GroupId,
    /// Display name of the group
    pub name: String,
    /// Sum of the per-criterion averages, full precision
    pub total: f64,
    /// Per-criterion averages, aligned with the input criteria order
    pub averages: Vec<CriterionAverage>,
    /// Number of submissions received for this group
    pub judge_count: usize,
    /// Distinct judge names that contributed, in first-seen order
    pub judges: Vec<String>,
}

impl RankedGroup {
    /// The total rounded to 2 decimal places for display
    pub fn rounded_total(&self) -> f64 {
        round2(self.total)
    }
}

/// The ranked, aggregated view derived from raw submissions
///
/// Entries are sorted descending by total; tied groups keep their relative
/// input order. An empty leaderboard means no groups are configured -
/// callers distinguish "no scores yet" from "all zero scores" with
/// [`Leaderboard::submission_count`], not the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    rankings: Vec<RankedGroup>,
    submission_count: usize,
}

impl Leaderboard {
    /// Compute the leaderboard for one hackathon
    pub fn for_hackathon(hackathon: &Hackathon) -> Self {
        compute_leaderboard(&hackathon.groups, &hackathon.criteria, &hackathon.scores)
    }

    /// The ranked entries, best first
    pub fn rankings(&self) -> &[RankedGroup] {
        &self.rankings
    }

    /// The entry for a group, if the group is ranked
    pub fn entry(&self, group_id: &GroupId) -> Option<&RankedGroup> {
        self.rankings.iter().find(|r| r.group_id == *group_id)
    }

    /// 1-based rank of a group
    pub fn rank_of(&self, group_id: &GroupId) -> Option<usize> {
        self.rankings
            .iter()
            .position(|r| r.group_id == *group_id)
            .map(|i| i + 1)
    }

    /// Whether any groups are ranked at all
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Number of raw submissions in the input, including ones that did
    /// not match any known group
    pub fn submission_count(&self) -> usize {
        self.submission_count
    }
}

/// Aggregate raw submissions into a ranked leaderboard
///
/// Submissions referencing a group id that is not in `groups` are ignored;
/// values for criteria a submission did not score count as 0 toward that
/// criterion's sum while the submission still counts toward the group's
/// judge count.
pub fn compute_leaderboard(
    groups: &[Group],
    criteria: &[Criterion],
    scores: &[Score],
) -> Leaderboard {
    struct Accumulator {
        sums: Vec<f64>,
        judge_count: usize,
        judges: Vec<String>,
    }

    let mut accumulators: Vec<Accumulator> = groups
        .iter()
        .map(|_| Accumulator {
            sums: vec![0.0; criteria.len()],
            judge_count: 0,
            judges: Vec::new(),
        })
        .collect();
    let index_by_group: HashMap<GroupId, usize> = groups
        .iter()
        .enumerate()
        .map(|(index, group)| (group.id, index))
        .collect();

    for score in scores {
        let Some(&index) = index_by_group.get(&score.group_id) else {
            // dangling reference: the group was removed after submission
            continue;
        };
        let acc = &mut accumulators[index];
        acc.judge_count += 1;
        if !acc.judges.iter().any(|j| j == &score.judge_name) {
            acc.judges.push(score.judge_name.clone());
        }
        for (slot, criterion) in acc.sums.iter_mut().zip(criteria) {
            *slot += score.values.get(&criterion.id).copied().unwrap_or(0.0);
        }
    }

    let mut rankings: Vec<RankedGroup> = groups
        .iter()
        .zip(accumulators)
        .map(|(group, acc)| {
            let averages: Vec<CriterionAverage> = criteria
                .iter()
                .zip(&acc.sums)
                .map(|(criterion, sum)| CriterionAverage {
                    criterion_id: criterion.id,
                    name: criterion.name.clone(),
                    average: if acc.judge_count > 0 {
                        sum / acc.judge_count as f64
                    } else {
                        0.0
                    },
                })
                .collect();
            let total = averages.iter().map(|a| a.average).sum();
            RankedGroup {
                group_id: group.id,
                name: group.name.clone(),
                total,
                averages,
                judge_count: acc.judge_count,
                judges: acc.judges,
            }
        })
        .collect();

    // stable sort: tied totals keep the group input order
    rankings.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    Leaderboard {
        rankings,
        submission_count: scores.len(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
