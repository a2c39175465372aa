// Copyright 2025 Cowboy AI, LLC.

//! Property tests for the reducer and the aggregation engine.

use hackathon_domain::{
    compute_leaderboard, AppState, Criterion, Group, HackathonCommand, Score,
};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Totals, averages, ranks, and judge counts must not depend on the order
/// in which submissions arrived. Judge attribution order is display-only
/// and deliberately excluded from the comparison.
#[test]
fn leaderboard_is_invariant_under_score_permutation() {
    let design = Criterion::new("Design", 10).unwrap();
    let polish = Criterion::new("Polish", 20).unwrap();
    let groups: Vec<Group> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|name| Group::new(*name).unwrap())
        .collect();

    // integer-valued awards keep the floating-point sums exact
    let mut scores = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        for judge in 0..3 {
            let mut values = HashMap::new();
            values.insert(design.id, (i + judge + 1) as f64);
            values.insert(polish.id, (2 * judge + i) as f64);
            scores.push(Score::new(group.id, format!("J{judge}"), values));
        }
    }

    let criteria = vec![design, polish];
    let baseline = compute_leaderboard(&groups, &criteria, &scores);
    let key = |board: &hackathon_domain::Leaderboard| {
        board
            .rankings()
            .iter()
            .map(|r| {
                (
                    r.group_id,
                    r.total,
                    r.judge_count,
                    r.averages.iter().map(|a| a.average).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>()
    };

    let mut rng = rand::thread_rng();
    let mut shuffled = scores.clone();
    for _ in 0..20 {
        shuffled.shuffle(&mut rng);
        let board = compute_leaderboard(&groups, &criteria, &shuffled);
        assert_eq!(key(&board), key(&baseline));
    }
}

#[test]
fn tied_groups_keep_their_input_order() {
    let innovation = Criterion::new("Innovation", 10).unwrap();
    let groups: Vec<Group> = ["First", "Second", "Third"]
        .iter()
        .map(|name| Group::new(*name).unwrap())
        .collect();

    // every group gets the same single award, so all totals tie
    let scores: Vec<Score> = groups
        .iter()
        .map(|g| {
            let mut values = HashMap::new();
            values.insert(innovation.id, 5.0);
            Score::new(g.id, "J1", values)
        })
        .collect();

    let board = compute_leaderboard(&groups, &[innovation], &scores);
    let names: Vec<&str> = board.rankings().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

proptest! {
    /// After any sequence of adds and removes, the groups sequence holds
    /// exactly the groups added and not subsequently removed, in
    /// insertion order.
    #[test]
    fn groups_contain_exactly_the_unremoved_in_insertion_order(
        entries in prop::collection::vec(("[A-Za-z][A-Za-z0-9]{0,8}", any::<bool>()), 1..8)
    ) {
        let mut state = AppState::bootstrap();
        let mut added = Vec::new();
        for (name, keep) in &entries {
            let group = Group::new(name.clone()).unwrap();
            state = state.apply(&HackathonCommand::AddGroup(group.clone()));
            added.push((group.id, *keep));
        }
        for (id, keep) in &added {
            if !keep {
                state = state.apply(&HackathonCommand::RemoveGroup(*id));
            }
        }

        let expected: Vec<_> = added
            .iter()
            .filter(|(_, keep)| *keep)
            .map(|(id, _)| *id)
            .collect();
        let actual: Vec<_> = state
            .active_hackathon()
            .unwrap()
            .groups
            .iter()
            .map(|g| g.id)
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Submissions are strictly additive and never alter prior entries.
    #[test]
    fn submissions_are_append_only(count in 1usize..12) {
        let group = Group::new("Alpha").unwrap();
        let mut state = AppState::bootstrap()
            .apply(&HackathonCommand::AddGroup(group.clone()));

        for i in 0..count {
            let before = state.active_hackathon().unwrap().scores.clone();
            state = state.apply(&HackathonCommand::SubmitScore(Score::new(
                group.id,
                format!("J{i}"),
                HashMap::new(),
            )));
            let after = &state.active_hackathon().unwrap().scores;
            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(&after[..before.len()], &before[..]);
        }
    }
}
