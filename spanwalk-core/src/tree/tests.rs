//! Unit tests for the degree-capped tree.

use std::{collections::HashSet, ops::ControlFlow};

use proptest::prelude::*;
use rstest::rstest;

use spanwalk_test_support::ci::property_test_profile::suite_proptest_config;

use crate::{
    edge::{EdgeArena, EdgeId},
    error::TreeError,
};

use super::{MAX_DEGREE, Tree};

type Step = (&'static str, &'static str, i64, Option<TreeError>);

/// Insertion script from the path-building walkthrough: a path a..f with one
/// duplicate and one loop-closing attempt.
const PATH_SCRIPT: &[Step] = &[
    ("a", "b", 2, None),
    ("b", "c", 4, None),
    ("c", "d", 2, None),
    ("c", "d", 2, Some(TreeError::DuplicateEdge)),
    ("d", "e", 4, None),
    ("e", "f", 2, None),
    ("c", "e", 2, Some(TreeError::CycleGuard)),
];

fn insert_all(
    script: &[Step],
) -> (Tree<&'static str>, EdgeArena<&'static str>, i64, HashSet<&'static str>) {
    let mut tree = Tree::new();
    let mut arena = EdgeArena::new();
    let mut expected_weight = 0;
    let mut touched = HashSet::new();

    for &(left, right, weight, expected) in script {
        let id = arena.push(left, right, weight);
        let result = tree.insert(left, right, id);
        assert_eq!(result.err(), expected, "inserting {left}-{right}");
        if expected.is_none() {
            expected_weight += weight;
            touched.insert(left);
            touched.insert(right);
        }
    }

    (tree, arena, expected_weight, touched)
}

#[test]
fn path_script_conserves_weight_and_nodes() {
    let (tree, arena, expected_weight, touched) = insert_all(PATH_SCRIPT);

    let mut visited = HashSet::new();
    let mut remaining = expected_weight;
    tree.iter_edges(|id| {
        let edge = arena.get(id).expect("tree edges come from the arena");
        visited.extend(edge.nodes().iter().copied());
        remaining -= edge.weight();
        ControlFlow::Continue(())
    });

    assert_eq!(expected_weight, 14);
    assert_eq!(remaining, 0);
    assert_eq!(visited, touched);
    assert_eq!(visited.len(), 6);
    assert_eq!(tree.total_weight(&arena), Some(14));
    assert_eq!(tree.edge_count(), 5);
}

#[test]
fn walk_runs_endpoint_to_endpoint() {
    let (tree, arena, _, _) = insert_all(PATH_SCRIPT);
    let ends: HashSet<_> = tree.endpoints().copied().collect();
    assert_eq!(ends, HashSet::from(["a", "f"]));

    let weights: Vec<i64> = tree
        .walk()
        .into_iter()
        .filter_map(|id| arena.weight(id))
        .collect();
    // The path is symmetric, so either direction yields the same sequence.
    assert_eq!(weights, vec![2, 4, 2, 4, 2]);
}

#[test]
fn iter_edges_on_empty_tree_is_noop() {
    let tree: Tree<u32> = Tree::new();
    let mut calls = 0;
    tree.iter_edges(|_| {
        calls += 1;
        ControlFlow::Continue(())
    });
    assert_eq!(calls, 0);
    assert!(tree.is_empty());
}

#[test]
fn iter_edges_stops_on_break() {
    let (tree, _, _, _) = insert_all(PATH_SCRIPT);
    let mut calls = 0;
    tree.iter_edges(|_| {
        calls += 1;
        ControlFlow::Break(())
    });
    assert_eq!(calls, 1);
}

#[rstest]
#[case::left_saturated(("b", "x"))]
#[case::right_saturated(("x", "b"))]
fn degree_cap_rejects_third_edge(#[case] pair: (&'static str, &'static str)) {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    for (left, right) in [("a", "b"), ("b", "c")] {
        let id = arena.push(left, right, 1);
        tree.insert(left, right, id).expect("path edges must insert");
    }
    let before = tree.adjacency.clone();

    let id = arena.push(pair.0, pair.1, 1);
    assert_eq!(tree.insert(pair.0, pair.1, id), Err(TreeError::DegreeCapExceeded));
    assert_eq!(tree.adjacency, before);
    assert_eq!(tree.degree(&"b"), MAX_DEGREE);
    assert!(!tree.contains_node(&"x"));
}

#[test]
fn total_weight_covers_disjoint_pieces() {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    for (left, right, weight) in [(1_u8, 2_u8, 5), (3, 4, 7)] {
        let id = arena.push(left, right, weight);
        tree.insert(left, right, id).expect("disjoint edges must insert");
    }

    assert_eq!(tree.edge_count(), 2);
    assert_eq!(tree.walk().len(), 1);
    assert_eq!(tree.total_weight(&arena), Some(12));
}

#[rstest]
#[case::overflows(i64::MAX, 1, None)]
#[case::underflows(i64::MIN, -1, None)]
#[case::fits(i64::MAX, -1, Some(i64::MAX - 1))]
fn total_weight_reports_overflow(
    #[case] first: i64,
    #[case] second: i64,
    #[case] expected: Option<i64>,
) {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    let ab = arena.push("a", "b", first);
    let bc = arena.push("b", "c", second);
    tree.insert("a", "b", ab).expect("fresh edge");
    tree.insert("b", "c", bc).expect("path extension");

    assert_eq!(tree.total_weight(&arena), expected);
}

#[test]
fn cycle_guard_rejects_edge_between_present_nodes() {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    for (left, right) in [(1_u8, 2_u8), (3, 4)] {
        let id = arena.push(left, right, 1);
        tree.insert(left, right, id).expect("disjoint edges must insert");
    }
    let before = tree.adjacency.clone();

    let id = arena.push(2, 3, 1);
    let err = tree.insert(2, 3, id).expect_err("both endpoints are present");
    assert_eq!(err, TreeError::CycleGuard);
    assert_eq!(err.code().as_str(), "TREE_CYCLE_GUARD");
    assert_eq!(tree.adjacency, before);
}

#[test]
fn self_loop_is_rejected() {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    let id = arena.push('q', 'q', 3);
    assert_eq!(tree.insert('q', 'q', id), Err(TreeError::SelfLoop));
    assert!(tree.is_empty());
}

#[test]
fn neighbours_share_one_handle() {
    let mut arena = EdgeArena::new();
    let mut tree = Tree::new();
    let id = arena.push("l", "r", 9);
    tree.insert("l", "r", id).expect("fresh edge must insert");

    let from_left = tree.neighbours(&"l").and_then(|n| n.get(&"r")).copied();
    let from_right = tree.neighbours(&"r").and_then(|n| n.get(&"l")).copied();
    assert_eq!(from_left, Some(id));
    assert_eq!(from_right, Some(id));
}

/// One attempted attachment: pick an existing node by index and try to join
/// it to `target`.
fn attempts() -> impl Strategy<Value = Vec<(usize, u8, i64)>> {
    prop::collection::vec((any::<usize>(), 0_u8..24, 1_i64..1_000), 1..64)
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn frontier_growth_conserves_weight_and_nodes(steps in attempts()) {
        let mut arena = EdgeArena::new();
        let mut tree = Tree::new();
        let mut present: Vec<u8> = vec![0];
        let mut accepted: Vec<EdgeId> = Vec::new();
        let mut expected_weight = 0_i64;

        for (pick, target, weight) in steps {
            let from = present[pick % present.len()];
            let id = arena.push(from, target, weight);
            let before = tree.adjacency.clone();
            match tree.insert(from, target, id) {
                Ok(()) => {
                    accepted.push(id);
                    expected_weight += weight;
                    if !present.contains(&target) {
                        present.push(target);
                    }
                    if !present.contains(&from) {
                        present.push(from);
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&tree.adjacency, &before);
                }
            }
            for node in &present {
                prop_assert!(tree.degree(node) <= MAX_DEGREE);
            }
        }

        let walked = tree.walk();
        prop_assert_eq!(walked.len(), accepted.len());
        prop_assert_eq!(
            walked.iter().copied().collect::<HashSet<_>>(),
            accepted.iter().copied().collect::<HashSet<_>>()
        );
        prop_assert_eq!(tree.total_weight(&arena), Some(expected_weight));

        let mut visited = HashSet::new();
        for id in &walked {
            let edge = arena.get(*id).expect("walked edges come from the arena");
            visited.extend(edge.nodes().iter().copied());
        }
        let touched: HashSet<u8> = tree.adjacency.keys().copied().collect();
        prop_assert_eq!(visited, touched);
    }
}
