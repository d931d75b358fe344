use bevy::prelude::*;

use super::graph_with_edges;
use crate::systems::street::net::prune::prune_dead_ends;

#[test]
fn open_path_disappears() {
    let mut graph = graph_with_edges(&[(0.0, 0.0), (10.0, 0.0), (20.0, 5.0)], &[(0, 1), (1, 2)]);

    assert_eq!(prune_dead_ends(&mut graph), 3);
    assert!(graph.is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn cycle_survives_and_tail_is_cut() {
    // square 0-1-2-3 with a two edge tail 3-4-5
    let mut graph = graph_with_edges(
        &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (-10.0, 20.0), (-20.0, 30.0)],
        &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 4), (4, 5)],
    );

    assert_eq!(prune_dead_ends(&mut graph), 2);
    assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(graph.edges(), vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    assert_eq!(graph.degree(3), 2);
}

#[test]
fn isolated_nodes_are_removed() {
    let mut graph = graph_with_edges(
        &[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (100.0, 100.0)],
        &[(0, 1), (1, 2), (2, 0)],
    );

    assert_eq!(prune_dead_ends(&mut graph), 1);
    assert!(!graph.contains(3));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn pruning_is_idempotent_and_keeps_ids() {
    let mut graph = graph_with_edges(
        &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (30.0, 30.0)],
        &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)],
    );

    assert_eq!(prune_dead_ends(&mut graph), 1);
    assert_eq!(prune_dead_ends(&mut graph), 0);
    assert_eq!(graph.position(2), Vec2::new(10.0, 10.0));
    assert_eq!(graph.capacity(), 5);
}
