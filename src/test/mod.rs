// shared helpers for the test modules below

use bevy::prelude::*;

use crate::systems::street::net::graph::StreetGraph;
use crate::systems::street::net::streets::GrowthRules;
use crate::systems::street::net::utils::{direction, segments_cross};

mod geometry;
mod prune;

pub fn graph_with_edges(positions: &[(f32, f32)], edges: &[(usize, usize)]) -> StreetGraph {
    let mut graph = StreetGraph::from_positions(positions.iter().map(|&(x, y)| Vec2::new(x, y)));
    for &(a, b) in edges {
        assert!(graph.connect(a, b), "duplicate edge {a}-{b} in fixture");
    }
    graph
}

/// Panics with a description of the first broken street invariant.
pub fn assert_street_invariants(graph: &StreetGraph, rules: &GrowthRules) {
    for id in graph.node_ids() {
        assert!(graph.degree(id) <= rules.max_degree, "node {id} has degree {}", graph.degree(id));

        let origin = graph.position(id);
        let neighbors = graph.neighbors(id);
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                let (Some(da), Some(db)) = (direction(origin, graph.position(a)), direction(origin, graph.position(b))) else {
                    continue;
                };
                assert!(
                    da.dot(db).abs() <= rules.parallel_threshold,
                    "edges {id}-{a} and {id}-{b} are nearly parallel"
                );
            }
        }
    }

    let edges = graph.edges();
    for &(a, b) in &edges {
        assert!(!graph.shares_neighbor(a, b), "edge {a}-{b} closes a triangle");
    }

    for (i, &(a, b)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            if a == c || a == d || b == c || b == d {
                continue;
            }
            assert!(
                !segments_cross(graph.position(a), graph.position(b), graph.position(c), graph.position(d)),
                "edges {a}-{b} and {c}-{d} cross"
            );
        }
    }
}
