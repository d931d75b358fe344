// handles node placement logic

use std::collections::VecDeque;
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::boundary::Boundary;
use super::graph::StreetGraph;

// frontier expansion from the boundary centre
// every frontier node throws `fan_out` darts into the ring [spacing, 2 * spacing) around itself,
// darts inside the boundary and at least `spacing` from every placed node become nodes
// the loop ends once no frontier node can place anything, the spacing bounds the node count
pub fn sample_nodes<R: Rng + ?Sized>(
    boundary: &Boundary,
    spacing: f32,
    fan_out: usize,
    rng: &mut R,
) -> StreetGraph {
    let mut graph = StreetGraph::new();
    let mut frontier = VecDeque::new();

    let start = graph.add_node(boundary.center());
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let origin = graph.position(current);

        for _ in 0..fan_out {
            let angle = rng.random_range(0.0..TAU);
            let dist = rng.random_range(spacing..spacing * 2.0);
            let candidate = origin + Vec2::from_angle(angle) * dist;

            if boundary.contains(candidate) && is_far_enough(&graph, candidate, spacing) {
                let id = graph.add_node(candidate);
                frontier.push_back(id);
            }
        }
    }

    graph
}

fn is_far_enough(graph: &StreetGraph, candidate: Vec2, spacing: f32) -> bool {
    graph.nodes().all(|node| node.pos.distance(candidate) >= spacing)
}
