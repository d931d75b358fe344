// greedy street growth over a sampled node set

use bevy::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, UnitCircle};

use super::error::ConfigError;
use super::graph::{NodeId, StreetGraph};
use super::utils::{direction, nearly_parallel, segments_cross};
use crate::config::{DISTANCE_FALLOFF, MAX_DEGREE, PARALLEL_THRESHOLD};

/// Constraints every street edge has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRules {
    pub max_degree: usize,
    /// two edges at one node conflict when |dot| of their directions exceeds this
    pub parallel_threshold: f32,
    /// distance at which proximity costs as much as a full unit of alignment
    pub distance_falloff: f32,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Self {
            max_degree: MAX_DEGREE,
            parallel_threshold: PARALLEL_THRESHOLD,
            distance_falloff: DISTANCE_FALLOFF,
        }
    }
}

impl GrowthRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_degree == 0 {
            return Err(ConfigError::ZeroMaxDegree);
        }
        if !(0.0..=1.0).contains(&self.parallel_threshold) {
            return Err(ConfigError::InvalidParallelThreshold(self.parallel_threshold));
        }
        if !self.distance_falloff.is_finite() || self.distance_falloff <= 0.0 {
            return Err(ConfigError::NonPositiveFalloff(self.distance_falloff));
        }
        Ok(())
    }
}

/// Grows streets until no node can start one.
/// Nodes are picked at random from a worklist and dropped once they are saturated
/// or fail to produce an edge. Every productive visit adds at least one edge and
/// the degree cap bounds the edge total, so the loop ends.
/// # Returns the number of edges created
pub fn grow_streets<R: Rng + ?Sized>(graph: &mut StreetGraph, rules: &GrowthRules, rng: &mut R) -> usize {
    let mut worklist: Vec<NodeId> = graph.node_ids().collect();
    let mut created = 0;

    while !worklist.is_empty() {
        let idx = rng.random_range(0..worklist.len());
        let node = worklist[idx];

        if graph.degree(node) >= rules.max_degree {
            worklist.swap_remove(idx);
            continue;
        }

        let edges = grow_street(graph, node, rules, rng);
        if edges == 0 {
            worklist.swap_remove(idx);
        }
        created += edges;
    }

    created
}

/// Walks one street from `start` along a random initial heading.
/// # Returns the number of edges the street added
pub fn grow_street<R: Rng + ?Sized>(
    graph: &mut StreetGraph,
    start: NodeId,
    rules: &GrowthRules,
    rng: &mut R,
) -> usize {
    let [x, y]: [f32; 2] = UnitCircle.sample(rng);
    let mut heading = Vec2::new(x, y);
    let mut current = start;
    let mut created = 0;

    while graph.degree(current) < rules.max_degree {
        let Some(next) = best_candidate(graph, current, heading, rules) else {
            break;
        };

        graph.connect(current, next);
        created += 1;

        // coincident nodes have no direction, keep the previous heading
        heading = direction(graph.position(current), graph.position(next)).unwrap_or(heading);
        current = next;
    }

    created
}

/// Highest scoring node `from` may connect to, ties resolved in favour of the lower id.
pub fn best_candidate(graph: &StreetGraph, from: NodeId, heading: Vec2, rules: &GrowthRules) -> Option<NodeId> {
    let origin = graph.position(from);
    let heading = heading.normalize_or_zero();

    let mut best = None;
    let mut best_score = f32::NEG_INFINITY;

    for candidate in graph.node_ids() {
        if !can_connect(graph, from, candidate, rules) {
            continue;
        }

        let target = graph.position(candidate);
        let alignment = direction(origin, target).map_or(0.0, |dir| heading.dot(dir));
        let score = alignment - origin.distance(target) / rules.distance_falloff;

        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}

/// Whether the edge `a-b` keeps every street invariant intact.
pub fn can_connect(graph: &StreetGraph, a: NodeId, b: NodeId, rules: &GrowthRules) -> bool {
    a != b
        && graph.degree(a) < rules.max_degree
        && graph.degree(b) < rules.max_degree
        && !graph.has_edge(a, b)
        && !graph.shares_neighbor(a, b)
        && !crosses_existing(graph, a, b)
        && !conflicts_with_incident(graph, a, b, rules.parallel_threshold)
        && !conflicts_with_incident(graph, b, a, rules.parallel_threshold)
}

/// Whether the segment `a-b` properly crosses an edge that does not touch `a` or `b`.
pub fn crosses_existing(graph: &StreetGraph, a: NodeId, b: NodeId) -> bool {
    let (pa, pb) = (graph.position(a), graph.position(b));

    graph
        .edge_iter()
        .filter(|&(u, v)| u != a && u != b && v != a && v != b)
        .any(|(u, v)| segments_cross(pa, pb, graph.position(u), graph.position(v)))
}

/// Whether a new edge leaving `at` towards `other` runs nearly parallel to an edge already at `at`.
pub fn conflicts_with_incident(graph: &StreetGraph, at: NodeId, other: NodeId, threshold: f32) -> bool {
    let origin = graph.position(at);
    let new_dir = direction(origin, graph.position(other));

    graph
        .neighbors(at)
        .iter()
        .any(|&n| nearly_parallel(new_dir, direction(origin, graph.position(n)), threshold))
}
