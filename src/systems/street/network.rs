use bevy::prelude::*;
use rand::Rng;

use super::net::{self, error::ConfigError, graph::StreetGraph};
use super::StreetParams;

/// Generation stages, always run in this order and never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Sampling,
    Growing,
    Closing,
    Pruning,
    Done,
}

/// Counts collected while the pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationReport {
    pub spacing: f32,
    pub sampled_nodes: usize,
    pub street_edges: usize,
    pub hull_edges: usize,
    pub pruned_nodes: usize,
    pub final_nodes: usize,
    pub final_edges: usize,
}

// finished graph, read-only once generation is done
#[derive(Resource, Debug, Clone)]
pub struct StreetNetwork {
    pub graph: StreetGraph,
    pub report: GenerationReport,
}

/// Runs sampling, street growth, hull closure and pruning to completion.
/// The rng is consumed by the sampler first, then by the street grower.
pub fn generate_network<R: Rng + ?Sized>(params: &StreetParams, rng: &mut R) -> Result<StreetNetwork, ConfigError> {
    params.validate()?;

    let mut report = GenerationReport {
        spacing: params.spacing.resolve(&params.boundary),
        ..default()
    };

    enter(GenerationPhase::Sampling);
    let mut graph = net::node_gen::sample_nodes(&params.boundary, report.spacing, params.fan_out, rng);
    report.sampled_nodes = graph.node_count();
    debug!("sampled {} nodes at spacing {:.2}", report.sampled_nodes, report.spacing);

    enter(GenerationPhase::Growing);
    report.street_edges = net::streets::grow_streets(&mut graph, &params.rules, rng);
    debug!("grew {} street edges", report.street_edges);

    enter(GenerationPhase::Closing);
    report.hull_edges = net::hull::close_hull(&mut graph);
    debug!("closed hull with {} new edges", report.hull_edges);

    enter(GenerationPhase::Pruning);
    report.pruned_nodes = net::prune::prune_dead_ends(&mut graph);
    debug!("pruned {} dead end nodes", report.pruned_nodes);

    enter(GenerationPhase::Done);
    report.final_nodes = graph.node_count();
    report.final_edges = graph.edge_count();
    info!("generated {} nodes and {} edges", report.final_nodes, report.final_edges);

    Ok(StreetNetwork { graph, report })
}

fn enter(phase: GenerationPhase) {
    debug!("street generation phase: {:?}", phase);
}
