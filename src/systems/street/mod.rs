// this is the entry point for the street generation plugin
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::*;

pub mod net;
pub mod network;

use net::boundary::{Boundary, Spacing};
use net::error::ConfigError;
use net::streets::GrowthRules;
use network::StreetNetwork;

// resources
#[derive(Resource)]
pub struct Seed(pub u64);

// street generation parameters
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StreetParams {
    pub boundary: Boundary,
    pub spacing: Spacing,
    pub fan_out: usize, // candidates drawn per frontier node
    pub rules: GrowthRules,
}

impl Default for StreetParams {
    fn default() -> Self {
        Self {
            boundary: Boundary::circle(Vec2::ZERO, BOUNDARY_RADIUS),
            spacing: Spacing::Fixed(MIN_SPACING),
            fan_out: CANDIDATES_PER_NODE,
            rules: GrowthRules::default(),
        }
    }
}

impl StreetParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boundary.validate()?;
        self.spacing.validate()?;
        if self.fan_out == 0 {
            return Err(ConfigError::ZeroFanOut);
        }
        self.rules.validate()
    }
}

// which parts of the network get drawn
#[derive(Resource)]
pub struct LayerVisibility {
    pub boundary: bool,
    pub edges: bool,
    pub nodes: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            boundary: true,
            edges: true,
            nodes: false,
        }
    }
}

// main plugin for generation
pub struct StreetNetworkPlugin;

impl Plugin for StreetNetworkPlugin {
    fn build(&self, app: &mut App) {
        let params = StreetParams::default();

        // generate once, before the first frame
        let mut rng = StdRng::seed_from_u64(INITIAL_SEED);
        let network = network::generate_network(&params, &mut rng)
            .unwrap_or_else(|err| panic!("invalid street generation settings: {err}"));

        app
            .insert_resource(Seed(INITIAL_SEED))
            .insert_resource(params)
            .insert_resource(network)
            .insert_resource(LayerVisibility::default())
            .add_systems(Update, draw_network);
    }
}

fn to_ground(p: Vec2) -> Vec3 {
    Vec3::new(p.x, DRAW_HEIGHT, p.y)
}

fn draw_network(
    mut gizmos: Gizmos,
    network: Res<StreetNetwork>,
    params: Res<StreetParams>,
    layers: Res<LayerVisibility>,
) {
    if layers.boundary {
        let outline = params.boundary.outline(BOUNDARY_SEGMENTS);
        for pair in outline.windows(2) {
            gizmos.line(to_ground(pair[0]), to_ground(pair[1]), Color::srgba(0.6, 0.6, 0.6, 0.5));
        }
    }

    if layers.edges {
        for (start, end) in network.graph.segments() {
            gizmos.line(to_ground(start), to_ground(end), Color::WHITE);
        }
    }

    if layers.nodes {
        for node in network.graph.nodes() {
            // junctions stand out from plain corners
            let color = if node.degree() > 2 {
                Color::srgba(1.0, 0.5, 0.0, 0.9)
            } else {
                Color::srgba(0.18, 0.28, 0.45, 0.9)
            };
            gizmos.sphere(to_ground(node.pos), NODE_MARKER_RADIUS, color);
        }
    }
}
