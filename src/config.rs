// Configuration file, 1 unit = 1 canvas pixel
// This controls the initial generation parameter settings

pub const INITIAL_SEED: u64 = 1512086461918454205;

// Sampling boundary, a circle centred on the origin
pub const BOUNDARY_RADIUS: f32 = 300.0;

// Node sampling
pub const MIN_SPACING: f32 = 50.0;       // minimum distance between two nodes
pub const CANDIDATES_PER_NODE: usize = 30; // candidates drawn around each frontier node

// Street growth
pub const MAX_DEGREE: usize = 4;          // no 5+-way intersections
pub const PARALLEL_THRESHOLD: f32 = 0.9;  // |dot| above this counts as the same direction
pub const DISTANCE_FALLOFF: f32 = 200.0;  // trades heading continuity against proximity

// Rendering, the graph is drawn slightly above the ground plane
pub const DRAW_HEIGHT: f32 = 0.5;
pub const NODE_MARKER_RADIUS: f32 = 3.0;
pub const BOUNDARY_SEGMENTS: usize = 128;
