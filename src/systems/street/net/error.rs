use bevy::prelude::*;
use thiserror::Error;

/// Invalid generation settings, reported before any node is placed.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("minimum node spacing must be positive and finite, got {0}")]
    NonPositiveSpacing(f32),
    #[error("target node count must be at least 1")]
    ZeroTargetCount,
    #[error("fan-out must draw at least one candidate per frontier node")]
    ZeroFanOut,
    #[error("boundary centre must be finite, got {0}")]
    NonFiniteCenter(Vec2),
    #[error("boundary radii must be positive and finite, got {0}")]
    DegenerateBoundary(Vec2),
    #[error("degree cap must allow at least one edge per node")]
    ZeroMaxDegree,
    #[error("parallel threshold must lie in [0, 1], got {0}")]
    InvalidParallelThreshold(f32),
    #[error("distance falloff must be positive and finite, got {0}")]
    NonPositiveFalloff(f32),
}
