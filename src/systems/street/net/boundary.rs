use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

use super::error::ConfigError;

/// Region the node sampler is allowed to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    Circle { center: Vec2, radius: f32 },
    /// axis-aligned ellipse, `radii` holds the x and y semi-axes
    Ellipse { center: Vec2, radii: Vec2 },
}

impl Boundary {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    pub fn ellipse(center: Vec2, radii: Vec2) -> Self {
        Self::Ellipse { center, radii }
    }

    pub fn center(&self) -> Vec2 {
        match *self {
            Self::Circle { center, .. } | Self::Ellipse { center, .. } => center,
        }
    }

    /// Strict containment, points on the outline are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Self::Circle { center, radius } => point.distance(center) < radius,
            Self::Ellipse { center, radii } => {
                let local = (point - center) / radii;
                local.length_squared() < 1.0
            }
        }
    }

    pub fn area(&self) -> f32 {
        match *self {
            Self::Circle { radius, .. } => PI * radius * radius,
            Self::Ellipse { radii, .. } => PI * radii.x * radii.y,
        }
    }

    /// Closed polyline approximating the outline, first point repeated at the end.
    pub fn outline(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(3);
        let (center, radii) = match *self {
            Self::Circle { center, radius } => (center, Vec2::splat(radius)),
            Self::Ellipse { center, radii } => (center, radii),
        };

        (0..=segments)
            .map(|i| {
                let angle = (i % segments) as f32 / segments as f32 * TAU;
                center + Vec2::new(angle.cos(), angle.sin()) * radii
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (center, radii) = match *self {
            Self::Circle { center, radius } => (center, Vec2::splat(radius)),
            Self::Ellipse { center, radii } => (center, radii),
        };

        if !center.is_finite() {
            return Err(ConfigError::NonFiniteCenter(center));
        }
        if !radii.is_finite() || radii.x <= 0.0 || radii.y <= 0.0 {
            return Err(ConfigError::DegenerateBoundary(radii));
        }
        Ok(())
    }
}

/// How the minimum distance between nodes is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// explicit minimum distance
    Fixed(f32),
    /// derive the distance so that roughly this many nodes fit the boundary
    TargetCount(usize),
}

impl Spacing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Fixed(d) if !d.is_finite() || d <= 0.0 => Err(ConfigError::NonPositiveSpacing(d)),
            Self::TargetCount(0) => Err(ConfigError::ZeroTargetCount),
            _ => Ok(()),
        }
    }

    /// Minimum inter-node distance for the given boundary.
    pub fn resolve(&self, boundary: &Boundary) -> f32 {
        match *self {
            Self::Fixed(d) => d,
            Self::TargetCount(count) => (boundary.area() / count as f32).sqrt(),
        }
    }
}
