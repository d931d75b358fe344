// UTILS

use bevy::prelude::*;

/// z component of the cross product of `a - origin` and `b - origin`.
/// Positive when `b` lies counter-clockwise of `a` seen from `origin`.
pub fn orientation(origin: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - origin).perp_dot(b - origin)
}

/// Unit vector pointing from `from` to `to`.
/// # Returns `None` when the two points coincide
pub fn direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Whether two directions are nearly parallel or antiparallel.
/// Missing directions (zero-length edges) never conflict.
pub fn nearly_parallel(a: Option<Vec2>, b: Option<Vec2>, threshold: f32) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.dot(b).abs() > threshold,
        _ => false,
    }
}

/// Proper crossing test between segments `a1-a2` and `b1-b2`.
/// Touching at an endpoint, collinear overlap and degenerate segments are not crossings,
/// callers that need those cases must test them separately.
/// # Returns `true` if the interiors of the two segments intersect in a single point
pub fn segments_cross(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    if a1 == a2 || b1 == b2 {
        return false;
    }
    if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
        return false;
    }

    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    // strictly opposite sides on both tests
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}
