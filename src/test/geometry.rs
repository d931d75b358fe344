use std::f32::consts::PI;

use bevy::prelude::*;

use crate::systems::street::StreetParams;
use crate::systems::street::net::boundary::{Boundary, Spacing};
use crate::systems::street::net::error::ConfigError;
use crate::systems::street::net::utils::{direction, nearly_parallel, orientation, segments_cross};

#[test]
fn crossing_diagonals_cross() {
    assert!(segments_cross(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 0.0),
    ));
}

#[test]
fn shared_endpoint_is_not_a_crossing() {
    assert!(!segments_cross(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 10.0),
    ));
}

#[test]
fn touching_and_disjoint_segments_do_not_cross() {
    // T junction, one endpoint lies on the other segment
    assert!(!segments_cross(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(5.0, 5.0),
    ));
    assert!(!segments_cross(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(6.0, -3.0),
    ));
}

#[test]
fn degenerate_segment_never_crosses() {
    let p = Vec2::new(5.0, 5.0);
    assert!(!segments_cross(p, p, Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0)));
}

#[test]
fn orientation_sign_follows_turn_direction() {
    let o = Vec2::ZERO;
    assert!(orientation(o, Vec2::X, Vec2::Y) > 0.0);
    assert!(orientation(o, Vec2::Y, Vec2::X) < 0.0);
    assert_eq!(orientation(o, Vec2::X, Vec2::new(3.0, 0.0)), 0.0);
}

#[test]
fn parallel_test_ignores_zero_length_directions() {
    let p = Vec2::new(3.0, 4.0);
    assert_eq!(direction(p, p), None);
    assert!(!nearly_parallel(direction(p, p), Some(Vec2::X), 0.9));

    assert!(nearly_parallel(Some(Vec2::X), Some(Vec2::NEG_X), 0.9));
    assert!(!nearly_parallel(Some(Vec2::X), Some(Vec2::Y), 0.9));
    // 45 degrees is about 0.707
    assert!(!nearly_parallel(Some(Vec2::X), Some(Vec2::ONE.normalize()), 0.9));
}

#[test]
fn circle_containment_is_strict() {
    let boundary = Boundary::circle(Vec2::ZERO, 100.0);
    assert!(boundary.contains(Vec2::new(99.0, 0.0)));
    assert!(!boundary.contains(Vec2::new(100.0, 0.0)));
    assert!((boundary.area() - PI * 10_000.0).abs() < 1e-2);
}

#[test]
fn ellipse_uses_both_radii() {
    let boundary = Boundary::ellipse(Vec2::new(10.0, 0.0), Vec2::new(100.0, 50.0));
    assert!(boundary.contains(Vec2::new(100.0, 0.0)));
    assert!(!boundary.contains(Vec2::new(10.0, 60.0)));
    assert!((boundary.area() - PI * 5_000.0).abs() < 1e-2);
}

#[test]
fn outline_is_closed() {
    let outline = Boundary::circle(Vec2::new(5.0, 5.0), 20.0).outline(16);
    assert_eq!(outline.len(), 17);
    assert_eq!(outline.first(), outline.last());
    for p in &outline {
        assert!((p.distance(Vec2::new(5.0, 5.0)) - 20.0).abs() < 1e-3);
    }
}

#[test]
fn spacing_from_target_count() {
    let boundary = Boundary::circle(Vec2::ZERO, 100.0);
    let spacing = Spacing::TargetCount(100).resolve(&boundary);
    let expected = (PI * 10_000.0 / 100.0).sqrt();
    assert!((spacing - expected).abs() < 1e-3);
    assert_eq!(Spacing::Fixed(42.0).resolve(&boundary), 42.0);
}

#[test]
fn default_params_are_valid() {
    assert_eq!(StreetParams::default().validate(), Ok(()));
}

#[test]
fn invalid_params_are_rejected() {
    let base = StreetParams::default();

    let params = StreetParams { spacing: Spacing::Fixed(-1.0), ..base.clone() };
    assert_eq!(params.validate(), Err(ConfigError::NonPositiveSpacing(-1.0)));

    let params = StreetParams { spacing: Spacing::TargetCount(0), ..base.clone() };
    assert_eq!(params.validate(), Err(ConfigError::ZeroTargetCount));

    let params = StreetParams { fan_out: 0, ..base.clone() };
    assert_eq!(params.validate(), Err(ConfigError::ZeroFanOut));

    let params = StreetParams { boundary: Boundary::circle(Vec2::ZERO, 0.0), ..base.clone() };
    assert_eq!(params.validate(), Err(ConfigError::DegenerateBoundary(Vec2::ZERO)));

    let mut params = base.clone();
    params.rules.parallel_threshold = 1.5;
    assert_eq!(params.validate(), Err(ConfigError::InvalidParallelThreshold(1.5)));

    let mut params = base;
    params.rules.distance_falloff = 0.0;
    assert_eq!(params.validate(), Err(ConfigError::NonPositiveFalloff(0.0)));
}
