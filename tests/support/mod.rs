//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use rollergear::{
    GearParameters, ProfileCurve,
    float_types::{Real, TAU},
    traits::PolarPoint,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Shorthand for a parameter set that is expected to be valid.
pub fn params(ratio: u32, roller: Real, root: Real, housing: Real) -> GearParameters {
    GearParameters::new(ratio, roller, 6.0, root, housing, 15.0).expect("valid parameters")
}

/// A lobed synthetic profile `r(t) = base + amplitude·cos(lobes·(t - phase))`,
/// sampled `samples` times over a full turn. `phase_deg` is in degrees.
///
/// Its valleys lie at `phase + (180 + 360·j) / lobes` degrees.
pub fn lobed_profile(
    base: Real,
    amplitude: Real,
    lobes: Real,
    phase_deg: Real,
    samples: usize,
) -> ProfileCurve {
    let phase = phase_deg.to_radians();
    let points = (0..samples)
        .map(|k| {
            let t = TAU * k as Real / samples as Real;
            Point2::from_polar(base + amplitude * (lobes * (t - phase)).cos(), t)
        })
        .collect();
    ProfileCurve::from_points(points).expect("synthetic profile")
}

/// Smallest absolute angular difference in degrees.
pub fn angle_gap(a: Real, b: Real) -> Real {
    rollergear::float_types::circular_distance_deg(a, b)
}
