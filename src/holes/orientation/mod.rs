//! Rotation search for the primary (group A) mounting holes.
//!
//! `n` seed holes sit at equal angular spacing on a circle of `0.8·R_out`. The
//! whole pattern is swept through 360 one-degree steps; each step is scored by
//! the sum, over the seeds, of the distance to the nearest valley. The lowest
//! score wins and the first step reaching it breaks ties. The winning pattern
//! is then pushed radially onto the hole band `R_out - min_thickness / 2`.
//!
//! If the profile has no valleys every seed is charged [`NO_VALLEY_PENALTY`],
//! all steps score the same, and step 0 (no rotation) is returned.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use traits::OrientationSearch;

pub use serial::SerialOrientationSearch;

#[cfg(feature = "parallel")]
pub use parallel::ParallelOrientationSearch;

use crate::float_types::{Real, TAU};
use crate::profile::Valley;
use crate::traits::PolarPoint;
use nalgebra::Point2;

/// Number of candidate rotations, one per degree.
pub const SEARCH_STEPS: usize = 360;

/// Seeds are laid out at this fraction of the housing radius before the search.
pub const SEED_RADIUS_FACTOR: Real = 0.8;

/// Score charged per seed when there is no valley to align with.
pub const NO_VALLEY_PENALTY: Real = 1e6;

/// The search implementation selected by the enabled cargo features.
#[cfg(not(feature = "parallel"))]
pub type DefaultOrientationSearch = SerialOrientationSearch;
/// The search implementation selected by the enabled cargo features.
#[cfg(feature = "parallel")]
pub type DefaultOrientationSearch = ParallelOrientationSearch;

/// A scored candidate rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Index of the candidate, equal to the rotation in whole degrees.
    pub step: usize,
    /// Rotation in radians.
    pub angle: Real,
    /// Sum of seed-to-nearest-valley distances at this rotation.
    pub score: Real,
}

impl Orientation {
    pub fn angle_deg(&self) -> Real {
        self.step as Real
    }

    /// Placeholder that loses against any scored candidate.
    pub const fn unset() -> Self {
        Self {
            step: usize::MAX,
            angle: 0.0,
            score: Real::INFINITY,
        }
    }

    /// True if the score reflects at least one real valley rather than the penalty.
    pub fn is_aligned(&self) -> bool {
        self.score < NO_VALLEY_PENALTY
    }
}

/// Unrotated seed positions: `count` points at angles `2πk/count` on `0.8·housing_radius`.
pub fn primary_seeds(count: usize, housing_radius: Real) -> Vec<Point2<Real>> {
    let radius = SEED_RADIUS_FACTOR * housing_radius;
    (0..count)
        .map(|k| Point2::from_polar(radius, TAU * k as Real / count as Real))
        .collect()
}

/// Sum over `seeds`, rotated by `angle`, of the distance to the closest valley.
pub fn alignment_score(seeds: &[Point2<Real>], valleys: &[Valley], angle: Real) -> Real {
    seeds
        .iter()
        .map(|seed| {
            let rotated = seed.rotated(angle);
            valleys
                .iter()
                .map(|v| nalgebra::distance(&rotated, &v.point))
                .reduce(Real::min)
                .unwrap_or(NO_VALLEY_PENALTY)
        })
        .sum()
}

/// Scores candidate `step` (a rotation of `step` degrees).
pub(crate) fn evaluate(step: usize, seeds: &[Point2<Real>], valleys: &[Valley]) -> Orientation {
    let angle = (step as Real).to_radians();
    Orientation {
        step,
        angle,
        score: alignment_score(seeds, valleys, angle),
    }
}

/// Runs the rotation search with the feature-selected implementation.
pub fn best_orientation(seeds: &[Point2<Real>], valleys: &[Valley]) -> Orientation {
    let best = DefaultOrientationSearch::new().search(seeds, valleys);
    log::debug!(
        "primary hole rotation {}° (score {:.4})",
        best.step,
        best.score
    );
    best
}

/// Rotates the seeds by the chosen orientation and moves each one radially onto `band_radius`.
///
/// A seed that lands exactly on the origin has no direction to scale along; it is
/// placed at angle `orientation + 2πk/n` on the band instead.
pub fn place_primary_holes(
    seeds: &[Point2<Real>],
    orientation: &Orientation,
    band_radius: Real,
) -> Vec<Point2<Real>> {
    let n = seeds.len();
    seeds
        .iter()
        .enumerate()
        .map(|(k, seed)| {
            let rotated = seed.rotated(orientation.angle);
            let current = rotated.radius();
            if current > 0.0 {
                Point2::from(rotated.coords * (band_radius / current))
            } else {
                Point2::from_polar(band_radius, orientation.angle + TAU * k as Real / n as Real)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ProfileCurve, find_valleys};

    /// Four valleys at 62°, 152°, 242°, 332° on a radius-28 lobed curve sampled every 0.5°.
    fn four_lobes() -> Vec<Valley> {
        let points = (0..720)
            .map(|k| {
                let t = TAU * k as Real / 720.0;
                let r = 30.0 + 2.0 * (4.0 * (t - (17.0 as Real).to_radians())).cos();
                Point2::from_polar(r, t)
            })
            .collect();
        find_valleys(&ProfileCurve::from_points(points).unwrap())
    }

    #[test]
    fn seeds_are_evenly_spaced() {
        let seeds = primary_seeds(6, 45.0);
        assert_eq!(seeds.len(), 6);
        for (k, s) in seeds.iter().enumerate() {
            assert!((s.radius() - 36.0).abs() < 1e-9);
            let expected = 60.0 * k as Real;
            assert!(crate::float_types::circular_distance_deg(s.angle_deg(), expected) < 1e-6);
        }
    }

    #[test]
    fn aligns_with_known_valleys() {
        let valleys = four_lobes();
        assert_eq!(valleys.len(), 4);
        let seeds = primary_seeds(4, 35.0);
        let best = SerialOrientationSearch.search(&seeds, &valleys);
        // 62°, 152°, 242° and 332° all put every seed on a valley
        assert_eq!(best.step % 90, 62);
        assert!(best.is_aligned());
        assert!(best.score < 1e-6);
    }

    #[test]
    fn no_valleys_falls_back_to_zero() {
        let seeds = primary_seeds(4, 35.0);
        let best = SerialOrientationSearch.search(&seeds, &[]);
        assert_eq!(best.step, 0);
        assert_eq!(best.angle, 0.0);
        assert_eq!(best.score, 4.0 * NO_VALLEY_PENALTY);
        assert!(!best.is_aligned());
    }

    #[test]
    fn placement_lands_on_band() {
        let seeds = primary_seeds(6, 45.0);
        let orientation = evaluate(30, &seeds, &[]);
        let holes = place_primary_holes(&seeds, &orientation, 43.1);
        for (k, h) in holes.iter().enumerate() {
            assert!((h.radius() - 43.1).abs() < 1e-9);
            let expected = 30.0 + 60.0 * k as Real;
            assert!(crate::float_types::circular_distance_deg(h.angle_deg(), expected) < 1e-6);
        }
    }

    #[test]
    fn seed_at_origin_uses_angular_fallback() {
        let seeds = vec![Point2::origin(), Point2::new(1.0, 0.0)];
        let orientation = evaluate(10, &seeds, &[]);
        let holes = place_primary_holes(&seeds, &orientation, 5.0);
        assert!((holes[0].radius() - 5.0).abs() < 1e-9);
        assert!(crate::float_types::circular_distance_deg(holes[0].angle_deg(), 10.0) < 1e-6);
        assert!(crate::float_types::circular_distance_deg(holes[1].angle_deg(), 10.0) < 1e-6);
    }
}
