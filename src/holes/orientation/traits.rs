//! Traits for the mounting-hole rotation search.

use super::Orientation;
use crate::float_types::Real;
use crate::profile::Valley;
use nalgebra::Point2;

/// Chooses the rotation of the primary hole pattern that best matches the valleys.
pub trait OrientationSearch {
    /// Scores every candidate step and returns the lowest-scoring one.
    ///
    /// Ties go to the smallest step index, so the result never depends on the
    /// order in which candidates were evaluated.
    fn search(&self, seeds: &[Point2<Real>], valleys: &[Valley]) -> Orientation;
}
