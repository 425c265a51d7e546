//! Serial implementation of the rotation search.

use super::traits::OrientationSearch;
use super::{Orientation, SEARCH_STEPS, evaluate};
use crate::float_types::Real;
use crate::profile::Valley;
use nalgebra::Point2;

/// Serial implementation of `OrientationSearch`.
#[derive(Debug, Clone, Copy)]
pub struct SerialOrientationSearch;

impl Default for SerialOrientationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialOrientationSearch {
    pub const fn new() -> Self {
        Self
    }
}

impl OrientationSearch for SerialOrientationSearch {
    fn search(&self, seeds: &[Point2<Real>], valleys: &[Valley]) -> Orientation {
        let first = evaluate(0, seeds, valleys);
        (1..SEARCH_STEPS)
            .map(|step| evaluate(step, seeds, valleys))
            .fold(first, |best, candidate| {
                // strict: an equal score later in the sweep never replaces the incumbent
                if candidate.score < best.score {
                    candidate
                } else {
                    best
                }
            })
    }
}
