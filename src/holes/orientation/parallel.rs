//! Parallel implementation of the rotation search.

use super::traits::OrientationSearch;
use super::{Orientation, SEARCH_STEPS, evaluate};
use crate::float_types::Real;
use crate::profile::Valley;
use nalgebra::Point2;
use rayon::prelude::*;

/// Parallel implementation of `OrientationSearch`.
#[derive(Debug, Clone, Copy)]
pub struct ParallelOrientationSearch;

impl Default for ParallelOrientationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelOrientationSearch {
    pub const fn new() -> Self {
        Self
    }
}

impl OrientationSearch for ParallelOrientationSearch {
    fn search(&self, seeds: &[Point2<Real>], valleys: &[Valley]) -> Orientation {
        (0..SEARCH_STEPS)
            .into_par_iter()
            .map(|step| evaluate(step, seeds, valleys))
            .reduce(Orientation::unset, |a, b| {
                // reduction order is arbitrary; break ties on the step index
                if b.score < a.score || (b.score == a.score && b.step < a.step) {
                    b
                } else {
                    a
                }
            })
    }
}
