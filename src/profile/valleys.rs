//! Local radial minima of the profile, used as anchors for the mounting holes.

use super::ProfileCurve;
use crate::float_types::Real;
use crate::traits::PolarPoint;
use nalgebra::Point2;

/// A sample of the profile that is closer to the centre than both of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valley {
    pub index: usize,
    pub point: Point2<Real>,
}

impl Valley {
    pub fn radius(&self) -> Real {
        self.point.radius()
    }
}

/// Returns every interior sample `j` (`1 <= j <= N-2`) whose radius is strictly
/// below the radius at `j-1` and at `j+1`.
///
/// The scan is open: the pair formed by the last and first samples is not
/// examined, so a valley sitting exactly on sample `0` or `N-1` is not reported.
/// The result may be empty.
pub fn find_valleys(profile: &ProfileCurve) -> Vec<Valley> {
    let radii = profile.radii();
    let valleys: Vec<Valley> = radii
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0] && w[1] < w[2])
        .map(|(offset, _)| {
            let index = offset + 1;
            Valley {
                index,
                point: profile.points()[index],
            }
        })
        .collect();

    if valleys.is_empty() {
        log::warn!("no valleys found on a {}-point profile", profile.len());
    } else {
        log::debug!("found {} valleys", valleys.len());
    }
    valleys
}
