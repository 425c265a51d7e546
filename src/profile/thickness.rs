//! Radial wall thickness between the profile and the housing circle.

use super::ProfileCurve;
use crate::errors::{GeometryError, GeometryResult};
use crate::float_types::Real;
use crate::traits::PolarPoint;

/// Result of a wall thickness analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallThickness {
    /// Housing outer radius the profile was measured against.
    pub housing_radius: Real,
    /// `min(R_out - |p|)` over the profile samples.
    pub min_thickness: Real,
    /// Index of the sample where the wall is thinnest.
    pub thinnest_index: usize,
}

impl WallThickness {
    /// Radius at the middle of the thinnest wall band, `R_out - min_thickness / 2`.
    /// Mounting holes are centred on this circle.
    pub fn hole_band_radius(&self) -> Real {
        self.housing_radius - self.min_thickness / 2.0
    }
}

/// Measures the thinnest radial wall left between `profile` and a housing of radius `housing_radius`.
///
/// Fails with [`GeometryError::NegativeThickness`] when the profile reaches or
/// crosses the housing circle.
pub fn analyze_wall_thickness(
    profile: &ProfileCurve,
    housing_radius: Real,
) -> GeometryResult<WallThickness> {
    let (thinnest_index, min_thickness) = profile
        .points()
        .iter()
        .map(|p| housing_radius - p.radius())
        .enumerate()
        .fold((0, Real::INFINITY), |best, (index, thickness)| {
            if thickness < best.1 {
                (index, thickness)
            } else {
                best
            }
        });

    if min_thickness <= 0.0 {
        log::warn!(
            "profile breaches the housing at sample {thinnest_index} (thickness {min_thickness:.3} mm)"
        );
        return Err(GeometryError::NegativeThickness { min_thickness });
    }

    log::debug!("minimum wall thickness {min_thickness:.3} mm at sample {thinnest_index}");
    Ok(WallThickness {
        housing_radius,
        min_thickness,
        thinnest_index,
    })
}
