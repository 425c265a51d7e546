//! Roller-fit gate applied before a profile is trusted downstream.

use crate::errors::{GeometryError, GeometryResult};
use crate::float_types::{PI, Real};
use crate::params::GearParameters;

/// Manufacturing clearance applied to the roller diameter.
pub const CLEARANCE_FACTOR: Real = 1.03;

/// Smallest inner radius that can hold `valley_count` rollers of `roller_diameter`:
/// `1.03·d / sin(π / zg)`.
pub fn roller_clearance_limit(roller_diameter: Real, valley_count: u32) -> Real {
    CLEARANCE_FACTOR * roller_diameter / (PI / valley_count as Real).sin()
}

/// Rejects an inner radius that is at or below the roller clearance limit.
pub fn ensure_rollers_fit(
    inner_radius: Real,
    roller_diameter: Real,
    valley_count: u32,
) -> GeometryResult<()> {
    let limit = roller_clearance_limit(roller_diameter, valley_count);
    if inner_radius <= limit {
        log::warn!("inner radius {inner_radius:.3} mm does not clear the rollers (limit {limit:.3} mm)");
        return Err(GeometryError::InfeasibleGeometry {
            inner_radius,
            limit,
        });
    }
    Ok(())
}

/// Checks that the parameter set leaves room for the rollers inside the gear.
pub fn check_feasibility(params: &GearParameters) -> GeometryResult<()> {
    ensure_rollers_fit(
        params.inner_radius(),
        params.roller_diameter(),
        params.valley_count(),
    )
}
