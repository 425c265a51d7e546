//! Motor-shroud (group B) holes.
//!
//! Four holes start at the cardinal angles turned by the same rotation as
//! group A. Any hole whose angle comes within [`MIN_SEPARATION_DEG`] of a
//! group-A hole is moved once by [`NUDGE_DEG`]. There is exactly one correction
//! per hole and no re-check, so the result can still sit close to group A when
//! the patterns are dense; callers must not rely on the separation.

use crate::float_types::{Real, circular_distance_deg, wrap_degrees};
use crate::traits::PolarPoint;
use nalgebra::Point2;

pub const MOTOR_HOLE_COUNT: usize = 4;

/// Nominal angles before rotation, in degrees.
pub const CARDINAL_ANGLES_DEG: [Real; MOTOR_HOLE_COUNT] = [0.0, 90.0, 180.0, 270.0];

/// Minimum angular gap to any group-A hole before a nudge is applied.
pub const MIN_SEPARATION_DEG: Real = 10.0;

/// Fixed angular correction applied to a crowded hole.
pub const NUDGE_DEG: Real = 15.0;

/// Radial inset of the motor holes from the housing edge.
pub const EDGE_INSET: Real = 3.0;

/// Returns the motor-hole angle for a nominal angle, after rotation and the
/// single crowding correction.
pub fn adjusted_angle_deg(
    nominal_deg: Real,
    rotation_deg: Real,
    primary_angles_deg: &[Real],
) -> Real {
    let angle = wrap_degrees(nominal_deg + rotation_deg);
    let nearest = primary_angles_deg
        .iter()
        .map(|&a| circular_distance_deg(a, angle))
        .fold(Real::INFINITY, Real::min);
    if nearest < MIN_SEPARATION_DEG {
        log::debug!(
            "motor hole at {angle:.1}° is {nearest:.2}° from a mounting hole; nudging by {NUDGE_DEG}°"
        );
        wrap_degrees(angle + NUDGE_DEG)
    } else {
        angle
    }
}

/// Places the four motor-shroud holes on the circle `housing_radius - 3`.
///
/// `rotation_deg` is the rotation chosen for group A and `primary` are the final
/// group-A positions. Always returns [`MOTOR_HOLE_COUNT`] positions.
pub fn place_motor_holes(
    housing_radius: Real,
    rotation_deg: Real,
    primary: &[Point2<Real>],
) -> Vec<Point2<Real>> {
    let primary_angles: Vec<Real> = primary.iter().map(PolarPoint::angle_deg).collect();
    let radius = housing_radius - EDGE_INSET;
    CARDINAL_ANGLES_DEG
        .iter()
        .map(|&nominal| {
            let angle = adjusted_angle_deg(nominal, rotation_deg, &primary_angles);
            Point2::from_polar(radius, angle.to_radians())
        })
        .collect()
}
