//! The internal profile of the rigid gear.
//!
//! The profile is the envelope traced by a roller of radius `r` riding on an
//! eccentric cam of radius `rd` with eccentricity `e`, while the gear advances
//! through `zg` valleys per turn:
//!
//! ```text
//! S(θ) = √((r + rd)² − (e·sin(zg·θ))²)
//! l(θ) = e·cos(zg·θ) + S(θ)
//! Ξ(θ) = atan2(e·zg·sin(zg·θ), S(θ))
//! x(θ) = l(θ)·sin(θ) + r·sin(θ + Ξ(θ))
//! y(θ) = l(θ)·cos(θ) + r·cos(θ + Ξ(θ))
//! ```

pub mod feasibility;
pub mod thickness;
pub mod valleys;

pub use feasibility::{
    CLEARANCE_FACTOR, check_feasibility, ensure_rollers_fit, roller_clearance_limit,
};
pub use thickness::{WallThickness, analyze_wall_thickness};
pub use valleys::{Valley, find_valleys};

use crate::errors::{GeometryError, GeometryResult};
use crate::float_types::{Real, TAU, tolerance};
use crate::params::GearParameters;
use crate::traits::PolarPoint;
use geo::{Area, Coord, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Ordered, open boundary of the rigid gear in its local frame.
///
/// Samples are taken at equally spaced parameter angles over one full turn,
/// so the first and last points are neighbours but never coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    points: Vec<Point2<Real>>,
}

impl ProfileCurve {
    /// Samples the rigid-gear profile at `resolution` parameter angles.
    ///
    /// Fails with [`GeometryError::Domain`] if the square root in the profile
    /// equation would receive a negative argument, and with
    /// [`GeometryError::InvalidParameter`] if `resolution < 3`.
    pub fn generate(params: &GearParameters, resolution: usize) -> GeometryResult<Self> {
        if resolution < 3 {
            return Err(GeometryError::invalid_parameter(format!(
                "profile resolution must be at least 3, got {resolution}"
            )));
        }

        let e = params.eccentricity();
        let zg = params.valley_count() as Real;
        let r = params.roller_radius();
        let reach = r + params.cam_radius();

        let points = (0..resolution)
            .map(|k| {
                let theta = TAU * (k as Real) / (resolution as Real);
                profile_point(theta, e, zg, r, reach)
            })
            .collect::<GeometryResult<Vec<_>>>()?;

        log::debug!(
            "generated rigid-gear profile: {} points, zg = {}, e = {:.3}",
            points.len(),
            params.valley_count(),
            e
        );
        Ok(Self { points })
    }

    /// Wraps an arbitrary ordered point list, e.g. a synthetic test profile.
    pub fn from_points(points: Vec<Point2<Real>>) -> GeometryResult<Self> {
        if points.len() < 3 {
            return Err(GeometryError::invalid_parameter(format!(
                "a profile needs at least 3 points, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::invalid_parameter(format!(
                "profile point ({}, {}) is not finite",
                bad.x, bad.y
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Radial distance of every sample from the gear centre.
    pub fn radii(&self) -> Vec<Real> {
        self.points.iter().map(PolarPoint::radius).collect()
    }

    /// Largest radial excursion of the profile.
    pub fn max_radius(&self) -> Real {
        self.points
            .iter()
            .map(PolarPoint::radius)
            .fold(Real::NEG_INFINITY, Real::max)
    }

    /// Smallest radial excursion of the profile.
    pub fn min_radius(&self) -> Real {
        self.points
            .iter()
            .map(PolarPoint::radius)
            .fold(Real::INFINITY, Real::min)
    }

    /// Converts the open curve into a closed `geo` polygon (first point repeated at the end).
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let mut coords: Vec<Coord<Real>> =
            self.points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        coords.push(coords[0]);
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Area enclosed by the profile.
    pub fn enclosed_area(&self) -> Real {
        self.to_polygon().unsigned_area()
    }
}

/// Evaluates a single profile sample.
///
/// `reach` is `r + rd`. Radicands inside `[-tolerance, 0)` are rounding noise and
/// are clamped to zero; anything more negative is a domain error.
#[inline]
fn profile_point(
    theta: Real,
    e: Real,
    zg: Real,
    r: Real,
    reach: Real,
) -> GeometryResult<Point2<Real>> {
    let (sin_z, cos_z) = (zg * theta).sin_cos();
    let radicand = reach * reach - (e * sin_z) * (e * sin_z);
    if radicand < -tolerance() {
        return Err(GeometryError::Domain { theta, radicand });
    }
    let s = radicand.max(0.0).sqrt();
    let l = e * cos_z + s;
    let xi = (e * zg * sin_z).atan2(s);

    Ok(Point2::new(
        l * theta.sin() + r * (theta + xi).sin(),
        l * theta.cos() + r * (theta + xi).cos(),
    ))
}
