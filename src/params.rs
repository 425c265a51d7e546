//! Physical inputs of a roller-type cycloidal reducer and the scalars derived from them.

use crate::errors::{GeometryError, GeometryResult};
use crate::float_types::{Real, TAU};
use crate::traits::PolarPoint;
use nalgebra::Point2;

/// Validated physical parameters of the reducer.
///
/// All lengths are in millimetres. Every derived quantity is a pure function of
/// these fields; nothing is cached or mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    ratio: u32,
    roller_diameter: Real,
    roller_height: Real,
    root_radius: Real,
    housing_diameter: Real,
    overall_height: Real,
}

impl Default for GearParameters {
    fn default() -> Self {
        Self {
            ratio: 12,
            roller_diameter: 8.0,
            roller_height: 6.0,
            root_radius: 38.0,
            housing_diameter: 90.0,
            overall_height: 15.0,
        }
    }
}

impl GearParameters {
    /// Creates a parameter set, rejecting non-finite or non-positive values.
    ///
    /// # Parameters
    /// - `ratio`: transmission ratio `i` (>= 2)
    /// - `roller_diameter`: roller diameter `d`
    /// - `roller_height`: roller height
    /// - `root_radius`: outer root radius of the rigid-gear valleys `Rout`
    /// - `housing_diameter`: outer diameter of the housing `D`
    /// - `overall_height`: overall reducer height (informational)
    pub fn new(
        ratio: u32,
        roller_diameter: Real,
        roller_height: Real,
        root_radius: Real,
        housing_diameter: Real,
        overall_height: Real,
    ) -> GeometryResult<Self> {
        if ratio < 2 {
            return Err(GeometryError::invalid_parameter(format!(
                "transmission ratio must be at least 2, got {ratio}"
            )));
        }
        if ratio.checked_add(1).is_none() {
            return Err(GeometryError::invalid_parameter(format!(
                "transmission ratio {ratio} leaves no room for the extra valley"
            )));
        }
        for (name, value) in [
            ("roller diameter", roller_diameter),
            ("roller height", roller_height),
            ("root radius", root_radius),
            ("housing diameter", housing_diameter),
            ("overall height", overall_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::invalid_parameter(format!(
                    "{name} must be a positive finite length, got {value}"
                )));
            }
        }

        Ok(Self {
            ratio,
            roller_diameter,
            roller_height,
            root_radius,
            housing_diameter,
            overall_height,
        })
    }

    pub const fn ratio(&self) -> u32 {
        self.ratio
    }

    pub const fn roller_diameter(&self) -> Real {
        self.roller_diameter
    }

    pub const fn roller_height(&self) -> Real {
        self.roller_height
    }

    pub const fn root_radius(&self) -> Real {
        self.root_radius
    }

    pub const fn housing_diameter(&self) -> Real {
        self.housing_diameter
    }

    pub const fn overall_height(&self) -> Real {
        self.overall_height
    }

    /// Eccentricity `e = 0.2·d`.
    pub fn eccentricity(&self) -> Real {
        0.2 * self.roller_diameter
    }

    /// Number of valleys on the rigid gear, `i + 1` for a single-wave drive.
    pub const fn valley_count(&self) -> u32 {
        self.ratio + 1
    }

    /// Number of rollers in the cage.
    pub const fn roller_count(&self) -> u32 {
        self.ratio
    }

    /// Inner radius `Rin = Rout - 2e`.
    pub fn inner_radius(&self) -> Real {
        self.root_radius - 2.0 * self.eccentricity()
    }

    pub fn roller_radius(&self) -> Real {
        self.roller_diameter / 2.0
    }

    /// Eccentric cam radius `rd = Rin + e - d`.
    pub fn cam_radius(&self) -> Real {
        self.inner_radius() + self.eccentricity() - self.roller_diameter
    }

    /// Outer radius of the housing, `D / 2`.
    pub fn housing_radius(&self) -> Real {
        self.housing_diameter / 2.0
    }

    /// Radial wall thickness of the roller cage, `2.2·e`.
    pub fn cage_thickness(&self) -> Real {
        2.2 * self.eccentricity()
    }

    /// Radius of the circle through the roller centres, `rd + r`.
    pub fn cage_pitch_radius(&self) -> Real {
        self.cam_radius() + self.roller_radius()
    }

    pub fn cage_inner_radius(&self) -> Real {
        self.cage_pitch_radius() - self.cage_thickness() / 2.0
    }

    pub fn cage_outer_radius(&self) -> Real {
        self.cage_pitch_radius() + self.cage_thickness() / 2.0
    }

    /// Rejects parameter sets whose inner radius cannot hold the rollers.
    pub fn check_feasibility(&self) -> GeometryResult<()> {
        crate::profile::check_feasibility(self)
    }

    /// Centre of the eccentric cam, offset by `e` along +Y.
    pub fn cam_center(&self) -> Point2<Real> {
        Point2::new(0.0, self.eccentricity())
    }

    /// Roller centres, equally spaced on the cage pitch circle starting at +X.
    pub fn roller_centers(&self) -> Vec<Point2<Real>> {
        let count = self.roller_count() as usize;
        let pitch = self.cage_pitch_radius();
        (0..count)
            .map(|k| Point2::from_polar(pitch, TAU * k as Real / count as Real))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_quantities_for_defaults() {
        let p = GearParameters::default();
        assert!((p.eccentricity() - 1.6).abs() < 1e-9);
        assert_eq!(p.valley_count(), 13);
        assert_eq!(p.roller_count(), 12);
        assert!((p.inner_radius() - 34.8).abs() < 1e-9);
        assert!((p.cam_radius() - 28.4).abs() < 1e-9);
        assert!((p.roller_radius() - 4.0).abs() < 1e-9);
        assert!((p.housing_radius() - 45.0).abs() < 1e-9);
        assert!((p.cage_thickness() - 3.52).abs() < 1e-9);
        assert!((p.cage_pitch_radius() - 32.4).abs() < 1e-9);
        assert!((p.cage_outer_radius() - p.cage_inner_radius() - 3.52).abs() < 1e-9);
    }

    #[test]
    fn roller_centers_sit_on_pitch_circle() {
        let p = GearParameters::default();
        let centers = p.roller_centers();
        assert_eq!(centers.len(), 12);
        for c in &centers {
            assert!((c.radius() - p.cage_pitch_radius()).abs() < 1e-9);
        }
        assert!((centers[3].angle_deg() - 90.0).abs() < 1e-6);
        assert_eq!(p.cam_center(), Point2::new(0.0, 1.6));
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            GearParameters::new(1, 8.0, 6.0, 38.0, 90.0, 15.0),
            Err(GeometryError::InvalidParameter(_))
        ));
        assert!(GearParameters::new(12, 0.0, 6.0, 38.0, 90.0, 15.0).is_err());
        assert!(GearParameters::new(12, 8.0, 6.0, Real::NAN, 90.0, 15.0).is_err());
        assert!(GearParameters::new(12, 8.0, 6.0, 38.0, -90.0, 15.0).is_err());
        assert!(matches!(
            GearParameters::new(u32::MAX, 8.0, 6.0, 38.0, 90.0, 15.0),
            Err(GeometryError::InvalidParameter(_))
        ));
        let widest = GearParameters::new(u32::MAX - 1, 8.0, 6.0, 38.0, 90.0, 15.0).unwrap();
        assert_eq!(widest.valley_count(), u32::MAX);
        assert!(widest.check_feasibility().is_err());
        assert!(GearParameters::new(12, 8.0, 6.0, 38.0, 90.0, 15.0).is_ok());
        assert!(
            GearParameters::new(30, 8.0, 6.0, 38.0, 90.0, 15.0)
                .unwrap()
                .check_feasibility()
                .is_err()
        );
    }
}
