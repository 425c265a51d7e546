use crate::float_types::Real;
use nalgebra::{Point2, Rotation2};

/// Polar helpers for points in the gear's local XY frame.
pub trait PolarPoint: Sized {
    /// Builds a point from a radius and an angle in radians, measured from +X.
    fn from_polar(radius: Real, angle: Real) -> Self;

    /// Distance from the origin.
    fn radius(&self) -> Real;

    /// Polar angle in radians, in `(-π, π]`.
    fn angle(&self) -> Real;

    /// Polar angle in degrees, wrapped into `[0, 360)`.
    fn angle_deg(&self) -> Real {
        crate::float_types::wrap_degrees(self.angle().to_degrees())
    }

    /// Returns a new point rotated counter-clockwise about the origin.
    fn rotated(&self, angle: Real) -> Self;
}

impl PolarPoint for Point2<Real> {
    #[inline]
    fn from_polar(radius: Real, angle: Real) -> Self {
        Point2::new(radius * angle.cos(), radius * angle.sin())
    }

    #[inline]
    fn radius(&self) -> Real {
        self.coords.norm()
    }

    #[inline]
    fn angle(&self) -> Real {
        self.y.atan2(self.x)
    }

    #[inline]
    fn rotated(&self, angle: Real) -> Self {
        Rotation2::new(angle) * *self
    }
}
