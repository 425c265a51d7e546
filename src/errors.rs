//! Geometry errors

use crate::float_types::Real;

/// Result alias used by every fallible geometry operation.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// All the ways a layout computation can fail.
///
/// Anything not listed here (no valleys on the profile, motor holes that stay
/// close to the mounting holes) is a degenerate but valid outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (Domain) The profile radicand went negative; upstream validation let bad data through
    #[error("(Domain) profile radicand is negative ({radicand}) at theta = {theta} rad")]
    Domain { theta: Real, radicand: Real },
    /// (InfeasibleGeometry) The inner radius cannot hold the rollers
    #[error(
        "(InfeasibleGeometry) inner radius {inner_radius:.3} mm must exceed {limit:.3} mm; increase the root radius or lower the ratio"
    )]
    InfeasibleGeometry { inner_radius: Real, limit: Real },
    /// (NegativeThickness) The profile breaches the housing wall
    #[error("(NegativeThickness) minimum wall thickness is {min_thickness:.3} mm")]
    NegativeThickness { min_thickness: Real },
    /// (InvalidParameter) An input is out of range or not finite
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),
}

impl GeometryError {
    pub fn invalid_parameter(details: impl Into<String>) -> Self {
        Self::InvalidParameter(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeometryError::InfeasibleGeometry {
            inner_radius: 10.0,
            limit: 12.5,
        };
        let text = format!("{err}");
        assert!(text.contains("InfeasibleGeometry"));
        assert!(text.contains("12.500"));

        let err = GeometryError::invalid_parameter("ratio must be >= 2");
        assert!(format!("{err}").contains("ratio must be >= 2"));

        let err = GeometryError::NegativeThickness {
            min_thickness: -0.25,
        };
        assert!(format!("{err}").contains("-0.250"));
    }
}
