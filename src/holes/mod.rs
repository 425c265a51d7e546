//! Fastener holes on the rigid-gear body.
//!
//! Two groups are laid out on the annulus between the profile and the housing:
//! group **A** (structural mounting holes, aligned with the profile valleys) and
//! group **B** (motor-shroud holes, kept clear of group A).

pub mod motor;
pub mod orientation;

pub use motor::{MOTOR_HOLE_COUNT, place_motor_holes};
pub use orientation::{Orientation, OrientationSearch, place_primary_holes, primary_seeds};

use crate::float_types::Real;
use crate::traits::PolarPoint;
use nalgebra::Point2;

/// Metric fastener sizes used on the housing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fastener {
    M3,
}

impl Fastener {
    /// Diameter of the through-hole drilled for the fastener.
    pub const fn clearance_diameter(&self) -> Real {
        match self {
            Fastener::M3 => 3.2,
        }
    }

    /// Diameter of the head counterbore.
    pub const fn counterbore_diameter(&self) -> Real {
        match self {
            Fastener::M3 => 6.0,
        }
    }
}

/// Which hole group a hole belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleGroupKind {
    /// Primary mounting holes.
    A,
    /// Motor-shroud holes.
    B,
}

impl HoleGroupKind {
    pub const fn label(&self) -> &'static str {
        match self {
            HoleGroupKind::A => "A",
            HoleGroupKind::B => "B",
        }
    }

    /// Mounting holes take the screw head below the face; motor holes are plain.
    pub const fn is_counterbored(&self) -> bool {
        matches!(self, HoleGroupKind::A)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub position: Point2<Real>,
    pub fastener: Fastener,
}

impl Hole {
    pub const fn new(position: Point2<Real>, fastener: Fastener) -> Self {
        Self { position, fastener }
    }

    pub fn diameter(&self) -> Real {
        self.fastener.clearance_diameter()
    }
}

/// An ordered set of holes belonging to one group.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleGroup {
    pub kind: HoleGroupKind,
    pub holes: Vec<Hole>,
}

impl HoleGroup {
    /// Builds a group where every position uses the same fastener.
    pub fn from_positions(
        kind: HoleGroupKind,
        positions: impl IntoIterator<Item = Point2<Real>>,
        fastener: Fastener,
    ) -> Self {
        Self {
            kind,
            holes: positions
                .into_iter()
                .map(|position| Hole::new(position, fastener))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.holes.iter().map(|h| h.position)
    }

    /// Polar angles of the holes in degrees, wrapped into `[0, 360)`.
    pub fn angles_deg(&self) -> Vec<Real> {
        self.holes.iter().map(|h| h.position.angle_deg()).collect()
    }

    /// Holes labelled `A1`, `A2`, ... in placement order.
    pub fn labelled(&self) -> impl Iterator<Item = (String, &Hole)> + '_ {
        self.holes
            .iter()
            .enumerate()
            .map(|(i, hole)| (format!("{}{}", self.kind.label(), i + 1), hole))
    }

    /// True if every hole centre lies in the closed annulus `[inner, outer]`.
    pub fn within_annulus(&self, inner: Real, outer: Real) -> bool {
        self.holes.iter().all(|h| {
            let r = h.position.radius();
            r >= inner && r <= outer
        })
    }
}

/// How a housing diameter of exactly 90 mm is classified when sizing group A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoleCountBoundary {
    /// `60 < D < 90` gets 6 holes, so `D = 90` gets 8.
    #[default]
    Exclusive,
    /// `60 < D <= 90` gets 6 holes.
    Inclusive,
}

/// Number of group-A holes for a housing of diameter `housing_diameter`:
/// 4 up to 60 mm, 6 up to 90 mm, 8 beyond.
pub fn primary_hole_count(housing_diameter: Real, boundary: HoleCountBoundary) -> usize {
    let six = match boundary {
        HoleCountBoundary::Exclusive => housing_diameter < 90.0,
        HoleCountBoundary::Inclusive => housing_diameter <= 90.0,
    };
    if housing_diameter <= 60.0 {
        4
    } else if six {
        6
    } else {
        8
    }
}

/// Fixed-size bores that are part of the mechanical design rather than computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuxiliaryHole {
    /// Through-hole for the output shaft.
    Shaft { diameter: Real },
    /// Blind pocket for the outer race of the bearing, starting `floor` above the base face.
    Bearing { diameter: Real, floor: Real },
}

impl AuxiliaryHole {
    pub const SHAFT: AuxiliaryHole = AuxiliaryHole::Shaft { diameter: 25.0 };
    pub const BEARING: AuxiliaryHole = AuxiliaryHole::Bearing {
        diameter: 26.0,
        floor: 0.5,
    };

    pub const fn diameter(&self) -> Real {
        match self {
            AuxiliaryHole::Shaft { diameter } | AuxiliaryHole::Bearing { diameter, .. } => {
                *diameter
            }
        }
    }

    pub const fn is_through(&self) -> bool {
        matches!(self, AuxiliaryHole::Shaft { .. })
    }
}
