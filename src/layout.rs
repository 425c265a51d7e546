//! End-to-end computation of the rigid-gear drawing geometry.

use crate::errors::GeometryResult;
use crate::float_types::Real;
use crate::holes::orientation::best_orientation;
use crate::holes::{
    AuxiliaryHole, Fastener, HoleCountBoundary, HoleGroup, HoleGroupKind, Orientation,
    place_motor_holes, place_primary_holes, primary_hole_count, primary_seeds,
};
use crate::params::GearParameters;
use crate::profile::{ProfileCurve, Valley, WallThickness, analyze_wall_thickness, find_valleys};
use geo::Contains;

/// Tunables of a layout run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Number of profile samples.
    pub resolution: usize,
    /// Classification of a 90 mm housing when sizing group A.
    pub hole_count_boundary: HoleCountBoundary,
    /// Fastener used for both hole groups.
    pub fastener: Fastener,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            resolution: 600,
            hole_count_boundary: HoleCountBoundary::Exclusive,
            fastener: Fastener::M3,
        }
    }
}

impl LayoutOptions {
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub const fn with_hole_count_boundary(mut self, boundary: HoleCountBoundary) -> Self {
        self.hole_count_boundary = boundary;
        self
    }
}

/// Everything an exporter needs to draw the rigid gear.
#[derive(Debug, Clone, PartialEq)]
pub struct GearLayout {
    pub params: GearParameters,
    pub profile: ProfileCurve,
    pub valleys: Vec<Valley>,
    pub wall: WallThickness,
    pub orientation: Orientation,
    pub primary: HoleGroup,
    pub motor: HoleGroup,
    pub shaft: AuxiliaryHole,
    pub bearing: AuxiliaryHole,
}

impl GearLayout {
    /// Runs the full pipeline: roller-fit gate, profile, wall thickness, valleys,
    /// group-A rotation search and group-B placement.
    ///
    /// Fails fast on an invalid resolution, an infeasible roller fit, a profile
    /// that cannot be evaluated, or a profile that breaches the housing.
    pub fn compute(params: &GearParameters, options: &LayoutOptions) -> GeometryResult<Self> {
        params.check_feasibility()?;
        let profile = ProfileCurve::generate(params, options.resolution)?;

        let housing_radius = params.housing_radius();
        let wall = analyze_wall_thickness(&profile, housing_radius)?;
        let valleys = find_valleys(&profile);

        let count = primary_hole_count(params.housing_diameter(), options.hole_count_boundary);
        let seeds = primary_seeds(count, housing_radius);
        let orientation = best_orientation(&seeds, &valleys);
        let primary_positions = place_primary_holes(&seeds, &orientation, wall.hole_band_radius());
        let motor_positions =
            place_motor_holes(housing_radius, orientation.angle_deg(), &primary_positions);

        let layout = Self {
            params: *params,
            profile,
            valleys,
            wall,
            orientation,
            primary: HoleGroup::from_positions(
                HoleGroupKind::A,
                primary_positions,
                options.fastener,
            ),
            motor: HoleGroup::from_positions(HoleGroupKind::B, motor_positions, options.fastener),
            shaft: AuxiliaryHole::SHAFT,
            bearing: AuxiliaryHole::BEARING,
        };

        if !layout.holes_within_wall() {
            log::warn!(
                "holes leave the wall between profile ({:.3} mm) and housing ({housing_radius:.3} mm); min wall {:.3} mm",
                layout.profile.max_radius(),
                layout.wall.min_thickness
            );
        }

        log::info!(
            "layout ready: ratio {}, {} profile points, {} valleys, min wall {:.3} mm, {} mounting holes at {}°",
            params.ratio(),
            layout.profile.len(),
            layout.valleys.len(),
            layout.wall.min_thickness,
            layout.primary.len(),
            layout.orientation.step
        );
        Ok(layout)
    }

    pub fn min_thickness(&self) -> Real {
        self.wall.min_thickness
    }

    /// True if every hole centre of both groups lies between the outermost
    /// profile radius and the housing.
    ///
    /// Motor holes stay on `R_out - 3` regardless of the wall, so this is false
    /// whenever the wall is thinner than that inset.
    pub fn holes_within_wall(&self) -> bool {
        let inner = self.profile.max_radius();
        let outer = self.params.housing_radius();
        self.primary.within_annulus(inner, outer) && self.motor.within_annulus(inner, outer)
    }

    /// True if no hole centre of either group falls inside the profile outline.
    pub fn holes_clear_of_profile(&self) -> bool {
        let outline = self.profile.to_polygon();
        self.primary
            .positions()
            .chain(self.motor.positions())
            .all(|p| !outline.contains(&geo::Point::new(p.x, p.y)))
    }
}
