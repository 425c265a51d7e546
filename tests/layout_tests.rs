mod support;

use rollergear::{
    GearLayout, GearParameters, GeometryError, LayoutOptions,
    float_types::Real,
    holes::{AuxiliaryHole, HoleCountBoundary, HoleGroupKind},
    traits::PolarPoint,
};
use support::{angle_gap, approx_eq, params};

fn compute(p: &GearParameters, boundary: HoleCountBoundary) -> GearLayout {
    let options = LayoutOptions::default().with_hole_count_boundary(boundary);
    GearLayout::compute(p, &options).unwrap()
}

#[test]
fn layout_is_idempotent() {
    let p = GearParameters::default();
    let a = GearLayout::compute(&p, &LayoutOptions::default()).unwrap();
    let b = GearLayout::compute(&p, &LayoutOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn scenario_ratio_twelve() {
    let p = params(12, 8.0, 38.0, 90.0);
    let layout = compute(&p, HoleCountBoundary::Exclusive);

    assert_eq!(layout.profile.len(), 600);
    assert_eq!(layout.valleys.len(), 13);
    assert!(approx_eq(layout.min_thickness(), 7.0, 1e-9));
    assert!(approx_eq(layout.wall.hole_band_radius(), 41.5, 1e-9));

    assert_eq!(layout.primary.kind, HoleGroupKind::A);
    assert_eq!(layout.primary.len(), 8);
    assert!(layout.primary.within_annulus(41.5 - 1e-9, 41.5 + 1e-9));

    assert_eq!(layout.motor.kind, HoleGroupKind::B);
    assert_eq!(layout.motor.len(), 4);
    assert!(layout.motor.within_annulus(42.0 - 1e-9, 42.0 + 1e-9));

    assert_eq!(layout.shaft, AuxiliaryHole::SHAFT);
    assert_eq!(layout.bearing, AuxiliaryHole::BEARING);
}

#[test]
fn inclusive_boundary_gives_six_holes_at_ninety() {
    let p = params(12, 8.0, 38.0, 90.0);
    assert_eq!(compute(&p, HoleCountBoundary::Exclusive).primary.len(), 8);
    assert_eq!(compute(&p, HoleCountBoundary::Inclusive).primary.len(), 6);
}

#[test]
fn scenario_ratio_seventeen() {
    let p = params(17, 6.0, 38.0, 90.0);
    for (boundary, count) in [
        (HoleCountBoundary::Exclusive, 8),
        (HoleCountBoundary::Inclusive, 6),
    ] {
        let layout = compute(&p, boundary);
        assert_eq!(layout.valleys.len(), 18);
        assert_eq!(layout.primary.len(), count);
        assert_eq!(layout.motor.len(), 4);
        assert!(approx_eq(layout.min_thickness(), 7.0, 1e-9));
    }
}

#[test]
fn small_housing_gets_four_holes() {
    let p = params(5, 5.0, 25.0, 58.0);
    let options = LayoutOptions::default().with_resolution(1024);
    let layout = GearLayout::compute(&p, &options).unwrap();
    assert_eq!(layout.profile.len(), 1024);
    assert_eq!(layout.valleys.len(), 6);
    assert_eq!(layout.primary.len(), 4);
    assert!(approx_eq(layout.min_thickness(), 4.0, 1e-9));
}

#[test]
fn holes_lie_between_profile_and_housing() {
    for p in [
        GearParameters::default(),
        params(17, 6.0, 38.0, 90.0),
        params(8, 10.0, 45.0, 110.0),
    ] {
        let layout = GearLayout::compute(&p, &LayoutOptions::default()).unwrap();
        let inner = layout.profile.max_radius();
        let outer = p.housing_radius();
        assert!(layout.primary.within_annulus(inner, outer));
        assert!(layout.motor.within_annulus(inner, outer));
        assert!(layout.holes_clear_of_profile());
    }
}

#[test]
fn thin_wall_keeps_motor_holes_at_the_edge_inset() {
    // 2 mm of wall: the motor circle at R - 3 falls inside the profile's reach.
    let p = params(12, 8.0, 38.0, 80.0);
    let layout = GearLayout::compute(&p, &LayoutOptions::default()).unwrap();
    assert!(approx_eq(layout.min_thickness(), 2.0, 1e-9));
    assert!(layout.primary.within_annulus(38.0, 40.0));
    assert!(layout.motor.within_annulus(37.0 - 1e-9, 37.0 + 1e-9));
    assert!(!layout.holes_within_wall());

    let roomy = compute(&GearParameters::default(), HoleCountBoundary::Exclusive);
    assert!(roomy.holes_within_wall());
}

#[test]
fn groups_share_the_chosen_rotation() {
    let layout = compute(&GearParameters::default(), HoleCountBoundary::Exclusive);
    let rotation = layout.orientation.angle_deg();
    let n = layout.primary.len();
    for (k, angle) in layout.primary.angles_deg().into_iter().enumerate() {
        assert!(angle_gap(angle, rotation + 360.0 * k as Real / n as Real) < 1e-6);
    }
    for (k, hole) in layout.motor.holes.iter().enumerate() {
        let gap = angle_gap(hole.position.angle_deg(), rotation + 90.0 * k as Real);
        assert!(gap < 1e-6 || approx_eq(gap, 15.0, 1e-6));
    }
}

#[test]
fn labels_cover_both_groups() {
    let layout = compute(&GearParameters::default(), HoleCountBoundary::Exclusive);
    let labels: Vec<String> = layout
        .primary
        .labelled()
        .chain(layout.motor.labelled())
        .map(|(label, _)| label)
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("A1"));
    assert!(labels.contains(&"A8".to_string()));
    assert_eq!(labels.last().map(String::as_str), Some("B4"));
    assert_eq!(labels.len(), 12);
}

#[test]
fn pipeline_failures_are_reported() {
    assert!(matches!(
        GearParameters::new(u32::MAX, 8.0, 6.0, 38.0, 90.0, 15.0),
        Err(GeometryError::InvalidParameter(_))
    ));
    assert!(matches!(
        GearLayout::compute(&params(30, 8.0, 38.0, 90.0), &LayoutOptions::default()),
        Err(GeometryError::InfeasibleGeometry { .. })
    ));
    assert!(matches!(
        GearLayout::compute(&params(12, 8.0, 38.0, 75.0), &LayoutOptions::default()),
        Err(GeometryError::NegativeThickness { .. })
    ));
    assert!(matches!(
        GearLayout::compute(
            &GearParameters::default(),
            &LayoutOptions::default().with_resolution(2)
        ),
        Err(GeometryError::InvalidParameter(_))
    ));
}

#[cfg(feature = "svg-io")]
#[test]
fn svg_drawing_lists_every_hole() {
    let layout = compute(&GearParameters::default(), HoleCountBoundary::Exclusive);
    let svg = layout.to_svg();
    // housing, eight mounting holes and their counterbores, four motor holes,
    // shaft, bearing and cam
    assert_eq!(svg.matches("<circle").count(), 24);
    assert_eq!(svg.matches("<path").count(), 1);
}
