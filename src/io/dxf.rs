use super::IoError;
use crate::float_types::Real;
use crate::layout::GearLayout;
use dxf::entities::{Circle, Entity, EntityType, LwPolyline};
use dxf::{Drawing, LwPolylineVertex};
use dxf::enums::AcadVersion;
use std::path::Path;

#[allow(clippy::unnecessary_cast)]
fn add_circle(drawing: &mut Drawing, x: Real, y: Real, diameter: Real) {
    let circle = Circle::new(
        dxf::Point::new(x as f64, y as f64, 0.0),
        diameter as f64 / 2.0,
    );
    drawing.add_entity(Entity::new(EntityType::Circle(circle)));
}

#[doc = " Export a `GearLayout` as a flat DXF drawing."]
#[doc = ""]
#[doc = " The profile becomes one closed `LWPOLYLINE`; the housing, every fastener"]
#[doc = " hole (clearance diameter), the counterbores of group A, the shaft and"]
#[doc = " bearing bores and the eccentric cam outline become `CIRCLE`s."]
#[doc = ""]
#[doc = " # Returns"]
#[doc = " A `Result` containing the DXF file as a byte vector or an error if exporting fails."]
#[allow(clippy::unnecessary_cast)]
pub fn to_dxf(layout: &GearLayout) -> Result<Vec<u8>, IoError> {
    let mut drawing = Drawing::new();
    // LWPOLYLINE needs R14 or later
    drawing.header.version = AcadVersion::R2000;

    add_circle(&mut drawing, 0.0, 0.0, layout.params.housing_diameter());

    let mut outline = LwPolyline::default();
    outline.vertices = layout
        .profile
        .points()
        .iter()
        .map(|p| LwPolylineVertex {
            x: p.x as f64,
            y: p.y as f64,
            ..Default::default()
        })
        .collect();
    outline.set_is_closed(true);
    drawing.add_entity(Entity::new(EntityType::LwPolyline(outline)));

    for group in [&layout.primary, &layout.motor] {
        for hole in &group.holes {
            let (x, y) = (hole.position.x, hole.position.y);
            add_circle(&mut drawing, x, y, hole.diameter());
            if group.kind.is_counterbored() {
                add_circle(&mut drawing, x, y, hole.fastener.counterbore_diameter());
            }
        }
    }
    for bore in [layout.shaft, layout.bearing] {
        add_circle(&mut drawing, 0.0, 0.0, bore.diameter());
    }
    let cam = layout.params.cam_center();
    add_circle(&mut drawing, cam.x, cam.y, 2.0 * layout.params.cam_radius());

    let mut buffer = Vec::new();
    drawing
        .save(&mut buffer)
        .map_err(|e| IoError::Dxf(e.to_string()))?;
    Ok(buffer)
}

impl GearLayout {
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        self::to_dxf(self)
    }

    /// Writes the DXF drawing to `path`.
    pub fn write_dxf(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        std::fs::write(path, self.to_dxf()?)?;
        Ok(())
    }
}
