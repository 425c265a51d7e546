use super::IoError;
use crate::float_types::Real;
use crate::layout::GearLayout;
use std::path::Path;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path as SvgPath};

const STROKE_WIDTH: &str = "0.2";
const MARGIN: Real = 2.0;

fn circle(x: Real, y: Real, diameter: Real, class: &str) -> Circle {
    Circle::new()
        .set("cx", format!("{x:.5}"))
        .set("cy", format!("{y:.5}"))
        .set("r", format!("{:.5}", diameter / 2.0))
        .set("class", class)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", STROKE_WIDTH)
}

/// Path data for the closed profile outline.
#[allow(clippy::unnecessary_cast)]
fn outline_data(layout: &GearLayout) -> Data {
    let mut points = layout.profile.points().iter();
    let mut data = Data::new();
    if let Some(first) = points.next() {
        data = data.move_to((first.x as f32, first.y as f32));
    }
    for p in points {
        data = data.line_to((p.x as f32, p.y as f32));
    }
    data.close()
}

/// Export a `GearLayout` as an SVG drawing in millimetres, +Y up.
///
/// Group-A holes carry a concentric counterbore circle; the eccentric cam is
/// drawn as a reference circle.
pub fn to_svg(layout: &GearLayout) -> String {
    let params = &layout.params;
    let extent = params.housing_radius() + MARGIN;

    let mut body = Group::new()
        .set("transform", "scale(1,-1)")
        .add(circle(0.0, 0.0, params.housing_diameter(), "housing"))
        .add(
            SvgPath::new()
                .set("d", outline_data(layout))
                .set("class", "profile")
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", STROKE_WIDTH),
        );

    for group in [&layout.primary, &layout.motor] {
        let class = format!("hole-{}", group.kind.label().to_lowercase());
        for hole in &group.holes {
            let (x, y) = (hole.position.x, hole.position.y);
            body = body.add(circle(x, y, hole.diameter(), &class));
            if group.kind.is_counterbored() {
                body = body.add(circle(
                    x,
                    y,
                    hole.fastener.counterbore_diameter(),
                    "counterbore",
                ));
            }
        }
    }

    let cam = params.cam_center();
    body = body
        .add(circle(0.0, 0.0, layout.shaft.diameter(), "shaft"))
        .add(circle(0.0, 0.0, layout.bearing.diameter(), "bearing"))
        .add(
            circle(cam.x, cam.y, 2.0 * params.cam_radius(), "cam").set("stroke-dasharray", "1,1"),
        );

    Document::new()
        .set(
            "viewBox",
            format!("{} {} {} {}", -extent, -extent, 2.0 * extent, 2.0 * extent),
        )
        .set("width", format!("{}mm", 2.0 * extent))
        .set("height", format!("{}mm", 2.0 * extent))
        .add(body)
        .to_string()
}

impl GearLayout {
    pub fn to_svg(&self) -> String {
        self::to_svg(self)
    }

    /// Writes the SVG drawing to `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}
