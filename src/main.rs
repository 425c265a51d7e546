// main.rs
//
// Minimal example: compute the default reducer layout and write flat drawings of it.

use rollergear::{GearLayout, GearParameters, LayoutOptions};
use std::fs;

fn main() {
    let _ = fs::create_dir_all("out");

    let params = GearParameters::default();
    let layout = match GearLayout::compute(&params, &LayoutOptions::default()) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!(
        "ratio {}: e = {:.3} mm, cam radius {:.3} mm, {} valleys, min wall {:.3} mm",
        params.ratio(),
        params.eccentricity(),
        params.cam_radius(),
        layout.valleys.len(),
        layout.min_thickness()
    );
    for (label, hole) in layout.primary.labelled().chain(layout.motor.labelled()) {
        println!(
            "{label}: x={:.2}, y={:.2}, d={:.1}",
            hole.position.x,
            hole.position.y,
            hole.diameter()
        );
    }

    #[cfg(feature = "dxf-io")]
    {
        if let Err(err) = layout.write_dxf("out/rigid_gear.dxf") {
            eprintln!("{err}");
        }
    }

    #[cfg(feature = "svg-io")]
    {
        if let Err(err) = layout.write_svg("out/rigid_gear.svg") {
            eprintln!("{err}");
        }
    }
}
