//! Minimal driver: paint a rectangle, trace it, print the rings.

use geojson::GeoJson;
use mask_outlines::{rings_to_feature, MaskOutliner};

fn main() {
    tracing_subscriber::fmt::init();

    let mut mask = MaskOutliner::new(1000, 2);

    // Paint cell by cell through offsets, the way non-rectangular callers do.
    for x in 100..200 {
        for y in 100..150 {
            if let Some(offset) = mask.point_offset(x, y) {
                mask.grid_mut().set(offset, true);
            }
        }
    }

    let rings = mask.trace_outlines();

    println!("Detected {} ring(s):", rings.len());
    for ring in &rings {
        println!("{ring}");
    }

    let feature = GeoJson::Feature(rings_to_feature(&rings));
    println!("{feature}");
}
