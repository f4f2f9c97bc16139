//! GeoJSON adapter
//!
//! Rings are plain in-memory vertex sequences; downstream geometry consumers
//! usually want them as GeoJSON. This module converts traced rings into
//! `Feature`s with MultiPolygon geometry, one polygon per ring, so a mask's
//! outlines drop straight into any GeoJSON pipeline.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Position, Value};

use crate::ring::Ring;

fn ring_positions(ring: &Ring) -> Vec<Position> {
    ring.points()
        .iter()
        .map(|&(x, y)| vec![f64::from(x), f64::from(y)])
        .collect()
}

/// Build a Feature carrying every ring of one traced mask.
///
/// Geometry is a MultiPolygon with one single-ring polygon per traced ring
/// (rings are already closed, so each is a valid GeoJSON linear ring). The
/// `ring_count` property records how many rings the trace produced.
pub fn rings_to_feature(rings: &[Ring]) -> Feature {
    let polygons: Vec<Vec<Vec<Position>>> =
        rings.iter().map(|ring| vec![ring_positions(ring)]).collect();

    let mut properties = JsonObject::new();
    properties.insert("ring_count".to_string(), serde_json::json!(rings.len()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::MultiPolygon(polygons))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Build a FeatureCollection from the ring sets of several traced masks,
/// one Feature per mask.
pub fn rings_to_feature_collection(ring_sets: &[Vec<Ring>]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: ring_sets.iter().map(|r| rings_to_feature(r)).collect(),
        foreign_members: None,
    }
}
