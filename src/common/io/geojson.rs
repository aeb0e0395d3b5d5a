use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value};

use crate::common::geometry::vertex_centroid;

/// A single GeoJSON feature, reduced to what the engine reads.
#[derive(Clone, Debug, Default)]
pub(crate) struct Feature {
    pub(crate) properties: Map<String, Value>,
    /// Polygon or MultiPolygon geometry; `None` if missing or of another type.
    pub(crate) geometry: Option<MultiPolygon<f64>>,
    /// Vertex average of the first ring of the first polygon (origin if absent).
    pub(crate) centroid: Coord<f64>,
}

/// Read a FeatureCollection from a GeoJSON file.
pub(crate) fn read_from_geojson_file(path: &Path) -> Result<Vec<Feature>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    read_from_geojson_bytes(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Read a FeatureCollection from GeoJSON bytes.
pub(crate) fn read_from_geojson_bytes(bytes: &[u8]) -> Result<Vec<Feature>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    read_from_geojson_value(&value)
}

/// Read a FeatureCollection from an already-parsed JSON value.
/// Individual features are never rejected; only a missing `features` array is an error.
pub(crate) fn read_from_geojson_value(value: &Value) -> Result<Vec<Feature>> {
    let features = value.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("GeoJSON document has no 'features' array"))?;

    Ok(features.iter().map(parse_feature).collect())
}

fn parse_feature(feature: &Value) -> Feature {
    let properties = feature.get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let Some(geometry) = feature.get("geometry").filter(|g| g.is_object()) else {
        return Feature { properties, ..Default::default() };
    };

    // Polygon: [ring, ...]; MultiPolygon: [[ring, ...], ...]
    let coords = geometry.get("coordinates").and_then(Value::as_array);
    let polygons: Vec<&[Value]> = match (geometry.get("type").and_then(Value::as_str), coords) {
        (Some("Polygon"), Some(rings)) => vec![rings.as_slice()],
        (Some("MultiPolygon"), Some(polys)) => polys.iter()
            .filter_map(Value::as_array)
            .map(Vec::as_slice)
            .collect(),
        _ => return Feature { properties, ..Default::default() },
    };

    let centroid = polygons.first()
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
        .map(|ring| vertex_centroid(&parse_ring_coords(ring)))
        .unwrap_or(Coord { x: 0.0, y: 0.0 });

    let geometry = MultiPolygon(polygons.into_iter()
        .filter_map(|rings| {
            let mut rings = rings.iter()
                .filter_map(Value::as_array)
                .map(|ring| LineString(parse_ring_coords(ring)));
            let exterior = rings.next()?;
            Some(Polygon::new(exterior, rings.collect()))
        })
        .collect());

    Feature { properties, geometry: Some(geometry), centroid }
}

/// Parse a ring's `[x, y]` positions exactly as listed. Malformed positions are dropped.
fn parse_ring_coords(coords: &[Value]) -> Vec<Coord<f64>> {
    coords.iter()
        .filter_map(Value::as_array)
        .filter_map(|pair| match pair.as_slice() {
            [x, y, ..] => Some(Coord { x: x.as_f64()?, y: y.as_f64()? }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_polygon_and_multipolygon_features() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "id": "a" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "id": "b" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[10, 10], [12, 10], [12, 12], [10, 12]]],
                            [[[20, 20], [21, 20], [21, 21]]]
                        ]
                    }
                }
            ]
        });

        let features = read_from_geojson_value(&doc).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].properties["id"], json!("a"));
        assert_eq!(features[0].centroid, Coord { x: 1.0, y: 1.0 });
        assert_eq!(features[0].geometry.as_ref().unwrap().0.len(), 1);

        // Centroid comes from the first ring of the first polygon only.
        assert_eq!(features[1].centroid, Coord { x: 11.0, y: 11.0 });
        assert_eq!(features[1].geometry.as_ref().unwrap().0.len(), 2);
    }

    #[test]
    fn holes_become_interiors() {
        let doc = json!({ "features": [{
            "properties": {},
            "geometry": { "type": "Polygon", "coordinates": [
                [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                [[1, 1], [2, 1], [2, 2], [1, 2], [1, 1]]
            ]}
        }]});
        let features = read_from_geojson_value(&doc).unwrap();
        let polygon = &features[0].geometry.as_ref().unwrap().0[0];
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn missing_or_unsupported_geometry_defaults_to_origin() {
        let doc = json!({ "features": [
            { "properties": { "id": "x" } },
            { "properties": { "id": "y" }, "geometry": null },
            { "properties": { "id": "z" }, "geometry": { "type": "Point", "coordinates": [5, 5] } },
            { "properties": { "id": "w" }, "geometry": { "type": "Polygon", "coordinates": [] } }
        ]});
        let features = read_from_geojson_value(&doc).unwrap();
        assert_eq!(features.len(), 4);
        for feature in &features[..3] {
            assert!(feature.geometry.is_none());
            assert_eq!(feature.centroid, Coord { x: 0.0, y: 0.0 });
        }
        assert_eq!(features[3].centroid, Coord { x: 0.0, y: 0.0 });
    }

    #[test]
    fn missing_properties_become_empty_map() {
        let doc = json!({ "features": [{ "geometry": null }] });
        let features = read_from_geojson_value(&doc).unwrap();
        assert!(features[0].properties.is_empty());
    }

    #[test]
    fn malformed_positions_are_dropped() {
        let doc = json!({ "features": [{
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], ["a", 1], [2], [2, 2]]] }
        }]});
        let features = read_from_geojson_value(&doc).unwrap();
        assert_eq!(features[0].centroid, Coord { x: 1.0, y: 1.0 });
    }

    #[test]
    fn document_without_features_is_an_error() {
        assert!(read_from_geojson_value(&json!({ "type": "FeatureCollection" })).is_err());
        assert!(read_from_geojson_bytes(b"not json").is_err());
    }

    #[test]
    fn empty_collection_reads_as_no_features() {
        let features = read_from_geojson_bytes(br#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(features.is_empty());
    }
}
