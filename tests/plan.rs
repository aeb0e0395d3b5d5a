// Integration tests for stored plans and the metrics report:
//   file round trips, metrics recomputed from a document

use std::{fs, sync::Arc};

use automap::{compute_metrics, FairnessPreset, GenerationConfig, Plan, PlanDocument, PrecinctMap};
use serde_json::json;

fn write_geojson(dir: &std::path::Path) -> std::path::PathBuf {
    let squares = [(0.0, 0.0, "A", 120, 70, 30), (1.0, 0.0, "A", 80, 40, 60), (0.0, 1.0, "B", 100, 20, 80), (1.0, 1.0, "B", 100, 55, 45)];
    let features = squares.iter().enumerate()
        .map(|(i, &(x, y, county, population, dem, rep))| json!({
            "type": "Feature",
            "properties": { "id": format!("sq{i}"), "county": county, "population": population, "dem": dem, "rep": rep },
            "geometry": { "type": "Polygon", "coordinates": [[[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0], [x, y]]] }
        }))
        .collect::<Vec<_>>();

    let path = dir.join("precincts.geojson");
    fs::write(&path, serde_json::to_vec(&json!({ "type": "FeatureCollection", "features": features })).unwrap()).unwrap();
    path
}

#[test]
fn stored_plan_reproduces_its_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let geojson = write_geojson(dir.path());

    let map = Arc::new(PrecinctMap::read_from_geojson_file(&geojson).unwrap());
    let mut plan = Plan::new(Arc::clone(&map), GenerationConfig::with_preset(2, FairnessPreset::LeanR).unwrap());
    plan.generate().unwrap();

    let document = plan.to_document("OH", None).unwrap();
    assert_eq!(document.name, "Automap - Lean R");

    let path = dir.path().join("plan.json");
    document.write_to_file(&path).unwrap();
    let stored = PlanDocument::read_from_file(&path).unwrap();

    let reread = PrecinctMap::read_from_geojson_file(&geojson).unwrap();
    let report = compute_metrics(&reread, &stored.assignments, stored.num_districts);

    // Compare through the same text encoding the stored copy went through.
    let recomputed: serde_json::Value = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(recomputed, stored.metrics);
    assert_eq!(report.by_district.values().map(|m| m.population).sum::<u64>(), 400);
    assert!(report.by_district.values().all(|m| m.compactness > 0.0 && m.compactness <= 1.0));
}

#[test]
fn unreadable_inputs_are_reported_with_context() {
    let dir = tempfile::tempdir().unwrap();

    let missing = PrecinctMap::read_from_geojson_file(&dir.path().join("missing.geojson")).unwrap_err();
    assert!(format!("{missing:#}").contains("Failed to read GeoJSON file"));

    let garbage = dir.path().join("garbage.geojson");
    fs::write(&garbage, b"{ not json").unwrap();
    let err = PrecinctMap::read_from_geojson_file(&garbage).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse GeoJSON file"));

    let bad_plan = dir.path().join("plan.json");
    fs::write(&bad_plan, b"{\"state\": \"OH\"}").unwrap();
    assert!(PlanDocument::read_from_file(&bad_plan).is_err());
}

#[test]
fn metrics_report_serializes_in_camel_case() {
    let map = PrecinctMap::from_geojson(&json!({ "features": [
        { "properties": { "id": "a", "population": 10, "dem": 9, "rep": 1 } },
        { "properties": { "id": "b", "population": 10, "dem": 1, "rep": 9 } }
    ]})).unwrap();
    let assignments = [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();

    let value = serde_json::to_value(compute_metrics(&map, &assignments, 2)).unwrap();

    assert_eq!(value["byDistrict"]["1"]["demVotes"], json!(9));
    assert_eq!(value["byDistrict"]["2"]["partisanLean"], json!(0.1));
    assert_eq!(value["byDistrict"]["1"]["populationDeviation"], json!(0.0));
    assert_eq!(value["statewideDemShare"], json!(0.5));
    assert_eq!(value["efficiencyGap"], json!(0.0));
    assert_eq!(value["seats"]["demSeats"], json!(1));
}
