// Host-side tests for feed parsing and base-coordinate precompute.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geo {
    include!("../src/geo.rs");
}
mod feed {
    include!("../src/feed.rs");
}

use feed::*;

const FIXTURE: &str = r#"{
  "type": "FeatureCollection",
  "metadata": { "title": "USGS Magnitude 2.5+ Earthquakes, Past Day", "count": 4 },
  "features": [
    {
      "type": "Feature",
      "properties": { "mag": 5.4, "place": "120 km SSE of Hachijo-jima, Japan", "time": 1724744400000 },
      "geometry": { "type": "Point", "coordinates": [139.8, 32.4, 10.0] }
    },
    {
      "type": "Feature",
      "properties": { "mag": null, "place": "somewhere", "time": 1724744500000 },
      "geometry": { "type": "Point", "coordinates": [10.0, 20.0, 5.0] }
    },
    {
      "type": "Feature",
      "properties": { "mag": 3.1, "place": "short coordinates", "time": 1724744600000 },
      "geometry": { "type": "Point", "coordinates": [10.0, 20.0] }
    },
    {
      "type": "Feature",
      "properties": { "mag": 2.8, "place": "offshore", "time": 1724744700000 },
      "geometry": { "type": "Point", "coordinates": [-71.5, -33.0, -0.4] }
    }
  ]
}"#;

#[test]
fn parses_usable_features_and_skips_the_rest() {
    let records = parse_feed(FIXTURE).expect("fixture parses");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].magnitude, 5.4);
    assert_eq!(records[0].longitude, 139.8);
    assert_eq!(records[0].latitude, 32.4);
    assert_eq!(records[0].depth_km, 10.0);
    assert_eq!(records[0].place, "120 km SSE of Hachijo-jima, Japan");
    assert_eq!(records[0].time_ms, 1724744400000.0);
}

#[test]
fn negative_feed_depth_clamps_to_zero() {
    let records = parse_feed(FIXTURE).unwrap();
    let offshore = records.iter().find(|r| r.place == "offshore").unwrap();
    assert_eq!(offshore.depth_km, 0.0);
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse_feed("not json").is_err());
    assert!(parse_feed("{\"features\": 42}").is_err());
}

#[test]
fn missing_features_array_yields_empty_list() {
    let records = parse_feed("{\"type\": \"FeatureCollection\"}").unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_place_and_time_get_defaults() {
    let body = r#"{ "features": [ {
        "properties": { "mag": 4.0 },
        "geometry": { "coordinates": [0.0, 0.0, 1.0] }
    } ] }"#;
    let records = parse_feed(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].place, "");
    assert_eq!(records[0].time_ms, 0.0);
}

#[test]
fn base_coordinates_match_the_projection() {
    let (w, h) = (800.0, 400.0);
    let records = parse_feed(FIXTURE).unwrap();
    let events = events_from_records(&records, w, h);
    assert_eq!(events.len(), records.len());
    for (e, r) in events.iter().zip(&records) {
        let (x, y) = geo::project(r.longitude, r.latitude, w, h);
        assert_eq!((e.base_x, e.base_y), (x, y));
        assert!(e.base_x >= 0.0 && e.base_x <= w);
        assert!(e.base_y >= 0.0 && e.base_y <= h);
    }
}
