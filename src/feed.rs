// USGS GeoJSON feed parsing.
//
// The feed is read once at startup. Parsing is tolerant: features with a
// null magnitude or malformed geometry are skipped rather than failing
// the whole load. Base canvas coordinates are precomputed per event so
// the frame loop never re-projects.
// Shared with the host-side tests via include!, so no inner doc comments.

use serde::Deserialize;

use crate::geo;

/// One earthquake as extracted from the feed, in geographic coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    pub magnitude: f64,
    pub place: String,
    pub time_ms: f64,
}

/// A feed record with base canvas coordinates baked in.
#[derive(Clone, Debug)]
pub struct QuakeEvent {
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    pub magnitude: f64,
    pub place: String,
    pub time_ms: f64,
    pub base_x: f64,
    pub base_y: f64,
}

#[derive(Deserialize)]
struct RawFeed {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: RawProperties,
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Default)]
struct RawProperties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<f64>,
}

#[derive(Deserialize)]
struct RawGeometry {
    // [longitude, latitude, depth_km]
    #[serde(default)]
    coordinates: Vec<f64>,
}

/// Parse the feed body into records, skipping unusable features.
pub fn parse_feed(body: &str) -> Result<Vec<FeedRecord>, serde_json::Error> {
    let raw: RawFeed = serde_json::from_str(body)?;
    let records = raw
        .features
        .into_iter()
        .filter_map(|f| {
            let geometry = f.geometry?;
            if geometry.coordinates.len() < 3 {
                return None;
            }
            let magnitude = f.properties.mag?;
            Some(FeedRecord {
                longitude: geometry.coordinates[0],
                latitude: geometry.coordinates[1],
                // the feed occasionally reports small negative depths
                depth_km: geometry.coordinates[2].max(0.0),
                magnitude,
                place: f.properties.place.unwrap_or_default(),
                time_ms: f.properties.time.unwrap_or(0.0),
            })
        })
        .collect();
    Ok(records)
}

/// Attach precomputed base coordinates for a fixed canvas size.
pub fn events_from_records(records: &[FeedRecord], width: f64, height: f64) -> Vec<QuakeEvent> {
    records
        .iter()
        .map(|r| {
            let (base_x, base_y) = geo::project(r.longitude, r.latitude, width, height);
            QuakeEvent {
                longitude: r.longitude,
                latitude: r.latitude,
                depth_km: r.depth_km,
                magnitude: r.magnitude,
                place: r.place.clone(),
                time_ms: r.time_ms,
                base_x,
                base_y,
            }
        })
        .collect()
}
