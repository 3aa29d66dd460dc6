/// Ripple and map tuning constants.
///
/// These constants express intended behavior (growth curves, clamp limits,
/// throttle timing) and keep magic numbers out of the code.
// Magnitude clamp range fed into the strength factor
pub const MAG_MIN: f64 = 3.0;
pub const MAG_MAX: f64 = 9.0;

// Depth clamp range (km); shallow quakes ring harder
pub const DEPTH_MIN_KM: f64 = 0.0;
pub const DEPTH_MAX_KM: f64 = 700.0;

// Ripple radius curve: base + span * mag_factor * (floor + weight * depth_factor)
pub const RADIUS_BASE: f64 = 80.0;
pub const RADIUS_SPAN: f64 = 220.0;
pub const RADIUS_DEPTH_FLOOR: f64 = 0.4;
pub const RADIUS_DEPTH_WEIGHT: f64 = 0.6;

// Ripple growth per frame: base_rate * speed * (floor + weight * mag_factor)
pub const GROWTH_BASE_RATE: f64 = 1.1;
pub const GROWTH_MAG_FLOOR: f64 = 0.6;
pub const GROWTH_MAG_WEIGHT: f64 = 0.8;

// Ring stroke width mapping
pub const LINE_WIDTH_BASE: f64 = 2.0;
pub const LINE_WIDTH_SPAN: f64 = 3.0;

// Gradient stop where the ring fades in (fraction of current radius)
pub const RING_INNER_STOP: f64 = 0.7;

// Auto-spawn gate (wall-clock ms between feed-driven ripples)
pub const AUTO_SPAWN_INTERVAL_MS: f64 = 2000.0;

// Marker radius = MARKER_RADIUS_BASE + magnitude
pub const MARKER_RADIUS_BASE: f64 = 2.0;
// Extra slack around a marker for hover hit-testing (px)
pub const HOVER_PICK_SLACK: f64 = 4.0;
// Pointer travel under this counts as a click, not a drag (px)
pub const CLICK_DRAG_THRESHOLD: f64 = 3.0;

// Colors (CSS strings; ripple colors get their alpha computed per frame)
pub const OCEAN_FALLBACK_FILL: &str = "#0b1d33";
pub const MARKER_FILL: &str = "rgba(255, 196, 64, 0.85)";
pub const MANUAL_RIPPLE_RGB: (u8, u8, u8) = (80, 200, 255);
pub const AUTO_RIPPLE_RGB: (u8, u8, u8) = (255, 110, 80);

// Tooltip placement offset from the pointer (px)
pub const TOOLTIP_OFFSET_PX: f64 = 12.0;

// USGS feed: all magnitude 2.5+ events from the past day
pub const FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/2.5_day.geojson";
