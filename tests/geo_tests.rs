// Host-side tests for projection and wraparound arithmetic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geo {
    include!("../src/geo.rs");
}

use geo::*;

const W: f64 = 800.0;
const H: f64 = 400.0;

#[test]
fn project_corners_and_center() {
    assert_eq!(project(-180.0, 90.0, W, H), (0.0, 0.0));
    assert_eq!(project(180.0, -90.0, W, H), (W, H));
    assert_eq!(project(0.0, 0.0, W, H), (W / 2.0, H / 2.0));
}

#[test]
fn project_scales_linearly_with_canvas() {
    let (x, y) = project(90.0, 45.0, W, H);
    let (x2, y2) = project(90.0, 45.0, 2.0 * W, 2.0 * H);
    assert!((x2 - 2.0 * x).abs() < 1e-9);
    assert!((y2 - 2.0 * y).abs() < 1e-9);
}

#[test]
fn normalize_offset_handles_negatives() {
    assert_eq!(normalize_offset(-5.0, W), 795.0);
    assert_eq!(normalize_offset(-800.0, W), 0.0);
    assert_eq!(normalize_offset(-805.0, W), 795.0);
}

#[test]
fn normalize_offset_stays_in_range() {
    for raw in [-2400.5, -800.0, -0.1, 0.0, 1.0, 799.9, 800.0, 12345.6] {
        let n = normalize_offset(raw, W);
        assert!(n >= 0.0 && n < W, "normalize({raw}) = {n} out of range");
    }
}

#[test]
fn screen_round_trip_is_identity() {
    for offset in [0.0, 1.0, 250.0, 799.0] {
        for base_x in [0.0, 0.5, 123.25, 400.0, 799.99] {
            let sx = to_screen_x(base_x, offset, W);
            let back = to_base_x(sx, offset, W);
            assert!(
                (back - base_x).abs() < 1e-9,
                "round trip failed: base {base_x} offset {offset} -> {back}"
            );
        }
    }
}

#[test]
fn to_screen_x_wraps_once() {
    // base 700 + offset 300 = 1000, past the right edge by 200
    assert_eq!(to_screen_x(700.0, 300.0, W), 200.0);
    // no wrap when the sum stays on the surface
    assert_eq!(to_screen_x(100.0, 300.0, W), 400.0);
}

#[test]
fn to_base_x_unwraps_negatives() {
    assert_eq!(to_base_x(200.0, 300.0, W), 700.0);
    assert_eq!(to_base_x(400.0, 300.0, W), 100.0);
}
