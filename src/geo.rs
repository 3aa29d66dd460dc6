// Equirectangular projection and horizontal wraparound arithmetic.
//
// Base coordinates are map-anchored (independent of the scroll offset);
// screen coordinates have the offset applied with a single wraparound.
// The map is drawn as two adjacent copies (at `offset - w` and `offset`),
// and these transforms must stay consistent with that so markers and
// ripples land on the visible copy.
// Shared with the host-side tests via include!, so no inner doc comments.

/// Project geographic coordinates onto the base canvas plane.
///
/// Callers guarantee lon in [-180, 180] and lat in [-90, 90] (feed data);
/// out-of-range input is not rejected.
#[inline]
pub fn project(lon: f64, lat: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (lon + 180.0) / 360.0 * width;
    let y = (90.0 - lat) / 180.0 * height;
    (x, y)
}

/// Map any scroll offset into [0, width).
///
/// Rust's `%` truncates toward zero, so the double-mod is needed for
/// negative offsets (e.g. -5 at width 800 -> 795).
#[inline]
pub fn normalize_offset(offset: f64, width: f64) -> f64 {
    ((offset % width) + width) % width
}

/// Base x -> screen x under a normalized offset.
///
/// Both operands sit in [0, width), so the sum is below 2*width and a
/// single subtraction suffices.
#[inline]
pub fn to_screen_x(base_x: f64, offset: f64, width: f64) -> f64 {
    let x = base_x + offset;
    if x > width {
        x - width
    } else {
        x
    }
}

/// Screen x -> base x; inverse of [`to_screen_x`].
#[inline]
pub fn to_base_x(screen_x: f64, offset: f64, width: f64) -> f64 {
    let x = screen_x - offset;
    if x < 0.0 {
        x + width
    } else {
        x
    }
}
