//! 2D canvas drawing helpers for the frame loop.
//!
//! The map scrolls by drawing two adjacent copies of the same image, at
//! `offset - width` and `offset`; together they always cover the full
//! surface, so no true wraparound blit is needed. Markers and ripples are
//! positioned with the matching wraparound arithmetic in `geo`.

use std::f64::consts::TAU;

use web_sys as web;

use crate::constants::*;
use crate::ripple::{Ripple, RippleKind};

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Solid ocean fill while the map image has not loaded (or failed to).
pub fn draw_fallback(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(OCEAN_FALLBACK_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Two-copy scrolling blit of the world map.
pub fn draw_map(
    ctx: &web::CanvasRenderingContext2d,
    image: &web::HtmlImageElement,
    offset: f64,
    width: f64,
    height: f64,
) {
    _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        offset - width,
        0.0,
        width,
        height,
    );
    _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(image, offset, 0.0, width, height);
}

/// Filled event marker; radius scales with magnitude.
pub fn draw_marker(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, magnitude: f64) {
    ctx.set_fill_style_str(MARKER_FILL);
    ctx.begin_path();
    _ = ctx.arc(x, y, MARKER_RADIUS_BASE + magnitude, 0.0, TAU);
    ctx.fill();
}

/// Expanding ring: a radial-gradient stroke, transparent at the inner
/// stop and at full opacity-scaled alpha at the current radius.
pub fn draw_ripple(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, ripple: &Ripple) {
    if ripple.radius <= 0.0 {
        return;
    }
    let (r, g, b) = match ripple.kind {
        RippleKind::Manual => MANUAL_RIPPLE_RGB,
        RippleKind::Auto => AUTO_RIPPLE_RGB,
    };
    let alpha = ripple.opacity.clamp(0.0, 1.0);
    let Ok(gradient) =
        ctx.create_radial_gradient(x, y, RING_INNER_STOP * ripple.radius, x, y, ripple.radius)
    else {
        return;
    };
    _ = gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, 0)", r, g, b));
    _ = gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha));
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(ripple.line_width);
    ctx.begin_path();
    _ = ctx.arc(x, y, ripple.radius, 0.0, TAU);
    ctx.stroke();
}
