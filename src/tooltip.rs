use web_sys as web;

use crate::constants::TOOLTIP_OFFSET_PX;

// Rough box size used for viewport clamping; the real box is close enough
// that flipping to the other side of the pointer never clips content.
const EST_WIDTH: f64 = 230.0;
const EST_HEIGHT: f64 = 72.0;

/// Fill and place the tooltip next to the pointer, flipped away from the
/// viewport edges.
pub fn show(document: &web::Document, html: &str, page_x: f64, page_y: f64) {
    let Some(el) = document.get_element_by_id("tooltip") else {
        return;
    };
    el.set_inner_html(html);

    let (vw, vh) = viewport_size();
    let mut left = page_x + TOOLTIP_OFFSET_PX;
    if left + EST_WIDTH > vw {
        left = page_x - EST_WIDTH - TOOLTIP_OFFSET_PX;
    }
    let mut top = page_y + TOOLTIP_OFFSET_PX;
    if top + EST_HEIGHT > vh {
        top = page_y - EST_HEIGHT - TOOLTIP_OFFSET_PX;
    }
    _ = el.set_attribute(
        "style",
        &format!("display:block; left:{}px; top:{}px", left.max(0.0), top.max(0.0)),
    );
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("tooltip") {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Update the status line under the canvas (feed load result, errors).
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id("status") {
        el.set_text_content(Some(text));
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (f64::MAX, f64::MAX);
    };
    let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(f64::MAX);
    let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(f64::MAX);
    (vw, vh)
}
