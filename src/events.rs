//! Pointer wiring: drag to rotate the map, click to spawn a ripple,
//! hover to inspect an event.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HOVER_PICK_SLACK, MARKER_RADIUS_BASE};
use crate::controls::ControlPanel;
use crate::feed::QuakeEvent;
use crate::input::DragState;
use crate::ripple::{RippleField, RippleKind};
use crate::{dom, geo, tooltip};

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub offset: Rc<RefCell<f64>>,
    pub events: Rc<RefCell<Vec<QuakeEvent>>>,
    pub ripples: Rc<RefCell<RippleField>>,
    pub controls: ControlPanel,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        {
            let offset = *w.offset.borrow();
            w.drag
                .borrow_mut()
                .begin(pos.x as f64, pos.y as f64, offset);
        }
        if let Some(doc) = dom::window_document() {
            tooltip::hide(&doc);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);

        if w.drag.borrow().active {
            let mut ds = w.drag.borrow_mut();
            ds.note_motion(pos.x as f64, pos.y as f64);
            *w.offset.borrow_mut() = ds.offset_at_press + (pos.x as f64 - ds.press_x);
            return;
        }

        // Hover hit-test against the visible marker positions
        let width = w.canvas.width() as f64;
        let offset = geo::normalize_offset(*w.offset.borrow(), width);
        let events = w.events.borrow();
        let hit = nearest_event(&events, pos.x as f64, pos.y as f64, offset, width);
        let Some(doc) = dom::window_document() else {
            return;
        };
        match hit {
            Some(i) => {
                let e = &events[i];
                tooltip::show(
                    &doc,
                    &event_html(e),
                    ev.page_x() as f64,
                    ev.page_y() as f64,
                );
            }
            None => tooltip::hide(&doc),
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_active = w.drag.borrow().active;
        if !was_active {
            return;
        }
        let was_click = w.drag.borrow().is_click();
        w.drag.borrow_mut().active = false;

        if !was_click {
            return;
        }

        // A press that never travelled is a click: anchor a ripple where
        // the map was hit, not where the screen was hit.
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let width = w.canvas.width() as f64;
        let height = w.canvas.height() as f64;
        let (x, y) = (pos.x as f64, pos.y as f64);
        if x < 0.0 || x > width || y < 0.0 || y > height {
            return;
        }
        let offset = geo::normalize_offset(*w.offset.borrow(), width);
        let base_x = geo::to_base_x(x, offset, width);
        let vals = w.controls.read();
        w.ripples.borrow_mut().spawn(
            base_x,
            y,
            vals.magnitude,
            vals.depth_km,
            vals.speed,
            RippleKind::Manual,
        );
        log::info!("[click] ripple at base ({:.0}, {:.0}) M{:.1}", base_x, y, vals.magnitude);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Nearest event whose marker (plus slack) contains the pointer.
fn nearest_event(
    events: &[QuakeEvent],
    x: f64,
    y: f64,
    offset: f64,
    width: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, e) in events.iter().enumerate() {
        let sx = geo::to_screen_x(e.base_x, offset, width);
        let dx = x - sx;
        let dy = y - e.base_y;
        let dist = (dx * dx + dy * dy).sqrt();
        let pick = MARKER_RADIUS_BASE + e.magnitude + HOVER_PICK_SLACK;
        if dist <= pick {
            match best {
                Some((_, bd)) if bd <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
    }
    best.map(|(i, _)| i)
}

fn event_html(e: &QuakeEvent) -> String {
    let when = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(e.time_ms));
    let when: String = when
        .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into();
    format!(
        "<strong>M {:.1}</strong> — {}<br>depth {:.0} km<br>{}",
        e.magnitude, e.place, e.depth_km, when
    )
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
