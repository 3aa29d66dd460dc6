//! Per-frame orchestration and the requestAnimationFrame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::controls::ControlPanel;
use crate::feed::QuakeEvent;
use crate::ripple::{RippleField, RippleKind};
use crate::throttle::AutoSpawn;
use crate::{geo, render};

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub map_image: web::HtmlImageElement,
    pub map_loaded: Rc<Cell<bool>>,

    pub offset: Rc<RefCell<f64>>,
    pub events: Rc<RefCell<Vec<QuakeEvent>>>,
    pub ripples: Rc<RefCell<RippleField>>,
    pub throttle: AutoSpawn,
    pub controls: ControlPanel,

    pub started: Instant,
}

impl FrameContext {
    /// One frame: scroll, map, markers, auto-spawn, ripple aging + draw.
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let offset = geo::normalize_offset(*self.offset.borrow(), width);
        let vals = self.controls.read();

        render::clear(&self.ctx, width, height);
        if self.map_loaded.get() {
            render::draw_map(&self.ctx, &self.map_image, offset, width, height);
        } else {
            render::draw_fallback(&self.ctx, width, height);
        }

        {
            let events = self.events.borrow();
            if vals.show_markers {
                for e in events.iter() {
                    let sx = geo::to_screen_x(e.base_x, offset, width);
                    render::draw_marker(&self.ctx, sx, e.base_y, e.magnitude);
                }
            }
            if let Some(e) = self.throttle.tick(now_ms, vals.auto_ripples, &events) {
                self.ripples.borrow_mut().spawn(
                    e.base_x,
                    e.base_y,
                    e.magnitude,
                    e.depth_km,
                    vals.speed,
                    RippleKind::Auto,
                );
            }
        }

        let mut ripples = self.ripples.borrow_mut();
        for r in ripples.advance_and_prune() {
            let sx = geo::to_screen_x(r.base_x, offset, width);
            render::draw_ripple(&self.ctx, sx, r.base_y, r);
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs for the lifetime of
/// the view.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // reschedule before drawing
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
