#![cfg(target_arch = "wasm32")]
//! Interactive earthquake map: a scrolling equirectangular world map on a
//! 2D canvas, markers for recent quakes from the USGS feed, and expanding
//! ripple rings spawned by clicks or automatically from the feed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod feed;
mod frame;
mod geo;
mod input;
mod net;
mod render;
mod ripple;
mod throttle;
mod tooltip;

use constants::FEED_URL;
use feed::QuakeEvent;
use ripple::RippleField;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("quake-ripple starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("quake-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #quake-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (map_image, map_loaded) = load_map_image()?;

    // ---------------- Shared state ----------------
    // One logical thread of control: the frame callback and the DOM event
    // callbacks never run concurrently, so plain Rc<RefCell> cells suffice.
    let offset = Rc::new(RefCell::new(0.0_f64));
    let quake_events: Rc<RefCell<Vec<QuakeEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let ripples = Rc::new(RefCell::new(RippleField::new()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    let controls = controls::ControlPanel::from_document(&document);
    controls.wire_labels(&document);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        offset: offset.clone(),
        events: quake_events.clone(),
        ripples: ripples.clone(),
        controls: controls.clone(),
        drag: drag.clone(),
    });

    // One-shot feed load; the list is swapped in whole when it arrives and
    // stays empty on failure (the loop keeps running either way).
    {
        let quake_events = quake_events.clone();
        let document = document.clone();
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        tooltip::set_status(&document, "Loading earthquake feed…");
        spawn_local(async move {
            match load_feed(width, height).await {
                Ok(list) => {
                    log::info!("[feed] loaded {} events", list.len());
                    tooltip::set_status(
                        &document,
                        &format!("{} earthquakes in the last 24 h", list.len()),
                    );
                    *quake_events.borrow_mut() = list;
                }
                Err(e) => {
                    log::error!("[feed] load failed: {:?}", e);
                    tooltip::set_status(&document, "Feed unavailable; click the map to make waves");
                }
            }
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        map_image,
        map_loaded,
        offset,
        events: quake_events,
        ripples,
        throttle: throttle::AutoSpawn::new(),
        controls,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

async fn load_feed(width: f64, height: f64) -> anyhow::Result<Vec<QuakeEvent>> {
    let body = net::fetch_text(FEED_URL).await?;
    let records = feed::parse_feed(&body)?;
    Ok(feed::events_from_records(&records, width, height))
}

fn load_map_image() -> anyhow::Result<(web::HtmlImageElement, Rc<Cell<bool>>)> {
    let image = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let loaded = Rc::new(Cell::new(false));
    let loaded_on = loaded.clone();
    let onload = Closure::wrap(Box::new(move || {
        loaded_on.set(true);
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    image.set_src("world-map.png");
    Ok((image, loaded))
}
