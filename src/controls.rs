//! Slider and checkbox handles. The frame loop reads a plain snapshot
//! every frame; the core still clamps magnitude/depth itself, so stale or
//! out-of-range DOM values cannot break a spawn.

use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct ControlPanel {
    magnitude: Option<web::HtmlInputElement>,
    depth: Option<web::HtmlInputElement>,
    speed: Option<web::HtmlInputElement>,
    show_markers: Option<web::HtmlInputElement>,
    auto_ripples: Option<web::HtmlInputElement>,
}

#[derive(Clone, Copy, Debug)]
pub struct ControlValues {
    pub magnitude: f64,
    pub depth_km: f64,
    pub speed: f64,
    pub show_markers: bool,
    pub auto_ripples: bool,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            magnitude: 6.0,
            depth_km: 30.0,
            speed: 1.0,
            show_markers: true,
            auto_ripples: true,
        }
    }
}

impl ControlPanel {
    /// Look up the control elements; missing ones fall back to defaults.
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            magnitude: dom::get_input(document, "mag-slider"),
            depth: dom::get_input(document, "depth-slider"),
            speed: dom::get_input(document, "speed-slider"),
            show_markers: dom::get_input(document, "show-markers"),
            auto_ripples: dom::get_input(document, "auto-ripples"),
        }
    }

    pub fn read(&self) -> ControlValues {
        let defaults = ControlValues::default();
        ControlValues {
            magnitude: slider_value(&self.magnitude, defaults.magnitude),
            depth_km: slider_value(&self.depth, defaults.depth_km),
            speed: slider_value(&self.speed, defaults.speed),
            show_markers: checkbox_value(&self.show_markers, defaults.show_markers),
            auto_ripples: checkbox_value(&self.auto_ripples, defaults.auto_ripples),
        }
    }

    /// Keep the value labels next to the sliders in sync.
    pub fn wire_labels(&self, document: &web::Document) {
        wire_label(document, "mag-slider", "mag-value", |v| format!("M {:.1}", v));
        wire_label(document, "depth-slider", "depth-value", |v| {
            format!("{:.0} km", v)
        });
        wire_label(document, "speed-slider", "speed-value", |v| {
            format!("{:.1}x", v)
        });
        // set the initial text without waiting for the first input event
        for id in ["mag-slider", "depth-slider", "speed-slider"] {
            if let Some(el) = dom::get_input(document, id) {
                let event = web::Event::new("input");
                if let Ok(ev) = event {
                    _ = el.dispatch_event(&ev);
                }
            }
        }
    }
}

fn wire_label(
    document: &web::Document,
    slider_id: &str,
    label_id: &'static str,
    fmt: impl Fn(f64) -> String + 'static,
) {
    let Some(slider) = dom::get_input(document, slider_id) else {
        return;
    };
    let doc = document.clone();
    dom::add_input_listener(document, slider_id, move || {
        let v = slider.value_as_number();
        if v.is_finite() {
            dom::set_text(&doc, label_id, &fmt(v));
        }
    });
}

fn slider_value(input: &Option<web::HtmlInputElement>, fallback: f64) -> f64 {
    match input {
        Some(el) => {
            let v = el.value_as_number();
            if v.is_finite() {
                v
            } else {
                fallback
            }
        }
        None => fallback,
    }
}

fn checkbox_value(input: &Option<web::HtmlInputElement>, fallback: bool) -> bool {
    input.as_ref().map(|el| el.checked()).unwrap_or(fallback)
}
