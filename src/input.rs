// Pointer drag bookkeeping, kept free of web types so the click-vs-drag
// decision is testable host-side.
// Shared with the host-side tests via include!, so no inner doc comments.

use crate::constants::CLICK_DRAG_THRESHOLD;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub press_x: f64,
    pub press_y: f64,
    pub offset_at_press: f64,
    /// Greatest pointer travel on either axis since press.
    pub moved: f64,
}

impl DragState {
    pub fn begin(&mut self, x: f64, y: f64, offset: f64) {
        self.active = true;
        self.press_x = x;
        self.press_y = y;
        self.offset_at_press = offset;
        self.moved = 0.0;
    }

    /// Record pointer travel; vertical motion counts toward the drag
    /// decision even though only horizontal motion scrolls the map.
    pub fn note_motion(&mut self, x: f64, y: f64) {
        let dx = (x - self.press_x).abs();
        let dy = (y - self.press_y).abs();
        self.moved = self.moved.max(dx.max(dy));
    }

    /// A press that never travelled past the threshold is a click.
    pub fn is_click(&self) -> bool {
        self.moved < CLICK_DRAG_THRESHOLD
    }
}
