// Host-side tests for pointer drag bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::DragState;

#[test]
fn untravelled_press_is_a_click() {
    let mut ds = DragState::default();
    ds.begin(100.0, 50.0, 0.0);
    assert!(ds.is_click());
    ds.note_motion(100.5, 50.5);
    assert!(ds.is_click());
}

#[test]
fn horizontal_drag_is_not_a_click() {
    let mut ds = DragState::default();
    ds.begin(100.0, 50.0, 0.0);
    ds.note_motion(140.0, 50.0);
    assert!(!ds.is_click());
}

#[test]
fn vertical_drag_is_not_a_click() {
    // vertical travel does not scroll the map, but it is still a drag
    let mut ds = DragState::default();
    ds.begin(100.0, 50.0, 0.0);
    ds.note_motion(100.0, 90.0);
    assert!(!ds.is_click());
}

#[test]
fn travel_is_remembered_after_returning_to_the_press_point() {
    let mut ds = DragState::default();
    ds.begin(100.0, 50.0, 0.0);
    ds.note_motion(160.0, 50.0);
    ds.note_motion(100.0, 50.0);
    assert!(!ds.is_click());
}

#[test]
fn begin_resets_previous_travel() {
    let mut ds = DragState::default();
    ds.begin(0.0, 0.0, 0.0);
    ds.note_motion(500.0, 500.0);
    assert!(!ds.is_click());
    ds.begin(10.0, 10.0, 25.0);
    assert!(ds.is_click());
    assert_eq!(ds.offset_at_press, 25.0);
    assert_eq!(ds.press_x, 10.0);
    assert_eq!(ds.press_y, 10.0);
}
