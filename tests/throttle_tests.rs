// Host-side tests for the auto-spawn gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod throttle {
    include!("../src/throttle.rs");
}

use throttle::AutoSpawn;

#[test]
fn first_tick_fires_immediately_then_gates() {
    let events = ["a", "b", "c"];
    let mut gate = AutoSpawn::new();

    assert_eq!(gate.tick(0.0, true, &events), Some(&"a"));
    assert_eq!(gate.tick(500.0, true, &events), None);
    assert_eq!(gate.tick(2100.0, true, &events), Some(&"b"));
    assert_eq!(gate.tick(4300.0, true, &events), Some(&"c"));
}

#[test]
fn cursor_wraps_around_the_list() {
    let events = [10, 20, 30];
    let mut gate = AutoSpawn::new();
    let mut picked = Vec::new();
    for i in 0..7 {
        let now = i as f64 * 2000.0;
        if let Some(v) = gate.tick(now, true, &events) {
            picked.push(*v);
        }
    }
    assert_eq!(picked, vec![10, 20, 30, 10, 20, 30, 10]);
}

#[test]
fn disabled_or_empty_never_spawns() {
    let events = [1, 2, 3];
    let none: [i32; 0] = [];
    let mut gate = AutoSpawn::new();
    for i in 0..5 {
        let now = i as f64 * 3000.0;
        assert_eq!(gate.tick(now, false, &events), None);
        assert_eq!(gate.tick(now, true, &none), None);
    }
    // never having spawned, the next enabled tick still fires immediately
    assert_eq!(gate.tick(15000.0, true, &events), Some(&1));
}

#[test]
fn at_most_one_spawn_per_interval_at_high_frame_rate() {
    let events = [0u8];
    let mut gate = AutoSpawn::new();
    let mut spawn_times = Vec::new();
    // 10 seconds of 120 fps ticks
    let mut now = 0.0;
    while now <= 10_000.0 {
        if gate.tick(now, true, &events).is_some() {
            spawn_times.push(now);
        }
        now += 1000.0 / 120.0;
    }
    // one immediately, then never more than one per full interval
    assert!(spawn_times.len() >= 5 && spawn_times.len() <= 6);
    for pair in spawn_times.windows(2) {
        assert!(pair[1] - pair[0] >= 2000.0 - 1e-6);
    }
}

#[test]
fn disabled_stretch_does_not_bank_spawns() {
    let events = ["x"];
    let mut gate = AutoSpawn::new();
    assert!(gate.tick(0.0, true, &events).is_some());
    // long disabled stretch
    for i in 1..10 {
        assert_eq!(gate.tick(i as f64 * 1000.0, false, &events), None);
    }
    // re-enabled: one spawn, then gated again
    assert!(gate.tick(10_000.0, true, &events).is_some());
    assert_eq!(gate.tick(10_100.0, true, &events), None);
}
