// Timer-gated cursor that feeds events to the ripple field.
//
// One auto ripple at most per interval of wall-clock animation time,
// regardless of frame rate; the cursor cycles the event list forever.
// Shared with the host-side tests via include!, so no inner doc comments.

use crate::constants::AUTO_SPAWN_INTERVAL_MS;

#[derive(Default)]
pub struct AutoSpawn {
    cursor: usize,
    last_spawn_ms: Option<f64>,
}

impl AutoSpawn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next event to ripple, or `None` if gated.
    ///
    /// The first eligible tick fires immediately (no dead initial
    /// interval); after that, spawns are spaced by at least the
    /// configured interval.
    pub fn tick<'a, T>(&mut self, now_ms: f64, enabled: bool, events: &'a [T]) -> Option<&'a T> {
        if !enabled || events.is_empty() {
            return None;
        }
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < AUTO_SPAWN_INTERVAL_MS {
                return None;
            }
        }
        let event = &events[self.cursor % events.len()];
        self.cursor += 1;
        self.last_spawn_ms = Some(now_ms);
        Some(event)
    }
}
