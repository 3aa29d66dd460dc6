// Ripple records and their per-frame lifecycle.
//
// A ripple is anchored to base (map) coordinates and grows outward each
// frame until it reaches its maximum radius, fading linearly as it goes.
// The field owns every live ripple; the frame loop advances and prunes
// the whole collection once per frame.
// Shared with the host-side tests via include!, so no inner doc comments.

use crate::constants::*;

/// Where a ripple came from; only affects its display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleKind {
    /// Spawned by a user click.
    Manual,
    /// Spawned from the event feed by the auto-spawn gate.
    Auto,
}

#[derive(Clone, Debug)]
pub struct Ripple {
    pub base_x: f64,
    pub base_y: f64,
    pub radius: f64,
    pub max_radius: f64,
    pub growth_rate: f64,
    pub line_width: f64,
    pub opacity: f64,
    pub kind: RippleKind,
}

/// Ordered collection of live ripples.
///
/// There is no cap on concurrent ripples: if spawns outpace decay the
/// collection grows. That is a known design limit, not something to
/// silently clamp.
#[derive(Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Spawn a ripple at base coordinates from raw magnitude/depth inputs.
    ///
    /// Magnitude clamps to [3, 9] and depth to [0, 700] km; there are no
    /// error paths. Stronger and shallower quakes yield larger, faster,
    /// thicker rings.
    pub fn spawn(
        &mut self,
        base_x: f64,
        base_y: f64,
        magnitude: f64,
        depth_km: f64,
        speed: f64,
        kind: RippleKind,
    ) {
        let mag = magnitude.clamp(MAG_MIN, MAG_MAX);
        let depth = depth_km.clamp(DEPTH_MIN_KM, DEPTH_MAX_KM);
        let mag_factor = (mag - MAG_MIN) / (MAG_MAX - MAG_MIN);
        // 1 = shallow/strong, 0 = deep/weak
        let depth_factor = 1.0 - depth / DEPTH_MAX_KM;

        let max_radius = RADIUS_BASE
            + RADIUS_SPAN * mag_factor * (RADIUS_DEPTH_FLOOR + RADIUS_DEPTH_WEIGHT * depth_factor);
        let growth_rate =
            GROWTH_BASE_RATE * speed * (GROWTH_MAG_FLOOR + GROWTH_MAG_WEIGHT * mag_factor);
        let line_width = LINE_WIDTH_BASE + LINE_WIDTH_SPAN * mag_factor;

        self.ripples.push(Ripple {
            base_x,
            base_y,
            radius: 0.0,
            max_radius,
            growth_rate,
            line_width,
            opacity: 1.0,
            kind,
        });
    }

    /// Advance every ripple one frame and drop the expired ones.
    ///
    /// `retain_mut` visits each element exactly once, so no ripple skips
    /// an aging step when its neighbor is removed. Survivors are returned
    /// for drawing.
    pub fn advance_and_prune(&mut self) -> &[Ripple] {
        self.ripples.retain_mut(|r| {
            r.radius += r.growth_rate;
            r.opacity = 1.0 - r.radius / r.max_radius;
            r.radius < r.max_radius && r.opacity > 0.0
        });
        &self.ripples
    }
}
