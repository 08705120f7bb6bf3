//! Per-ripple state shared by the registry, the parameter buffer and the
//! shading reference.
//!
//! A [`Ripple`] is created once by the engine and never mutated afterwards;
//! it is destroyed by capacity eviction or by expiry pruning.

use glam::Vec2;

use crate::config::WaveParams;
use crate::envelope;

/// A single displacement event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Centre in normalized image space, both coordinates in [0, 1].
    pub origin: Vec2,
    /// Simulated time the ripple was created at.
    pub start_time: f32,
    /// Seconds; fixed at creation from `origin` and the wave parameters.
    pub lifetime: f32,
}

impl Ripple {
    /// Build a ripple, deriving its lifetime from the propagation parameters.
    pub fn new(origin: Vec2, start_time: f32, wave: &WaveParams) -> Self {
        Self {
            origin,
            start_time,
            lifetime: envelope::lifetime_for(origin, wave),
        }
    }

    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.start_time
    }

    /// True once both the natural life and the release tail have elapsed.
    #[inline]
    pub fn is_expired(&self, now: f32, release_tail: f32) -> bool {
        self.age(now) > self.lifetime + release_tail
    }
}

impl Default for Ripple {
    fn default() -> Self {
        Self {
            origin: Vec2::splat(0.5),
            start_time: 0.0,
            lifetime: 0.0,
        }
    }
}
