use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::config::RippleConfig;
use crate::constants::NEVER_SPAWNED;
use crate::registry::RippleRegistry;
use crate::state::Ripple;

/// Result of one scheduler step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnOutcome {
    /// The accumulator has not reached the current interval yet.
    Waiting,
    Spawned(Ripple),
    /// Interval elapsed but the last spawn was less than `min_interval` ago.
    Debounced,
    /// Interval elapsed but the registry was full.
    AtCapacity,
}

/// Decides when a new ripple appears, on a slowly breathing cadence.
pub struct SpawnScheduler {
    accumulator: f32,
    last_spawn_time: f32,
    rng: StdRng,
}

impl SpawnScheduler {
    pub fn new(seed: u64) -> Self {
        Self {
            accumulator: 0.0,
            last_spawn_time: NEVER_SPAWNED,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: Option<u64>) {
        let new_seed = seed.unwrap_or_else(|| self.rng.gen());
        self.rng = StdRng::seed_from_u64(new_seed);
    }

    #[inline]
    pub fn accumulated_time(&self) -> f32 {
        self.accumulator
    }

    #[inline]
    pub fn last_spawn_time(&self) -> f32 {
        self.last_spawn_time
    }

    /// Record a spawn made outside the breathing cadence (first frame,
    /// pointer ripples) so the debounce accounts for it.
    pub fn mark_spawned(&mut self, now: f32) {
        self.last_spawn_time = now;
    }

    /// Target gap between spawns at time `now`: a sine "breath" around
    /// `base_interval`, floored at `min_interval`.
    pub fn current_interval(cfg: &RippleConfig, now: f32) -> f32 {
        let s = (TAU * cfg.breath_rate_hz * now).sin();
        let factor = 1.0 + s * cfg.breath_depth;
        (cfg.base_interval * factor).max(cfg.min_interval)
    }

    /// Uniform point in the square inset by `spawn_margin` on every side.
    pub fn random_origin(&mut self, margin: f32) -> Vec2 {
        let span = 1.0 - 2.0 * margin;
        Vec2::new(
            margin + self.rng.gen::<f32>() * span,
            margin + self.rng.gen::<f32>() * span,
        )
    }

    /// Advance the accumulator by `dt` and try one spawn when the current
    /// interval has elapsed. The consumed interval is subtracted rather than
    /// resetting to zero, so the cadence keeps its phase under uneven frames.
    pub fn on_frame(
        &mut self,
        dt: f32,
        now: f32,
        cfg: &RippleConfig,
        registry: &mut RippleRegistry,
    ) -> SpawnOutcome {
        self.accumulator += dt.max(0.0);
        let interval = Self::current_interval(cfg, now);
        if self.accumulator < interval {
            return SpawnOutcome::Waiting;
        }
        self.accumulator -= interval;
        self.try_spawn(now, cfg, registry)
    }

    fn try_spawn(&mut self, now: f32, cfg: &RippleConfig, registry: &mut RippleRegistry) -> SpawnOutcome {
        if now - self.last_spawn_time < cfg.min_interval {
            log::trace!("[spawn] debounced at {now:.3}s");
            return SpawnOutcome::Debounced;
        }
        if registry.is_full() {
            log::trace!("[spawn] registry full at {now:.3}s");
            return SpawnOutcome::AtCapacity;
        }
        let origin = self.random_origin(cfg.spawn_margin);
        let ripple = Ripple::new(origin, now, &cfg.wave());
        registry.push(ripple);
        self.last_spawn_time = now;
        log::debug!(
            "[spawn] ripple at ({:.3},{:.3}) t={now:.3}s life={:.2}s",
            origin.x,
            origin.y,
            ripple.lifetime
        );
        SpawnOutcome::Spawned(ripple)
    }
}
