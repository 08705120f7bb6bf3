//! Frame driver. One [`RippleEngine`] per effect surface; engines share no
//! state with each other.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::RippleConfig;
use crate::constants::SEED_BACKDATE;
use crate::error::RippleResult;
use crate::params::ParameterBuffer;
use crate::registry::RippleRegistry;
use crate::scheduler::{SpawnOutcome, SpawnScheduler};
use crate::state::Ripple;

/// Consumer of the per-frame ripple parameters (a shader uniform upload, a
/// CPU sampler, ...). Must only read the first `params.count()` entries.
pub trait RippleRenderer {
    fn render(&mut self, time: f32, params: &ParameterBuffer);
}

/// What one frame did to the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub time: f32,
    pub spawned: usize,
    pub pruned: usize,
    pub evicted: usize,
    pub count: usize,
}

impl FrameReport {
    #[inline]
    pub fn mutated(&self) -> bool {
        self.spawned + self.pruned + self.evicted > 0
    }
}

pub struct RippleEngine {
    config: RippleConfig,
    registry: RippleRegistry,
    params: ParameterBuffer,
    scheduler: SpawnScheduler,
    queued: VecDeque<Vec2>,
    time: f32,
    started: bool,
}

impl RippleEngine {
    /// Validate `config` and build an empty engine. `seed` drives spawn
    /// placement.
    pub fn new(config: RippleConfig, seed: u64) -> RippleResult<Self> {
        config.validate()?;
        log::info!(
            "[engine] capacity={} base_interval={:.2}s min_interval={:.2}s wavelength={:.3} speed={:.2}",
            config.max_ripples,
            config.base_interval,
            config.min_interval,
            config.wavelength,
            config.propagation_speed
        );
        Ok(Self {
            registry: RippleRegistry::new(config.max_ripples),
            params: ParameterBuffer::new(config.max_ripples),
            scheduler: SpawnScheduler::new(seed),
            queued: VecDeque::new(),
            time: 0.0,
            started: false,
            config,
        })
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Simulated time of the last frame.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn registry(&self) -> &RippleRegistry {
        &self.registry
    }

    pub fn params(&self) -> &ParameterBuffer {
        &self.params
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn reseed(&mut self, seed: Option<u64>) {
        self.scheduler.reseed(seed);
    }

    /// Insert a ripple directly, evicting the oldest at capacity. The
    /// parameter buffer is resynced before returning.
    pub fn insert(&mut self, origin: Vec2, start_time: f32) -> Option<Ripple> {
        let evicted = self.registry.insert(origin, start_time, &self.config.wave());
        self.params.sync(&self.registry);
        evicted
    }

    /// Request a ripple at `origin` (clamped to the unit square), e.g. from a
    /// click. Requests are applied one per frame, oldest first, once
    /// `min_interval` has passed since the last spawn. At most `max_ripples`
    /// requests wait at once; returns false when the request is dropped
    /// because the queue is full or reduced motion is on.
    pub fn queue_ripple(&mut self, origin: Vec2) -> bool {
        if self.config.reduced_motion || self.queued.len() >= self.config.max_ripples {
            return false;
        }
        self.queued.push_back(origin.clamp(Vec2::ZERO, Vec2::ONE));
        true
    }

    /// Pointer requests still waiting for the debounce.
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Turning reduced motion on drops every active ripple at once.
    pub fn set_reduced_motion(&mut self, on: bool) {
        self.config.reduced_motion = on;
        if on {
            self.queued.clear();
            if !self.registry.is_empty() {
                self.registry.clear();
                self.params.sync(&self.registry);
            }
        }
        log::info!("[engine] reduced motion {}", if on { "on" } else { "off" });
    }

    /// Advance to `now`: prune, schedule, apply a queued ripple and resync the
    /// parameter buffer if anything changed. Pruning runs before scheduling so
    /// freed slots count toward this frame's capacity check.
    pub fn tick(&mut self, dt: f32, now: f32) -> FrameReport {
        self.time = now;
        let mut report = FrameReport {
            time: now,
            ..FrameReport::default()
        };

        // A surface that starts under reduced motion skips its first frame.
        let first = !self.started;
        self.started = true;

        if !self.config.reduced_motion {
            report.pruned = self.registry.prune_expired(now, self.config.release_tail);

            if first {
                self.first_frame(now, &mut report);
            }

            if self.config.autoplay {
                let outcome = self
                    .scheduler
                    .on_frame(dt, now, &self.config, &mut self.registry);
                if matches!(outcome, SpawnOutcome::Spawned(_)) {
                    report.spawned += 1;
                }
            }

            if now - self.scheduler.last_spawn_time() >= self.config.min_interval {
                if let Some(origin) = self.queued.pop_front() {
                    if self.registry.insert(origin, now, &self.config.wave()).is_some() {
                        report.evicted += 1;
                    }
                    self.scheduler.mark_spawned(now);
                    report.spawned += 1;
                }
            }
        }

        if report.mutated() {
            self.params.sync(&self.registry);
        }
        report.count = self.registry.size();
        report
    }

    /// [`Self::tick`], then hand the parameter buffer to `renderer`.
    pub fn frame<R: RippleRenderer + ?Sized>(&mut self, dt: f32, now: f32, renderer: &mut R) -> FrameReport {
        let report = self.tick(dt, now);
        renderer.render(self.time, &self.params);
        report
    }

    fn first_frame(&mut self, now: f32, report: &mut FrameReport) {
        let wave = self.config.wave();
        for _ in 0..self.config.seed_ripples {
            let origin = self.scheduler.random_origin(self.config.spawn_margin);
            if self.registry.insert(origin, now - SEED_BACKDATE, &wave).is_some() {
                report.evicted += 1;
            }
            report.spawned += 1;
        }
        if self.config.seed_ripples > 0 {
            log::info!("[engine] seeded {} ripple(s)", self.config.seed_ripples);
        }

        // The attack ramp is zero at age 0, so the first ripple can start at
        // exactly `now`.
        if self.config.autoplay && self.config.instant_first_ripple {
            let origin = self.scheduler.random_origin(self.config.spawn_margin);
            if self.registry.insert(origin, now, &wave).is_some() {
                report.evicted += 1;
            }
            self.scheduler.mark_spawned(now);
            report.spawned += 1;
        }
    }
}
