//! Engine configuration.
//!
//! Every field has a default taken from [`crate::constants`], so hosts can
//! deserialize a partial JSON object and only override what they care about.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, RippleResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// Registry capacity. Inserting past it evicts the oldest ripple.
    pub max_ripples: usize,

    // Wave shape (consumed by the shading function, except `wavelength` and
    // `propagation_speed` which also drive lifetimes)
    pub amplitude: f32,
    pub wavelength: f32,
    pub propagation_speed: f32,
    pub decay_rate: f32,

    // Envelope
    pub attack_time: f32,
    pub release_tail: f32,
    pub linger: f32,
    pub displacement_clamp: f32,

    // Spawn cadence
    pub autoplay: bool,
    pub base_interval: f32,
    pub min_interval: f32,
    pub breath_rate_hz: f32,
    pub breath_depth: f32,
    pub spawn_margin: f32,

    // First frame
    pub seed_ripples: usize,
    pub instant_first_ripple: bool,

    /// Host-detected preference. When set, nothing spawns and the registry is
    /// kept empty.
    pub reduced_motion: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            max_ripples: MAX_RIPPLES,
            amplitude: AMPLITUDE,
            wavelength: WAVELENGTH,
            propagation_speed: PROPAGATION_SPEED,
            decay_rate: DECAY_RATE,
            attack_time: ATTACK_TIME,
            release_tail: RELEASE_TAIL,
            linger: LINGER,
            displacement_clamp: DISPLACEMENT_CLAMP,
            autoplay: true,
            base_interval: BASE_INTERVAL,
            min_interval: MIN_INTERVAL,
            breath_rate_hz: BREATH_RATE_HZ,
            breath_depth: BREATH_DEPTH,
            spawn_margin: SPAWN_MARGIN,
            seed_ripples: 0,
            instant_first_ripple: true,
            reduced_motion: false,
        }
    }
}

impl RippleConfig {
    /// Check every numeric field. Called by [`crate::RippleEngine::new`].
    pub fn validate(&self) -> RippleResult<()> {
        if self.max_ripples == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let positive = [
            ("amplitude", self.amplitude),
            ("wavelength", self.wavelength),
            ("propagation_speed", self.propagation_speed),
            ("decay_rate", self.decay_rate),
            ("attack_time", self.attack_time),
            ("release_tail", self.release_tail),
            ("displacement_clamp", self.displacement_clamp),
            ("base_interval", self.base_interval),
            ("min_interval", self.min_interval),
            ("breath_rate_hz", self.breath_rate_hz),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.linger.is_finite() && self.linger >= 0.0) {
            return Err(ConfigError::Negative {
                field: "linger",
                value: self.linger,
            });
        }
        if !(0.0..=1.0).contains(&self.breath_depth) {
            return Err(ConfigError::BreathDepth(self.breath_depth));
        }
        if !(0.0..0.5).contains(&self.spawn_margin) {
            return Err(ConfigError::SpawnMargin(self.spawn_margin));
        }
        Ok(())
    }

    /// Lifetime inputs for [`crate::envelope::compute_lifetime`].
    pub fn wave(&self) -> WaveParams {
        WaveParams {
            propagation_speed: self.propagation_speed,
            wavelength: self.wavelength,
            linger: self.linger,
        }
    }

    /// Inputs of the per-pixel displacement function.
    pub fn shading(&self) -> ShadingParams {
        ShadingParams {
            amplitude: self.amplitude,
            wavelength: self.wavelength,
            propagation_speed: self.propagation_speed,
            decay_rate: self.decay_rate,
            attack_time: self.attack_time,
            release_tail: self.release_tail,
            displacement_clamp: self.displacement_clamp,
        }
    }
}

/// Global propagation parameters a ripple's lifetime is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub propagation_speed: f32,
    pub wavelength: f32,
    pub linger: f32,
}

/// Constants the displacement function reads alongside the parameter buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingParams {
    pub amplitude: f32,
    pub wavelength: f32,
    pub propagation_speed: f32,
    pub decay_rate: f32,
    pub attack_time: f32,
    pub release_tail: f32,
    pub displacement_clamp: f32,
}
