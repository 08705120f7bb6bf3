//! Envelope model: how long a ripple lives and how strong it is at a given
//! age. Pure functions, no state.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::WaveParams;
use crate::constants::MIN_WAVELENGTH;

const CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Angular spatial frequency `k = 2π / wavelength`.
#[inline]
pub fn wavenumber(wavelength: f32) -> f32 {
    TAU / wavelength.max(MIN_WAVELENGTH)
}

/// Distance from `origin` to the farthest corner of the unit square.
pub fn far_corner_distance(origin: Vec2) -> f32 {
    CORNERS
        .iter()
        .map(|c| origin.distance(*c))
        .fold(0.0, f32::max)
}

/// Time for the crest to cover `distance` in normalized space.
#[inline]
pub fn crest_travel_time(distance: f32, propagation_speed: f32, wavelength: f32) -> f32 {
    wavenumber(wavelength) * distance / propagation_speed
}

/// Lifetime of a ripple spawned at `origin`: long enough for its crest to
/// reach the farthest corner, plus `linger`. Computed once per ripple.
pub fn compute_lifetime(origin: Vec2, propagation_speed: f32, wavelength: f32, linger: f32) -> f32 {
    crest_travel_time(far_corner_distance(origin), propagation_speed, wavelength) + linger
}

#[inline]
pub fn lifetime_for(origin: Vec2, wave: &WaveParams) -> f32 {
    compute_lifetime(origin, wave.propagation_speed, wave.wavelength, wave.linger)
}

/// Hermite smoothstep matching the GLSL/WGSL builtin. Requires `edge0 < edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rises 0 -> 1 over `[0, attack_time]`.
#[inline]
pub fn attack_ramp(age: f32, attack_time: f32) -> f32 {
    smoothstep(0.0, attack_time, age.max(0.0).min(attack_time))
}

/// Falls 1 -> 0 as `age` approaches `lifetime`, over the last `release_time`
/// seconds.
#[inline]
pub fn release_ramp(age: f32, lifetime: f32, release_time: f32) -> f32 {
    smoothstep(0.0, release_time, (lifetime - age).max(0.0))
}

/// Instantaneous strength in [0, 1]: exponential decay times the attack and
/// release ramps. Zero at `age == 0`.
pub fn instantaneous_envelope(
    age: f32,
    lifetime: f32,
    decay_rate: f32,
    attack_time: f32,
    release_time: f32,
) -> f32 {
    let age = age.max(0.0);
    (-decay_rate * age).exp() * attack_ramp(age, attack_time) * release_ramp(age, lifetime, release_time)
}
