//! CPU reference of the per-pixel displacement applied by the ripple shader.
//!
//! Mirrors `shaders/ripple.wgsl` term by term. Hosts that render on the GPU
//! never call this; the native driver and the tests use it to check the
//! parameter buffer produces a bounded, continuous field.

use glam::Vec2;

use crate::config::ShadingParams;
use crate::constants::{CLAMP_EPSILON, CREST_HARMONIC, RADIUS_EPSILON, SPREAD_MIN_RADIUS};
use crate::engine::RippleRenderer;
use crate::envelope::{instantaneous_envelope, wavenumber};
use crate::params::ParameterBuffer;

/// Summed, clamped offset at `uv` for every live ripple in `params`.
pub fn displacement(uv: Vec2, params: &ParameterBuffer, shading: &ShadingParams, time: f32) -> Vec2 {
    let k = wavenumber(shading.wavelength);
    let mut offset = Vec2::ZERO;

    for (center, start, life) in params.entries() {
        let age = (time - start).max(0.0);
        let d = uv - center;
        let r = d.length() + RADIUS_EPSILON;
        let dir = d / r;

        let phase = k * r - shading.propagation_speed * age;
        let spread = 1.0 / r.max(SPREAD_MIN_RADIUS).sqrt();
        let env = instantaneous_envelope(
            age,
            life,
            shading.decay_rate,
            shading.attack_time,
            shading.release_tail,
        );
        let wave = phase.sin() + CREST_HARMONIC * (2.0 * phase).sin();

        offset += dir * (wave * env * spread * shading.amplitude);
    }

    let len = offset.length();
    if len > shading.displacement_clamp {
        offset *= shading.displacement_clamp / len.max(CLAMP_EPSILON);
    }
    offset
}

/// Texture coordinate to sample for output pixel `uv`.
pub fn sample_uv(uv: Vec2, params: &ParameterBuffer, shading: &ShadingParams, time: f32) -> Vec2 {
    (uv + displacement(uv, params, shading, time)).clamp(Vec2::ZERO, Vec2::ONE)
}

/// Displacement sampled on a `width x height` grid of pixel centres.
pub struct DisplacementField {
    width: usize,
    height: usize,
    shading: ShadingParams,
    offsets: Vec<Vec2>,
    time: f32,
}

impl DisplacementField {
    pub fn new(width: usize, height: usize, shading: ShadingParams) -> Self {
        Self {
            width,
            height,
            shading,
            offsets: vec![Vec2::ZERO; width * height],
            time: 0.0,
        }
    }

    /// Surface size changed; the next render fills the new grid.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.offsets = vec![Vec2::ZERO; width * height];
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Vec2> {
        (x < self.width && y < self.height).then(|| self.offsets[y * self.width + x])
    }

    /// Longest offset in the last rendered frame.
    pub fn max_magnitude(&self) -> f32 {
        self.offsets.iter().map(|o| o.length()).fold(0.0, f32::max)
    }

    #[inline]
    fn pixel_uv(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32,
            (y as f32 + 0.5) / self.height as f32,
        )
    }
}

impl RippleRenderer for DisplacementField {
    fn render(&mut self, time: f32, params: &ParameterBuffer) {
        self.time = time;
        for y in 0..self.height {
            for x in 0..self.width {
                let uv = self.pixel_uv(x, y);
                self.offsets[y * self.width + x] = displacement(uv, params, &self.shading, time);
            }
        }
    }
}
