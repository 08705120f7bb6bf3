//! Parameter buffer: the fixed-capacity mirror of the registry that the
//! rendering side reads every frame.
//!
//! Only the first `count` logical entries are meaningful. Entries past it keep
//! whatever an earlier sync left there; renderers must stop at `count`.

use glam::Vec2;

use crate::config::ShadingParams;
use crate::registry::RippleRegistry;

#[derive(Clone, Debug)]
pub struct ParameterBuffer {
    count: usize,
    positions: Vec<f32>,
    start_times: Vec<f32>,
    lifetimes: Vec<f32>,
}

impl ParameterBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            count: 0,
            positions: vec![0.0; capacity * 2],
            start_times: vec![0.0; capacity],
            lifetimes: vec![0.0; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.start_times.len()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Copy the registry in order and set `count`. Touches `registry.size()`
    /// entries only.
    pub fn sync(&mut self, registry: &RippleRegistry) {
        debug_assert!(registry.size() <= self.capacity());
        for (i, ripple) in registry.iter().enumerate() {
            self.positions[2 * i] = ripple.origin.x;
            self.positions[2 * i + 1] = ripple.origin.y;
            self.start_times[i] = ripple.start_time;
            self.lifetimes[i] = ripple.lifetime;
        }
        self.count = registry.size();
    }

    /// Interleaved `x, y` pairs, `2 * count` values.
    pub fn positions(&self) -> &[f32] {
        &self.positions[..self.count * 2]
    }

    pub fn start_times(&self) -> &[f32] {
        &self.start_times[..self.count]
    }

    pub fn lifetimes(&self) -> &[f32] {
        &self.lifetimes[..self.count]
    }

    /// Full-capacity arrays, for hosts that upload fixed-size uniform arrays.
    pub fn raw_positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn raw_start_times(&self) -> &[f32] {
        &self.start_times
    }

    pub fn raw_lifetimes(&self) -> &[f32] {
        &self.lifetimes
    }

    #[inline]
    fn origin(&self, i: usize) -> Vec2 {
        Vec2::new(self.positions[2 * i], self.positions[2 * i + 1])
    }

    /// `(origin, start_time, lifetime)` for each live entry, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (Vec2, f32, f32)> + '_ {
        (0..self.count).map(move |i| (self.origin(i), self.start_times[i], self.lifetimes[i]))
    }

    /// Pack into the GPU layout read by [`crate::RIPPLE_WGSL`]: one header
    /// followed by `capacity` 16-byte slots.
    pub fn gpu_block(&self, time: f32) -> GpuRippleBlock {
        let mut slots = vec![<GpuRipple as bytemuck::Zeroable>::zeroed(); self.capacity()];
        for (slot, (origin, start, life)) in slots.iter_mut().zip(self.entries()) {
            *slot = GpuRipple {
                center: origin.to_array(),
                start,
                lifetime: life,
            };
        }
        GpuRippleBlock {
            header: GpuHeader {
                time,
                count: self.count as u32,
                _pad: [0; 2],
            },
            slots,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuHeader {
    pub time: f32,
    pub count: u32,
    pub _pad: [u32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuRipple {
    pub center: [f32; 2],
    pub start: f32,
    pub lifetime: f32,
}

#[derive(Clone, Debug)]
pub struct GpuRippleBlock {
    pub header: GpuHeader,
    pub slots: Vec<GpuRipple>,
}

impl GpuRippleBlock {
    /// Header bytes followed by slot bytes, ready for a buffer write.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            std::mem::size_of::<GpuHeader>() + self.slots.len() * std::mem::size_of::<GpuRipple>(),
        );
        out.extend_from_slice(bytemuck::bytes_of(&self.header));
        out.extend_from_slice(bytemuck::cast_slice(&self.slots));
        out
    }
}

/// Uniform block with the constant shading terms, binding 1 of the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuShading {
    pub amplitude: f32,
    pub wavelength: f32,
    pub speed: f32,
    pub decay: f32,
    pub attack: f32,
    pub release_tail: f32,
    pub disp_clamp: f32,
    pub _pad: f32,
}

impl From<&ShadingParams> for GpuShading {
    fn from(s: &ShadingParams) -> Self {
        Self {
            amplitude: s.amplitude,
            wavelength: s.wavelength,
            speed: s.propagation_speed,
            decay: s.decay_rate,
            attack: s.attack_time,
            release_tail: s.release_tail,
            disp_clamp: s.displacement_clamp,
            _pad: 0.0,
        }
    }
}
