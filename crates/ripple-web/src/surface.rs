use anyhow::Context;
use js_sys::{Float32Array, Uint8Array};
use ripple_core::{GpuShading, RippleEngine};
use wasm_bindgen::prelude::*;

use crate::host::{parse_config, pointer_origin, seed_from_unit};

/// One ripple engine bound to one effect surface on the page. Each
/// `.ripple-box` host constructs its own; nothing is shared between them.
///
/// The host calls [`RippleSurface::tick`] from its render loop with the
/// ticker's delta and timestamp (milliseconds), then uploads the arrays
/// (`positions`, `start_times`, `lifetimes`, `count`) into its shader.
#[wasm_bindgen]
pub struct RippleSurface {
    engine: RippleEngine,
}

#[wasm_bindgen]
impl RippleSurface {
    /// `config_json` is an optional partial `RippleConfig` object; omitted
    /// fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<RippleSurface, JsValue> {
        build(config_json.as_deref()).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Advance one frame. Returns the number of live ripples.
    pub fn tick(&mut self, delta_ms: f64, now_ms: f64) -> u32 {
        let report = self
            .engine
            .tick((delta_ms / 1000.0) as f32, (now_ms / 1000.0) as f32);
        if report.spawned > 0 || report.pruned > 0 {
            log::debug!(
                "[surface] t={:.2}s spawned={} pruned={} live={}",
                report.time,
                report.spawned,
                report.pruned,
                report.count
            );
        }
        report.count as u32
    }

    /// Queue a ripple under a pointer given in surface pixels. Returns false
    /// when the point is outside the surface or the request was dropped.
    pub fn queue_pointer(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        match pointer_origin(x, y, width, height) {
            Some(uv) => self.engine.queue_ripple(uv),
            None => false,
        }
    }

    pub fn set_reduced_motion(&mut self, on: bool) {
        self.engine.set_reduced_motion(on);
    }

    pub fn reseed(&mut self, seed: Option<f64>) {
        self.engine.reseed(seed.map(|s| s as u64));
    }

    pub fn count(&self) -> u32 {
        self.engine.params().count() as u32
    }

    pub fn capacity(&self) -> u32 {
        self.engine.params().capacity() as u32
    }

    /// Simulated time of the last tick, in seconds (the shader's `uTime`).
    pub fn time(&self) -> f32 {
        self.engine.time()
    }

    /// `2 * capacity` floats; only the first `2 * count` are live.
    pub fn positions(&self) -> Float32Array {
        Float32Array::from(self.engine.params().raw_positions())
    }

    pub fn start_times(&self) -> Float32Array {
        Float32Array::from(self.engine.params().raw_start_times())
    }

    pub fn lifetimes(&self) -> Float32Array {
        Float32Array::from(self.engine.params().raw_lifetimes())
    }

    /// Constant shading terms in the shader's uniform order.
    pub fn shading(&self) -> Float32Array {
        let gpu = GpuShading::from(&self.engine.config().shading());
        let floats: [f32; 8] = bytemuck::cast(gpu);
        Float32Array::from(&floats[..])
    }

    /// Header plus slots in the storage-buffer layout of `RIPPLE_WGSL`.
    pub fn gpu_bytes(&self) -> Uint8Array {
        let block = self.engine.params().gpu_block(self.engine.time());
        Uint8Array::from(block.to_bytes().as_slice())
    }

    pub fn wgsl() -> String {
        ripple_core::RIPPLE_WGSL.to_string()
    }
}

fn build(config_json: Option<&str>) -> anyhow::Result<RippleSurface> {
    let config = parse_config(config_json)?;
    let seed = seed_from_unit(js_sys::Math::random());
    let engine = RippleEngine::new(config, seed).context("building ripple engine")?;
    log::info!(
        "[surface] ready capacity={} reduced_motion={}",
        engine.config().max_ripples,
        engine.config().reduced_motion
    );
    Ok(RippleSurface { engine })
}
