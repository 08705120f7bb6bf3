//! Host-side parsing for the surface binding. Free of wasm types so the
//! logic can be tested natively.

use anyhow::Context;
use glam::Vec2;
use ripple_core::input::pointer_to_uv;
use ripple_core::RippleConfig;

/// Parse an optional partial `RippleConfig` JSON object and validate it.
/// A missing or blank string yields the defaults.
pub fn parse_config(config_json: Option<&str>) -> anyhow::Result<RippleConfig> {
    let config = match config_json.map(str::trim) {
        Some(json) if !json.is_empty() => {
            serde_json::from_str::<RippleConfig>(json).context("parsing ripple config")?
        }
        _ => RippleConfig::default(),
    };
    config.validate().context("validating ripple config")?;
    Ok(config)
}

/// Pointer position in surface pixels to a ripple origin, `None` outside the
/// surface.
pub fn pointer_origin(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    pointer_to_uv(Vec2::new(x, y), Vec2::new(width, height))
}

/// Map `Math.random()` output to an engine seed.
pub fn seed_from_unit(r: f64) -> u64 {
    (r.clamp(0.0, 1.0) * u32::MAX as f64) as u64
}
