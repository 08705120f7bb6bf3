#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod host;
mod surface;

pub use surface::RippleSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");
    Ok(())
}
