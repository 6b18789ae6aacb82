#![cfg(target_arch = "wasm32")]
//! JavaScript-facing bindings. The host owns the render loop and calls into
//! these objects once per frame; see `cursor` and `orbit`.

use wasm_bindgen::prelude::*;

mod cursor;
mod dom;
mod node;
mod orbit;

pub use cursor::{CursorMotion, CursorOptions};
pub use orbit::{generate_starfield, BodySpin, EarthMoonSystem, OrbitalMotion};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("space-web starting");
    Ok(())
}
