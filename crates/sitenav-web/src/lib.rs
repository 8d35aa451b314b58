//! sitenav-web - Browser binding for sitenav using wasm-bindgen + web-sys

pub mod logging;
mod listener;
pub mod mount;
pub mod surface;

pub use logging::init_logging;
pub use mount::{mount, mount_once, mount_with_config, NavHandle};
pub use surface::DomSurface;

use wasm_bindgen::prelude::*;

/// JS entry point for pages that load the module without Trunk.
/// Safe to call more than once, and after `main` has already mounted.
#[wasm_bindgen(js_name = mountNavigation)]
pub fn mount_navigation() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    mount_once().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}
