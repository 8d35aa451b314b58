//! Browser console logging via tracing-wasm

use std::sync::Once;

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

static INIT: Once = Once::new();

/// Install the console subscriber. Safe to call more than once.
pub fn init_logging() {
    INIT.call_once(|| {
        let level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };
        let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}
