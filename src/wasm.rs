//! JavaScript bindings for WASM environments.
//!
//! # Feature Flag
//!
//! This module is only available with the `wasm` feature enabled:
//!
//! ```toml
//! [dependencies]
//! identicon-renderer = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { generateSvg, defaultConfig } from 'identicon-renderer';
//!
//! await init();
//!
//! const config = defaultConfig();
//! config.saturation = 0.7;
//!
//! const svg = generateSvg('a9993e364706816aba3e25717850c26c9cd0d89d', 128, config);
//! document.getElementById('avatar').innerHTML = svg;
//! ```

use wasm_bindgen::prelude::*;

use crate::config::IdenticonConfig;
use crate::generator::generate;

/// Renders the identicon for `hash` and returns the SVG markup.
///
/// `config` is an optional object in the same camelCase shape as the JSON
/// config; omitted fields take their defaults.
#[wasm_bindgen(js_name = "generateSvg")]
pub fn generate_svg(hash: &str, size: u32, config: JsValue) -> Result<String, JsError> {
    let config: IdenticonConfig = if config.is_undefined() || config.is_null() {
        IdenticonConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
    };

    let document = generate(hash, size, &config).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(document.to_svg())
}

/// Returns the default configuration as a plain object.
#[wasm_bindgen(js_name = "defaultConfig")]
pub fn default_config() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&IdenticonConfig::default())
        .map_err(|e| JsError::new(&format!("Failed to serialize config: {}", e)))
}
