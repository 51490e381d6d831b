//! WASM bindings for segtree-layout.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, RenderConfig};

/// Render a tree description to Unicode text with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_source(src, &RenderConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a tree description with full control over options.
///
/// - `unicode`: true for Unicode box-drawing chars, false for plain ASCII
/// - `padding`: spaces inside node borders
/// - `format`: "text" or "svg"; empty string for text
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    unicode: bool,
    padding: usize,
    format: &str,
) -> Result<String, JsError> {
    let format = if format.is_empty() {
        OutputFormat::Text
    } else {
        OutputFormat::from_name(format)
            .ok_or_else(|| JsError::new(&format!("unknown format '{format}'")))?
    };
    let config = RenderConfig {
        unicode,
        padding,
        format,
        ..RenderConfig::default()
    };
    crate::render_source(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
