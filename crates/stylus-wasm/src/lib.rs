//! WASM bindings for the Stylus to SCSS/Less emitter.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen. The tree is passed as
//! the JSON the Stylus parser produces; options are a plain JS object
//! (`{ dialect, quote, autoprefix, hostIndent }`, every field optional).

use stylus_ast::Root;
use stylus_codegen::Options;
use wasm_bindgen::prelude::*;

/// Convert a serialized Stylus tree to SCSS or Less.
///
/// Throws a JS error if the tree cannot be read, the options are malformed,
/// or code generation fails.
#[wasm_bindgen]
pub fn convert(tree_json: &str, options: JsValue) -> Result<String, JsError> {
    let options: Options = if options.is_undefined() || options.is_null() {
        Options::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };
    let root = Root::from_json(tree_json).map_err(|e| JsError::new(&e.to_string()))?;
    stylus_codegen::convert(&root, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
