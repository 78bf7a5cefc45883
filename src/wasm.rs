//! WASM bindings for use from JavaScript Markdown pipelines.
//!
//! Exposes the escaper as a promise-returning function so it can be dropped
//! into loaders and plugin chains that expect an async step.

use js_sys::Promise;
use wasm_bindgen::prelude::*;

use crate::escaper::FenceEscaper;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Escape `<` and `>` inside fenced code blocks.
///
/// `_options` may be any value, including `undefined`; it is ignored. The
/// returned promise is already resolved and never rejects.
#[wasm_bindgen(js_name = escapeCodeFences)]
pub fn escape_code_fences(markdown: &str, _options: JsValue) -> Promise {
    let output = FenceEscaper::new().escape(markdown);
    Promise::resolve(&JsValue::from_str(&output))
}

/// Synchronous variant of [`escape_code_fences`].
#[wasm_bindgen(js_name = escapeCodeFencesSync)]
pub fn escape_code_fences_sync(markdown: &str) -> String {
    FenceEscaper::new().escape(markdown)
}
