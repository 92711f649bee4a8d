//! WASM utility functions

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// Safe to call more than once; later calls are ignored.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    init_panic_hook();
    let _ = console_log::init_with_level(log::Level::Debug);
}
