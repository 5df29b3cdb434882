//! Browser Helpers
//!
//! Thin wrappers over window APIs used by the showcase page.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

/// Write text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(js_error)
}

/// Log a serializable value to the console as a JS object
pub fn log_object<T: serde::Serialize>(label: &str, value: &T) {
    match serde_wasm_bindgen::to_value(value) {
        Ok(js) => web_sys::console::log_2(&label.into(), &js),
        Err(e) => log::warn!("[Browser] Could not convert value for logging: {}", e),
    }
}
