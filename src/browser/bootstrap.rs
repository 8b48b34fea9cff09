//! Bindings to the page's global `bootstrap` bundle.
//!
//! Constructors are `catch` so a page without Bootstrap loaded surfaces as a
//! `JsValue` error instead of a trap.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Tooltip;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Popover;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Alert;

    #[wasm_bindgen(static_method_of = Alert, js_name = getOrCreateInstance, catch)]
    pub fn get_or_create_instance(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}

/// Bootstrap event fired after an alert has been closed and removed.
pub const ALERT_CLOSED_EVENT: &str = "closed.bs.alert";
