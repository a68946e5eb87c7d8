use crate::constants::TOUCH_PROBE_PROPERTY;
use crate::dom;
use trail_core::{ActivationSettings, Capability};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Resolve the device capability from the current viewport and input hardware.
pub fn probe(window: &web::Window, settings: &ActivationSettings) -> Capability {
    let (width, _) = dom::viewport_size(window);
    Capability::resolve(width, has_touch(window), settings.min_viewport_width)
}

pub fn has_touch(window: &web::Window) -> bool {
    let object: &js_sys::Object = window.as_ref();
    let touch_handler =
        js_sys::Reflect::has(object, &JsValue::from_str(TOUCH_PROBE_PROPERTY)).unwrap_or(false);
    touch_handler || window.navigator().max_touch_points() > 0
}
