use crate::constants::EVENT_RESIZE;
use crate::dom::EventListener;
use crate::session::{with_shared, Shared};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Re-probe capability on every resize for the whole session, so a narrow
/// window can switch the trail off and a wide one back on.
pub fn wire_capability_resize(
    window: &web::Window,
    shared: Weak<RefCell<Shared>>,
) -> Result<EventListener, JsValue> {
    EventListener::on_window(window, EVENT_RESIZE, move |_ev: web::Event| {
        with_shared(&shared, |s| s.refresh_capability());
    })
}

/// Keep the canvas backing store at viewport size while Active. Node positions
/// are untouched, so trails carry on across a resize.
pub fn wire_viewport_resize(
    window: &web::Window,
    shared: Weak<RefCell<Shared>>,
) -> Result<EventListener, JsValue> {
    EventListener::on_window(window, EVENT_RESIZE, move |_ev: web::Event| {
        with_shared(&shared, |s| s.fit_canvas());
    })
}
