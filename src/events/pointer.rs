use crate::constants::EVENT_POINTER_MOVE;
use crate::dom::EventListener;
use crate::session::{with_shared, Shared};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Viewport coordinates of a pointer event (the overlay is full-viewport, so
/// these are canvas coordinates too).
#[inline]
pub fn client_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Feed primary-pointer moves into the simulation target. Attached only while
/// the trail is Active.
pub fn wire_pointermove(
    window: &web::Window,
    shared: Weak<RefCell<Shared>>,
) -> Result<EventListener, JsValue> {
    EventListener::on_window(window, EVENT_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !ev.is_primary() {
            return;
        }
        let pos = client_position(ev);
        with_shared(&shared, |s| s.pointer_moved(pos));
    })
}
