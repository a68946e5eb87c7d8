#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod capability;
mod constants;
mod dom;
mod events;
mod frame;
mod occlusion;
mod overlay;
mod render;
mod session;
mod visibility;

thread_local! {
    // At most one trail per page.
    static SESSION: RefCell<Option<session::Session>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-trail starting");

    // Pages opt in by shipping the overlay canvas; others call `mount` themselves.
    let opted_in = dom::window_document()
        .map(|d| d.get_element_by_id(constants::CANVAS_ID).is_some())
        .unwrap_or(false);
    if opted_in {
        mount(None);
    } else {
        log::info!("no #{} canvas; waiting for mount()", constants::CANVAS_ID);
    }
    Ok(())
}

/// Mount the trail, replacing any previous session. `config_json` overrides
/// the defaults (and the canvas `data-trail-config` attribute). Returns whether
/// the trail is now mounted; failures are logged, never thrown.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> bool {
    unmount();
    match session::Session::new(config_json) {
        Ok(Some(session)) => {
            SESSION.with(|slot| *slot.borrow_mut() = Some(session));
            true
        }
        Ok(None) => false,
        Err(e) => {
            log::error!("[trail] mount failed: {:#}", e);
            false
        }
    }
}

/// Tear the trail down: stops the frame loop, detaches every listener and
/// removes an overlay canvas that `mount` created.
#[wasm_bindgen]
pub fn unmount() {
    let previous = SESSION.with(|slot| slot.borrow_mut().take());
    drop(previous);
}

#[wasm_bindgen]
pub fn is_mounted() -> bool {
    SESSION.with(|slot| slot.borrow().is_some())
}
