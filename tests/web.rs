#![cfg(target_arch = "wasm32")]

use cursor_trail::{is_mounted, mount, unmount};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn mount_creates_the_overlay_canvas() {
    assert!(mount(None));
    assert!(is_mounted());
    let canvas = document()
        .get_element_by_id("cursor-trail")
        .expect("overlay canvas not found");
    let style = canvas.get_attribute("style").unwrap_or_default();
    assert!(style.contains("pointer-events:none"));
    assert_eq!(canvas.get_attribute("aria-hidden").as_deref(), Some("true"));
    unmount();
}

#[wasm_bindgen_test]
fn unmount_removes_a_created_canvas() {
    assert!(mount(None));
    unmount();
    assert!(!is_mounted());
    assert!(document().get_element_by_id("cursor-trail").is_none());
}

#[wasm_bindgen_test]
fn bad_config_falls_back_to_defaults() {
    assert!(mount(Some("{ not json".to_string())));
    assert!(is_mounted());
    unmount();
}

#[wasm_bindgen_test]
fn remount_replaces_the_previous_session() {
    assert!(mount(None));
    assert!(mount(None));
    assert!(is_mounted());
    assert!(document().get_element_by_id("cursor-trail").is_some());
    unmount();
}
