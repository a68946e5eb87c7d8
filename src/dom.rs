use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; unreadable values come back as zero.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()), read(window.inner_height()))
}

/// Match the canvas backing store to the viewport. Zero, negative or NaN sizes
/// collapse to an empty canvas, which the renderer treats as "skip drawing".
pub fn fit_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let (w, h) = viewport_size(window);
    canvas.set_width(to_px(w));
    canvas.set_height(to_px(h));
}

#[inline]
fn to_px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v as u32
    } else {
        0
    }
}

/// An attached DOM listener; removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web::EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn on_window<F>(window: &web::Window, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let target: &web::EventTarget = window.as_ref();
        Self::new(target, kind, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
