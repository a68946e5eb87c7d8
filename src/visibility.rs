use anyhow::anyhow;
use trail_core::AnchorSample;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Watches the anchor regions and reports each intersection batch as
/// `(anchor id, sample)` pairs. Disconnects on drop.
pub struct AnchorObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl AnchorObserver {
    /// `Ok(None)` when none of the anchors exist in the document.
    pub fn observe<F>(
        document: &web::Document,
        anchors: &[String],
        threshold: f64,
        mut on_change: F,
    ) -> anyhow::Result<Option<Self>>
    where
        F: FnMut(Vec<(String, AnchorSample)>) + 'static,
    {
        let targets: Vec<web::Element> = anchors
            .iter()
            .filter_map(|id| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::warn!("[activation] anchor #{} not found; skipping", id);
                }
                el
            })
            .collect();
        if targets.is_empty() {
            log::warn!("[activation] no anchors present; trail stays inactive");
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let samples = entries
                    .iter()
                    .map(|entry| {
                        let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                        let sample =
                            AnchorSample::new(entry.is_intersecting(), entry.intersection_ratio());
                        (entry.target().id(), sample)
                    })
                    .collect::<Vec<_>>();
                on_change(samples);
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
        for target in &targets {
            observer.observe(target);
        }
        log::info!("[activation] observing {} anchor(s)", targets.len());
        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for AnchorObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
