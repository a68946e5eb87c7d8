use crate::constants::{
    overlay_style, CANVAS_ID, CONFIG_ATTRIBUTE, OPACITY_ACTIVE, OPACITY_INACTIVE,
};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The full-viewport canvas the trail is painted on.
///
/// A canvas the page already provides is reused; otherwise one is appended to
/// `<body>` and removed again when the overlay is dropped.
pub struct Overlay {
    canvas: web::HtmlCanvasElement,
    created: bool,
}

impl Overlay {
    pub fn acquire(document: &web::Document) -> anyhow::Result<Self> {
        let (canvas, created) = match document.get_element_by_id(CANVAS_ID) {
            Some(el) => {
                let canvas = el
                    .dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
                (canvas, false)
            }
            None => {
                let canvas = document
                    .create_element("canvas")
                    .map_err(|e| anyhow!("{:?}", e))?
                    .dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|e| anyhow!("{:?}", e))?;
                canvas.set_id(CANVAS_ID);
                let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
                body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
                (canvas, true)
            }
        };
        _ = canvas.set_attribute("style", &overlay_style());
        _ = canvas.set_attribute("aria-hidden", "true");
        Ok(Self { canvas, created })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn config_json(&self) -> Option<String> {
        self.canvas.get_attribute(CONFIG_ATTRIBUTE)
    }

    /// Fade in while Active, out while Inactive.
    pub fn set_active(&self, active: bool) {
        let opacity = if active {
            OPACITY_ACTIVE
        } else {
            OPACITY_INACTIVE
        };
        set_style(&self.canvas, "opacity", opacity);
    }

    /// Reduced-capability devices get no canvas at all.
    pub fn set_reduced(&self, reduced: bool) {
        set_style(&self.canvas, "display", if reduced { "none" } else { "block" });
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        if self.created {
            self.canvas.remove();
        }
    }
}

fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("[overlay] set {}={} failed: {:?}", property, value, e);
    }
}
