use crate::capability;
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{FrameCanceller, RafHost};
use crate::occlusion::DomQuery;
use crate::overlay::Overlay;
use crate::render::CanvasSurface;
use crate::visibility::AnchorObserver;
use anyhow::anyhow;
use glam::Vec2;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use trail_core::{AnchorSample, FrameToken, TrailConfig, TrailRuntime, Transition};
use web_sys as web;

/// A mounted trail. Dropping it tears everything down: frame loop, listeners,
/// observer, and the overlay canvas if we created it.
pub struct Session {
    shared: Rc<RefCell<Shared>>,
    frames: FrameCanceller,
    _capability_resize: EventListener,
    _observer: Option<AnchorObserver>,
}

/// State reachable from every DOM callback of a session.
pub struct Shared {
    runtime: TrailRuntime,
    window: web::Window,
    overlay: Overlay,
    surface: CanvasSurface,
    query: DomQuery,
    host: RafHost,
    weak: Weak<RefCell<Shared>>,
    // Present only while Active.
    active_listeners: Vec<EventListener>,
}

/// Run `f` against the session state if it is still alive and not already
/// borrowed further up the stack.
pub fn with_shared(shared: &Weak<RefCell<Shared>>, f: impl FnOnce(&mut Shared)) {
    let Some(rc) = shared.upgrade() else {
        return;
    };
    let Ok(mut guard) = rc.try_borrow_mut() else {
        log::trace!("[trail] state busy; dropping callback");
        return;
    };
    f(&mut guard);
}

impl Session {
    /// `Ok(None)` when the canvas cannot provide a 2D context; the page is left
    /// as it was.
    pub fn new(config_json: Option<String>) -> anyhow::Result<Option<Self>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;

        let overlay = Overlay::acquire(&document)?;
        let Some(surface) = CanvasSurface::new(overlay.canvas()) else {
            log::warn!("[trail] 2D context unavailable; trail disabled");
            return Ok(None);
        };

        let config = resolve_config(config_json.or_else(|| overlay.config_json()));
        let anchors = config.activation.anchors.clone();
        let threshold = config.activation.visibility_threshold;
        let runtime = TrailRuntime::new(config, StdRng::from_entropy())?;
        let query = DomQuery::new(document.clone());

        let shared = Rc::new_cyclic(|weak: &Weak<RefCell<Shared>>| {
            RefCell::new(Shared {
                runtime,
                window: window.clone(),
                overlay,
                surface,
                query,
                host: RafHost::new(window.clone(), weak.clone()),
                weak: weak.clone(),
                active_listeners: Vec::new(),
            })
        });
        let weak = Rc::downgrade(&shared);
        let frames = shared.borrow().host.canceller();

        let capability_resize = events::wire_capability_resize(&window, weak.clone())
            .map_err(|e| anyhow!("resize listener: {:?}", e))?;
        shared.borrow_mut().refresh_capability();

        let observer = AnchorObserver::observe(&document, &anchors, threshold, move |samples| {
            with_shared(&weak, |s| s.anchors_changed(samples));
        })?;

        log::info!("[trail] mounted");
        Ok(Some(Self {
            shared,
            frames,
            _capability_resize: capability_resize,
            _observer: observer,
        }))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        match self.shared.try_borrow_mut() {
            Ok(mut shared) => shared.teardown(),
            // The state outlives this handle until the running callback returns;
            // make sure the browser never calls back into it afterwards.
            Err(_) => {
                log::warn!("[trail] unmount while busy; cancelling queued frames");
                self.frames.cancel_all();
            }
        }
        log::info!("[trail] unmounted");
    }
}

impl Shared {
    pub fn refresh_capability(&mut self) {
        let capability = capability::probe(&self.window, &self.runtime.config().activation);
        self.overlay.set_reduced(!capability.allows_effect());
        let transition = self.runtime.set_capability(capability, &mut self.host);
        self.apply(transition);
    }

    pub fn anchors_changed(&mut self, samples: Vec<(String, AnchorSample)>) {
        let transition = self.runtime.update_anchors(samples, &mut self.host);
        self.apply(transition);
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.runtime.pointer_moved(pos);
    }

    pub fn fit_canvas(&mut self) {
        dom::fit_canvas_to_viewport(&self.window, self.overlay.canvas());
    }

    pub fn on_frame(&mut self, token: FrameToken) {
        let outcome = self
            .runtime
            .frame(token, &mut self.host, &mut self.surface, &self.query);
        log::trace!("[frame] {:?}", outcome);
    }

    fn teardown(&mut self) {
        let transition = self.runtime.shutdown(&mut self.host);
        self.apply(transition);
        self.active_listeners.clear();
    }

    fn apply(&mut self, transition: Option<Transition>) {
        match transition {
            Some(Transition::Activated) => {
                self.active_listeners = self.wire_active_listeners();
                self.fit_canvas();
                self.overlay.set_active(true);
            }
            Some(Transition::Deactivated) => {
                // Dropping the guards detaches the listeners.
                self.active_listeners.clear();
                self.overlay.set_active(false);
            }
            None => {}
        }
    }

    fn wire_active_listeners(&self) -> Vec<EventListener> {
        let wired = [
            events::wire_pointermove(&self.window, self.weak.clone()),
            events::wire_viewport_resize(&self.window, self.weak.clone()),
        ];
        wired
            .into_iter()
            .filter_map(|listener| match listener {
                Ok(l) => Some(l),
                Err(e) => {
                    log::warn!("[trail] listener not attached: {:?}", e);
                    None
                }
            })
            .collect()
    }
}

fn resolve_config(json: Option<String>) -> TrailConfig {
    match json.as_deref().map(TrailConfig::from_json) {
        None => TrailConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("[trail] {}; using defaults", e);
            TrailConfig::default()
        }
    }
}
