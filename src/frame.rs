use crate::session::{with_shared, Shared};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use trail_core::{FrameHost, FrameToken};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Outstanding rAF ids in request order. The browser runs callbacks in that
// order and never runs a cancelled one, so the front is always the request
// being delivered.
#[derive(Default)]
struct Queue {
    ids: VecDeque<i32>,
    closed: bool,
}

type Outstanding = Rc<RefCell<Queue>>;

/// `requestAnimationFrame`-backed [`FrameHost`].
///
/// One closure lives for the whole session; each delivery hands the scheduler
/// the token of the request it answers.
pub struct RafHost {
    window: web::Window,
    outstanding: Outstanding,
    tick: Closure<dyn FnMut()>,
}

impl RafHost {
    pub fn new(window: web::Window, shared: Weak<RefCell<Shared>>) -> Self {
        let outstanding = Outstanding::default();
        let delivered = outstanding.clone();
        let tick = Closure::wrap(Box::new(move || {
            let next = delivered.borrow_mut().ids.pop_front();
            let Some(id) = next else {
                return;
            };
            with_shared(&shared, |s| s.on_frame(FrameToken(id)));
        }) as Box<dyn FnMut()>);
        Self {
            window,
            outstanding,
            tick,
        }
    }

    /// Handle that can cancel outstanding requests without touching the
    /// session state.
    pub fn canceller(&self) -> FrameCanceller {
        FrameCanceller {
            window: self.window.clone(),
            outstanding: self.outstanding.clone(),
        }
    }
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) -> Option<FrameToken> {
        if self.outstanding.borrow().closed {
            return None;
        }
        match self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.outstanding.borrow_mut().ids.push_back(id);
                Some(FrameToken(id))
            }
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.outstanding.borrow_mut().ids.retain(|id| *id != token.0);
        if let Err(e) = self.window.cancel_animation_frame(token.0) {
            log::debug!("[frame] cancelAnimationFrame({}) failed: {:?}", token.0, e);
        }
    }
}

pub struct FrameCanceller {
    window: web::Window,
    outstanding: Outstanding,
}

impl FrameCanceller {
    /// Cancel every request still queued with the browser and refuse any
    /// further ones.
    pub fn cancel_all(&self) {
        let ids: Vec<i32> = {
            let mut queue = self.outstanding.borrow_mut();
            queue.closed = true;
            queue.ids.drain(..).collect()
        };
        for id in ids {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}
