//! Cancellable once-per-refresh scheduling.
//!
//! The host ([`FrameHost`]) owns the actual refresh callback; the scheduler
//! owns the decision of whether a delivered callback may run. Every delivery
//! carries the token of the request it answers, and only the one pending token
//! is accepted. `stop` cancels that request and flips `running` in the same
//! call, so a callback already in flight is rejected even if the loop has been
//! restarted in the meantime.

/// Host handle for one pending refresh request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

pub trait FrameHost {
    /// Ask for the frame callback to fire on the next refresh. `None` means the
    /// host declined; the loop then simply stays idle.
    fn request_frame(&mut self) -> Option<FrameToken>;
    fn cancel_frame(&mut self, token: FrameToken);
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    running: bool,
    pending: Option<FrameToken>,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Frames accepted since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start<H: FrameHost>(&mut self, host: &mut H) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = host.request_frame();
        if self.pending.is_none() {
            log::warn!("[frame] host refused the first frame request");
        }
    }

    pub fn stop<H: FrameHost>(&mut self, host: &mut H) {
        self.running = false;
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
        }
    }

    /// Gate for a delivered callback. Consumes the pending request when
    /// `token` is the one it is waiting for.
    pub fn begin_frame(&mut self, token: FrameToken) -> bool {
        if !self.running || self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        self.frames += 1;
        true
    }

    /// Re-arm for the next refresh unless stopped during the frame body.
    pub fn end_frame<H: FrameHost>(&mut self, host: &mut H) {
        if self.running && self.pending.is_none() {
            self.pending = host.request_frame();
        }
    }
}
