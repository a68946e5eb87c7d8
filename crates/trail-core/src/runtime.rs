use crate::activation::{ActivationController, AnchorSample, Capability, Phase, Transition};
use crate::config::TrailConfig;
use crate::effect::{FrameOutcome, TrailEffect};
use crate::error::TrailResult;
use crate::occlusion::ElementQuery;
use crate::scheduler::{FrameHost, FrameScheduler, FrameToken};
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// Owns the activation state machine, the frame scheduler and, while active,
/// the per-activation [`TrailEffect`].
///
/// Lifecycle calls return the transition they caused so the host can attach or
/// detach its own listeners in the same synchronous step.
pub struct TrailRuntime {
    config: TrailConfig,
    controller: ActivationController,
    scheduler: FrameScheduler,
    effect: Option<TrailEffect>,
    seeds: StdRng,
}

impl TrailRuntime {
    pub fn new(config: TrailConfig, seeds: StdRng) -> TrailResult<Self> {
        config.validate()?;
        Ok(Self {
            controller: ActivationController::new(&config.activation),
            config,
            scheduler: FrameScheduler::new(),
            effect: None,
            seeds,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn is_active(&self) -> bool {
        self.controller.phase() == Phase::Active
    }

    pub fn capability(&self) -> Capability {
        self.controller.capability()
    }

    pub fn effect(&self) -> Option<&TrailEffect> {
        self.effect.as_ref()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn set_capability<H: FrameHost>(
        &mut self,
        capability: Capability,
        host: &mut H,
    ) -> Option<Transition> {
        let transition = self.controller.set_capability(capability);
        self.apply(transition, host)
    }

    pub fn update_anchors<H, I, S>(&mut self, samples: I, host: &mut H) -> Option<Transition>
    where
        H: FrameHost,
        I: IntoIterator<Item = (S, AnchorSample)>,
        S: Into<String>,
    {
        let transition = self.controller.update_anchors(samples);
        self.apply(transition, host)
    }

    /// Tear everything down; used when the hosting view is destroyed.
    pub fn shutdown<H: FrameHost>(&mut self, host: &mut H) -> Option<Transition> {
        let transition = self.controller.shutdown();
        self.apply(transition, host)
    }

    /// Ignored while inactive: there is no state to write into.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if let Some(effect) = self.effect.as_mut() {
            effect.pointer_moved(pos);
        }
    }

    /// Body of the host's refresh callback for the request `token`.
    pub fn frame<H, S, Q>(
        &mut self,
        token: FrameToken,
        host: &mut H,
        surface: &mut S,
        query: &Q,
    ) -> FrameOutcome
    where
        H: FrameHost,
        S: Surface,
        Q: ElementQuery,
    {
        if !self.scheduler.begin_frame(token) {
            return FrameOutcome::Skipped;
        }
        let outcome = match self.effect.as_mut() {
            Some(effect) => effect.render_frame(surface, query),
            None => FrameOutcome::Skipped,
        };
        self.scheduler.end_frame(host);
        outcome
    }

    fn apply<H: FrameHost>(
        &mut self,
        transition: Option<Transition>,
        host: &mut H,
    ) -> Option<Transition> {
        match transition {
            Some(Transition::Activated) => {
                let rng = StdRng::seed_from_u64(self.seeds.gen());
                self.effect = Some(TrailEffect::new(&self.config, rng));
                self.scheduler.start(host);
                log::info!("[trail] activated");
            }
            Some(Transition::Deactivated) => {
                self.scheduler.stop(host);
                self.effect = None;
                log::info!("[trail] deactivated");
            }
            None => {}
        }
        transition
    }
}
