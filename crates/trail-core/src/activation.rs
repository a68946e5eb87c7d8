//! Two-state activation machine.
//!
//! The effect runs only while the device qualifies ([`Capability::Full`]) and
//! at least one anchor region is visible. Both inputs arrive from their own
//! host events (resize, intersection callbacks) and are never polled from the
//! frame loop.

use crate::config::ActivationSettings;
use fnv::FnvHashMap;

// Intersection ratios reported right at a threshold can land a hair below it.
const RATIO_SLACK: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Full,
    Reduced,
}

impl Capability {
    /// Narrow viewports and any touch input disable the effect outright.
    pub fn resolve(viewport_width: f64, touch: bool, min_viewport_width: f64) -> Self {
        if touch || !viewport_width.is_finite() || viewport_width <= min_viewport_width {
            Capability::Reduced
        } else {
            Capability::Full
        }
    }

    #[inline]
    pub fn allows_effect(self) -> bool {
        matches!(self, Capability::Full)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Activated,
    Deactivated,
}

/// One intersection report for an anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorSample {
    pub intersecting: bool,
    pub ratio: f64,
}

impl AnchorSample {
    pub fn new(intersecting: bool, ratio: f64) -> Self {
        Self {
            intersecting,
            ratio,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ActivationController {
    capability: Capability,
    anchors: FnvHashMap<String, bool>,
    threshold: f64,
    phase: Phase,
}

impl ActivationController {
    /// Starts inactive with reduced capability until the host reports otherwise.
    pub fn new(settings: &ActivationSettings) -> Self {
        Self {
            capability: Capability::Reduced,
            anchors: FnvHashMap::default(),
            threshold: settings.visibility_threshold,
            phase: Phase::Inactive,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn any_anchor_visible(&self) -> bool {
        self.anchors.values().any(|v| *v)
    }

    pub fn set_capability(&mut self, capability: Capability) -> Option<Transition> {
        if capability != self.capability {
            log::info!("[activation] capability {:?} -> {:?}", self.capability, capability);
            self.capability = capability;
        }
        self.reconcile()
    }

    /// Apply a batch of intersection reports, then decide once. Batching keeps a
    /// hand-over between adjacent anchors from bouncing through Inactive.
    pub fn update_anchors<I, S>(&mut self, samples: I) -> Option<Transition>
    where
        I: IntoIterator<Item = (S, AnchorSample)>,
        S: Into<String>,
    {
        for (anchor, sample) in samples {
            let visible = sample.intersecting && sample.ratio + RATIO_SLACK >= self.threshold;
            self.anchors.insert(anchor.into(), visible);
        }
        self.reconcile()
    }

    /// Force the inactive state, e.g. when the hosting view goes away.
    pub fn shutdown(&mut self) -> Option<Transition> {
        self.anchors.clear();
        self.transition_to(Phase::Inactive)
    }

    fn reconcile(&mut self) -> Option<Transition> {
        let want = if self.capability.allows_effect() && self.any_anchor_visible() {
            Phase::Active
        } else {
            Phase::Inactive
        };
        self.transition_to(want)
    }

    fn transition_to(&mut self, phase: Phase) -> Option<Transition> {
        if phase == self.phase {
            return None;
        }
        self.phase = phase;
        Some(match phase {
            Phase::Active => Transition::Activated,
            Phase::Inactive => Transition::Deactivated,
        })
    }
}
