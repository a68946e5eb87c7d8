use crate::chain::{Chain, Coupling};
use crate::config::{StrokeSettings, TrailConfig, TrailSettings};
use crate::occlusion::{ElementQuery, OcclusionFilter};
use crate::oscillator::Oscillator;
use crate::path::{smooth_path_into, PathSegment};
use crate::surface::{has_area, StrokeStyle, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// What a single frame ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Chains advanced and were stroked.
    Drawn { chains: usize },
    /// Chains advanced but the pointer is over opted-out content.
    Suppressed,
    /// No pointer movement seen yet in this activation.
    Unseeded,
    /// The surface has no area; chains advanced, nothing drawn.
    NoSurface,
    /// The scheduler rejected the callback (stopped or stale).
    Skipped,
}

/// Simulation state for one activation.
///
/// Created when the effect turns on and dropped as a unit when it turns off,
/// so trails always restart from scratch.
pub struct TrailEffect {
    trail: TrailSettings,
    stroke: StrokeSettings,
    chains: Vec<Chain>,
    oscillator: Oscillator,
    pointer: Vec2,
    filter: OcclusionFilter,
    rng: StdRng,
    scratch: Vec<PathSegment>,
}

impl TrailEffect {
    pub fn new(config: &TrailConfig, mut rng: StdRng) -> Self {
        let phase = rng.gen::<f64>() * TAU;
        Self {
            trail: config.trail.clone(),
            stroke: config.stroke.clone(),
            chains: Vec::with_capacity(config.trail.trails),
            oscillator: Oscillator::from_settings(&config.hue, phase),
            pointer: Vec2::ZERO,
            filter: OcclusionFilter::new(config.activation.marker_attribute.clone()),
            rng,
            scratch: Vec::with_capacity(config.trail.size),
        }
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    pub fn is_seeded(&self) -> bool {
        !self.chains.is_empty()
    }

    /// Record the pointer target. The first call also seeds every chain at
    /// that position so trails never fly in from the origin.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
        if self.chains.is_empty() {
            self.seed(pos);
        }
    }

    fn seed(&mut self, origin: Vec2) {
        let t = &self.trail;
        for i in 0..t.trails {
            let spring = t.staggered_spring(i) + jitter(&mut self.rng, t.spring_jitter);
            let friction = t.friction + jitter(&mut self.rng, t.friction_jitter);
            self.chains.push(Chain::new(spring, friction, t.size, origin));
        }
        log::debug!("[trail] seeded {} chains at ({:.1}, {:.1})", t.trails, origin.x, origin.y);
    }

    /// Relax every chain one tick toward the pointer.
    pub fn advance(&mut self) {
        let coupling = Coupling {
            dampening: self.trail.dampening,
            tension: self.trail.tension,
        };
        for chain in &mut self.chains {
            chain.step(self.pointer, coupling);
        }
    }

    /// One display frame: clear, advance, then draw unless the surface is empty
    /// or the pointer is over opted-out content. The simulation advances the
    /// same way whether or not anything is drawn.
    pub fn render_frame<S, Q>(&mut self, surface: &mut S, query: &Q) -> FrameOutcome
    where
        S: Surface,
        Q: ElementQuery,
    {
        let area = has_area(surface.size());
        if area {
            surface.clear();
        }
        if self.chains.is_empty() {
            return FrameOutcome::Unseeded;
        }
        self.advance();
        if !area {
            return FrameOutcome::NoSurface;
        }
        if self.filter.should_hide(query, self.pointer) {
            return FrameOutcome::Suppressed;
        }

        let hue = self.oscillator.update().round() as i32;
        let style = StrokeStyle::new(hue, &self.stroke);
        surface.begin_stroke(&style);
        for chain in &self.chains {
            smooth_path_into(chain.nodes(), &mut self.scratch);
            surface.draw_path(&self.scratch);
        }
        FrameOutcome::Drawn {
            chains: self.chains.len(),
        }
    }
}

/// Uniform offset in `[-width / 2, width / 2)`.
fn jitter(rng: &mut StdRng, width: f32) -> f32 {
    width * rng.gen::<f32>() - width * 0.5
}
