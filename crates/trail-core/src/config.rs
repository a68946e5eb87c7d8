//! Tuning for the trail effect.
//!
//! Every section deserialises with per-field defaults so a partial JSON
//! document (for example `{"trail": {"trails": 8}}`) only overrides what it
//! names. [`TrailConfig::validate`] guards the numeric ranges the simulation
//! relies on for stability.

use crate::error::{invalid, TrailResult};
use serde::{Deserialize, Serialize};

// Chain physics
pub const DEFAULT_FRICTION: f32 = 0.5; // per-tick velocity decay, must stay in (0, 1)
pub const DEFAULT_TRAILS: usize = 20; // chains per activation
pub const DEFAULT_SIZE: usize = 50; // nodes per chain
pub const DEFAULT_DAMPENING: f32 = 0.25; // share of predecessor velocity blended in
pub const DEFAULT_TENSION: f32 = 0.98; // spring attenuation per node index
pub const DEFAULT_SPRING_BASE: f32 = 0.45;
pub const DEFAULT_SPRING_SPREAD: f32 = 0.025; // extra spring given to the last chain
pub const DEFAULT_SPRING_JITTER: f32 = 0.1; // full width of the random spring offset
pub const DEFAULT_FRICTION_JITTER: f32 = 0.01; // full width of the random friction offset

// Hue sweep
pub const DEFAULT_HUE_AMPLITUDE: f64 = 85.0;
pub const DEFAULT_HUE_FREQUENCY: f64 = 0.0015; // radians per rendered frame
pub const DEFAULT_HUE_OFFSET: f64 = 285.0;

// Stroke
pub const DEFAULT_SATURATION: f32 = 90.0;
pub const DEFAULT_LIGHTNESS: f32 = 60.0;
pub const DEFAULT_ALPHA: f32 = 0.35;
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
pub const DEFAULT_COMPOSITE: &str = "screen";

// Activation
pub const DEFAULT_ANCHORS: [&str; 2] = ["hero", "about"];
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MIN_VIEWPORT_WIDTH: f64 = 1024.0;
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-hide-cursor";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub trail: TrailSettings,
    pub hue: HueSettings,
    pub stroke: StrokeSettings,
    pub activation: ActivationSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailSettings {
    pub friction: f32,
    pub trails: usize,
    pub size: usize,
    pub dampening: f32,
    pub tension: f32,
    pub spring_base: f32,
    pub spring_spread: f32,
    pub spring_jitter: f32,
    pub friction_jitter: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            trails: DEFAULT_TRAILS,
            size: DEFAULT_SIZE,
            dampening: DEFAULT_DAMPENING,
            tension: DEFAULT_TENSION,
            spring_base: DEFAULT_SPRING_BASE,
            spring_spread: DEFAULT_SPRING_SPREAD,
            spring_jitter: DEFAULT_SPRING_JITTER,
            friction_jitter: DEFAULT_FRICTION_JITTER,
        }
    }
}

impl TrailSettings {
    /// Spring constant of chain `index` before jitter: later chains pull a
    /// little harder so the set fans out instead of stacking.
    pub fn staggered_spring(&self, index: usize) -> f32 {
        let trails = self.trails.max(1) as f32;
        self.spring_base + (index as f32 / trails) * self.spring_spread
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueSettings {
    pub amplitude: f64,
    pub frequency: f64,
    pub offset: f64,
}

impl Default for HueSettings {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_HUE_AMPLITUDE,
            frequency: DEFAULT_HUE_FREQUENCY,
            offset: DEFAULT_HUE_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub line_width: f64,
    pub composite: String,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            alpha: DEFAULT_ALPHA,
            line_width: DEFAULT_LINE_WIDTH,
            composite: DEFAULT_COMPOSITE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationSettings {
    /// Element ids whose visibility keeps the effect running.
    pub anchors: Vec<String>,
    pub visibility_threshold: f64,
    /// Viewports at or below this width (CSS px) count as reduced capability.
    pub min_viewport_width: f64,
    pub marker_attribute: String,
}

impl Default for ActivationSettings {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS.iter().map(|s| s.to_string()).collect(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            min_viewport_width: DEFAULT_MIN_VIEWPORT_WIDTH,
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_string(),
        }
    }
}

impl TrailConfig {
    pub fn from_json(json: &str) -> TrailResult<Self> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TrailResult<()> {
        let t = &self.trail;
        if t.trails == 0 {
            return Err(invalid("trail.trails", "at least one trail is required"));
        }
        if t.size < 2 {
            return Err(invalid("trail.size", "a chain needs at least two nodes"));
        }
        let finite = [
            ("trail.friction", t.friction),
            ("trail.dampening", t.dampening),
            ("trail.tension", t.tension),
            ("trail.spring_base", t.spring_base),
            ("trail.spring_spread", t.spring_spread),
            ("trail.spring_jitter", t.spring_jitter),
            ("trail.friction_jitter", t.friction_jitter),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        let half = t.friction_jitter.abs() * 0.5;
        if t.friction - half <= 0.0 || t.friction + half >= 1.0 {
            return Err(invalid(
                "trail.friction",
                format!(
                    "{} ± {} leaves the open interval (0, 1)",
                    t.friction, half
                ),
            ));
        }
        // Every chain's spring, stagger and jitter included, stays in (0, 1).
        let spring_half = t.spring_jitter.abs() * 0.5;
        let lowest = t.spring_base + t.spring_spread.min(0.0) - spring_half;
        let highest = t.spring_base + t.spring_spread.max(0.0) + spring_half;
        if lowest <= 0.0 || highest >= 1.0 {
            return Err(invalid(
                "trail.spring_base",
                format!(
                    "per-chain springs span [{}, {}], outside the open interval (0, 1)",
                    lowest, highest
                ),
            ));
        }
        if !(t.tension > 0.0 && t.tension <= 1.0) {
            return Err(invalid("trail.tension", "must lie in (0, 1]"));
        }
        if t.dampening < 0.0 {
            return Err(invalid("trail.dampening", "must not be negative"));
        }

        let h = &self.hue;
        if !(h.amplitude.is_finite() && h.frequency.is_finite() && h.offset.is_finite()) {
            return Err(invalid("hue", "amplitude, frequency and offset must be finite"));
        }
        if h.amplitude < 0.0 {
            return Err(invalid("hue.amplitude", "must not be negative"));
        }

        let s = &self.stroke;
        if !(0.0..=1.0).contains(&s.alpha) {
            return Err(invalid("stroke.alpha", "must lie in [0, 1]"));
        }
        if !(s.line_width.is_finite() && s.line_width > 0.0) {
            return Err(invalid("stroke.line_width", "must be positive"));
        }

        let a = &self.activation;
        if !(0.0..=1.0).contains(&a.visibility_threshold) {
            return Err(invalid(
                "activation.visibility_threshold",
                "must lie in [0, 1]",
            ));
        }
        if a.marker_attribute.is_empty() {
            return Err(invalid("activation.marker_attribute", "must not be empty"));
        }
        Ok(())
    }
}
