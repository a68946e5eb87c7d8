use crate::config::HueSettings;
use std::f64::consts::TAU;

/// Periodic scalar source: `offset + amplitude * sin(phase)`, advancing the
/// phase by `frequency` on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    phase: f64,
    frequency: f64,
    amplitude: f64,
    offset: f64,
}

impl Oscillator {
    pub fn new(phase: f64, frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self {
            phase: phase.rem_euclid(TAU),
            frequency,
            amplitude,
            offset,
        }
    }

    pub fn from_settings(settings: &HueSettings, phase: f64) -> Self {
        Self::new(phase, settings.frequency, settings.amplitude, settings.offset)
    }

    pub fn update(&mut self) -> f64 {
        // Wrapping keeps the phase precise over long sessions; sin is unchanged.
        self.phase = (self.phase + self.frequency).rem_euclid(TAU);
        self.offset + self.amplitude * self.phase.sin()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Closed interval every [`update`](Self::update) result falls into.
    pub fn range(&self) -> (f64, f64) {
        (self.offset - self.amplitude, self.offset + self.amplitude)
    }
}
