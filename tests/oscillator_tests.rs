// Host-side tests for the hue oscillator.

use std::f64::consts::TAU;
use trail_core::{HueSettings, Oscillator};

#[test]
fn output_never_leaves_offset_plus_minus_amplitude() {
    for (phase, frequency) in [(0.0, 0.0015), (1.3, 0.25), (5.9, 1.7), (0.0, 100.0)] {
        let mut osc = Oscillator::new(phase, frequency, 85.0, 285.0);
        let (lo, hi) = osc.range();
        assert_eq!((lo, hi), (200.0, 370.0));
        for _ in 0..10_000 {
            let v = osc.update();
            assert!(v >= lo && v <= hi, "value {v} out of [{lo}, {hi}]");
        }
    }
}

#[test]
fn update_advances_phase_before_sampling() {
    let mut osc = Oscillator::new(0.0, 0.1, 2.0, 1.0);
    let first = osc.update();
    assert!((first - (1.0 + 2.0 * 0.1_f64.sin())).abs() < 1e-12);
    let second = osc.update();
    assert!((second - (1.0 + 2.0 * 0.2_f64.sin())).abs() < 1e-12);
}

#[test]
fn phase_stays_wrapped() {
    let mut osc = Oscillator::new(-2.5, 1.0, 1.0, 0.0);
    assert!(osc.phase() >= 0.0 && osc.phase() < TAU);
    for _ in 0..1000 {
        osc.update();
        assert!(osc.phase() >= 0.0 && osc.phase() < TAU);
    }
}

#[test]
fn same_phase_history_gives_same_values() {
    let settings = HueSettings::default();
    let mut a = Oscillator::from_settings(&settings, 0.7);
    let mut b = Oscillator::from_settings(&settings, 0.7);
    for _ in 0..500 {
        assert_eq!(a.update(), b.update());
    }
}

#[test]
fn rounded_hue_sweeps_slowly() {
    let mut osc = Oscillator::from_settings(&HueSettings::default(), 0.0);
    let mut prev = osc.update().round() as i32;
    for _ in 0..2000 {
        let hue = osc.update().round() as i32;
        assert!((hue - prev).abs() <= 1, "hue jumped {prev} -> {hue}");
        prev = hue;
    }
}
