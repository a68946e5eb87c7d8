// Host-side tests for capability resolution and the activation state machine.

use trail_core::{
    ActivationController, ActivationSettings, AnchorSample, Capability, Phase, Transition,
};

fn controller() -> ActivationController {
    ActivationController::new(&ActivationSettings::default())
}

fn seen(ratio: f64) -> AnchorSample {
    AnchorSample::new(ratio > 0.0, ratio)
}

#[test]
fn capability_requires_wide_viewport_and_no_touch() {
    assert_eq!(Capability::resolve(1280.0, false, 1024.0), Capability::Full);
    assert_eq!(Capability::resolve(1025.0, false, 1024.0), Capability::Full);
    assert_eq!(Capability::resolve(1024.0, false, 1024.0), Capability::Reduced);
    assert_eq!(Capability::resolve(800.0, false, 1024.0), Capability::Reduced);
    assert_eq!(Capability::resolve(1920.0, true, 1024.0), Capability::Reduced);
    assert_eq!(Capability::resolve(0.0, false, 1024.0), Capability::Reduced);
    assert_eq!(Capability::resolve(f64::NAN, false, 1024.0), Capability::Reduced);
    assert!(Capability::Full.allows_effect());
    assert!(!Capability::Reduced.allows_effect());
}

#[test]
fn starts_inactive_and_needs_both_conditions() {
    let mut c = controller();
    assert_eq!(c.phase(), Phase::Inactive);
    assert_eq!(c.update_anchors([("hero", seen(0.5))]), None);
    assert_eq!(c.phase(), Phase::Inactive);
    assert_eq!(c.set_capability(Capability::Full), Some(Transition::Activated));
    assert_eq!(c.phase(), Phase::Active);
}

#[test]
fn order_of_conditions_does_not_matter() {
    let mut c = controller();
    assert_eq!(c.set_capability(Capability::Full), None);
    assert_eq!(
        c.update_anchors([("about", seen(0.3))]),
        Some(Transition::Activated)
    );
}

#[test]
fn scrolling_anchors_away_deactivates() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0))]);
    assert_eq!(
        c.update_anchors([("hero", seen(0.0))]),
        Some(Transition::Deactivated)
    );
    assert!(!c.any_anchor_visible());
}

#[test]
fn shrinking_below_capability_deactivates() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0))]);
    assert_eq!(
        c.set_capability(Capability::Reduced),
        Some(Transition::Deactivated)
    );
    assert_eq!(
        c.set_capability(Capability::Full),
        Some(Transition::Activated)
    );
}

#[test]
fn any_visible_anchor_keeps_it_active() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0)), ("about", seen(0.2))]);
    assert_eq!(c.update_anchors([("hero", seen(0.0))]), None);
    assert_eq!(c.phase(), Phase::Active);
    assert_eq!(
        c.update_anchors([("about", seen(0.0))]),
        Some(Transition::Deactivated)
    );
}

#[test]
fn hand_over_in_one_batch_does_not_bounce() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0))]);
    let t = c.update_anchors([("hero", seen(0.0)), ("about", seen(0.4))]);
    assert_eq!(t, None);
    assert_eq!(c.phase(), Phase::Active);
}

#[test]
fn intersecting_below_threshold_is_not_visible() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    assert_eq!(c.update_anchors([("hero", AnchorSample::new(true, 0.05))]), None);
    assert_eq!(
        c.update_anchors([("hero", AnchorSample::new(true, 0.1))]),
        Some(Transition::Activated)
    );
    // Not intersecting wins regardless of a stale ratio.
    assert_eq!(
        c.update_anchors([("hero", AnchorSample::new(false, 0.5))]),
        Some(Transition::Deactivated)
    );
}

#[test]
fn repeated_inputs_report_no_transition() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0))]);
    assert_eq!(c.set_capability(Capability::Full), None);
    assert_eq!(c.update_anchors([("hero", seen(0.9))]), None);
}

#[test]
fn shutdown_forgets_anchors() {
    let mut c = controller();
    c.set_capability(Capability::Full);
    c.update_anchors([("hero", seen(1.0))]);
    assert_eq!(c.shutdown(), Some(Transition::Deactivated));
    assert_eq!(c.shutdown(), None);
    assert!(!c.any_anchor_visible());
    assert_eq!(c.set_capability(Capability::Full), None);
}
