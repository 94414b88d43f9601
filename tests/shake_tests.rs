//! Tests for the shake-to-roll detector.

use std::time::Duration;

use simply_dice::roller::{ShakeDetector, SHAKE_THRESHOLD_G};

const HARD_SHAKE: [f32; 3] = [3.0, 0.0, 0.0];

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

#[test]
fn disabled_detector_never_fires() {
    let mut detector = ShakeDetector::new(false);
    for i in 0..100 {
        assert!(!detector.sample(HARD_SHAKE, secs(i as f32 * 0.016)));
    }
}

#[test]
fn enabling_arms_the_detector_immediately() {
    let mut detector = ShakeDetector::new(false);
    assert!(!detector.sample(HARD_SHAKE, secs(1.0)));

    detector.set_enabled(true);
    assert!(detector.sample(HARD_SHAKE, secs(1.016)));
}

#[test]
fn magnitude_below_threshold_does_not_fire() {
    let mut detector = ShakeDetector::new(true);
    // Resting pose: one g straight down.
    assert!(!detector.sample([0.0, 0.0, 1.0], secs(0.0)));
    // Just under the threshold on the diagonal.
    let g = SHAKE_THRESHOLD_G / f32::sqrt(3.0) - 0.01;
    assert!(!detector.sample([g, g, g], secs(0.1)));
}

#[test]
fn magnitude_is_the_full_3_axis_vector() {
    let mut detector = ShakeDetector::new(true);
    // Each component is small but the vector magnitude exceeds 2.5 g.
    let g = SHAKE_THRESHOLD_G / f32::sqrt(3.0) + 0.05;
    assert!(detector.sample([g, g, g], secs(0.0)));
}

#[test]
fn cooldown_suppresses_repeat_triggers() {
    let mut detector = ShakeDetector::new(true);
    assert!(detector.sample(HARD_SHAKE, secs(1.0)));
    // One physical shake produces many over-threshold samples; only the
    // first within the window may fire.
    assert!(!detector.sample(HARD_SHAKE, secs(1.1)));
    assert!(!detector.sample(HARD_SHAKE, secs(1.4)));
    assert!(detector.sample(HARD_SHAKE, secs(1.6)));
}

#[test]
fn disabling_mid_stream_stops_triggers() {
    let mut detector = ShakeDetector::new(true);
    assert!(detector.sample(HARD_SHAKE, secs(0.0)));

    detector.set_enabled(false);
    assert!(!detector.sample(HARD_SHAKE, secs(2.0)));

    detector.set_enabled(true);
    assert!(detector.sample(HARD_SHAKE, secs(4.0)));
}
