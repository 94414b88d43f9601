//! Shake-to-roll trigger from raw acceleration samples.

use std::time::Duration;

/// Acceleration magnitude, in g, that counts as a shake.
pub const SHAKE_THRESHOLD_G: f32 = 2.5;

/// Minimum gap between triggers, so one physical shake fires once.
pub const SHAKE_COOLDOWN: Duration = Duration::from_millis(500);

/// Turns a stream of 3-axis acceleration samples into discrete roll
/// triggers. Expected to be fed at UI frame rate (~60 Hz); the cooldown
/// makes the exact rate unimportant.
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    enabled: bool,
    last_trigger: Option<Duration>,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ShakeDetector {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_trigger: None,
        }
    }

    /// Enabling arms the detector immediately; no restart or re-arm needed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feeds one acceleration sample (in g) taken at `now` (any monotonic
    /// clock). Returns true when this sample should trigger a roll.
    pub fn sample(&mut self, accel_g: [f32; 3], now: Duration) -> bool {
        if !self.enabled {
            return false;
        }
        let [x, y, z] = accel_g;
        let magnitude = (x * x + y * y + z * z).sqrt();
        if magnitude <= SHAKE_THRESHOLD_G {
            return false;
        }
        if let Some(last) = self.last_trigger {
            if now.saturating_sub(last) <= SHAKE_COOLDOWN {
                return false;
            }
        }
        self.last_trigger = Some(now);
        true
    }
}
