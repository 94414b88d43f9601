//! Shake-to-roll sensing.
//!
//! Desktop builds have no accelerometer, so acceleration is estimated from
//! pointer motion between frames and fed to the core [`ShakeDetector`] in
//! g units. The detector stays disarmed while the shake setting is off and
//! arms immediately when it turns on.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use super::input::try_roll;
use crate::dice3d::types::{AnalyticsState, RollRng, RollStartedEvent, RollState, SettingsState, ShakeInput};

// Rough pointer-space calibration: how many pixels of travel count as one
// meter when converting cursor motion into acceleration.
const PIXELS_PER_METER: f32 = 500.0;
const STANDARD_GRAVITY: f32 = 9.81;

#[allow(clippy::too_many_arguments)]
pub fn detect_shake(
    time: Res<Time>,
    motion: Res<AccumulatedMouseMotion>,
    settings_state: Res<SettingsState>,
    mut shake: ResMut<ShakeInput>,
    mut roll_state: ResMut<RollState>,
    mut rng: ResMut<RollRng>,
    analytics: Res<AnalyticsState>,
    mut started: MessageWriter<RollStartedEvent>,
) {
    shake
        .detector
        .set_enabled(settings_state.store.settings.shake);

    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let velocity = motion.delta / dt / PIXELS_PER_METER;
    let accel_g = (velocity - shake.last_velocity) / dt / STANDARD_GRAVITY;
    shake.last_velocity = velocity;

    if shake
        .detector
        .sample([accel_g.x, accel_g.y, 0.0], time.elapsed())
    {
        try_roll(&mut roll_state, &mut rng, &analytics, &mut started);
    }
}
