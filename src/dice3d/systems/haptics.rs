//! Haptic pulses via gamepad rumble: a light tick when the roll starts and
//! a stronger one when it settles. No connected gamepad means no haptics;
//! nothing fails.

use std::time::Duration;

use bevy::input::gamepad::{Gamepad, GamepadRumbleIntensity, GamepadRumbleRequest};
use bevy::prelude::*;

use crate::dice3d::types::{RollCompletedEvent, RollStartedEvent, SettingsState};

pub fn pulse_haptics(
    settings_state: Res<SettingsState>,
    gamepads: Query<Entity, With<Gamepad>>,
    mut started: MessageReader<RollStartedEvent>,
    mut completed: MessageReader<RollCompletedEvent>,
    mut rumble: MessageWriter<GamepadRumbleRequest>,
) {
    let start = started.read().count() > 0;
    let settle = completed.read().count() > 0;

    if !settings_state.store.settings.haptics || !(start || settle) {
        return;
    }

    for gamepad in &gamepads {
        if start {
            rumble.write(GamepadRumbleRequest::Add {
                gamepad,
                intensity: GamepadRumbleIntensity::weak_motor(0.4),
                duration: Duration::from_millis(100),
            });
        }
        if settle {
            rumble.write(GamepadRumbleRequest::Add {
                gamepad,
                intensity: GamepadRumbleIntensity::strong_motor(0.8),
                duration: Duration::from_millis(150),
            });
        }
    }
}
