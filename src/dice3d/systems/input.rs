//! Tap and keyboard handling: roll trigger plus settings toggles.

use bevy::log::{debug, warn};
use bevy::prelude::*;

use crate::dice3d::systems::setup::settings_line;
use crate::dice3d::types::{
    AnalyticsState, ResultsText, RollRng, RollStartedEvent, RollState, SettingsState, SettingsText,
};
use crate::roller::RollError;

/// Starts a roll unless one is already in flight. Shared by the tap handler
/// and the shake trigger so both enforce the same single-roll rule.
pub(crate) fn try_roll(
    roll_state: &mut RollState,
    rng: &mut RollRng,
    analytics: &AnalyticsState,
    started: &mut MessageWriter<RollStartedEvent>,
) {
    match roll_state.animator.roll(&mut rng.0) {
        Ok(()) => {
            analytics.logger.log_roll_dice();
            started.write(RollStartedEvent);
        }
        Err(RollError::InProgress) => {
            debug!("roll rejected: already rolling");
        }
        Err(e) => {
            warn!("roll failed: {e}");
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut roll_state: ResMut<RollState>,
    mut rng: ResMut<RollRng>,
    mut settings_state: ResMut<SettingsState>,
    analytics: Res<AnalyticsState>,
    mut started: MessageWriter<RollStartedEvent>,
    mut settings_text: Query<&mut Text, (With<SettingsText>, Without<ResultsText>)>,
) {
    // The whole window is the roll button.
    let tapped = mouse.just_pressed(MouseButton::Left)
        || keyboard.just_pressed(KeyCode::Space)
        || touches.any_just_pressed();
    if tapped {
        try_roll(&mut roll_state, &mut rng, &analytics, &mut started);
    }

    // Settings toggles; persisted and reported immediately.
    let mut changed: Option<(&'static str, bool)> = None;
    {
        let settings = &mut settings_state.store.settings;
        if keyboard.just_pressed(KeyCode::KeyS) {
            settings.sound = !settings.sound;
            changed = Some(("sound", settings.sound));
        }
        if keyboard.just_pressed(KeyCode::KeyH) {
            settings.haptics = !settings.haptics;
            changed = Some(("haptics", settings.haptics));
        }
        if keyboard.just_pressed(KeyCode::KeyK) {
            settings.shake = !settings.shake;
            changed = Some(("shake", settings.shake));
        }
    }

    if let Some((name, value)) = changed {
        if let Err(e) = settings_state.store.save() {
            warn!(
                "could not save settings to {}: {e}",
                settings_state.store.path().display()
            );
        }
        analytics.logger.log_change_settings(name, value);
        for mut text in &mut settings_text {
            text.0 = settings_line(&settings_state.store.settings);
        }
    }
}
