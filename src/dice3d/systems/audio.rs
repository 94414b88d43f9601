//! Roll sound playback with completion fade-out.
//!
//! The sound starts with the roll and fades out after the dice settle:
//! every 50 ms the volume drops by 10% until it falls below 0.1, then the
//! sound stops. A missing audio asset degrades to silence; the asset server
//! only warns.

use bevy::audio::{AudioPlayer, AudioSink, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::dice3d::types::{RollCompletedEvent, RollSound, RollSoundFade, RollStartedEvent, SettingsState};

const FADE_STEP_SECS: f32 = 0.05;
const FADE_STEP_FRACTION: f32 = 0.1;
const FADE_FLOOR: f32 = 0.1;

#[derive(Resource)]
pub struct RollSoundSource(pub Handle<AudioSource>);

pub fn init_roll_sound(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(RollSoundSource(asset_server.load("sounds/dice_roll.mp3")));
}

pub fn play_roll_sound(
    mut commands: Commands,
    mut started: MessageReader<RollStartedEvent>,
    settings_state: Res<SettingsState>,
    source: Res<RollSoundSource>,
    playing: Query<Entity, With<RollSound>>,
) {
    for _ in started.read() {
        if !settings_state.store.settings.sound {
            continue;
        }
        // Cancel any sound still fading from the previous roll.
        for entity in &playing {
            commands.entity(entity).despawn();
        }
        commands.spawn((
            AudioPlayer(source.0.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(1.0)),
            RollSound,
        ));
    }
}

pub fn start_roll_sound_fade(
    mut commands: Commands,
    mut completed: MessageReader<RollCompletedEvent>,
    playing: Query<Entity, (With<RollSound>, Without<RollSoundFade>)>,
) {
    for _ in completed.read() {
        for entity in &playing {
            commands.entity(entity).insert(RollSoundFade {
                timer: Timer::from_seconds(FADE_STEP_SECS, TimerMode::Repeating),
                volume: 1.0,
            });
        }
    }
}

pub fn tick_roll_sound_fade(
    mut commands: Commands,
    time: Res<Time>,
    mut fading: Query<(Entity, &mut RollSoundFade, &mut AudioSink)>,
) {
    for (entity, mut fade, mut sink) in &mut fading {
        fade.timer.tick(time.delta());
        let steps = fade.timer.times_finished_this_tick();
        if steps == 0 {
            continue;
        }
        fade.volume -= FADE_STEP_FRACTION * steps as f32;
        if fade.volume > FADE_FLOOR {
            sink.set_volume(Volume::Linear(fade.volume));
        } else {
            commands.entity(entity).despawn();
        }
    }
}
