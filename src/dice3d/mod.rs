//! Bevy front end: a thin adapter over the roller core that owns the scene,
//! input, sound, haptics, and HUD.

pub mod face_textures;
pub mod systems;
pub mod types;

pub use face_textures::*;
pub use systems::*;
pub use types::*;

use bevy::prelude::*;

pub struct SimplyDicePlugin;

impl Plugin for SimplyDicePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RollStartedEvent>()
            .add_message::<RollCompletedEvent>()
            .init_resource::<ShakeInput>()
            .insert_resource(ClearColor(Color::srgb(0.10, 0.12, 0.18)))
            .add_systems(Startup, (setup, init_roll_sound))
            .add_systems(
                Update,
                (
                    handle_input,
                    detect_shake.after(handle_input),
                    animate_dice.after(detect_shake),
                    update_results_text.after(animate_dice),
                    play_roll_sound.after(detect_shake),
                    start_roll_sound_fade.after(animate_dice),
                    tick_roll_sound_fade.after(start_roll_sound_fade),
                    pulse_haptics.after(animate_dice),
                ),
            );
    }
}
