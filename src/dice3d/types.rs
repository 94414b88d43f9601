//! Components, resources, and messages for the 3D front end.

use bevy::prelude::*;
use rand::rngs::StdRng;

use crate::analytics::AnalyticsLogger;
use crate::roller::{RollAnimator, ShakeDetector};
use crate::settings::SettingsStore;

/// Marks a die entity and ties it back to the animator's die list.
#[derive(Component)]
pub struct DieVisual {
    pub index: usize,
    /// Resting translation; the roll bounce offsets from here along +Z.
    pub base_position: Vec3,
}

#[derive(Component)]
pub struct MainCamera;

/// HUD line showing the settled faces and total.
#[derive(Component)]
pub struct ResultsText;

/// HUD line showing the current settings toggles.
#[derive(Component)]
pub struct SettingsText;

/// Marks the entity playing the roll sound.
#[derive(Component)]
pub struct RollSound;

/// Fade-out state attached to a [`RollSound`] entity once the roll settles.
#[derive(Component)]
pub struct RollSoundFade {
    pub timer: Timer,
    pub volume: f32,
}

/// The animator behind the scene. All roll state lives here; entities only
/// mirror it visually.
#[derive(Resource)]
pub struct RollState {
    pub animator: RollAnimator,
}

/// RNG for face and spin draws. Seedable from the command line so a session
/// can be replayed.
#[derive(Resource)]
pub struct RollRng(pub StdRng);

#[derive(Resource)]
pub struct SettingsState {
    pub store: SettingsStore,
}

#[derive(Resource, Default)]
pub struct AnalyticsState {
    pub logger: AnalyticsLogger,
}

/// Shake trigger state. Desktop has no accelerometer, so acceleration is
/// estimated from pointer motion between frames.
#[derive(Resource, Default)]
pub struct ShakeInput {
    pub detector: ShakeDetector,
    pub last_velocity: Vec2,
}

/// Fired the frame a roll starts.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RollStartedEvent;

/// Fired exactly once per roll, after the last die settles.
#[derive(Message, Clone, Debug)]
pub struct RollCompletedEvent {
    /// Settled face per die, in die order.
    pub faces: Vec<u8>,
    pub total: u32,
}
