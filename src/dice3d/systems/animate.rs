//! Per-frame animation driving and result display.

use bevy::prelude::*;

use crate::dice3d::types::{DieVisual, ResultsText, RollCompletedEvent, RollState, SettingsText};

/// Advances the animator and mirrors every die's orientation and bounce
/// offset into its transform. Emits [`RollCompletedEvent`] the frame the
/// last die settles - once per roll.
pub fn animate_dice(
    time: Res<Time>,
    mut roll_state: ResMut<RollState>,
    mut dice: Query<(&DieVisual, &mut Transform)>,
    mut completed: MessageWriter<RollCompletedEvent>,
) {
    let outcome = roll_state.animator.advance(time.delta_secs());

    for (visual, mut transform) in &mut dice {
        let Some(die) = roll_state.animator.dice().get(visual.index) else {
            continue;
        };
        let orientation = die.orientation();
        transform.rotation = Quat::from_euler(EulerRot::XYZ, orientation.x, orientation.y, 0.0);
        transform.translation = visual.base_position + Vec3::Z * die.depth_offset();
    }

    if let Some(outcome) = outcome {
        let total = outcome.total();
        info!("roll settled: {:?} (total {total})", outcome.faces);
        completed.write(RollCompletedEvent {
            faces: outcome.faces,
            total,
        });
    }
}

pub fn update_results_text(
    mut events: MessageReader<RollCompletedEvent>,
    mut results_text: Query<&mut Text, (With<ResultsText>, Without<SettingsText>)>,
) {
    for ev in events.read() {
        let faces = ev
            .faces
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        for mut text in &mut results_text {
            text.0 = format!("{faces} = {}", ev.total);
        }
    }
}
