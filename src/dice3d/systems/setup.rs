//! Scene and HUD setup.

use bevy::prelude::*;

use crate::dice3d::face_textures::{build_die_mesh, build_pip_atlas, DIE_SIZE};
use crate::dice3d::types::{DieVisual, MainCamera, ResultsText, RollState, SettingsState, SettingsText};
use crate::settings::Settings;

/// Resting translation for die `index`: stacked vertically around the origin.
pub fn die_position(index: usize) -> Vec3 {
    Vec3::new(0.0, 1.2 - 2.4 * index as f32, 0.0)
}

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    roll_state: Res<RollState>,
    settings_state: Res<SettingsState>,
) {
    // Camera - narrow fov straight down the z axis, framing both dice.
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Lighting: soft ambient plus a key directional and a cool fill point.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 1_000_000.0,
            range: 40.0,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, 5.0),
    ));

    // Both dice share one pip atlas and one mesh.
    let atlas = images.add(build_pip_atlas());
    let mesh = meshes.add(build_die_mesh(DIE_SIZE));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(atlas),
        perceptual_roughness: 0.4,
        ..default()
    });

    for (index, die) in roll_state.animator.dice().iter().enumerate() {
        let base_position = die_position(index);
        let orientation = die.orientation();
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(base_position).with_rotation(Quat::from_euler(
                EulerRot::XYZ,
                orientation.x,
                orientation.y,
                0.0,
            )),
            DieVisual {
                index,
                base_position,
            },
        ));
    }

    // HUD
    commands.spawn((
        Text::new("Tap to roll"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        ResultsText,
    ));
    commands.spawn((
        Text::new(settings_line(&settings_state.store.settings)),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.75)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        SettingsText,
    ));
}

pub fn settings_line(settings: &Settings) -> String {
    fn state(on: bool) -> &'static str {
        if on {
            "on"
        } else {
            "off"
        }
    }
    format!(
        "[S]ound {}   [H]aptics {}   Sha[k]e {}",
        state(settings.sound),
        state(settings.haptics),
        state(settings.shake),
    )
}
