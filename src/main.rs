// Hide console window on Windows for release builds (GUI app).
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use simply_dice::analytics::AnalyticsLogger;
use simply_dice::dice3d::{AnalyticsState, RollRng, RollState, SettingsState, SimplyDicePlugin};
use simply_dice::roller::{RollAnimator, DIE_COUNT};
use simply_dice::settings::SettingsStore;

/// Simply Dice - a casual two-die roller
#[derive(Parser)]
#[command(name = "simply-dice")]
#[command(author, version, about = "Simply Dice - tap or shake to roll two dice")]
struct Cli {
    /// Path to the settings JSON file
    #[arg(long, default_value = "settings.json")]
    settings_file: PathBuf,

    /// Start from default settings, ignoring any saved file
    #[arg(long)]
    reset_settings: bool,

    /// Append analytics events to this file (JSON lines)
    #[arg(long)]
    analytics_file: Option<PathBuf>,

    /// Seed the roll RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let store = if cli.reset_settings {
        SettingsStore::with_defaults(&cli.settings_file)
    } else {
        SettingsStore::load(&cli.settings_file)
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let animator = RollAnimator::new(DIE_COUNT, &mut rng);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Simply Dice".to_string(),
                        resolution: (430u32, 800u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error".to_string(),
                    ..default()
                }),
        )
        .insert_resource(RollState { animator })
        .insert_resource(RollRng(rng))
        .insert_resource(SettingsState { store })
        .insert_resource(AnalyticsState {
            logger: AnalyticsLogger::new(cli.analytics_file),
        })
        .add_plugins(SimplyDicePlugin)
        .run();
}
