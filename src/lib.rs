//! Simply Dice: a casual two-die roller.
//!
//! The [`roller`] module is the engine-agnostic core - face mapping, roll
//! animation, completion tracking, and shake detection. The [`dice3d`]
//! module adapts it to Bevy; the `simply-dice-cli` workspace crate adapts
//! the same core to the terminal.

pub mod analytics;
pub mod dice3d;
pub mod roller;
pub mod settings;
