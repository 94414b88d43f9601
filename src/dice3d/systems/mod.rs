pub mod animate;
pub mod audio;
pub mod haptics;
pub mod input;
pub mod setup;
pub mod shake;

pub use animate::{animate_dice, update_results_text};
pub use audio::{init_roll_sound, play_roll_sound, start_roll_sound_fade, tick_roll_sound_fade};
pub use haptics::pulse_haptics;
pub use input::handle_input;
pub use setup::setup;
pub use shake::detect_shake;
