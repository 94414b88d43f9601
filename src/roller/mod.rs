//! Engine-agnostic dice rolling core shared by the 3D and terminal front
//! ends. No rendering types leak in here; front ends read orientations and
//! depth offsets out each frame and draw them however they like.

pub mod animator;
pub mod faces;
pub mod shake;

pub use animator::{
    Die, RollAnimator, RollError, RollOutcome, BOUNCE_DEPTH, BOUNCE_HALF_SECS, DIE_COUNT,
    FIRST_DIE_ROLL_SECS, LATER_DIE_ROLL_SECS,
};
pub use faces::{orientation_for_face, FaceError, Orientation, FACE_SLOT_VALUES};
pub use shake::{ShakeDetector, SHAKE_COOLDOWN, SHAKE_THRESHOLD_G};
