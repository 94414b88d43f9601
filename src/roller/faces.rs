//! Face-to-orientation mapping for a standard d6.
//!
//! A die's orientation is expressed as two rotation angles, about the x and
//! y axes; the z angle stays fixed at zero. Each face value 1-6 has exactly
//! one resting orientation, and opposite faces (which sum to 7 on a standard
//! die) sit 180 degrees apart about one axis.

use std::f32::consts::{FRAC_PI_2, PI};

use thiserror::Error;

/// Rotation about the x and y axes, in radians. The z angle is always zero.
///
/// Angles accumulate across rolls and are never wrapped, so a die always
/// spins forward from wherever it currently rests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
}

impl Orientation {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaceError {
    #[error("face value out of range 1-6: {0}")]
    InvalidFaceValue(u8),
}

/// Face values assigned to the six cuboid face slots, in +X, -X, +Y, -Y,
/// +Z, -Z order.
///
/// This assignment and [`orientation_for_face`] are co-designed: the
/// orientation for face N presents the slot carrying N toward the viewer
/// (+Z). Changing either side without the other makes dice land showing the
/// wrong value, so both live in this module. Opposite slots carry values
/// summing to 7, matching a physical die.
pub const FACE_SLOT_VALUES: [u8; 6] = [1, 6, 2, 5, 3, 4];

/// Returns the resting orientation that shows `face` toward the viewer.
///
/// Fails with [`FaceError::InvalidFaceValue`] for anything outside 1-6
/// rather than falling back to an identity rotation.
pub fn orientation_for_face(face: u8) -> Result<Orientation, FaceError> {
    let orientation = match face {
        1 => Orientation::new(0.0, -FRAC_PI_2),
        2 => Orientation::new(FRAC_PI_2, 0.0),
        3 => Orientation::new(0.0, 0.0),
        4 => Orientation::new(PI, 0.0),
        5 => Orientation::new(-FRAC_PI_2, 0.0),
        6 => Orientation::new(0.0, FRAC_PI_2),
        other => return Err(FaceError::InvalidFaceValue(other)),
    };
    Ok(orientation)
}
