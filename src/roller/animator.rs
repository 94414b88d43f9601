//! Kinematic roll animation for a fixed set of dice.
//!
//! The animator owns the dice, picks a face per die, drives each die's
//! rotation toward an absolute target over a fixed duration, and reports
//! completion exactly once when every die has settled. It is deliberately
//! engine-agnostic: callers feed it elapsed time via [`RollAnimator::advance`]
//! and read orientations back out each frame, so the same animator serves
//! both the Bevy front end and the terminal one.

use std::f32::consts::TAU;

use rand::Rng;
use thiserror::Error;

use super::faces::{orientation_for_face, FaceError, Orientation};

/// Number of dice the app rolls.
pub const DIE_COUNT: usize = 2;

/// Rotation duration for the first die.
pub const FIRST_DIE_ROLL_SECS: f32 = 1.2;
/// Rotation duration for every later die. Slightly longer than the first so
/// the dice never settle in the same frame.
pub const LATER_DIE_ROLL_SECS: f32 = 1.4;

/// Depth the die lunges toward the viewer during the bounce.
pub const BOUNCE_DEPTH: f32 = 1.5;
/// Duration of each bounce half (out, then back).
pub const BOUNCE_HALF_SECS: f32 = 0.4;

// Extra full turns layered on top of the face target so the motion reads as
// a roll instead of a snap. Cosmetic only; the resting face is unaffected.
const MIN_EXTRA_SPINS: u32 = 2;
const MAX_EXTRA_SPINS: u32 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    /// A roll was requested while one was already in flight. Not a failure,
    /// just a rejected no-op.
    #[error("a roll is already in progress")]
    InProgress,

    /// A face draw fell outside 1-6. Unreachable with a correct generator.
    #[error(transparent)]
    Face(#[from] FaceError),
}

/// Starts fast, decelerates into the target.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Starts slow, accelerates. Used for the return half of the bounce.
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// In-flight animation state for one die.
#[derive(Debug, Clone)]
struct ActiveRoll {
    from: Orientation,
    target: Orientation,
    duration: f32,
    elapsed: f32,
    landed_face: u8,
}

/// One rendered die. Angles accumulate monotonically across rolls; they are
/// never wrapped back into one turn.
#[derive(Debug, Clone)]
pub struct Die {
    angles: Orientation,
    face_value: Option<u8>,
    roll: Option<ActiveRoll>,
}

impl Die {
    fn new(rng: &mut impl Rng) -> Self {
        Self {
            angles: Orientation::new(rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU)),
            face_value: None,
            roll: None,
        }
    }

    /// Current orientation, interpolated while a roll is in flight.
    pub fn orientation(&self) -> Orientation {
        match &self.roll {
            Some(roll) => {
                let t = ease_out_cubic((roll.elapsed / roll.duration).clamp(0.0, 1.0));
                Orientation::new(
                    roll.from.x + (roll.target.x - roll.from.x) * t,
                    roll.from.y + (roll.target.y - roll.from.y) * t,
                )
            }
            None => self.angles,
        }
    }

    /// Transient forward offset along the depth axis during a roll.
    pub fn depth_offset(&self) -> f32 {
        let Some(roll) = &self.roll else {
            return 0.0;
        };
        let t = roll.elapsed;
        if t < BOUNCE_HALF_SECS {
            BOUNCE_DEPTH * ease_out_cubic(t / BOUNCE_HALF_SECS)
        } else if t < BOUNCE_HALF_SECS * 2.0 {
            BOUNCE_DEPTH * (1.0 - ease_in_cubic((t - BOUNCE_HALF_SECS) / BOUNCE_HALF_SECS))
        } else {
            0.0
        }
    }

    /// Face currently showing. `None` until the die has settled its first
    /// roll (setup leaves dice at a random in-between orientation).
    pub fn face_value(&self) -> Option<u8> {
        self.face_value
    }

    pub fn is_animating(&self) -> bool {
        self.roll.is_some()
    }
}

/// Final result of one completed roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Settled face per die, in die order.
    pub faces: Vec<u8>,
}

impl RollOutcome {
    pub fn total(&self) -> u32 {
        self.faces.iter().map(|&f| u32::from(f)).sum()
    }
}

/// Orchestrates one roll across all dice.
///
/// At most one roll is ever in flight; [`RollAnimator::roll`] rejects while
/// `is_rolling` is true. Completion is tracked with a plain counter because
/// all mutation funnels through `advance` on `&mut self` - a single writer
/// by construction.
#[derive(Debug)]
pub struct RollAnimator {
    dice: Vec<Die>,
    rolling: bool,
    completed: usize,
}

impl RollAnimator {
    /// Creates `count` dice at random initial orientations.
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        Self {
            dice: (0..count).map(|_| Die::new(rng)).collect(),
            rolling: false,
            completed: 0,
        }
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Starts a roll. Returns immediately; completion is reported later by
    /// [`RollAnimator::advance`].
    ///
    /// Each die's face is drawn independently and uniformly from 1-6. The
    /// absolute rotation target is the face's resting orientation, lifted by
    /// enough whole turns to stay ahead of the die's accumulated angle, plus
    /// 2-4 extra full spins - so every roll spins strictly forward.
    pub fn roll(&mut self, rng: &mut impl Rng) -> Result<(), RollError> {
        if self.rolling {
            return Err(RollError::InProgress);
        }

        // Stage every die's target before mutating any of them, so a bad
        // face draw cannot leave the set half-started.
        let mut staged = Vec::with_capacity(self.dice.len());
        for (index, die) in self.dice.iter().enumerate() {
            let face = rng.gen_range(1..=6u8);
            let resting = orientation_for_face(face)?;
            let spins = rng.gen_range(MIN_EXTRA_SPINS..=MAX_EXTRA_SPINS) as f32 * TAU;
            let target = Orientation::new(
                resting.x + (die.angles.x / TAU).ceil() * TAU + spins,
                resting.y + (die.angles.y / TAU).ceil() * TAU + spins,
            );
            let duration = if index == 0 {
                FIRST_DIE_ROLL_SECS
            } else {
                LATER_DIE_ROLL_SECS
            };
            staged.push(ActiveRoll {
                from: die.angles,
                target,
                duration,
                elapsed: 0.0,
                landed_face: face,
            });
        }

        for (die, roll) in self.dice.iter_mut().zip(staged) {
            die.roll = Some(roll);
        }
        self.completed = 0;
        self.rolling = true;
        Ok(())
    }

    /// Advances every in-flight die by `dt` seconds.
    ///
    /// A die that reaches its duration snaps to the exact target (clearing
    /// any interpolation drift) and bumps the completion counter once. When
    /// the counter reaches the die count the roll ends: `is_rolling` clears
    /// and the outcome is returned - exactly once per roll, regardless of
    /// which die finished last.
    pub fn advance(&mut self, dt: f32) -> Option<RollOutcome> {
        if !self.rolling {
            return None;
        }

        for die in &mut self.dice {
            let Some(roll) = &mut die.roll else {
                continue;
            };
            roll.elapsed += dt;
            if roll.elapsed >= roll.duration {
                die.angles = roll.target;
                die.face_value = Some(roll.landed_face);
                die.roll = None;
                self.completed += 1;
            }
        }

        if self.completed == self.dice.len() {
            self.rolling = false;
            return Some(RollOutcome {
                faces: self.dice.iter().filter_map(Die::face_value).collect(),
            });
        }
        None
    }
}
