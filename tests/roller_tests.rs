//! Tests for the face map and the roll animator.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::SeedableRng;

use simply_dice::roller::{
    orientation_for_face, FaceError, RollAnimator, RollError, RollOutcome, DIE_COUNT,
    FIRST_DIE_ROLL_SECS, LATER_DIE_ROLL_SECS,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn finish_roll(animator: &mut RollAnimator) -> RollOutcome {
    for _ in 0..1000 {
        if let Some(outcome) = animator.advance(0.05) {
            return outcome;
        }
    }
    panic!("roll never completed");
}

#[test]
fn face_orientations_are_pairwise_distinct() {
    let orientations: Vec<_> = (1..=6)
        .map(|f| orientation_for_face(f).expect("valid face"))
        .collect();
    for i in 0..6 {
        for j in (i + 1)..6 {
            assert_ne!(
                orientations[i], orientations[j],
                "faces {} and {} share an orientation",
                i + 1,
                j + 1
            );
        }
    }
}

#[test]
fn opposite_faces_differ_by_half_turn_about_one_axis() {
    for (a, b) in [(1u8, 6u8), (2, 5), (3, 4)] {
        let oa = orientation_for_face(a).expect("valid face");
        let ob = orientation_for_face(b).expect("valid face");
        let dx = (oa.x - ob.x).abs();
        let dy = (oa.y - ob.y).abs();
        let x_flipped = (dx - PI).abs() < 1e-6 && dy < 1e-6;
        let y_flipped = (dy - PI).abs() < 1e-6 && dx < 1e-6;
        assert!(
            x_flipped || y_flipped,
            "faces {a}/{b} are not a half turn apart: dx={dx}, dy={dy}"
        );
    }
}

#[test]
fn out_of_range_faces_are_rejected() {
    for face in [0u8, 7, 13, 255] {
        assert_eq!(
            orientation_for_face(face),
            Err(FaceError::InvalidFaceValue(face))
        );
    }
}

#[test]
fn accumulated_angles_never_decrease_across_rolls() {
    let mut rng = rng(7);
    let mut animator = RollAnimator::new(DIE_COUNT, &mut rng);
    let mut previous: Vec<_> = animator.dice().iter().map(|d| d.orientation()).collect();

    for _ in 0..50 {
        animator.roll(&mut rng).expect("roll accepted while idle");
        finish_roll(&mut animator);
        for (die, prev) in animator.dice().iter().zip(&previous) {
            let now = die.orientation();
            assert!(now.x > prev.x, "x angle went backward: {} -> {}", prev.x, now.x);
            assert!(now.y > prev.y, "y angle went backward: {} -> {}", prev.y, now.y);
        }
        previous = animator.dice().iter().map(|d| d.orientation()).collect();
    }
}

#[test]
fn roll_is_rejected_while_one_is_in_flight() {
    let mut rng = rng(11);
    let mut animator = RollAnimator::new(DIE_COUNT, &mut rng);

    animator.roll(&mut rng).expect("first roll accepted");
    assert!(animator.is_rolling());
    animator.advance(0.3);

    let snapshot: Vec<_> = animator.dice().iter().map(|d| d.orientation()).collect();
    assert_eq!(animator.roll(&mut rng), Err(RollError::InProgress));

    // Rejection must not touch die state or restart timers.
    assert!(animator.is_rolling());
    let after: Vec<_> = animator.dice().iter().map(|d| d.orientation()).collect();
    assert_eq!(snapshot, after);

    // Only one outcome is ever produced for the period.
    finish_roll(&mut animator);
    assert!(!animator.is_rolling());
    assert_eq!(animator.advance(0.05), None);
}

#[test]
fn completion_fires_once_after_the_slowest_die() {
    let mut rng = rng(23);
    let mut animator = RollAnimator::new(DIE_COUNT, &mut rng);
    animator.roll(&mut rng).expect("roll accepted");
    assert!(animator.is_rolling());

    // t = 0.61: both dice still animating.
    assert_eq!(animator.advance(0.61), None);
    assert!(animator.dice().iter().all(|d| d.is_animating()));

    // t = 1.22: the 1.2 s die has settled, the 1.4 s die has not, and the
    // barrier must not have fired.
    assert_eq!(animator.advance(0.61), None);
    assert!(!animator.dice()[0].is_animating());
    assert!(animator.dice()[1].is_animating());
    assert!(animator.is_rolling());

    // t = 1.42: the last die settles; the outcome fires exactly once.
    let outcome = animator.advance(0.2).expect("barrier reached");
    assert!(!animator.is_rolling());
    assert_eq!(outcome.faces.len(), DIE_COUNT);
    assert!(outcome.faces.iter().all(|&f| (1..=6).contains(&f)));
    assert_eq!(animator.advance(0.05), None);
}

#[test]
fn settled_orientation_matches_the_face_map_modulo_full_turns() {
    let mut rng = rng(31);
    let mut animator = RollAnimator::new(DIE_COUNT, &mut rng);

    for _ in 0..20 {
        animator.roll(&mut rng).expect("roll accepted");
        let outcome = finish_roll(&mut animator);
        for (die, &face) in animator.dice().iter().zip(&outcome.faces) {
            assert_eq!(die.face_value(), Some(face));
            let resting = orientation_for_face(face).expect("valid face");
            let settled = die.orientation();
            for (angle, base) in [(settled.x, resting.x), (settled.y, resting.y)] {
                let turns = (angle - base) / TAU;
                assert!(
                    (turns - turns.round()).abs() < 1e-3,
                    "angle {angle} is not {base} plus whole turns"
                );
            }
        }
    }
}

#[test]
fn single_die_faces_are_uniform() {
    let mut rng = rng(42);
    let mut animator = RollAnimator::new(1, &mut rng);
    let mut counts = [0u32; 6];

    const ROLLS: u32 = 6000;
    for _ in 0..ROLLS {
        animator.roll(&mut rng).expect("roll accepted");
        let outcome = animator
            .advance(FIRST_DIE_ROLL_SECS + 0.01)
            .expect("single die settles in one tick");
        counts[usize::from(outcome.faces[0] - 1)] += 1;
    }

    // Expected 1000 per face; +/-150 is over five standard deviations.
    for (i, &count) in counts.iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "face {} drawn {count} times out of {ROLLS}",
            i + 1
        );
    }
}

#[test]
fn later_dice_finish_after_the_first() {
    assert!(LATER_DIE_ROLL_SECS > FIRST_DIE_ROLL_SECS);
}
