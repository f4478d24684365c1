//! Integration tests for timecode arithmetic.
//!
//! Exercises the policy engine, intervals and transformers together across
//! reeltime-core and reeltime-interop.

use reeltime_core::{
    Components, FrameRate, Sign, SubFramesBase, Timebase, Timecode, TimecodeError, UpperLimit,
};
use reeltime_interop::{Transform, Transformer};

// ── Helpers ────────────────────────────────────────────────────

fn at_30(c: Components) -> Timecode {
    Timecode::new(c, Timebase::new(FrameRate::Fps30)).unwrap()
}

fn frames(f: i32) -> Components {
    Components::hmsf(0, 0, 0, f)
}

// ── Operator scenarios ─────────────────────────────────────────

#[test]
fn frame_accumulator_wraps_backward_past_zero() {
    let mut tc = at_30(Components::ZERO);

    tc = tc + at_30(frames(5));
    assert_eq!(tc.components(), frames(5));

    tc = tc - at_30(frames(4));
    assert_eq!(tc.components(), frames(1));

    tc = tc - at_30(frames(4));
    assert_eq!(tc.components(), Components::hmsf(23, 59, 59, 27));
}

#[test]
fn one_hour_times_thirty_wraps_to_six_hours() {
    let tc = at_30(Components::hmsf(1, 0, 0, 0));
    assert_eq!(
        tc.wrapping_mul(30.0).components(),
        Components::hmsf(6, 0, 0, 0)
    );
}

#[test]
fn adding_one_full_modulus_equals_adding_one_sub_frame_count() {
    let tc = at_30(Components::hmsf(7, 7, 7, 7));
    let modulus = tc.timebase().max_total_sub_frames();

    let mut wrapped_full = tc;
    wrapped_full.set_frame_count_wrapping(reeltime_core::FrameCount::from_sub_frames(
        tc.frame_count().sub_frame_count() + modulus + 1,
        tc.base(),
    ));

    let mut wrapped_one = tc;
    wrapped_one.set_frame_count_wrapping(reeltime_core::FrameCount::from_sub_frames(
        tc.frame_count().sub_frame_count() + 1,
        tc.base(),
    ));

    assert_eq!(wrapped_full, wrapped_one);
}

#[test]
fn policy_agreement_across_every_rate() {
    let dur = Components::hmsf(0, 10, 30, 3);

    for rate in FrameRate::ALL {
        let tb = Timebase::new(rate);
        let tc = Timecode::new(Components::hmsf(12, 0, 0, 0), tb).unwrap();

        let exact = tc.checked_add(dur).unwrap();
        assert_eq!(exact, tc.saturating_add(dur), "add at {rate}");
        assert_eq!(exact, tc.wrapping_add(dur), "add at {rate}");

        let exact = tc.checked_sub(dur).unwrap();
        assert_eq!(exact, tc.saturating_sub(dur), "sub at {rate}");
        assert_eq!(exact, tc.wrapping_sub(dur), "sub at {rate}");
    }
}

#[test]
fn exact_construction_and_arithmetic_reject_rather_than_adjust() {
    let tb = Timebase::new(FrameRate::Fps29_97Drop);

    // dropped code: 00:01:00;00 does not exist
    assert!(matches!(
        Timecode::new(Components::hmsf(0, 1, 0, 0), tb),
        Err(TimecodeError::InvalidComponent(_))
    ));

    // but arithmetic lands past it transparently
    let tc = Timecode::new(Components::hmsf(0, 0, 59, 29), tb).unwrap();
    let next = tc.checked_add(frames(1)).unwrap();
    assert_eq!(next.components(), Components::hmsf(0, 1, 0, 2));
}

// ── Intervals and transformers ─────────────────────────────────

#[test]
fn interval_feeds_transformer_offset() {
    let origin = at_30(Components::hmsf(1, 0, 0, 0));
    let dest = at_30(Components::hmsf(1, 30, 0, 0));

    let transformer = Transformer::offset(origin.interval_to(&dest));

    // the same offset applied elsewhere on the timeline
    let out = transformer.apply(at_30(Components::hmsf(10, 0, 0, 0)));
    assert_eq!(out.components(), Components::hmsf(10, 30, 0, 0));
}

#[test]
fn negative_interval_through_transformer_wraps() {
    let origin = at_30(Components::hmsf(2, 0, 0, 0));
    let dest = at_30(Components::hmsf(1, 0, 0, 0));

    let interval = origin.interval_to(&dest);
    assert_eq!(interval.sign(), Sign::Negative);

    let transformer = Transformer::offset(interval);
    let out = transformer.apply(at_30(Components::ZERO));
    assert_eq!(out.components(), Components::hmsf(23, 0, 0, 0));
}

#[test]
fn custom_transform_composes_with_policies() {
    let transformer = Transformer::custom(|input| {
        input.saturating_add(Components::hmsf(1, 0, 0, 0))
    });

    let out = transformer.apply(at_30(Components::hmsf(23, 30, 0, 0)));
    assert_eq!(
        out.components(),
        Components::hmsf(23, 59, 59, 29).with_sub_frames(79)
    );

    let mut bypassed = Transformer::new(Transform::Identity);
    bypassed.enabled = false;
    let input = at_30(Components::hmsf(3, 0, 0, 0));
    assert_eq!(bypassed.apply(input), input);
}

#[test]
fn interval_survives_base_and_limit_differences() {
    let tb = Timebase::new(FrameRate::Fps29_97Drop)
        .with_limit(UpperLimit::Max100Days)
        .with_base(SubFramesBase::SubFrames100);

    let origin = Timecode::new(Components::dhmsf(3, 4, 5, 6, 7), tb).unwrap();
    let dest = Timecode::new(Components::dhmsf(50, 1, 2, 3, 4), tb).unwrap();

    let interval = origin.interval_to(&dest);
    assert_eq!(interval.apply_to(&origin), dest);

    let back = dest.interval_to(&origin);
    assert!(back.is_negative());
    assert_eq!(back.apply_to(&dest), origin);
}
