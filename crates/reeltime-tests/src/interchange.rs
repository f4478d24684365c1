//! Integration tests for interchange paths.
//!
//! Drives whole export-style pipelines: component values out to wall-clock
//! seconds, rational fractions, footage counters and JSON, and back in again.

use num_rational::Rational64;
use reeltime_core::{
    Components, FrameRate, SubFramesBase, Timebase, Timecode, UpperLimit,
};
use reeltime_interop::{FeetAndFrames, Transformer};

// ── Wall-clock seconds ─────────────────────────────────────────

#[test]
fn ten_day_wall_clock_per_rate_family() {
    let accuracy = 0.000_000_1;
    let cases = [
        (FrameRate::Fps30, 864_000.000),
        (FrameRate::Fps29_97, 864_864.000),
        (FrameRate::Fps29_97Drop, 863_999.136),
    ];

    for (rate, expected) in cases {
        let tb = Timebase::new(rate).with_limit(UpperLimit::Max100Days);
        let tc = Timecode::new(Components::dhmsf(10, 0, 0, 0, 0), tb).unwrap();

        let got = tc.real_time();
        assert!(
            (got - expected).abs() < accuracy,
            "at {rate}: got {got}, expected {expected}"
        );

        let back = Timecode::from_real_time(expected, tb).unwrap();
        assert_eq!(back.components(), Components::dhmsf(10, 0, 0, 0, 0), "at {rate}");
    }
}

#[test]
fn wall_clock_round_trip_survives_an_offset() {
    let tb = Timebase::new(FrameRate::Fps59_94Drop);
    let origin = Timecode::new(Components::hmsf(0, 59, 58, 10), tb).unwrap();
    let dest = Timecode::new(Components::hmsf(1, 0, 2, 30), tb).unwrap();

    let shifted = Transformer::offset(origin.interval_to(&dest))
        .apply(Timecode::new(Components::hmsf(10, 0, 0, 0), tb).unwrap());

    let back = Timecode::from_real_time(shifted.real_time(), tb).unwrap();
    assert_eq!(back, shifted);
}

// ── Rational fractions ─────────────────────────────────────────

#[test]
fn rational_cut_list_round_trip() {
    // edit points as they would appear in an FCP XML event
    let tb = Timebase::new(FrameRate::Fps23_976);
    let tc = Timecode::new(Components::hmsf(0, 0, 13, 23), tb).unwrap();

    assert_eq!(tc.rational(), Rational64::new(335_335, 24_000));

    let back = Timecode::from_rational(Rational64::new(335_335, 24_000), tb).unwrap();
    assert_eq!(back, tc);
}

#[test]
fn rational_interchange_is_exact_where_seconds_are_lossy() {
    let tb = Timebase::new(FrameRate::Fps29_97Drop);

    for minutes in [0, 1, 9, 10, 59] {
        let tc = Timecode::new(
            Components::hmsf(0, minutes, 30, if minutes % 10 == 0 { 0 } else { 2 }),
            tb,
        )
        .unwrap();

        let back = Timecode::from_rational(tc.rational(), tb).unwrap();
        assert_eq!(back, tc, "at minute {minutes}");
    }
}

// ── Footage counters ───────────────────────────────────────────

#[test]
fn footage_tracks_arithmetic() {
    let tb = Timebase::new(FrameRate::Fps24);
    let tc = Timecode::new(Components::hmsf(0, 1, 0, 0), tb).unwrap();

    assert_eq!(FeetAndFrames::from(&tc).to_string(), "90+00");

    let later = tc.checked_add(Components::hmsf(0, 0, 0, 5)).unwrap();
    let ff = FeetAndFrames::from(&later);
    assert_eq!(ff, FeetAndFrames { feet: 90, frames: 5 });
    assert_eq!(ff.total_frames(), later.frame_count().whole_frames());
}

#[test]
fn footage_ignores_drop_frame_display() {
    // a footage counter follows the raw tally, so drop and non-drop
    // displays of the same elapsed count read the same
    let c = Components::hmsf(1, 2, 3, 4);
    let drop = Timecode::new(c, Timebase::new(FrameRate::Fps29_97Drop)).unwrap();
    let plain = Timecode::new(c, Timebase::new(FrameRate::Fps30)).unwrap();

    assert_eq!(
        FeetAndFrames::from(&drop).total_frames(),
        drop.frame_count().whole_frames()
    );
    assert!(FeetAndFrames::from(&drop).total_frames() < FeetAndFrames::from(&plain).total_frames());
}

// ── Serialization ──────────────────────────────────────────────

#[test]
fn json_round_trip_preserves_timebase_and_subframes() {
    let tc = Timecode::new(
        Components::dhmsf(2, 3, 4, 5, 6).with_sub_frames(42),
        Timebase::new(FrameRate::Fps119_88Drop)
            .with_limit(UpperLimit::Max100Days)
            .with_base(SubFramesBase::SubFrames100),
    )
    .unwrap();

    let json = serde_json::to_string(&tc).unwrap();
    let back: Timecode = serde_json::from_str(&json).unwrap();

    assert_eq!(back.timebase(), tc.timebase());
    assert_eq!(back.components(), tc.components());
    assert_eq!(back, tc);
}

#[test]
fn rate_serializes_to_its_display_name() {
    let json = serde_json::to_string(&FrameRate::Fps29_97Drop).unwrap();
    assert_eq!(json, "\"29.97d\"");

    let back: FrameRate = serde_json::from_str("\"23.976\"").unwrap();
    assert_eq!(back, FrameRate::Fps23_976);
}
