//! Rational-fraction interchange.
//!
//! Some file formats encode time locations as a fraction of two integers
//! (FCPXML encodes both video rate and positions this way; AAF encodes the
//! rate). Both directions are exact integer arithmetic: no rounding bias is
//! needed, and precision loss can only come from a caller passing a fraction
//! that is not an integer multiple of the frame duration.

use crate::error::Result;
use crate::frame_count::FrameCount;
use crate::timebase::Timebase;
use crate::timecode::Timecode;
use num_rational::Rational64;

impl Timecode {
    /// The time location as a reduced fraction of elapsed seconds.
    ///
    /// Whole frames only; subframes do not participate in rational
    /// interchange.
    pub fn rational(&self) -> Rational64 {
        let duration = self.rate().frame_duration();
        Rational64::new(
            duration.numer() * self.frame_count().whole_frames(),
            *duration.denom(),
        )
    }

    /// Whole-frame count denoted by a rational number of elapsed seconds at
    /// this timecode's rate. Truncates toward zero when the fraction does not
    /// land on a frame boundary.
    fn rational_frame_count(&self, rational: Rational64) -> i64 {
        let duration = self.rate().frame_duration();
        (rational.numer() * duration.denom()) / (rational.denom() * duration.numer())
    }

    /// Set the timecode from a rational number of elapsed seconds. Errors if
    /// the time lies outside the representable range; the stored value is
    /// untouched on failure.
    pub fn set_rational(&mut self, rational: Rational64) -> Result<()> {
        let frames = self.rational_frame_count(rational);
        self.set_frame_count(FrameCount::from_frames(frames, self.base()))
    }

    /// Set the timecode from a rational number of elapsed seconds, clamping
    /// into range.
    pub fn set_rational_clamping(&mut self, rational: Rational64) {
        let frames = self.rational_frame_count(rational);
        self.set_frame_count_clamping(FrameCount::from_frames(frames, self.base()));
    }

    /// Set the timecode from a rational number of elapsed seconds, wrapping
    /// around the upper limit.
    pub fn set_rational_wrapping(&mut self, rational: Rational64) {
        let frames = self.rational_frame_count(rational);
        self.set_frame_count_wrapping(FrameCount::from_frames(frames, self.base()));
    }

    /// Set the timecode from a rational number of elapsed seconds with no
    /// range check; times past the upper limit overflow into the days
    /// component.
    pub fn set_rational_raw(&mut self, rational: Rational64) {
        let frames = self.rational_frame_count(rational);
        self.set_frame_count_raw(FrameCount::from_frames(frames, self.base()));
    }

    /// Timecode from a rational number of elapsed seconds.
    pub fn from_rational(rational: Rational64, timebase: Timebase) -> Result<Self> {
        let mut tc = Self::zero(timebase);
        tc.set_rational(rational)?;
        Ok(tc)
    }

    /// Timecode from a rational number of elapsed seconds, clamped into
    /// range.
    pub fn from_rational_clamping(rational: Rational64, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_rational_clamping(rational);
        tc
    }

    /// Timecode from a rational number of elapsed seconds, wrapped around the
    /// upper limit.
    pub fn from_rational_wrapping(rational: Rational64, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_rational_wrapping(rational);
        tc
    }

    /// Timecode from a rational number of elapsed seconds with no range
    /// check.
    pub fn from_rational_raw(rational: Rational64, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_rational_raw(rational);
        tc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Components;
    use crate::rate::FrameRate;

    fn frac(n: i64, d: i64) -> Rational64 {
        Rational64::new(n, d)
    }

    #[test]
    fn rational_value_fixture_23_976() {
        let tc = Timecode::new(
            Components::hmsf(0, 0, 13, 23),
            Timebase::new(FrameRate::Fps23_976),
        )
        .unwrap();

        assert_eq!(tc.rational(), frac(335_335, 24_000));
    }

    #[test]
    fn fcp_xml_fixtures_per_rate() {
        // fractions taken from real FCP XML files as known truth
        let cases: &[(FrameRate, i64, i64, Components)] = &[
            (FrameRate::Fps23_976, 335_335, 24_000, Components::hmsf(0, 0, 13, 23)),
            (FrameRate::Fps24, 167_500, 12_000, Components::hmsf(0, 0, 13, 23)),
            (FrameRate::Fps25, 34_900, 2_500, Components::hmsf(0, 0, 13, 24)),
            (FrameRate::Fps29_97, 838_838, 60_000, Components::hmsf(0, 0, 13, 29)),
            (FrameRate::Fps29_97, 1_920_919, 30_000, Components::hmsf(0, 1, 3, 29)),
            (FrameRate::Fps29_97Drop, 419_419, 30_000, Components::hmsf(0, 0, 13, 29)),
            (FrameRate::Fps29_97Drop, 1_918_917, 30_000, Components::hmsf(0, 1, 3, 29)),
            (FrameRate::Fps30, 83_800, 6_000, Components::hmsf(0, 0, 13, 29)),
            (FrameRate::Fps50, 69_900, 5_000, Components::hmsf(0, 0, 13, 49)),
            (FrameRate::Fps59_94, 839_839, 60_000, Components::hmsf(0, 0, 13, 59)),
            (FrameRate::Fps60, 83_900, 6_000, Components::hmsf(0, 0, 13, 59)),
        ];

        for &(rate, n, d, expected) in cases {
            let tc = Timecode::from_rational(frac(n, d), Timebase::new(rate)).unwrap();
            assert_eq!(tc.components(), expected, "at {rate} for {n}/{d}");
        }
    }

    #[test]
    fn rational_round_trip() {
        let tc = Timecode::new(
            Components::hmsf(1, 2, 3, 4),
            Timebase::new(FrameRate::Fps29_97Drop),
        )
        .unwrap();

        let back = Timecode::from_rational(tc.rational(), tc.timebase()).unwrap();
        assert_eq!(back, tc);
    }

    #[test]
    fn clamping_saturates() {
        // 25 hours at 24 fps under a 24-hour limit
        let tc = Timecode::from_rational_clamping(
            frac(86_400 + 3_600, 1),
            Timebase::new(FrameRate::Fps24),
        );
        assert_eq!(
            tc.components(),
            Components::hmsf(23, 59, 59, 23).with_sub_frames(79)
        );
    }

    #[test]
    fn wrapping_reduces() {
        let tc = Timecode::from_rational_wrapping(
            frac(86_400 + 3_600, 1),
            Timebase::new(FrameRate::Fps24),
        );
        assert_eq!(tc.components(), Components::hmsf(1, 0, 0, 0));
    }

    #[test]
    fn raw_overflows_into_days() {
        let tc = Timecode::from_rational_raw(
            frac(86_400 * 2 + 3_600, 1),
            Timebase::new(FrameRate::Fps24),
        );
        assert_eq!(tc.components(), Components::dhmsf(2, 1, 0, 0, 0));
    }
}
