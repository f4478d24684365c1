//! Wall-clock (real time) interchange.

use crate::error::Result;
use crate::frame_count::FrameCount;
use crate::timebase::Timebase;
use crate::timecode::Timecode;

/// Bias added when producing seconds so the result lands at or just past the
/// true frame boundary, never a hair short of it. A value exactly at a
/// boundary must not round down into the previous frame when converted back.
const SECONDS_OUT_BIAS: f64 = 0.000_000_01;

/// Bias added to the elapsed-frames product when consuming seconds, sized to
/// absorb accumulated floating error across 100-day-scale elapsed times.
const FRAMES_IN_BIAS: f64 = 0.000_000_6;

impl Timecode {
    /// Elapsed wall-clock seconds equivalent of this timecode (lossy).
    ///
    /// Uses the rate's real-time conversion speed: drop displays and
    /// fractional rates run at NTSC speed, whole non-drop rates at their
    /// nominal speed.
    pub fn real_time(&self) -> f64 {
        self.frame_count().as_f64() * (1.0 / self.rate().real_time_rate()) + SECONDS_OUT_BIAS
    }

    /// Set this timecode to the nearest frame at the given elapsed wall-clock
    /// seconds. Errors if the time lies outside the representable range; the
    /// stored value is untouched on failure.
    pub fn set_real_time(&mut self, seconds: f64) -> Result<()> {
        let elapsed_frames = seconds * self.rate().real_time_rate() + FRAMES_IN_BIAS;

        let whole = elapsed_frames.trunc();
        let sub_frames = ((elapsed_frames - whole) * self.base().value() as f64).trunc();

        self.set_frame_count(FrameCount::from_split(
            whole as i64,
            sub_frames as i64,
            self.base(),
        ))
    }

    /// Timecode from elapsed wall-clock seconds.
    pub fn from_real_time(seconds: f64, timebase: Timebase) -> Result<Self> {
        let mut tc = Self::zero(timebase);
        tc.set_real_time(seconds)?;
        Ok(tc)
    }
}
