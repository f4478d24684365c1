//! The timecode value type.

use crate::components::Components;
use crate::convert::{components_of, frame_count_of};
use crate::error::{Result, TimecodeError};
use crate::frame_count::FrameCount;
use crate::rate::FrameRate;
use crate::timebase::{SubFramesBase, Timebase, UpperLimit};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A SMPTE timecode value.
///
/// Combines a [`Timebase`] (frame rate, upper limit, subframes base — fixed
/// at construction) with a [`Components`] payload. Normally-constructed
/// instances keep their elapsed count within
/// `0 ..= max_sub_frame_count_expressible`; instances built through a `raw`
/// path may hold denormalized components.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Timecode {
    timebase: Timebase,
    components: Components,
}

impl Timecode {
    // ── Construction ──────────────────────────────────────────────

    /// Zero timecode under the given timebase.
    pub fn zero(timebase: Timebase) -> Self {
        Self {
            timebase,
            components: Components::ZERO,
        }
    }

    /// Timecode from component values, validating every field against the
    /// timebase.
    pub fn new(components: Components, timebase: Timebase) -> Result<Self> {
        components.validate(timebase)?;
        Ok(Self {
            timebase,
            components,
        })
    }

    /// Timecode from component values, clamping the elapsed count into the
    /// valid range if necessary.
    pub fn clamping(components: Components, timebase: Timebase) -> Self {
        let fc = frame_count_of(components, timebase.rate, timebase.base);
        Self::from_frame_count_clamping(fc, timebase)
    }

    /// Timecode from component values, wrapping around the upper limit if
    /// necessary.
    pub fn wrapping(components: Components, timebase: Timebase) -> Self {
        let fc = frame_count_of(components, timebase.rate, timebase.base);
        Self::from_frame_count_wrapping(fc, timebase)
    }

    /// Timecode from raw component values with no validation.
    ///
    /// The caller opts out of the range invariant; out-of-range components
    /// are stored as-is.
    pub fn raw(components: Components, timebase: Timebase) -> Self {
        Self {
            timebase,
            components,
        }
    }

    /// Timecode from an elapsed frame count.
    ///
    /// Errors with [`TimecodeError::Overflow`] if the count lies outside the
    /// timebase's expressible range.
    pub fn from_frame_count(frame_count: FrameCount, timebase: Timebase) -> Result<Self> {
        let mut tc = Self::zero(timebase);
        tc.set_frame_count(frame_count)?;
        Ok(tc)
    }

    /// Timecode from an elapsed frame count, clamped into range.
    pub fn from_frame_count_clamping(frame_count: FrameCount, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_frame_count_clamping(frame_count);
        tc
    }

    /// Timecode from an elapsed frame count, wrapped around the upper limit.
    pub fn from_frame_count_wrapping(frame_count: FrameCount, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_frame_count_wrapping(frame_count);
        tc
    }

    /// Timecode from an elapsed frame count with no range check; counts past
    /// the upper limit overflow into the days component.
    pub fn from_frame_count_raw(frame_count: FrameCount, timebase: Timebase) -> Self {
        let mut tc = Self::zero(timebase);
        tc.set_frame_count_raw(frame_count);
        tc
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// The configured timebase.
    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Frame rate.
    pub fn rate(&self) -> FrameRate {
        self.timebase.rate
    }

    /// Upper timeline limit.
    pub fn limit(&self) -> UpperLimit {
        self.timebase.limit
    }

    /// Subframes base.
    pub fn base(&self) -> SubFramesBase {
        self.timebase.base
    }

    /// The stored component values.
    pub fn components(&self) -> Components {
        self.components
    }

    /// Mutable access to the stored components, bypassing validation.
    ///
    /// The explicit raw path: no invariant is re-checked. Use the
    /// `set_components*` family to opt back into validation.
    pub fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    /// Elapsed frame count of the stored components.
    pub fn frame_count(&self) -> FrameCount {
        frame_count_of(self.components, self.timebase.rate, self.timebase.base)
    }

    /// Highest elapsed count expressible under this timebase.
    pub fn max_frame_count_expressible(&self) -> FrameCount {
        FrameCount::from_sub_frames(self.max_sub_frame_count_expressible(), self.timebase.base)
    }

    /// Highest total subframe count expressible under this timebase.
    pub fn max_sub_frame_count_expressible(&self) -> i64 {
        self.timebase.max_sub_frame_count_expressible()
    }

    /// Whether the stored components are valid under the timebase.
    pub fn is_valid(&self) -> bool {
        self.components.first_invalid(self.timebase).is_none()
    }

    // ── Setters ───────────────────────────────────────────────────

    /// Replace the components, validating every field. The stored value is
    /// untouched on failure.
    pub fn set_components(&mut self, components: Components) -> Result<()> {
        components.validate(self.timebase)?;
        self.components = components;
        Ok(())
    }

    /// Replace the components, clamping the elapsed count into range.
    pub fn set_components_clamping(&mut self, components: Components) {
        let fc = frame_count_of(components, self.timebase.rate, self.timebase.base);
        self.set_frame_count_clamping(fc);
    }

    /// Replace the components, wrapping around the upper limit.
    pub fn set_components_wrapping(&mut self, components: Components) {
        let fc = frame_count_of(components, self.timebase.rate, self.timebase.base);
        self.set_frame_count_wrapping(fc);
    }

    /// Replace the components without validation.
    pub fn set_components_raw(&mut self, components: Components) {
        self.components = components;
    }

    /// Replace the value from an elapsed frame count. Errors on counts
    /// outside the expressible range; the stored value is untouched on
    /// failure.
    pub fn set_frame_count(&mut self, frame_count: FrameCount) -> Result<()> {
        let fc = frame_count.converted(self.timebase.base);
        let sfc = fc.sub_frame_count();
        if sfc < 0 || sfc > self.max_sub_frame_count_expressible() {
            return Err(TimecodeError::Overflow);
        }
        self.components = components_of(fc, self.timebase.rate);
        Ok(())
    }

    /// Replace the value from an elapsed frame count, clamping into range.
    pub fn set_frame_count_clamping(&mut self, frame_count: FrameCount) {
        let fc = frame_count.converted(self.timebase.base);
        let sfc = fc
            .sub_frame_count()
            .clamp(0, self.max_sub_frame_count_expressible());
        self.components =
            components_of(FrameCount::from_sub_frames(sfc, self.timebase.base), self.timebase.rate);
    }

    /// Replace the value from an elapsed frame count, wrapping around the
    /// upper limit (negative counts wrap from the top).
    pub fn set_frame_count_wrapping(&mut self, frame_count: FrameCount) {
        let fc = frame_count.converted(self.timebase.base);
        let modulus = self.timebase.max_total_sub_frames();

        let mut sfc = fc.sub_frame_count() % modulus;
        if sfc < 0 {
            sfc += modulus;
        }

        self.components =
            components_of(FrameCount::from_sub_frames(sfc, self.timebase.base), self.timebase.rate);
    }

    /// Replace the value from an elapsed frame count with no range check.
    pub fn set_frame_count_raw(&mut self, frame_count: FrameCount) {
        let fc = frame_count.converted(self.timebase.base);
        self.components = components_of(fc, self.timebase.rate);
    }
}

impl PartialEq for Timecode {
    /// Two timecodes are equal when their rates match and they denote the
    /// same elapsed count. Upper limit and subframes base are conversion
    /// context, not identity.
    fn eq(&self, other: &Self) -> bool {
        self.timebase.rate == other.timebase.rate && self.frame_count() == other.frame_count()
    }
}

impl PartialOrd for Timecode {
    /// Ordering is defined between timecodes at the same rate only.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.timebase.rate != other.timebase.rate {
            return None;
        }
        Some(self.frame_count().cmp(&other.frame_count()))
    }
}

impl fmt::Display for Timecode {
    /// `[DD ]HH:MM:SS:FF`, with `;` before the frames at drop rates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components;
        if c.days != 0 {
            write!(f, "{} ", c.days)?;
        }
        let frames_delimiter = if self.timebase.rate.is_drop() { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            c.hours, c.minutes, c.seconds, frames_delimiter, c.frames
        )
    }
}
