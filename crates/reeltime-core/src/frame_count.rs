//! Canonical elapsed-time representation: a signed total of subframes.

use crate::timebase::SubFramesBase;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

/// A signed count of total elapsed subframes at a fixed subframes base.
///
/// Exact integer representation with no floating error; this is the canonical
/// form all conversions and arithmetic pass through. Counts at different
/// bases compare and combine by normalizing to a common base first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameCount {
    sub_frame_count: i64,
    base: SubFramesBase,
}

impl FrameCount {
    /// Count from a raw total of subframes.
    pub fn from_sub_frames(sub_frame_count: i64, base: SubFramesBase) -> Self {
        Self {
            sub_frame_count,
            base,
        }
    }

    /// Count from whole frames.
    pub fn from_frames(frames: i64, base: SubFramesBase) -> Self {
        Self::from_sub_frames(frames * base.value(), base)
    }

    /// Count from whole frames plus a subframes remainder.
    pub fn from_split(frames: i64, sub_frames: i64, base: SubFramesBase) -> Self {
        Self::from_sub_frames(frames * base.value() + sub_frames, base)
    }

    /// Count from frames with a fractional part, truncated to the nearest
    /// representable subframe.
    pub fn from_combined(frames: f64, base: SubFramesBase) -> Self {
        let whole = frames.trunc();
        let sub = ((frames - whole) * base.value() as f64).trunc() as i64;
        Self::from_split(whole as i64, sub, base)
    }

    /// Count from whole frames plus a subframes unit interval (0.0...1.0),
    /// truncated to the nearest representable subframe.
    pub fn from_unit_interval(frames: i64, unit_interval: f64, base: SubFramesBase) -> Self {
        let sub = (unit_interval * base.value() as f64).trunc() as i64;
        Self::from_split(frames, sub, base)
    }

    /// Total subframes.
    pub fn sub_frame_count(self) -> i64 {
        self.sub_frame_count
    }

    /// The subframes base this count was computed under.
    pub fn base(self) -> SubFramesBase {
        self.base
    }

    /// Whole-frame portion of the count.
    pub fn whole_frames(self) -> i64 {
        self.sub_frame_count.div_euclid(self.base.value())
    }

    /// Subframes remainder beyond the whole-frame portion.
    pub fn sub_frames(self) -> i64 {
        self.sub_frame_count.rem_euclid(self.base.value())
    }

    /// The count as fractional frames.
    pub fn as_f64(self) -> f64 {
        self.sub_frame_count as f64 / self.base.value() as f64
    }

    /// Re-express the count at another base.
    ///
    /// Exact when the counts divide evenly; otherwise rounds down to the
    /// next subframe at the target base, consistent with the Euclidean
    /// splitting used by `whole_frames` and `sub_frames`.
    pub fn converted(self, base: SubFramesBase) -> Self {
        if base == self.base {
            return self;
        }
        Self::from_sub_frames(
            (self.sub_frame_count * base.value()).div_euclid(self.base.value()),
            base,
        )
    }
}

impl PartialEq for FrameCount {
    fn eq(&self, other: &Self) -> bool {
        // cross-multiply to compare without converting either operand
        self.sub_frame_count * other.base.value() == other.sub_frame_count * self.base.value()
    }
}

impl Eq for FrameCount {}

impl PartialOrd for FrameCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameCount {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.sub_frame_count * other.base.value())
            .cmp(&(other.sub_frame_count * self.base.value()))
    }
}

impl Add for FrameCount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let rhs = rhs.converted(self.base);
        Self::from_sub_frames(self.sub_frame_count + rhs.sub_frame_count, self.base)
    }
}

impl Sub for FrameCount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let rhs = rhs.converted(self.base);
        Self::from_sub_frames(self.sub_frame_count - rhs.sub_frame_count, self.base)
    }
}

impl Mul<i64> for FrameCount {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Self::from_sub_frames(self.sub_frame_count * rhs, self.base)
    }
}

impl Div<i64> for FrameCount {
    type Output = Self;
    fn div(self, rhs: i64) -> Self {
        Self::from_sub_frames(self.sub_frame_count / rhs, self.base)
    }
}
