//! Per-instance timecode configuration: subframes base, upper limit, and the
//! `Timebase` value aggregating them with a frame rate.

use crate::rate::FrameRate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subframes base (divisor): how many subframe units compose one frame.
///
/// There is no industry standard; Cubase/Nuendo and Logic Pro use 80
/// subframes per frame (visible range 00...79), Pro Tools uses 100.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubFramesBase {
    /// 80 subframes per frame.
    #[default]
    SubFrames80,
    /// 100 subframes per frame.
    SubFrames100,
}

impl SubFramesBase {
    /// The divisor as an integer.
    pub fn value(self) -> i64 {
        match self {
            SubFramesBase::SubFrames80 => 80,
            SubFramesBase::SubFrames100 => 100,
        }
    }
}

/// Maximum representable timeline extent.
///
/// Defines the modulus used by wrapping arithmetic and the range validated by
/// exact arithmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpperLimit {
    /// Rolls over every 24 hours. The days component must stay zero.
    #[default]
    Max24Hours,
    /// Rolls over every 100 days.
    Max100Days,
}

impl UpperLimit {
    /// Number of whole days in the extent.
    pub fn max_days(self) -> i64 {
        match self {
            UpperLimit::Max24Hours => 1,
            UpperLimit::Max100Days => 100,
        }
    }

    /// Number of whole seconds in the extent.
    pub fn seconds(self) -> i64 {
        self.max_days() * 86_400
    }
}

/// Frame rate, upper limit and subframes base for a timecode value.
///
/// Set at construction; a timecode's components are always interpreted
/// against its timebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timebase {
    /// Frame rate.
    pub rate: FrameRate,
    /// Timeline extent for wrapping and validation.
    pub limit: UpperLimit,
    /// Subframes divisor.
    pub base: SubFramesBase,
}

impl Timebase {
    /// Timebase at the given rate with the default 24-hour limit and
    /// 80-subframe base.
    pub fn new(rate: FrameRate) -> Self {
        Self {
            rate,
            limit: UpperLimit::default(),
            base: SubFramesBase::default(),
        }
    }

    /// Replace the upper limit.
    pub fn with_limit(self, limit: UpperLimit) -> Self {
        Self { limit, ..self }
    }

    /// Replace the subframes base.
    pub fn with_base(self, base: SubFramesBase) -> Self {
        Self { base, ..self }
    }

    /// Highest total subframe count expressible under this timebase.
    pub fn max_sub_frame_count_expressible(self) -> i64 {
        self.rate.max_sub_frame_count_expressible(self.limit, self.base)
    }

    /// Total subframes in the timeline extent (the wrapping modulus).
    pub fn max_total_sub_frames(self) -> i64 {
        self.rate.max_total_sub_frames(self.limit, self.base)
    }
}

impl fmt::Display for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.rate)
    }
}
