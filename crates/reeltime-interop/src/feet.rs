//! 35mm film footage (feet+frames) display values.

use reeltime_core::Timecode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 35mm film footage location: 16 frames to the foot.
///
/// Footage counters have no drop-frame concept; the conversion uses the raw
/// elapsed frame tally without adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeetAndFrames {
    /// Whole feet of film.
    pub feet: i64,
    /// Frames beyond the last whole foot, 0...15.
    pub frames: i64,
}

/// Frames per foot of 35mm film.
const FRAMES_PER_FOOT: i64 = 16;

impl FeetAndFrames {
    /// Footage location of a timecode's elapsed whole frames.
    pub fn from_timecode(tc: &Timecode) -> Self {
        let whole_frames = tc.frame_count().whole_frames();
        Self {
            feet: whole_frames / FRAMES_PER_FOOT,
            frames: whole_frames % FRAMES_PER_FOOT,
        }
    }

    /// Total whole frames denoted by this footage location.
    pub fn total_frames(self) -> i64 {
        self.feet * FRAMES_PER_FOOT + self.frames
    }
}

impl From<&Timecode> for FeetAndFrames {
    fn from(tc: &Timecode) -> Self {
        Self::from_timecode(tc)
    }
}

impl fmt::Display for FeetAndFrames {
    /// Conventional footage notation, e.g. `5584+12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{:02}", self.feet, self.frames)
    }
}
