//! Frame rates and their static properties.
//!
//! Industry-standard BITC (burn-in timecode) display rates. Every rate has an
//! entry in every table below; the tables are immutable constant data, so all
//! lookups are pure and infallible.

use crate::timebase::{SubFramesBase, UpperLimit};
use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timecode frame rate.
///
/// Variants are declared in ascending nominal-rate order so the derived `Ord`
/// sorts rates numerically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FrameRate {
    /// 23.976 fps (24 ÷ 1.001). 24p film in an NTSC post environment.
    #[serde(rename = "23.976")]
    Fps23_976,
    /// 24 fps (film, ATSC, 2k, 4k, 6k).
    #[serde(rename = "24")]
    Fps24,
    /// 24.98 fps (25 ÷ 1.001). Used to facilitate PAL/NTSC transfers.
    #[serde(rename = "24.98")]
    Fps24_98,
    /// 25 fps (PAL, SECAM, DVB, ATSC).
    #[serde(rename = "25")]
    Fps25,
    /// 29.97 fps (30 ÷ 1.001). NTSC American system, PAL-M.
    #[serde(rename = "29.97")]
    Fps29_97,
    /// 29.97 drop fps.
    #[serde(rename = "29.97d")]
    Fps29_97Drop,
    /// 30 fps (ATSC).
    #[serde(rename = "30")]
    Fps30,
    /// 30 drop fps. A display rate only, not a video frame rate.
    #[serde(rename = "30d")]
    Fps30Drop,
    /// 47.952 fps. Double 23.976 fps.
    #[serde(rename = "47.952")]
    Fps47_952,
    /// 48 fps. Double 24 fps.
    #[serde(rename = "48")]
    Fps48,
    /// 50 fps. Double 25 fps.
    #[serde(rename = "50")]
    Fps50,
    /// 59.94 fps. Double 29.97 fps, NTSC-compatible HD.
    #[serde(rename = "59.94")]
    Fps59_94,
    /// 59.94 drop fps. Double 29.97 drop fps.
    #[serde(rename = "59.94d")]
    Fps59_94Drop,
    /// 60 fps. Double 30 fps.
    #[serde(rename = "60")]
    Fps60,
    /// 60 drop fps. A display rate only, not a video frame rate.
    #[serde(rename = "60d")]
    Fps60Drop,
    /// 100 fps. Double 50 fps.
    #[serde(rename = "100")]
    Fps100,
    /// 119.88 fps. Quadruple 29.97 fps.
    #[serde(rename = "119.88")]
    Fps119_88,
    /// 119.88 drop fps. Quadruple 29.97 drop fps.
    #[serde(rename = "119.88d")]
    Fps119_88Drop,
    /// 120 fps. Quadruple 30 fps.
    #[serde(rename = "120")]
    Fps120,
    /// 120 drop fps. A display rate only, not a video frame rate.
    #[serde(rename = "120d")]
    Fps120Drop,
}

use FrameRate::*;

impl FrameRate {
    /// Every supported frame rate, in ascending rate order.
    pub const ALL: [FrameRate; 20] = [
        Fps23_976,
        Fps24,
        Fps24_98,
        Fps25,
        Fps29_97,
        Fps29_97Drop,
        Fps30,
        Fps30Drop,
        Fps47_952,
        Fps48,
        Fps50,
        Fps59_94,
        Fps59_94Drop,
        Fps60,
        Fps60Drop,
        Fps100,
        Fps119_88,
        Fps119_88Drop,
        Fps120,
        Fps120Drop,
    ];

    /// All drop-frame rates.
    pub fn all_drop() -> impl Iterator<Item = FrameRate> {
        Self::ALL.into_iter().filter(|r| r.is_drop())
    }

    /// All non-drop frame rates.
    pub fn all_non_drop() -> impl Iterator<Item = FrameRate> {
        Self::ALL.into_iter().filter(|r| !r.is_drop())
    }

    /// Nominal frame rate as a reduced fraction (frames per second).
    ///
    /// Whole-number drop rates carry the whole fraction: 30 drop is a display
    /// adaptation over 30 fps material, so its nominal rate is 30/1.
    pub fn fraction(self) -> Rational64 {
        match self {
            Fps23_976 => Rational64::new_raw(24_000, 1001),
            Fps24 => Rational64::new_raw(24, 1),
            Fps24_98 => Rational64::new_raw(25_000, 1001),
            Fps25 => Rational64::new_raw(25, 1),
            Fps29_97 | Fps29_97Drop => Rational64::new_raw(30_000, 1001),
            Fps30 | Fps30Drop => Rational64::new_raw(30, 1),
            Fps47_952 => Rational64::new_raw(48_000, 1001),
            Fps48 => Rational64::new_raw(48, 1),
            Fps50 => Rational64::new_raw(50, 1),
            Fps59_94 | Fps59_94Drop => Rational64::new_raw(60_000, 1001),
            Fps60 | Fps60Drop => Rational64::new_raw(60, 1),
            Fps100 => Rational64::new_raw(100, 1),
            Fps119_88 | Fps119_88Drop => Rational64::new_raw(120_000, 1001),
            Fps120 | Fps120Drop => Rational64::new_raw(120, 1),
        }
    }

    /// Duration of a single frame as a reduced fraction of a second
    /// (the reciprocal of `fraction`), e.g. 1001/30000 for 29.97.
    pub fn frame_duration(self) -> Rational64 {
        self.fraction().recip()
    }

    /// Whether this is a drop-frame rate.
    pub fn is_drop(self) -> bool {
        matches!(
            self,
            Fps29_97Drop | Fps30Drop | Fps59_94Drop | Fps60Drop | Fps119_88Drop | Fps120Drop
        )
    }

    /// Number of frame codes skipped at the start of each non-multiple-of-ten
    /// minute. Zero for non-drop rates.
    pub fn frames_dropped_per_minute(self) -> i64 {
        match self {
            Fps29_97Drop | Fps30Drop => 2,
            Fps59_94Drop | Fps60Drop => 4,
            Fps119_88Drop | Fps120Drop => 8,
            _ => 0,
        }
    }

    /// Maximum frame count per second: the nominal rate rounded up to the
    /// next whole number (30 for 29.97).
    pub fn max_frames(self) -> i64 {
        match self {
            Fps23_976 | Fps24 => 24,
            Fps24_98 | Fps25 => 25,
            Fps29_97 | Fps29_97Drop | Fps30 | Fps30Drop => 30,
            Fps47_952 | Fps48 => 48,
            Fps50 => 50,
            Fps59_94 | Fps59_94Drop | Fps60 | Fps60Drop => 60,
            Fps100 => 100,
            Fps119_88 | Fps119_88Drop | Fps120 | Fps120Drop => 120,
        }
    }

    /// Highest frame number that may appear in a display (29 for 29.97).
    pub fn max_frame_number_displayable(self) -> i64 {
        self.max_frames() - 1
    }

    /// Frames per second used for wall-clock (real time) conversion.
    ///
    /// Whole non-drop rates run at their nominal speed. Fractional rates and
    /// all drop rates run at `max_frames ÷ 1.001`: drop-frame displays track a
    /// clock over NTSC-speed material, so 30 drop converts at 29.97, not 30.
    pub fn real_time_rate(self) -> f64 {
        match self {
            Fps24 | Fps25 | Fps30 | Fps48 | Fps50 | Fps60 | Fps100 | Fps120 => {
                self.max_frames() as f64
            }
            _ => self.max_frames() as f64 / 1.001,
        }
    }

    /// Total frame codes in the given timeline extent, accounting for dropped
    /// codes at drop rates (2,589,408 in 24 hours at 29.97 drop).
    pub fn max_total_frames(self, limit: UpperLimit) -> i64 {
        let seconds = limit.seconds();
        let minutes = seconds / 60;
        let dropped = self.frames_dropped_per_minute() * (minutes - minutes / 10);
        self.max_frames() * seconds - dropped
    }

    /// Highest total frame count expressible before rolling over the limit.
    pub fn max_total_frames_expressible(self, limit: UpperLimit) -> i64 {
        self.max_total_frames(limit) - 1
    }

    /// Total subframes in the given timeline extent at a subframes base.
    pub fn max_total_sub_frames(self, limit: UpperLimit, base: SubFramesBase) -> i64 {
        self.max_total_frames(limit) * base.value()
    }

    /// Highest total subframe count expressible before rolling over the limit.
    pub fn max_sub_frame_count_expressible(self, limit: UpperLimit, base: SubFramesBase) -> i64 {
        self.max_total_sub_frames(limit, base) - 1
    }

    /// Compatibility group this rate belongs to.
    pub fn compatible_group(self) -> CompatibleGroup {
        match self {
            Fps24 | Fps25 | Fps30 | Fps48 | Fps50 | Fps60 | Fps100 | Fps120 => {
                CompatibleGroup::Atsc
            }
            Fps30Drop | Fps60Drop | Fps120Drop => CompatibleGroup::AtscDrop,
            Fps23_976 | Fps24_98 | Fps29_97 | Fps47_952 | Fps59_94 | Fps119_88 => {
                CompatibleGroup::Ntsc
            }
            Fps29_97Drop | Fps59_94Drop | Fps119_88Drop => CompatibleGroup::NtscDrop,
        }
    }

    /// All rates sharing this rate's compatibility group, including itself.
    pub fn compatible_group_rates(self) -> &'static [FrameRate] {
        self.compatible_group().rates()
    }

    /// Whether two rates belong to the same compatibility group.
    /// Symmetric, and transitive within a group.
    pub fn is_compatible(self, other: FrameRate) -> bool {
        self.compatible_group() == other.compatible_group()
    }

    /// Short identifier string, e.g. `"29.97d"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Fps23_976 => "23.976",
            Fps24 => "24",
            Fps24_98 => "24.98",
            Fps25 => "25",
            Fps29_97 => "29.97",
            Fps29_97Drop => "29.97d",
            Fps30 => "30",
            Fps30Drop => "30d",
            Fps47_952 => "47.952",
            Fps48 => "48",
            Fps50 => "50",
            Fps59_94 => "59.94",
            Fps59_94Drop => "59.94d",
            Fps60 => "60",
            Fps60Drop => "60d",
            Fps100 => "100",
            Fps119_88 => "119.88",
            Fps119_88Drop => "119.88d",
            Fps120 => "120",
            Fps120Drop => "120d",
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping of frame rates whose timecode displays run at the same
/// wall-clock speed and can be substituted for one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibleGroup {
    /// Whole non-drop rates (24, 25, 30, 48, 50, 60, 100, 120).
    Atsc,
    /// Whole-rate drop displays (30d, 60d, 120d).
    AtscDrop,
    /// NTSC fractional rates (23.976, 24.98, 29.97, 47.952, 59.94, 119.88).
    Ntsc,
    /// NTSC drop rates (29.97d, 59.94d, 119.88d).
    NtscDrop,
}

impl CompatibleGroup {
    /// Every compatibility group.
    pub const ALL: [CompatibleGroup; 4] = [
        CompatibleGroup::Atsc,
        CompatibleGroup::AtscDrop,
        CompatibleGroup::Ntsc,
        CompatibleGroup::NtscDrop,
    ];

    /// Member rates of this group.
    pub fn rates(self) -> &'static [FrameRate] {
        static ATSC: [FrameRate; 8] = [Fps24, Fps25, Fps30, Fps48, Fps50, Fps60, Fps100, Fps120];
        static ATSC_DROP: [FrameRate; 3] = [Fps30Drop, Fps60Drop, Fps120Drop];
        static NTSC: [FrameRate; 6] = [Fps23_976, Fps24_98, Fps29_97, Fps47_952, Fps59_94, Fps119_88];
        static NTSC_DROP: [FrameRate; 3] = [Fps29_97Drop, Fps59_94Drop, Fps119_88Drop];

        match self {
            CompatibleGroup::Atsc => &ATSC,
            CompatibleGroup::AtscDrop => &ATSC_DROP,
            CompatibleGroup::Ntsc => &NTSC,
            CompatibleGroup::NtscDrop => &NTSC_DROP,
        }
    }
}
