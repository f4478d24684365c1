//! Timecode display components.

use crate::error::{Result, TimecodeError};
use crate::timebase::Timebase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An individual timecode component, used to report which field of a
/// [`Components`] value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Days,
    Hours,
    Minutes,
    Seconds,
    Frames,
    SubFrames,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Days => "days",
            Component::Hours => "hours",
            Component::Minutes => "minutes",
            Component::Seconds => "seconds",
            Component::Frames => "frames",
            Component::SubFrames => "subframes",
        };
        f.write_str(name)
    }
}

/// Raw timecode component values.
///
/// A display representation: fields may be denormalized (outside their natural
/// ranges) when produced by a raw construction path. Carries no timebase of
/// its own; interpretation requires a [`Timebase`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Components {
    /// Days component. Valid only with a 100-day upper limit.
    pub days: i32,
    /// Hours component, 0...23 when normalized.
    pub hours: i32,
    /// Minutes component, 0...59 when normalized.
    pub minutes: i32,
    /// Seconds component, 0...59 when normalized.
    pub seconds: i32,
    /// Frames component; valid range depends on the frame rate.
    pub frames: i32,
    /// Subframes component; valid range depends on the subframes base.
    pub sub_frames: i32,
}

impl Components {
    /// All-zero components.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        frames: 0,
        sub_frames: 0,
    };

    /// Components from hours, minutes, seconds and frames.
    pub const fn hmsf(hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self {
            days: 0,
            hours,
            minutes,
            seconds,
            frames,
            sub_frames: 0,
        }
    }

    /// Components from days, hours, minutes, seconds and frames.
    pub const fn dhmsf(days: i32, hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            frames,
            sub_frames: 0,
        }
    }

    /// Replace the subframes field.
    pub const fn with_sub_frames(self, sub_frames: i32) -> Self {
        Self { sub_frames, ..self }
    }

    /// Whether every field is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// First component whose value is outside its valid range under the given
    /// timebase, or `None` if all components are valid.
    ///
    /// At drop rates, frame numbers below the per-minute drop count do not
    /// exist at the start of any minute that is not a multiple of ten.
    pub fn first_invalid(self, timebase: Timebase) -> Option<Component> {
        let max_days = timebase.limit.max_days() as i32;
        if self.days < 0 || self.days >= max_days {
            return Some(Component::Days);
        }
        if !(0..=23).contains(&self.hours) {
            return Some(Component::Hours);
        }
        if !(0..=59).contains(&self.minutes) {
            return Some(Component::Minutes);
        }
        if !(0..=59).contains(&self.seconds) {
            return Some(Component::Seconds);
        }

        let mut min_frame = 0;
        if timebase.rate.is_drop() && self.seconds == 0 && self.minutes % 10 != 0 {
            min_frame = timebase.rate.frames_dropped_per_minute() as i32;
        }
        let max_frame = timebase.rate.max_frame_number_displayable() as i32;
        if self.frames < min_frame || self.frames > max_frame {
            return Some(Component::Frames);
        }

        if self.sub_frames < 0 || self.sub_frames as i64 >= timebase.base.value() {
            return Some(Component::SubFrames);
        }

        None
    }

    /// Validate every component against the given timebase.
    pub fn validate(self, timebase: Timebase) -> Result<()> {
        match self.first_invalid(timebase) {
            Some(component) => Err(TimecodeError::InvalidComponent(component)),
            None => Ok(()),
        }
    }

    /// Signed display form of a negative duration: only the most significant
    /// nonzero field is negated. A negative 1h 1m 5s duration reads as
    /// `{hours: -1, minutes: 1, seconds: 5}`, not with every field negative.
    pub fn negated(self) -> Self {
        let mut c = self;
        if c.days != 0 {
            c.days = -c.days;
        } else if c.hours != 0 {
            c.hours = -c.hours;
        } else if c.minutes != 0 {
            c.minutes = -c.minutes;
        } else if c.seconds != 0 {
            c.seconds = -c.seconds;
        } else if c.frames != 0 {
            c.frames = -c.frames;
        } else {
            c.sub_frames = -c.sub_frames;
        }
        c
    }
}
