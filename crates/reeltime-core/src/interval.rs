//! Signed intervals (deltas) between timecodes.

use crate::components::Components;
use crate::timecode::Timecode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a [`TimecodeInterval`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

/// A directed duration: a sign plus a magnitude timecode.
///
/// The magnitude is not bounded by its upper limit until the interval is
/// materialized into a concrete timecode (via [`flattened`] or [`apply_to`]),
/// so a raw magnitude may exceed the limit while the interval is in flight.
///
/// [`flattened`]: TimecodeInterval::flattened
/// [`apply_to`]: TimecodeInterval::apply_to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimecodeInterval {
    magnitude: Timecode,
    sign: Sign,
}

impl TimecodeInterval {
    /// Interval from a magnitude and sign.
    pub fn new(magnitude: Timecode, sign: Sign) -> Self {
        Self { magnitude, sign }
    }

    /// Positive interval of the given magnitude.
    pub fn positive(magnitude: Timecode) -> Self {
        Self::new(magnitude, Sign::Positive)
    }

    /// Negative interval of the given magnitude.
    pub fn negative(magnitude: Timecode) -> Self {
        Self::new(magnitude, Sign::Negative)
    }

    /// The unsigned magnitude.
    pub fn magnitude(&self) -> &Timecode {
        &self.magnitude
    }

    /// The direction of the interval.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the interval points backward.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// The interval as a concrete timecode, wrapping around the magnitude's
    /// upper limit: a negative interval materializes as the wrap-around
    /// complement (zero minus the magnitude).
    pub fn flattened(&self) -> Timecode {
        match self.sign {
            Sign::Positive => self.magnitude.wrapping_add(Components::ZERO),
            Sign::Negative => {
                Timecode::zero(self.magnitude.timebase()).wrapping_sub(self.magnitude.components())
            }
        }
    }

    /// Offset a timecode by this interval, wrapping around the base's upper
    /// limit if necessary.
    pub fn apply_to(&self, base: &Timecode) -> Timecode {
        base.wrapping_add(self.flattened().components())
    }

    /// Signed display components: only the most significant nonzero field of
    /// the magnitude carries the negative sign.
    pub fn signed_components(&self) -> Components {
        match self.sign {
            Sign::Positive => self.magnitude.components(),
            Sign::Negative => self.magnitude.components().negated(),
        }
    }

    /// Signed wall-clock seconds equivalent of the interval.
    pub fn real_time(&self) -> f64 {
        match self.sign {
            Sign::Positive => self.magnitude.real_time(),
            Sign::Negative => -self.magnitude.real_time(),
        }
    }
}

impl fmt::Display for TimecodeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.magnitude)
        } else {
            self.magnitude.fmt(f)
        }
    }
}

impl Timecode {
    /// Offset this timecode by an interval, wrapping around the upper limit.
    pub fn offset_by(&self, interval: &TimecodeInterval) -> Timecode {
        interval.apply_to(self)
    }
}
