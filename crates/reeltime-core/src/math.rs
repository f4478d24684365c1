//! Timecode arithmetic under the three overflow policies.
//!
//! Every operator shares one combine step in elapsed-subframe space and
//! differs only in post-processing: `checked_*` fails on out-of-range results
//! (exact policy), `saturating_*` clamps into range, `wrapping_*` reduces
//! modulo the upper limit. Scalar multiply/divide truncate toward zero before
//! the policy is applied; dividing by zero is an error under every policy.

use crate::components::Components;
use crate::convert::frame_count_of;
use crate::error::{Result, TimecodeError};
use crate::frame_count::FrameCount;
use crate::interval::{Sign, TimecodeInterval};
use crate::timebase::UpperLimit;
use crate::timecode::Timecode;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl Timecode {
    fn duration_sub_frames(&self, duration: Components) -> i64 {
        frame_count_of(duration, self.rate(), self.base()).sub_frame_count()
    }

    fn with_sub_frames_checked(&self, sfc: i64) -> Result<Self> {
        let mut tc = *self;
        tc.set_frame_count(FrameCount::from_sub_frames(sfc, self.base()))?;
        Ok(tc)
    }

    fn with_sub_frames_clamping(&self, sfc: i64) -> Self {
        let mut tc = *self;
        tc.set_frame_count_clamping(FrameCount::from_sub_frames(sfc, self.base()));
        tc
    }

    fn with_sub_frames_wrapping(&self, sfc: i64) -> Self {
        let mut tc = *self;
        tc.set_frame_count_wrapping(FrameCount::from_sub_frames(sfc, self.base()));
        tc
    }

    // ── Add / subtract ────────────────────────────────────────────

    /// Add a duration, failing if the result leaves the representable range.
    pub fn checked_add(&self, duration: Components) -> Result<Self> {
        let sfc = self.frame_count().sub_frame_count() + self.duration_sub_frames(duration);
        self.with_sub_frames_checked(sfc)
    }

    /// Add a duration, clamping the result to the representable range.
    pub fn saturating_add(&self, duration: Components) -> Self {
        let sfc = self.frame_count().sub_frame_count() + self.duration_sub_frames(duration);
        self.with_sub_frames_clamping(sfc)
    }

    /// Add a duration, wrapping around the clock set by the upper limit.
    pub fn wrapping_add(&self, duration: Components) -> Self {
        let sfc = self.frame_count().sub_frame_count() + self.duration_sub_frames(duration);
        self.with_sub_frames_wrapping(sfc)
    }

    /// Subtract a duration, failing if the result leaves the representable
    /// range.
    pub fn checked_sub(&self, duration: Components) -> Result<Self> {
        let sfc = self.frame_count().sub_frame_count() - self.duration_sub_frames(duration);
        self.with_sub_frames_checked(sfc)
    }

    /// Subtract a duration, clamping the result to the representable range.
    pub fn saturating_sub(&self, duration: Components) -> Self {
        let sfc = self.frame_count().sub_frame_count() - self.duration_sub_frames(duration);
        self.with_sub_frames_clamping(sfc)
    }

    /// Subtract a duration, wrapping around the clock set by the upper limit.
    pub fn wrapping_sub(&self, duration: Components) -> Self {
        let sfc = self.frame_count().sub_frame_count() - self.duration_sub_frames(duration);
        self.with_sub_frames_wrapping(sfc)
    }

    // ── Multiply / divide ─────────────────────────────────────────

    /// Multiply by a scalar, failing if the result leaves the representable
    /// range.
    pub fn checked_mul(&self, factor: f64) -> Result<Self> {
        let product = self.frame_count().sub_frame_count() as f64 * factor;
        if product < 0.0 || product > self.max_sub_frame_count_expressible() as f64 {
            return Err(TimecodeError::Overflow);
        }
        self.with_sub_frames_checked(product as i64)
    }

    /// Multiply by a scalar, clamping the result to the representable range.
    pub fn saturating_mul(&self, factor: f64) -> Self {
        let product = self.frame_count().sub_frame_count() as f64 * factor;
        self.with_sub_frames_clamping(product as i64)
    }

    /// Multiply by a scalar, wrapping around the clock set by the upper
    /// limit.
    pub fn wrapping_mul(&self, factor: f64) -> Self {
        let product = self.frame_count().sub_frame_count() as f64 * factor;
        self.with_sub_frames_wrapping(product as i64)
    }

    /// Divide by a scalar, failing if the result leaves the representable
    /// range. Dividing by zero is an error.
    pub fn checked_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(TimecodeError::DivisionByZero);
        }
        let quotient = self.frame_count().sub_frame_count() as f64 / divisor;
        if quotient < 0.0 || quotient > self.max_sub_frame_count_expressible() as f64 {
            return Err(TimecodeError::Overflow);
        }
        self.with_sub_frames_checked(quotient as i64)
    }

    /// Divide by a scalar, clamping the result to the representable range.
    /// Dividing by zero is an error.
    pub fn saturating_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(TimecodeError::DivisionByZero);
        }
        let quotient = self.frame_count().sub_frame_count() as f64 / divisor;
        Ok(self.with_sub_frames_clamping(quotient as i64))
    }

    /// Divide by a scalar, wrapping around the clock set by the upper limit.
    /// Dividing by zero is an error.
    pub fn wrapping_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(TimecodeError::DivisionByZero);
        }
        let quotient = self.frame_count().sub_frame_count() as f64 / divisor;
        Ok(self.with_sub_frames_wrapping(quotient as i64))
    }

    // ── Offset / interval ─────────────────────────────────────────

    /// Signed interval from `self` to `destination`: applying the returned
    /// interval to `self` with wrapping addition reproduces `destination`
    /// exactly.
    ///
    /// Both ends are widened to a 100-day limit while diffing so the narrower
    /// configured limit cannot introduce a spurious wraparound; the result is
    /// re-expressed under `self`'s timebase.
    pub fn interval_to(&self, destination: &Timecode) -> TimecodeInterval {
        if self.frame_count() == destination.frame_count() {
            return TimecodeInterval::new(
                Timecode::raw(Components::ZERO, self.timebase()),
                Sign::Positive,
            );
        }

        let widened = self.timebase().with_limit(UpperLimit::Max100Days);
        let origin = Timecode::raw(self.components(), widened);
        let dest = Timecode::raw(destination.components(), widened);

        let (diff, sign) = if dest > origin {
            (dest.wrapping_sub(origin.components()), Sign::Positive)
        } else {
            (origin.wrapping_sub(dest.components()), Sign::Negative)
        };

        TimecodeInterval::new(Timecode::raw(diff.components(), self.timebase()), sign)
    }
}

// Operators between timecodes wrap around the upper limit, matching how
// hardware counters roll over. The right-hand operand's components are
// interpreted as a duration under the left operand's timebase.

impl Add for Timecode {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs.components())
    }
}

impl AddAssign for Timecode {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Timecode {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs.components())
    }
}

impl SubAssign for Timecode {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Timecode {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign<f64> for Timecode {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Timecode {
    type Output = Self;

    /// Wrapping scalar division.
    ///
    /// # Panics
    /// Panics on a zero divisor; use [`Timecode::wrapping_div`] to handle
    /// that case as an error.
    fn div(self, rhs: f64) -> Self {
        match self.wrapping_div(rhs) {
            Ok(tc) => tc,
            Err(err) => panic!("timecode division: {err}"),
        }
    }
}

impl DivAssign<f64> for Timecode {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
