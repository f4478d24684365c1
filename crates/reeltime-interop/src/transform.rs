//! Timecode transformers: a composable offset function over a timecode.

use reeltime_core::{Timecode, TimecodeInterval};
use std::fmt;

/// The transform a [`Transformer`] applies.
pub enum Transform {
    /// No transform is defined; input passes through.
    Identity,
    /// Offsets the input by an interval, wrapping around its upper limit.
    Offset(TimecodeInterval),
    /// An arbitrary caller-supplied mapping.
    Custom(Box<dyn Fn(Timecode) -> Timecode + Send + Sync>),
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => f.write_str("Identity"),
            Transform::Offset(interval) => f.debug_tuple("Offset").field(interval).finish(),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Applies a [`Transform`] to timecode values, with a bypass switch.
#[derive(Debug)]
pub struct Transformer {
    transform: Transform,
    /// Whether the transform is applied; when disabled, input passes through
    /// unchanged.
    pub enabled: bool,
}

impl Transformer {
    /// Transformer applying the given transform.
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            enabled: true,
        }
    }

    /// Transformer offsetting by an interval.
    pub fn offset(interval: TimecodeInterval) -> Self {
        Self::new(Transform::Offset(interval))
    }

    /// Transformer applying a caller-supplied mapping.
    pub fn custom(f: impl Fn(Timecode) -> Timecode + Send + Sync + 'static) -> Self {
        Self::new(Transform::Custom(Box::new(f)))
    }

    /// The configured transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Apply the transform to a timecode value.
    pub fn apply(&self, input: Timecode) -> Timecode {
        if !self.enabled {
            return input;
        }

        match &self.transform {
            Transform::Identity => input,
            Transform::Offset(interval) => interval.apply_to(&input),
            Transform::Custom(f) => f(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reeltime_core::{Components, FrameRate, Sign, Timebase};

    fn tc(c: Components) -> Timecode {
        Timecode::new(c, Timebase::new(FrameRate::Fps30)).unwrap()
    }

    #[test]
    fn identity_passes_through() {
        let transformer = Transformer::new(Transform::Identity);
        let input = tc(Components::hmsf(1, 2, 3, 4));
        assert_eq!(transformer.apply(input), input);
    }

    #[test]
    fn offset_applies_the_interval() {
        let interval =
            TimecodeInterval::new(tc(Components::hmsf(1, 0, 0, 0)), Sign::Positive);
        let transformer = Transformer::offset(interval);

        let out = transformer.apply(tc(Components::hmsf(10, 0, 0, 0)));
        assert_eq!(out.components(), Components::hmsf(11, 0, 0, 0));
    }

    #[test]
    fn custom_closure_runs() {
        let transformer = Transformer::custom(|input| input.wrapping_mul(2.0));

        let out = transformer.apply(tc(Components::hmsf(3, 0, 0, 0)));
        assert_eq!(out.components(), Components::hmsf(6, 0, 0, 0));
    }

    #[test]
    fn disabled_transformer_bypasses() {
        let interval =
            TimecodeInterval::new(tc(Components::hmsf(1, 0, 0, 0)), Sign::Positive);
        let mut transformer = Transformer::offset(interval);
        transformer.enabled = false;

        let input = tc(Components::hmsf(10, 0, 0, 0));
        assert_eq!(transformer.apply(input), input);
    }
}
