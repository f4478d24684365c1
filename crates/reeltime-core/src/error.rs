//! Error types for Reeltime.

use crate::components::Component;
use thiserror::Error;

/// Main error type for timecode operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimecodeError {
    /// An exact-policy operation produced an elapsed count outside
    /// `0 ..= max_sub_frame_count_expressible` for the configured upper limit.
    #[error("timecode overflows the configured upper limit")]
    Overflow,

    /// A component field holds a value outside its valid range.
    #[error("invalid value for {0} component")]
    InvalidComponent(Component),

    /// Scalar division by zero. An error under every overflow policy.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type alias for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;
