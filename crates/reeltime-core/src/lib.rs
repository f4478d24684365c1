//! Reeltime Core - SMPTE timecode arithmetic
//!
//! This crate provides frame-accurate timecode values and the math on them:
//! - Timecode representation (days:hours:minutes:seconds:frames:subframes)
//! - Frame rates with drop-frame correction and compatibility grouping
//! - Canonical elapsed subframe counts (exact, no floating error)
//! - Add/subtract/multiply/divide under exact, saturating and wrapping policies
//! - Lossless interchange with wall-clock seconds and rational fractions

pub mod components;
pub mod convert;
pub mod error;
pub mod frame_count;
pub mod interval;
pub mod math;
pub mod rate;
pub mod rational;
pub mod realtime;
pub mod timebase;
pub mod timecode;

pub use components::{Component, Components};
pub use error::{Result, TimecodeError};
pub use frame_count::FrameCount;
pub use interval::{Sign, TimecodeInterval};
pub use rate::{CompatibleGroup, FrameRate};
pub use timebase::{SubFramesBase, Timebase, UpperLimit};
pub use timecode::Timecode;
