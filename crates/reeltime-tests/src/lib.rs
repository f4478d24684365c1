//! Integration test crate for Reeltime.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on both reeltime crates to verify they work together.

#[cfg(test)]
mod arithmetic;

#[cfg(test)]
mod interchange;
