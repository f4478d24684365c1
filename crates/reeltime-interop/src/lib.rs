//! Reeltime Interop - Collaborator surfaces over the timecode core
//!
//! Conversions and wrappers that consume the core's public operations but
//! add no numeric machinery of their own:
//! - 35mm film footage (feet+frames) display values
//! - Timecode transformers (offset composition with a bypass switch)

pub mod feet;
pub mod transform;

pub use feet::FeetAndFrames;
pub use transform::{Transform, Transformer};
