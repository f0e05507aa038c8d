//! Implements the access to simulation result frames
//!
//! The host simulation owns the result database; this module only defines the
//! read-only interface the pipelines rely on ([FrameSource]) and a JSON-backed
//! snapshot ([ResultSnapshot]) for batch processing and testing.

mod frame_source;
mod snapshot;
pub use crate::results::frame_source::*;
pub use crate::results::snapshot::*;
