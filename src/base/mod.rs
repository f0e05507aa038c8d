//! Implements the base constants and error type shared by the pipelines

mod constants;
mod error;
pub use crate::base::constants::*;
pub use crate::base::error::*;
