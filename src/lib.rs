//! Fepost - post-processes finite element results
//!
//! This crate implements two small pipelines operating on results produced by
//! a host finite element simulation:
//!
//! 1. [history] - extracts the velocity-gradient history of a single element
//!    from an ordered frame sequence and writes it in the fixed-width text
//!    format read by a polycrystal-plasticity (VPSC-type) solver.
//! 2. [material] - merges the elastic and plastic property tables of a
//!    material into the single flat constants vector consumed by a generic
//!    isotropic-plasticity user subroutine.
//!
//! Access to the host result database is abstracted by
//! [results::FrameSource]; a JSON-backed [results::ResultSnapshot]
//! implements it for batch use and testing.

/// Defines base constants and the error type
pub mod base;

/// Implements the extraction and writing of deformation histories
pub mod history;

/// Implements the merging of material property tables
pub mod material;

/// Implements the access to simulation result frames
pub mod results;
