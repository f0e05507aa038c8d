//! Implements the extraction and writing of deformation histories
//!
//! [FrameSeriesExtractor] reduces an ordered frame sequence to a
//! [HistoryMatrix] (one row per increment: step index, 9 velocity-gradient
//! components, time increment) and [DeformationHistoryWriter] serializes the
//! matrix in the fixed-width text format read by VPSC-type solvers.

mod extractor;
mod history_matrix;
mod writer;
pub use crate::history::extractor::*;
pub use crate::history::history_matrix::*;
pub use crate::history::writer::*;
