use crate::base::{PostError, HISTORY_NCOL, NOISE_THRESHOLD, N_TENSOR_CHANNELS};
use russell_lab::Matrix;

/// Holds the deformation history extracted from a frame sequence
///
/// Row i corresponds to the i-th retained increment:
///
/// * column 0 -- step index (equals i, zero-based)
/// * columns 1 to 9 -- velocity-gradient components L11, L12, L13, L21,
///   L22, L23, L31, L32, L33
/// * column 10 -- time increment from the previous frame (non-negative)
#[derive(Debug)]
pub struct HistoryMatrix {
    /// Matrix with the history data (nstep, 11)
    pub mat: Matrix,
}

impl HistoryMatrix {
    /// Allocates a zero-filled history with the given number of steps
    pub(crate) fn new(nstep: usize) -> Self {
        HistoryMatrix {
            mat: Matrix::new(nstep, HISTORY_NCOL),
        }
    }

    /// Returns the number of steps (rows)
    pub fn nstep(&self) -> usize {
        self.mat.dims().0
    }

    /// Returns the time increment of the first retained step
    ///
    /// This value goes to the header of the deformation history file.
    pub fn initial_time_increment(&self) -> Result<f64, PostError> {
        if self.nstep() == 0 {
            return Err(PostError::EmptyHistory);
        }
        Ok(self.mat.get(0, HISTORY_NCOL - 1))
    }

    /// Coerces near-zero tensor components to exactly zero
    ///
    /// Only the 9 tensor columns are touched: the step index is exact by
    /// construction and the time increments come straight from the frame
    /// times, so neither needs noise suppression.
    pub(crate) fn suppress_noise(&mut self) {
        let nstep = self.nstep();
        for i in 0..nstep {
            for j in 1..=N_TENSOR_CHANNELS {
                if f64::abs(self.mat.get(i, j)) <= NOISE_THRESHOLD {
                    self.mat.set(i, j, 0.0);
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
