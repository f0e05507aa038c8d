use super::HistoryMatrix;
use crate::base::{PostError, DEFAULT_CHANNELS, HISTORY_NCOL, N_TENSOR_CHANNELS};
use crate::results::FrameSource;

/// Extracts the velocity-gradient history of an element from a frame sequence
///
/// Frame 0 holds the initial (zero) state and produces no output row; each
/// retained frame j = 1..N-1 yields one row whose step index is re-based to
/// start at 0. Extraction is all-or-nothing: a missing channel at any frame
/// aborts with no partial matrix.
#[derive(Debug)]
pub struct FrameSeriesExtractor {
    /// Names of the field channels holding the tensor components (row-wise order)
    channels: Vec<String>,
}

impl FrameSeriesExtractor {
    /// Allocates a new instance with the conventional SDV channel names
    pub fn new() -> Self {
        FrameSeriesExtractor {
            channels: DEFAULT_CHANNELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Sets the names of the field channels holding the tensor components
    ///
    /// # Input
    ///
    /// * `channels` -- exactly 9 names in row-wise order (L11 first, L33 last)
    pub fn set_channels(&mut self, channels: &[&str]) -> Result<&mut Self, PostError> {
        if channels.len() != N_TENSOR_CHANNELS {
            return Err(PostError::WrongChannelCount {
                expected: N_TENSOR_CHANNELS,
                found: channels.len(),
            });
        }
        self.channels = channels.iter().map(|s| s.to_string()).collect();
        Ok(self)
    }

    /// Returns the configured channel names
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Extracts the history matrix from a frame source
    ///
    /// Given N frames, the resulting matrix has N-1 rows; row i holds the
    /// step index i, the 9 tensor components sampled at frame i+1, and the
    /// time increment time(i+1) - time(i). Near-zero tensor components are
    /// coerced to exactly zero. The source is never mutated.
    pub fn extract(&self, source: &dyn FrameSource) -> Result<HistoryMatrix, PostError> {
        let count = source.frame_count();
        if count < 2 {
            return Err(PostError::NoFramesAvailable { found: count });
        }
        let mut history = HistoryMatrix::new(count - 1);
        for j in 1..count {
            let row = j - 1;
            history.mat.set(row, 0, row as f64);
            for (k, channel) in self.channels.iter().enumerate() {
                history.mat.set(row, 1 + k, source.sample(j, channel)?);
            }
            let dt = source.frame_time(j)? - source.frame_time(j - 1)?;
            history.mat.set(row, HISTORY_NCOL - 1, dt);
        }
        history.suppress_noise();
        Ok(history)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FrameSeriesExtractor;
    use crate::base::DEFAULT_CHANNELS;
    use crate::results::{FrameRecord, ResultSnapshot};
    use russell_lab::{mat_approx_eq, Matrix};
    use std::collections::HashMap;

    fn frame(time: f64, values: [f64; 9]) -> FrameRecord {
        let mut fields = HashMap::new();
        for (k, name) in DEFAULT_CHANNELS.iter().enumerate() {
            fields.insert(name.to_string(), values[k]);
        }
        FrameRecord { time, fields }
    }

    #[test]
    fn set_channels_works() {
        let mut extractor = FrameSeriesExtractor::new();
        assert_eq!(extractor.channels()[0], "SDV14");
        assert_eq!(extractor.channels()[8], "SDV22");
        extractor
            .set_channels(&["V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9"])
            .unwrap();
        assert_eq!(extractor.channels()[0], "V1");
        let err = extractor.set_channels(&["V1", "V2"]).unwrap_err();
        assert_eq!(err.to_string(), "expected 9 field channels, found 2");
    }

    #[test]
    fn extract_works() {
        let snapshot = ResultSnapshot {
            instance: String::new(),
            element: 1,
            frames: vec![
                frame(0.0, [0.0; 9]),
                frame(0.1, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
                frame(0.25, [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]),
            ],
        };
        let extractor = FrameSeriesExtractor::new();
        let history = extractor.extract(&snapshot).unwrap();
        assert_eq!(history.nstep(), 2);
        let correct = Matrix::from(&[
            [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.1],
            [1.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.15],
        ]);
        mat_approx_eq(&history.mat, &correct, 1e-15);
    }

    #[test]
    fn extract_suppresses_noise() {
        let snapshot = ResultSnapshot {
            instance: String::new(),
            element: 1,
            frames: vec![
                frame(0.0, [0.0; 9]),
                frame(0.5, [1e-5, -1e-5, 9.0e-6, -3.0e-6, 1.0, 2e-5, 0.0, 0.0, -2e-5]),
            ],
        };
        let history = FrameSeriesExtractor::new().extract(&snapshot).unwrap();
        assert_eq!(history.mat.get(0, 1), 0.0);
        assert_eq!(history.mat.get(0, 2), 0.0);
        assert_eq!(history.mat.get(0, 3), 0.0);
        assert_eq!(history.mat.get(0, 4), 0.0);
        assert_eq!(history.mat.get(0, 5), 1.0);
        assert_eq!(history.mat.get(0, 6), 2e-5);
        assert_eq!(history.mat.get(0, 9), -2e-5);
    }

    #[test]
    fn extract_handles_too_few_frames() {
        let extractor = FrameSeriesExtractor::new();

        let empty = ResultSnapshot {
            instance: String::new(),
            element: 1,
            frames: Vec::new(),
        };
        let err = extractor.extract(&empty).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result source holds 0 frame(s); at least 2 are required to extract a history"
        );

        let single = ResultSnapshot {
            instance: String::new(),
            element: 1,
            frames: vec![frame(0.0, [0.0; 9])],
        };
        let err = extractor.extract(&single).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result source holds 1 frame(s); at least 2 are required to extract a history"
        );
    }

    #[test]
    fn extract_handles_missing_channel() {
        let mut snapshot = ResultSnapshot {
            instance: String::new(),
            element: 1,
            frames: vec![
                frame(0.0, [0.0; 9]),
                frame(0.1, [1.0; 9]),
                frame(0.2, [2.0; 9]),
            ],
        };
        snapshot.frames[2].fields.remove("SDV18");
        let err = FrameSeriesExtractor::new().extract(&snapshot).unwrap_err();
        assert_eq!(err.to_string(), "field channel 'SDV18' is missing at frame 2");
    }
}
