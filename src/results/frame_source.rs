use crate::base::PostError;

/// Defines the interface to an ordered sequence of result frames
///
/// A frame is one converged simulation increment for which field output was
/// recorded. The source is an explicit handle (never ambient state) and is
/// read-only to the pipelines: extraction must not mutate it.
pub trait FrameSource {
    /// Returns the number of frames stored in the source
    ///
    /// Frame 0 corresponds to the initial (zero) state.
    fn frame_count(&self) -> usize;

    /// Returns the simulation time value of a frame
    fn frame_time(&self, index: usize) -> Result<f64, PostError>;

    /// Returns the value of a named scalar field channel at a frame
    ///
    /// The value is sampled at a fixed spatial location (e.g., the centroid
    /// of the element of interest). Fails with
    /// [PostError::MissingFieldChannel] if the channel is absent at the
    /// requested frame.
    fn sample(&self, index: usize, channel: &str) -> Result<f64, PostError>;
}
