use thiserror::Error;

/// Defines the errors that may occur while post-processing results
///
/// Every error carries enough context (channel name, frame index, or table
/// name) to diagnose the problem without re-running the pipeline. Failures
/// are all-or-nothing: no partial history file and no partial material spec
/// are ever produced.
#[derive(Debug, Error)]
pub enum PostError {
    /// The frame sequence holds fewer than two frames
    ///
    /// Frame 0 is the initial (zero) state, thus at least two frames are
    /// needed to produce one increment row.
    #[error("result source holds {found} frame(s); at least 2 are required to extract a history")]
    NoFramesAvailable { found: usize },

    /// A frame index lies beyond the stored frame sequence
    #[error("frame {index} is out of range; the result source holds {count} frame(s)")]
    FrameOutOfRange { index: usize, count: usize },

    /// A required field channel is absent at a given frame
    #[error("field channel '{channel}' is missing at frame {frame}")]
    MissingFieldChannel { channel: String, frame: usize },

    /// The extractor was given the wrong number of channel names
    #[error("expected {expected} field channels, found {found}")]
    WrongChannelCount { expected: usize, found: usize },

    /// The frame times must be monotonically non-decreasing
    #[error("frame {frame} has a time value smaller than the previous frame")]
    NonMonotonicTime { frame: usize },

    /// The history matrix holds no rows
    #[error("the deformation history holds no rows; there is nothing to write")]
    EmptyHistory,

    /// A material lacks one of the required property tables
    #[error("material '{material}' has no {table} property table")]
    MissingPropertyTable { material: String, table: String },

    /// No material with the requested name exists in the library
    #[error("material '{name}' was not found in the library")]
    MaterialNotFound { name: String },

    /// More than one material matches the requested name
    #[error("material name '{name}' is ambiguous; candidates: {}", .candidates.join(", "))]
    AmbiguousMaterial { name: String, candidates: Vec<String> },

    /// The material library holds several materials and none was selected
    #[error("a material name must be selected; the library holds: {}", .candidates.join(", "))]
    UnselectedMaterial { candidates: Vec<String> },

    /// The material library holds no materials at all
    #[error("the material library holds no materials")]
    EmptyMaterialLibrary,

    /// An input or output file could not be accessed
    #[error("cannot access file: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be read or written
    #[error("cannot process JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::PostError;

    #[test]
    fn error_messages_work() {
        let err = PostError::MissingFieldChannel {
            channel: "SDV14".to_string(),
            frame: 3,
        };
        assert_eq!(err.to_string(), "field channel 'SDV14' is missing at frame 3");

        let err = PostError::NoFramesAvailable { found: 1 };
        assert_eq!(
            err.to_string(),
            "result source holds 1 frame(s); at least 2 are required to extract a history"
        );

        let err = PostError::MissingPropertyTable {
            material: "steel".to_string(),
            table: "plastic".to_string(),
        };
        assert_eq!(err.to_string(), "material 'steel' has no plastic property table");

        let err = PostError::AmbiguousMaterial {
            name: "steel".to_string(),
            candidates: vec!["steel".to_string(), "steel".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "material name 'steel' is ambiguous; candidates: steel, steel"
        );
    }
}
