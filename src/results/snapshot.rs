use super::FrameSource;
use crate::base::PostError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the field output recorded at one simulation increment
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FrameRecord {
    /// Simulation time at the end of the increment
    pub time: f64,

    /// Scalar field values keyed by channel name
    pub fields: HashMap<String, f64>,
}

/// Holds a snapshot of the result frames recorded for one element
///
/// This is the JSON-backed stand-in for the host result database: the host
/// side exports the frames of interest once and the pipelines then read the
/// snapshot deterministically, with no connection to the database itself.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResultSnapshot {
    /// Name of the part instance the element belongs to (informative only)
    #[serde(default)]
    pub instance: String,

    /// Label of the sampled element (informative only)
    #[serde(default)]
    pub element: usize,

    /// Frames in increasing increment order (frame 0 is the initial state)
    pub frames: Vec<FrameRecord>,
}

impl ResultSnapshot {
    /// Reads a JSON file containing the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, PostError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }

    /// Writes a JSON file with the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), PostError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = File::create(&path)?;
        serde_json::to_writer_pretty(&mut file, &self)?;
        Ok(())
    }

    /// Checks that the frame times are monotonically non-decreasing
    ///
    /// Returns a typed result so that the caller (CLI, API, or batch script)
    /// decides how to recover from a malformed snapshot.
    pub fn validate(&self) -> Result<(), PostError> {
        for i in 1..self.frames.len() {
            if self.frames[i].time < self.frames[i - 1].time {
                return Err(PostError::NonMonotonicTime { frame: i });
            }
        }
        Ok(())
    }
}

impl FrameSource for ResultSnapshot {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame_time(&self, index: usize) -> Result<f64, PostError> {
        match self.frames.get(index) {
            Some(frame) => Ok(frame.time),
            None => Err(PostError::FrameOutOfRange {
                index,
                count: self.frames.len(),
            }),
        }
    }

    fn sample(&self, index: usize, channel: &str) -> Result<f64, PostError> {
        let frame = self.frames.get(index).ok_or(PostError::FrameOutOfRange {
            index,
            count: self.frames.len(),
        })?;
        match frame.fields.get(channel) {
            Some(value) => Ok(*value),
            None => Err(PostError::MissingFieldChannel {
                channel: channel.to_string(),
                frame: index,
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{FrameRecord, ResultSnapshot};
    use crate::results::FrameSource;
    use std::collections::HashMap;

    fn sample_snapshot() -> ResultSnapshot {
        let mut fields_0 = HashMap::new();
        fields_0.insert("SDV14".to_string(), 0.0);
        let mut fields_1 = HashMap::new();
        fields_1.insert("SDV14".to_string(), 1.0);
        ResultSnapshot {
            instance: "PART-1-1".to_string(),
            element: 1,
            frames: vec![
                FrameRecord {
                    time: 0.0,
                    fields: fields_0,
                },
                FrameRecord {
                    time: 0.1,
                    fields: fields_1,
                },
            ],
        }
    }

    #[test]
    fn frame_source_works() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.frame_count(), 2);
        assert_eq!(snapshot.frame_time(1).unwrap(), 0.1);
        assert_eq!(snapshot.sample(1, "SDV14").unwrap(), 1.0);
    }

    #[test]
    fn frame_source_handles_wrong_input() {
        let snapshot = sample_snapshot();
        let err = snapshot.frame_time(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame 7 is out of range; the result source holds 2 frame(s)"
        );
        let err = snapshot.sample(1, "SDV15").unwrap_err();
        assert_eq!(err.to_string(), "field channel 'SDV15' is missing at frame 1");
        let err = snapshot.sample(9, "SDV14").unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame 9 is out of range; the result source holds 2 frame(s)"
        );
    }

    #[test]
    fn validate_works() {
        let mut snapshot = sample_snapshot();
        snapshot.validate().unwrap();

        // equal consecutive times are allowed
        snapshot.frames[1].time = 0.0;
        snapshot.validate().unwrap();

        snapshot.frames[1].time = -0.1;
        let err = snapshot.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame 1 has a time value smaller than the previous frame"
        );
    }

    #[test]
    fn read_write_json_works() {
        let snapshot = sample_snapshot();
        let filename = "/tmp/fepost/test_snapshot_write.json";
        snapshot.write_json(&filename).unwrap();
        let read_back = ResultSnapshot::read_json(&filename).unwrap();
        assert_eq!(read_back.instance, "PART-1-1");
        assert_eq!(read_back.element, 1);
        assert_eq!(read_back.frames.len(), 2);
        assert_eq!(read_back.frames[1].time, 0.1);
        assert_eq!(read_back.frames[1].fields.get("SDV14"), Some(&1.0));
    }
}
