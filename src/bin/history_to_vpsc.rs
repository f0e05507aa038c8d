use fepost::base::{PostError, DEFAULT_HISTORY_FILENAME};
use fepost::history::{DeformationHistoryWriter, FrameSeriesExtractor};
use fepost::results::ResultSnapshot;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "history_to_vpsc",
    about = "Writes the deformation history of an element to a file for VPSC"
)]
struct Options {
    /// Path to the JSON snapshot with the result frames of the element
    snapshot: String,

    /// Output file (default: FE-Lij_hist.dat next to the snapshot)
    #[structopt(long)]
    output: Option<String>,

    /// Field channels holding the velocity-gradient components (9 names)
    #[structopt(long, number_of_values = 9)]
    channels: Option<Vec<String>>,
}

fn main() -> Result<(), PostError> {
    // parse options
    let options = Options::from_args();

    // load and check the snapshot
    let snapshot = ResultSnapshot::read_json(&options.snapshot)?;
    snapshot.validate()?;
    println!(
        "working with instance {} and element #{}",
        snapshot.instance, snapshot.element
    );
    println!("reading output for {} frames", snapshot.frames.len());

    // extract the history matrix
    let mut extractor = FrameSeriesExtractor::new();
    if let Some(channels) = &options.channels {
        let names: Vec<&str> = channels.iter().map(|s| s.as_str()).collect();
        extractor.set_channels(&names)?;
    }
    println!(
        "velocity gradient is assumed to be stored in channels {} through {}",
        extractor.channels()[0],
        extractor.channels()[8]
    );
    let history = extractor.extract(&snapshot)?;

    // write the history file
    let path = match &options.output {
        Some(output) => PathBuf::from(output),
        None => Path::new(&options.snapshot).with_file_name(DEFAULT_HISTORY_FILENAME),
    };
    DeformationHistoryWriter::new().write(&history, &path)?;

    // message
    println!(
        "deformation history with {} steps is written to {}",
        history.nstep(),
        path.display()
    );
    Ok(())
}
