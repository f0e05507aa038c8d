use fepost::base::PostError;
use fepost::material::{MaterialLibrary, MaterialSpecBuilder};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "elasplas_to_umat",
    about = "Builds a user material spec from a material with elastic and plastic tables"
)]
struct Options {
    /// Path to the JSON material library exported from the model
    library: String,

    /// Name of the material to transfer (optional when the library holds exactly one)
    #[structopt(long)]
    material: Option<String>,

    /// Output file (default: <material>_umat.json next to the library)
    #[structopt(long)]
    output: Option<String>,

    /// Number of solution-dependent state variables to allocate
    #[structopt(long)]
    depvar: Option<usize>,
}

fn main() -> Result<(), PostError> {
    // parse options
    let options = Options::from_args();

    // load the library and select the material
    let library = MaterialLibrary::read_json(&options.library)?;
    let material = match &options.material {
        Some(name) => library.get_unique(name)?,
        None => library.single()?,
    };
    println!("properties will be transferred from material '{}'", material.name);

    // build the spec
    let mut builder = MaterialSpecBuilder::new();
    if let Some(count) = options.depvar {
        builder.set_state_variable_count(count);
    }
    let spec = builder.build(material)?;

    // write the spec file
    let path = match &options.output {
        Some(output) => PathBuf::from(output),
        None => Path::new(&options.library).with_file_name(format!("{}.json", spec.name)),
    };
    spec.write_json(&path)?;

    // message
    println!(
        "material '{}' is created with {} mechanical constants and {} state variables",
        spec.name,
        spec.constants.len(),
        spec.state_variable_count
    );
    println!("the spec is written to {}", path.display());
    Ok(())
}
