use super::{merge_property_tables, MaterialDefinition};
use crate::base::{PostError, N_STATE_VARIABLES};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a material description for a generic isotropic-plasticity subroutine
///
/// Immutable once built; the host-side collaborator materializes it as a
/// user material with the constants stored in its mechanical-constants slot
/// and the given number of solution-dependent state variables allocated.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MaterialSpec {
    /// Name of the new user material
    pub name: String,

    /// Mechanical constants: elastic constants followed by plastic constants
    pub constants: Vec<f64>,

    /// Number of solution-dependent state variables to allocate
    pub state_variable_count: usize,
}

impl MaterialSpec {
    /// Reads a JSON file containing the spec
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
        let spec = serde_json::from_reader(reader)?;
        Ok(spec)
    }

    /// Writes a JSON file with the spec
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
}

/// Builds a [MaterialSpec] from a material with elastic and plastic tables
///
/// The state-variable count defaults to the convention of the paired
/// subroutine (9 velocity-gradient slots + 13 internal slots = 22) and can
/// be overridden for subroutines with a different memory layout.
pub struct MaterialSpecBuilder {
    /// Number of state variables attached to the built spec
    state_variable_count: usize,
}

impl MaterialSpecBuilder {
    /// Allocates a new instance with the conventional state-variable count
    pub fn new() -> Self {
        MaterialSpecBuilder {
            state_variable_count: N_STATE_VARIABLES,
        }
    }

    /// Sets the number of state variables attached to the built spec
    pub fn set_state_variable_count(&mut self, count: usize) -> &mut Self {
        self.state_variable_count = count;
        self
    }

    /// Builds the spec from a material definition
    ///
    /// The new material is named `<material>_umat`. Propagates
    /// [PostError::MissingPropertyTable] when the elastic or plastic table
    /// is absent.
    pub fn build(&self, material: &MaterialDefinition) -> Result<MaterialSpec, PostError> {
        let constants = merge_property_tables(material)?;
        Ok(MaterialSpec {
            name: format!("{}_umat", material.name),
            constants,
            state_variable_count: self.state_variable_count,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
