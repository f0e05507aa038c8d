use crate::base::PostError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds one ordered material property table
///
/// Each row is one data point of the table, e.g., (Young's modulus,
/// Poisson's ratio) for an elastic table or (yield stress, plastic strain)
/// for a plastic table. All rows of a table share the same arity. The table
/// is never mutated by the pipelines.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PropertyTable {
    /// Rows in declared order; each row keeps its fields left-to-right
    pub rows: Vec<Vec<f64>>,
}

impl PropertyTable {
    /// Returns the total number of values held by the table
    pub fn value_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

/// Holds a material definition retrieved from a host model
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MaterialDefinition {
    /// Name of the material in the host model
    pub name: String,

    /// Elastic property table, if the material has one
    #[serde(default)]
    pub elastic: Option<PropertyTable>,

    /// Plastic property table, if the material has one
    #[serde(default)]
    pub plastic: Option<PropertyTable>,
}

/// Holds the materials retrieved from a host model
///
/// Lookups that match several same-named materials return all candidates to
/// the caller instead of resolving the ambiguity internally.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MaterialLibrary {
    /// Materials in the order they appear in the model
    pub materials: Vec<MaterialDefinition>,
}

impl MaterialLibrary {
    /// Reads a JSON file containing the library
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
        let library = serde_json::from_reader(reader)?;
        Ok(library)
    }

    /// Returns all materials matching a name
    pub fn find(&self, name: &str) -> Vec<&MaterialDefinition> {
        self.materials.iter().filter(|m| m.name == name).collect()
    }

    /// Returns the single material matching a name
    ///
    /// Fails with [PostError::AmbiguousMaterial] (listing all candidates)
    /// when more than one material carries the requested name.
    pub fn get_unique(&self, name: &str) -> Result<&MaterialDefinition, PostError> {
        let matches = self.find(name);
        match matches.len() {
            0 => Err(PostError::MaterialNotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches[0]),
            _ => Err(PostError::AmbiguousMaterial {
                name: name.to_string(),
                candidates: matches.iter().map(|m| m.name.clone()).collect(),
            }),
        }
    }

    /// Returns the only material of the library
    ///
    /// Fails with [PostError::UnselectedMaterial] (listing all names) when
    /// the library holds more than one material, so the caller can ask for
    /// an explicit selection.
    pub fn single(&self) -> Result<&MaterialDefinition, PostError> {
        match self.materials.len() {
            0 => Err(PostError::EmptyMaterialLibrary),
            1 => Ok(&self.materials[0]),
            _ => Err(PostError::UnselectedMaterial {
                candidates: self.materials.iter().map(|m| m.name.clone()).collect(),
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
