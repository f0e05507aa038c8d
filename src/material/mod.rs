//! Implements the merging of material property tables
//!
//! A host material carries separate Elastic and Plastic tables;
//! [merge_property_tables] flattens them into the single ordered constants
//! vector and [MaterialSpecBuilder] pairs that vector with the number of
//! state variables required by a generic isotropic-plasticity subroutine.

mod material_spec;
mod merger;
mod property_table;
pub use crate::material::material_spec::*;
pub use crate::material::merger::*;
pub use crate::material::property_table::*;
