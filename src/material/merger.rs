use super::MaterialDefinition;
use crate::base::PostError;

/// Flattens the elastic and plastic tables into one ordered constants vector
///
/// The elastic rows come first, the plastic rows after, each row's fields
/// taken left-to-right. The order is load-bearing: downstream subroutines
/// index into the vector positionally and assume the elastic constants
/// precede the plastic ones. An empty table contributes nothing, but an
/// absent table fails with [PostError::MissingPropertyTable] because the
/// upstream material definition is incomplete.
pub fn merge_property_tables(material: &MaterialDefinition) -> Result<Vec<f64>, PostError> {
    let elastic = material
        .elastic
        .as_ref()
        .ok_or_else(|| PostError::MissingPropertyTable {
            material: material.name.clone(),
            table: "elastic".to_string(),
        })?;
    let plastic = material
        .plastic
        .as_ref()
        .ok_or_else(|| PostError::MissingPropertyTable {
            material: material.name.clone(),
            table: "plastic".to_string(),
        })?;
    let mut merged = Vec::with_capacity(elastic.value_count() + plastic.value_count());
    for row in elastic.rows.iter().chain(plastic.rows.iter()) {
        merged.extend_from_slice(row);
    }
    Ok(merged)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::merge_property_tables;
    use crate::material::{MaterialDefinition, PropertyTable};
    use russell_lab::array_approx_eq;

    #[test]
    fn merge_works() {
        let material = MaterialDefinition {
            name: "steel".to_string(),
            elastic: Some(PropertyTable {
                rows: vec![vec![200000.0, 0.3]],
            }),
            plastic: Some(PropertyTable {
                rows: vec![vec![250.0, 0.0], vec![300.0, 0.05]],
            }),
        };
        let merged = merge_property_tables(&material).unwrap();
        array_approx_eq(&merged, &[200000.0, 0.3, 250.0, 0.0, 300.0, 0.05], 1e-15);
    }

    #[test]
    fn merge_preserves_order() {
        let material = MaterialDefinition {
            name: "sample".to_string(),
            elastic: Some(PropertyTable {
                rows: vec![vec![1.0, 2.0]],
            }),
            plastic: Some(PropertyTable {
                rows: vec![vec![3.0, 4.0, 5.0]],
            }),
        };
        let merged = merge_property_tables(&material).unwrap();
        assert_eq!(merged, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn merge_accepts_empty_tables() {
        let material = MaterialDefinition {
            name: "void".to_string(),
            elastic: Some(PropertyTable { rows: Vec::new() }),
            plastic: Some(PropertyTable { rows: Vec::new() }),
        };
        let merged = merge_property_tables(&material).unwrap();
        assert_eq!(merged.len(), 0);
    }

    #[test]
    fn merge_handles_missing_tables() {
        let material = MaterialDefinition {
            name: "incomplete".to_string(),
            elastic: None,
            plastic: Some(PropertyTable {
                rows: vec![vec![250.0, 0.0]],
            }),
        };
        let err = merge_property_tables(&material).unwrap_err();
        assert_eq!(err.to_string(), "material 'incomplete' has no elastic property table");

        let material = MaterialDefinition {
            name: "incomplete".to_string(),
            elastic: Some(PropertyTable {
                rows: vec![vec![200000.0, 0.3]],
            }),
            plastic: None,
        };
        let err = merge_property_tables(&material).unwrap_err();
        assert_eq!(err.to_string(), "material 'incomplete' has no plastic property table");
    }
}
