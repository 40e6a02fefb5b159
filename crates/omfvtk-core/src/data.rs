//! Attribute data arrays carried by project elements.

use serde::{Deserialize, Serialize};

/// Where an attribute array lives on its element's mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// One value per node.
    Vertices,
    /// One value per line-set segment cell.
    Segments,
    /// One value per surface face cell.
    Faces,
    /// One value per volume grid cell.
    Cells,
}

impl Location {
    /// Returns true if arrays at this location bind to mesh nodes
    /// rather than cells.
    #[must_use]
    pub fn is_node(self) -> bool {
        matches!(self, Location::Vertices)
    }
}

/// A named numeric array attached to an element.
///
/// The array is caller-owned input; conversions copy the values they bind
/// and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarData {
    /// Array name, used as the key on the output mesh.
    pub name: String,
    /// Whether the values are per-node or per-cell.
    pub location: Location,
    /// The values themselves.
    pub values: Vec<f64>,
}

impl ScalarData {
    /// Creates a named data array.
    pub fn new(name: impl Into<String>, location: Location, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            location,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_binding_target() {
        assert!(Location::Vertices.is_node());
        assert!(!Location::Segments.is_node());
        assert!(!Location::Faces.is_node());
        assert!(!Location::Cells.is_node());
    }

    #[test]
    fn test_new_scalar_data() {
        let data = ScalarData::new("assay", Location::Cells, vec![1.0, 2.0]);
        assert_eq!(data.name, "assay");
        assert_eq!(data.values.len(), 2);
    }
}
