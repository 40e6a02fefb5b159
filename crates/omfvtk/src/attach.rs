//! Attribute binding onto converted meshes.

use omfvtk_core::{OmfVtkError, Result, ScalarData};
use omfvtk_mesh::DataSet;

/// Binds attribute arrays to a converted mesh.
///
/// `Vertices`-located arrays bind to nodes and must match the node count;
/// every other location binds to cells and must match the cell count.
/// Arrays are never truncated or padded; a length mismatch fails with
/// [`OmfVtkError::SizeMismatch`]. Name collisions resolve last-write-wins
/// in input order.
pub fn attach_data(output: &mut DataSet, data: &[ScalarData]) -> Result<()> {
    for d in data {
        let expected = if d.location.is_node() {
            output.num_points()
        } else {
            output.num_cells()
        };
        if d.values.len() != expected {
            return Err(OmfVtkError::SizeMismatch {
                name: d.name.clone(),
                expected,
                actual: d.values.len(),
            });
        }
        if d.location.is_node() {
            output.point_data_mut().set(d.name.clone(), d.values.clone());
        } else {
            output.cell_data_mut().set(d.name.clone(), d.values.clone());
        }
    }
    Ok(())
}
