//! Volume grid conversion.

use glam::DVec3;
use omfvtk_core::{
    grid_coordinates, Location, OmfVtkError, Result, ScalarData, VolumeGridGeometry,
};
use omfvtk_mesh::{DataSet, RectilinearGrid, StructuredGrid};

/// Converts a tensor-product volume grid to a mesh.
///
/// When the axis frame equals the canonical basis the result is a
/// [`RectilinearGrid`] built directly from the three cumulative
/// coordinate arrays, with no explicit 3D point storage. Any other
/// orthogonal frame produces a [`StructuredGrid`] with identical node and
/// cell counts: the full node grid is built as the triple outer product
/// (u fastest), rotated, and shifted by the global `origin`.
///
/// Fails with [`OmfVtkError::NonOrthogonalAxes`] for any other frame.
pub fn volume_grid_geom_to_vtk(geom: &VolumeGridGeometry, origin: DVec3) -> Result<DataSet> {
    let x = grid_coordinates(geom.origin.x, &geom.tensor_u);
    let y = grid_coordinates(geom.origin.y, &geom.tensor_v);
    let z = grid_coordinates(geom.origin.z, &geom.tensor_w);

    let frame = geom.frame();
    if frame.is_canonical() {
        log::debug!(
            "volume grid: canonical axes, rectilinear output ({}x{}x{} nodes)",
            x.len(),
            y.len(),
            z.len()
        );
        let mut output = RectilinearGrid::new(x, y, z);
        output.translate(origin);
        return Ok(output.into());
    }

    if !frame.is_orthogonal() {
        return Err(OmfVtkError::NonOrthogonalAxes);
    }

    log::debug!(
        "volume grid: rotated axes, structured output ({}x{}x{} nodes)",
        x.len(),
        y.len(),
        z.len()
    );
    let dims = [x.len(), y.len(), z.len()];
    let mut points = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for &zk in &z {
        for &yj in &y {
            for &xi in &x {
                points.push(frame.rotate_point(DVec3::new(xi, yj, zk)) + origin);
            }
        }
    }
    Ok(StructuredGrid::new(dims, points).into())
}

/// Reorders a flat cell array from the caller's row-major flattening
/// (w fastest) into the mesh's column-major cell order (u fastest).
///
/// `dest[i + j*nu + k*nu*nv] = src[(i*nv + j)*nw + k]`.
#[must_use]
pub fn reorder_cell_values(values: &[f64], shape: (usize, usize, usize)) -> Vec<f64> {
    let (nu, nv, nw) = shape;
    let mut out = vec![0.0; values.len()];
    for i in 0..nu {
        for j in 0..nv {
            for k in 0..nw {
                out[i + j * nu + k * nu * nv] = values[(i * nv + j) * nw + k];
            }
        }
    }
    out
}

/// Binds a volume element's data arrays, reordering cell arrays into the
/// mesh's native cell ordering first.
///
/// Node arrays bind directly. Fails with [`OmfVtkError::SizeMismatch`]
/// when an array does not cover its target exactly.
pub fn attach_volume_data(
    output: &mut DataSet,
    geom: &VolumeGridGeometry,
    data: &[ScalarData],
) -> Result<()> {
    let shape = geom.cell_shape();
    let num_cells = shape.0 * shape.1 * shape.2;
    for d in data {
        if d.location == Location::Vertices {
            crate::attach::attach_data(output, std::slice::from_ref(d))?;
            continue;
        }
        if d.values.len() != num_cells {
            return Err(OmfVtkError::SizeMismatch {
                name: d.name.clone(),
                expected: num_cells,
                actual: d.values.len(),
            });
        }
        output
            .cell_data_mut()
            .set(d.name.clone(), reorder_cell_values(&d.values, shape));
    }
    Ok(())
}
