//! Triangulated surface and surface grid conversion.

use glam::DVec3;
use omfvtk_core::{grid_coordinates, OmfVtkError, Result, SurfaceGeometry, SurfaceGridGeometry};
use omfvtk_mesh::{PolyData, StructuredGrid};

/// Converts a triangulated surface to a [`PolyData`] with one triangle
/// cell per index triple.
///
/// Positions are copied verbatim plus `origin`. Out-of-range triangle
/// indices are not validated.
#[must_use]
pub fn surface_geom_to_vtk(geom: &SurfaceGeometry, origin: DVec3) -> PolyData {
    let points = geom.vertices.iter().map(|&v| v + origin).collect();
    PolyData::from_triangles(points, geom.triangles.clone())
}

/// Converts a tensor-product surface grid to a [`StructuredGrid`].
///
/// The node grid is the outer product of the cumulative tensor
/// coordinates, u-fastest, with a single w layer. Elevation offsets are
/// added along the local w axis before the grid is rotated into world
/// space; the geometry origin and the global `origin` are added after
/// rotation.
///
/// Fails with [`OmfVtkError::NonOrthogonalAxes`] if `axis_u` and `axis_v`
/// are not perpendicular, and with [`OmfVtkError::SizeMismatch`] if the
/// elevation-offset length does not equal the node count.
pub fn surface_grid_geom_to_vtk(
    geom: &SurfaceGridGeometry,
    origin: DVec3,
) -> Result<StructuredGrid> {
    let frame = geom.frame();
    if !frame.is_orthogonal() {
        return Err(OmfVtkError::NonOrthogonalAxes);
    }

    let (num_u, num_v) = geom.node_shape();
    if let Some(offsets) = &geom.offset_w {
        if offsets.len() != num_u * num_v {
            return Err(OmfVtkError::SizeMismatch {
                name: "offset_w".to_string(),
                expected: num_u * num_v,
                actual: offsets.len(),
            });
        }
    }

    // Node coordinates in the local grid plane; the origin enters after
    // rotation, so the prefix sums start at zero.
    let u = grid_coordinates(0.0, &geom.tensor_u);
    let v = grid_coordinates(0.0, &geom.tensor_v);

    let shift = geom.origin + origin;
    let mut points = Vec::with_capacity(num_u * num_v);
    for (j, &vj) in v.iter().enumerate() {
        for (i, &ui) in u.iter().enumerate() {
            let w = geom
                .offset_w
                .as_ref()
                .map_or(0.0, |offsets| offsets[i + j * num_u]);
            points.push(frame.rotate_point(DVec3::new(ui, vj, w)) + shift);
        }
    }

    log::debug!("surface grid: {num_u}x{num_v} nodes, single w layer");
    Ok(StructuredGrid::new([num_u, num_v, 1], points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangulated_counts() {
        let geom = SurfaceGeometry::new(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let output = surface_geom_to_vtk(&geom, DVec3::ZERO);
        assert_eq!(output.num_points(), 4);
        assert_eq!(output.num_cells(), 2);
    }

    #[test]
    fn test_triangulated_positions_verbatim_plus_origin() {
        let geom = SurfaceGeometry::new(vec![DVec3::new(1.0, 2.0, 3.0)], Vec::new());
        let output = surface_geom_to_vtk(&geom, DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(output.points()[0], DVec3::new(1.0, 2.0, 13.0));
    }

    fn flat_grid() -> SurfaceGridGeometry {
        SurfaceGridGeometry {
            tensor_u: vec![1.0, 1.0],
            tensor_v: vec![1.0],
            ..Default::default()
        }
    }

    #[test]
    fn test_grid_dimensions_and_counts() {
        let output = surface_grid_geom_to_vtk(&flat_grid(), DVec3::ZERO).unwrap();
        assert_eq!(output.dims(), [3, 2, 1]);
        assert_eq!(output.num_points(), 6);
        assert_eq!(output.num_cells(), 2);
    }

    #[test]
    fn test_grid_nodes_u_fastest() {
        let output = surface_grid_geom_to_vtk(&flat_grid(), DVec3::ZERO).unwrap();
        assert_eq!(output.points()[0], DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(output.points()[1], DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(output.points()[2], DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(output.points()[3], DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_grid_elevation_offsets_applied() {
        let mut geom = flat_grid();
        geom.offset_w = Some(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let output = surface_grid_geom_to_vtk(&geom, DVec3::ZERO).unwrap();
        assert_eq!(output.points()[4].z, 4.0);
    }

    #[test]
    fn test_grid_origin_added_after_rotation() {
        // Grid in the xz plane: axis_v points along world z.
        let geom = SurfaceGridGeometry {
            origin: DVec3::new(50.0, 50.0, 50.0),
            axis_u: DVec3::X,
            axis_v: DVec3::Z,
            tensor_u: vec![1.0],
            tensor_v: vec![1.0],
            offset_w: None,
        };
        let output = surface_grid_geom_to_vtk(&geom, DVec3::ZERO).unwrap();
        // Node (1, 1) in local uv lands at origin + axis_u + axis_v.
        assert_eq!(output.points()[3], DVec3::new(51.0, 50.0, 51.0));
    }

    #[test]
    fn test_grid_non_orthogonal_axes_fail() {
        let geom = SurfaceGridGeometry {
            axis_u: DVec3::X,
            axis_v: DVec3::X,
            tensor_u: vec![1.0],
            tensor_v: vec![1.0],
            ..Default::default()
        };
        assert!(matches!(
            surface_grid_geom_to_vtk(&geom, DVec3::ZERO),
            Err(OmfVtkError::NonOrthogonalAxes)
        ));
    }

    #[test]
    fn test_grid_wrong_offset_length_fails() {
        let mut geom = flat_grid();
        geom.offset_w = Some(vec![0.0; 5]);
        assert!(matches!(
            surface_grid_geom_to_vtk(&geom, DVec3::ZERO),
            Err(OmfVtkError::SizeMismatch { expected: 6, actual: 5, .. })
        ));
    }
}
