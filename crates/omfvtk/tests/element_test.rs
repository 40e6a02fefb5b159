//! Per-element conversion tests over an assorted project, one element of
//! each geometry kind, mirroring the shapes a real container file holds.

use omfvtk::*;

/// Deterministic pseudo-data so assertions can name exact values.
fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn scatter(n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            DVec3::new(t.sin(), t.cos(), t * 0.1)
        })
        .collect()
}

fn point_set_element() -> Element {
    Element::new(
        "Random Points",
        Geometry::PointSet(PointSetGeometry::new(scatter(100))),
    )
    .with_description("Just scattered points")
    .with_data(vec![
        ScalarData::new("ramp data", Location::Vertices, ramp(100)),
        ScalarData::new("More ramp data", Location::Vertices, ramp(100)),
    ])
}

fn line_set_element() -> Element {
    let segments = (0..50).map(|i| [i, (i * 7 + 1) % 100]).collect();
    Element::new(
        "Random Line",
        Geometry::LineSet(LineSetGeometry::new(scatter(100), segments)),
    )
    .with_data(vec![
        ScalarData::new("vert data", Location::Vertices, ramp(100)),
        ScalarData::new("segment data", Location::Segments, ramp(50)),
    ])
}

fn surface_element() -> Element {
    let triangles = (0..50).map(|i| [i, (i + 31) % 100, (i + 62) % 100]).collect();
    Element::new(
        "trisurf",
        Geometry::Surface(SurfaceGeometry::new(scatter(100), triangles)),
    )
    .with_data(vec![
        ScalarData::new("vert data", Location::Vertices, ramp(100)),
        ScalarData::new("face data", Location::Faces, ramp(50)),
    ])
}

fn grid_surface_element() -> Element {
    Element::new(
        "gridsurf",
        Geometry::SurfaceGrid(SurfaceGridGeometry {
            origin: DVec3::new(50.0, 50.0, 50.0),
            axis_u: DVec3::X,
            axis_v: DVec3::Z,
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 15],
            offset_w: Some(ramp(11 * 16)),
        }),
    )
    .with_data(vec![
        ScalarData::new("vert data", Location::Vertices, ramp(11 * 16)),
        ScalarData::new("face data", Location::Faces, ramp(10 * 15)),
    ])
}

fn volume_element() -> Element {
    Element::new(
        "vol",
        Geometry::VolumeGrid(VolumeGridGeometry {
            origin: DVec3::new(10.0, 10.0, -10.0),
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 15],
            tensor_w: vec![1.0; 20],
            ..Default::default()
        }),
    )
    .with_data(vec![ScalarData::new(
        "Random Data",
        Location::Cells,
        ramp(10 * 15 * 20),
    )])
}

fn rotated_volume_element() -> Element {
    Element::new(
        "vol_ir",
        Geometry::VolumeGrid(VolumeGridGeometry {
            origin: DVec3::new(10.0, 10.0, -10.0),
            axis_u: DVec3::new(1.0, 1.0, 0.0),
            axis_v: DVec3::new(0.0, 0.0, 1.0),
            axis_w: DVec3::new(1.0, -1.0, 0.0),
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 15],
            tensor_w: vec![1.0; 20],
        }),
    )
    .with_data(vec![ScalarData::new(
        "Random Data",
        Location::Cells,
        ramp(10 * 15 * 20),
    )])
}

#[test]
fn test_wrap_pointset() {
    let element = point_set_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::PolyData(_)));
    assert_eq!(mesh.num_arrays(), element.data.len());
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
}

#[test]
fn test_wrap_lineset() {
    let element = line_set_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::PolyData(_)));
    // The converter adds a "Line Index" array beyond the element's own.
    assert_eq!(mesh.num_arrays(), element.data.len() + 1);
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
    assert!(mesh.cell_data().get(LINE_INDEX_ARRAY).is_some());
}

#[test]
fn test_wrap_surface() {
    let element = surface_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::PolyData(_)));
    assert_eq!(mesh.num_arrays(), element.data.len());
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
}

#[test]
fn test_wrap_grid_surface() {
    let element = grid_surface_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::StructuredGrid(_)));
    assert_eq!(mesh.num_arrays(), element.data.len());
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
}

#[test]
fn test_wrap_volume() {
    let element = volume_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::RectilinearGrid(_)));
    assert_eq!(mesh.num_arrays(), 1);
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
}

#[test]
fn test_wrap_rotated_volume() {
    let element = rotated_volume_element();
    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    assert!(matches!(mesh, DataSet::StructuredGrid(_)));
    assert_eq!(mesh.num_arrays(), 1);
    assert_eq!(mesh.num_points(), element.geometry.num_nodes());
    assert_eq!(mesh.num_cells(), element.geometry.num_cells());
}

#[test]
fn test_volume_representations_agree_on_counts() {
    let axis_aligned = wrap(&volume_element(), DVec3::ZERO).unwrap();
    let rotated = wrap(&rotated_volume_element(), DVec3::ZERO).unwrap();
    assert_eq!(axis_aligned.num_points(), rotated.num_points());
    assert_eq!(axis_aligned.num_cells(), rotated.num_cells());
}

#[test]
fn test_volume_cell_reorder_against_source_index() {
    // Tensor lengths (2, 3, 1): source flattening is row-major (w
    // fastest), the mesh stores cells column-major (u fastest).
    let element = Element::new(
        "tiny vol",
        Geometry::VolumeGrid(VolumeGridGeometry {
            tensor_u: vec![1.0, 1.0],
            tensor_v: vec![1.0, 1.0, 1.0],
            tensor_w: vec![1.0],
            ..Default::default()
        }),
    )
    .with_data(vec![ScalarData::new("idx", Location::Cells, ramp(6))]);

    let mesh = wrap(&element, DVec3::ZERO).unwrap();
    let bound = mesh.cell_data().get("idx").unwrap();

    let (nu, nv, nw) = (2, 3, 1);
    for (i, j, k) in [(1usize, 2usize, 0usize), (1, 0, 0), (0, 1, 0)] {
        let mesh_index = i + j * nu + k * nu * nv;
        let source_index = (i * nv + j) * nw + k;
        assert_eq!(bound[mesh_index], source_index as f64);
    }
}

#[test]
fn test_wrap_elements_preserves_order_and_names() {
    let elements = vec![
        point_set_element(),
        line_set_element(),
        surface_element(),
        grid_surface_element(),
        volume_element(),
        rotated_volume_element(),
    ];
    let blocks = wrap_elements(&elements, DVec3::ZERO).unwrap();
    assert_eq!(blocks.num_blocks(), elements.len());
    assert_eq!(blocks.block_name(0), Some("Random Points"));
    assert_eq!(blocks.block_name(1), Some("Random Line"));
    assert_eq!(blocks.block_name(2), Some("trisurf"));
    assert_eq!(blocks.block_name(3), Some("gridsurf"));
    assert_eq!(blocks.block_name(4), Some("vol"));
    assert_eq!(blocks.block_name(5), Some("vol_ir"));
}

#[test]
fn test_non_orthogonal_grid_produces_no_partial_mesh() {
    let element = Element::new(
        "bad grid",
        Geometry::SurfaceGrid(SurfaceGridGeometry {
            axis_u: DVec3::X,
            axis_v: DVec3::X,
            tensor_u: vec![1.0],
            tensor_v: vec![1.0],
            ..Default::default()
        }),
    );
    assert!(matches!(
        wrap(&element, DVec3::ZERO),
        Err(OmfVtkError::NonOrthogonalAxes)
    ));
}

#[test]
fn test_global_origin_applies_to_every_kind() {
    let origin = DVec3::new(100.0, 200.0, 300.0);
    let mesh = wrap(&point_set_element(), origin).unwrap();
    let DataSet::PolyData(pd) = &mesh else {
        panic!("expected poly data");
    };
    assert_eq!(pd.points()[0], scatter(1)[0] + origin);

    let mesh = wrap(&volume_element(), origin).unwrap();
    let DataSet::RectilinearGrid(grid) = &mesh else {
        panic!("expected rectilinear grid");
    };
    assert_eq!(grid.x()[0], 10.0 + origin.x);
    assert_eq!(grid.z()[0], -10.0 + origin.z);
}
