//! Builds a small in-memory project and converts it to mesh data sets.
//!
//! Run with: cargo run --example wrap_project

use omfvtk::*;

fn main() -> Result<()> {
    env_logger::init();

    let points = Element::new(
        "drill collars",
        Geometry::PointSet(PointSetGeometry::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 2.0),
            DVec3::new(10.0, 10.0, 1.0),
        ])),
    )
    .with_data(vec![ScalarData::new(
        "elevation",
        Location::Vertices,
        vec![0.0, 2.0, 1.0],
    )]);

    let block_model = Element::new(
        "block model",
        Geometry::VolumeGrid(VolumeGridGeometry {
            origin: DVec3::new(-5.0, -5.0, -10.0),
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 10],
            tensor_w: vec![0.5; 20],
            ..Default::default()
        }),
    )
    .with_data(vec![ScalarData::new(
        "grade",
        Location::Cells,
        (0..10 * 10 * 20).map(f64::from).collect(),
    )]);

    let project = Project::new("demo pit")
        .with_origin(DVec3::new(445_000.0, 493_000.0, 0.0))
        .with_element(points)
        .with_element(block_model);

    let blocks = project_to_vtk(&project)?;
    for (name, block) in blocks.iter() {
        if let Some(mesh) = block.as_data_set() {
            println!(
                "{name}: {} points, {} cells, {} arrays",
                mesh.num_points(),
                mesh.num_cells(),
                mesh.num_arrays()
            );
        }
    }
    Ok(())
}
