//! Point set conversion.

use glam::DVec3;
use omfvtk_core::PointSetGeometry;
use omfvtk_mesh::PolyData;

/// Converts a point set to a [`PolyData`] with one vertex cell per node.
///
/// `origin` is added to every node position.
#[must_use]
pub fn point_set_to_vtk(geom: &PointSetGeometry, origin: DVec3) -> PolyData {
    let points = geom.vertices.iter().map(|&v| v + origin).collect();
    PolyData::from_points(points)
}
