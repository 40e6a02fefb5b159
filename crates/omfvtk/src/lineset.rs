//! Line set conversion.

use glam::DVec3;
use omfvtk_core::LineSetGeometry;
use omfvtk_mesh::PolyData;

/// Name of the per-cell connectivity-group array added to every line set.
pub const LINE_INDEX_ARRAY: &str = "Line Index";

/// Converts a line set to a [`PolyData`] with one line cell per segment.
///
/// A `"Line Index"` cell array groups chained segments: the group counter
/// increments whenever a segment's start node differs from the previous
/// segment's end node, so a digitized path of consecutive segments shares
/// one index. `origin` is added to every node position.
#[must_use]
pub fn line_set_to_vtk(geom: &LineSetGeometry, origin: DVec3) -> PolyData {
    let points = geom.vertices.iter().map(|&v| v + origin).collect();
    let mut output = PolyData::from_lines(points, geom.segments.clone());
    output
        .cell_data
        .set(LINE_INDEX_ARRAY, connectivity_groups(&geom.segments));
    output
}

/// Assigns each segment the index of its connectivity group.
fn connectivity_groups(segments: &[[u32; 2]]) -> Vec<f64> {
    let mut groups = Vec::with_capacity(segments.len());
    let mut current = 0u32;
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && segment[0] != segments[i - 1][1] {
            current += 1;
        }
        groups.push(f64::from(current));
    }
    groups
}
