//! Unstructured point, line, and triangle meshes.

use glam::DVec3;

use crate::attributes::{AttributeSet, TextureMap};

/// Cell connectivity of a [`PolyData`] mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyCells {
    /// One zero-dimensional cell per node.
    Vertices,
    /// Two-node line segments.
    Lines(Vec<[u32; 2]>),
    /// Three-node triangles.
    Triangles(Vec<[u32; 3]>),
}

/// A mesh of explicit points with vertex, line, or triangle cells.
///
/// Cell indices reference the point list and are not validated;
/// out-of-range indices are a caller error.
#[derive(Debug, Clone)]
pub struct PolyData {
    points: Vec<DVec3>,
    cells: PolyCells,
    /// Arrays bound to nodes.
    pub point_data: AttributeSet,
    /// Arrays bound to cells.
    pub cell_data: AttributeSet,
    /// Planar texture mappings bound to nodes.
    pub texture_maps: Vec<TextureMap>,
}

impl PolyData {
    /// Creates a point mesh with one vertex cell per point.
    #[must_use]
    pub fn from_points(points: Vec<DVec3>) -> Self {
        Self {
            points,
            cells: PolyCells::Vertices,
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
            texture_maps: Vec::new(),
        }
    }

    /// Creates a line mesh with one cell per segment index pair.
    #[must_use]
    pub fn from_lines(points: Vec<DVec3>, lines: Vec<[u32; 2]>) -> Self {
        Self {
            points,
            cells: PolyCells::Lines(lines),
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
            texture_maps: Vec::new(),
        }
    }

    /// Creates a triangle mesh with one cell per index triple.
    #[must_use]
    pub fn from_triangles(points: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            points,
            cells: PolyCells::Triangles(triangles),
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
            texture_maps: Vec::new(),
        }
    }

    /// Returns the node positions.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the cell connectivity.
    #[must_use]
    pub fn cells(&self) -> &PolyCells {
        &self.cells
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        match &self.cells {
            PolyCells::Vertices => self.points.len(),
            PolyCells::Lines(lines) => lines.len(),
            PolyCells::Triangles(tris) => tris.len(),
        }
    }

    /// Translates every node by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_cells_match_points() {
        for n in [0, 1, 5] {
            let pd = PolyData::from_points(vec![DVec3::ZERO; n]);
            assert_eq!(pd.num_points(), n);
            assert_eq!(pd.num_cells(), n);
        }
    }

    #[test]
    fn test_line_cells() {
        let pd = PolyData::from_lines(vec![DVec3::ZERO; 3], vec![[0, 1], [1, 2]]);
        assert_eq!(pd.num_points(), 3);
        assert_eq!(pd.num_cells(), 2);
    }

    #[test]
    fn test_translate() {
        let mut pd = PolyData::from_points(vec![DVec3::ZERO, DVec3::X]);
        pd.translate(DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(pd.points()[0], DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(pd.points()[1], DVec3::new(1.0, 1.0, 0.0));
    }
}
