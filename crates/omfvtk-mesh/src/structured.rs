//! Structured grids with explicit node positions.

use glam::DVec3;

use crate::attributes::{AttributeSet, TextureMap};

/// Number of cells in a structured grid of the given node dimensions.
///
/// Dimensions of 1 are flat and contribute a single cell layer; a zero
/// dimension means an empty grid.
pub(crate) fn cell_count(dims: [usize; 3]) -> usize {
    if dims.contains(&0) {
        return 0;
    }
    dims.iter().map(|&d| (d - 1).max(1)).product()
}

/// A grid with implicit (i, j, k) logical indexing but explicit per-node
/// coordinates, used when the grid is rotated relative to the world axes.
///
/// Points are stored u-fastest: node (i, j, k) lives at flat index
/// `i + j * dims[0] + k * dims[0] * dims[1]`. Cells follow the same
/// column-major ordering.
#[derive(Debug, Clone)]
pub struct StructuredGrid {
    dims: [usize; 3],
    points: Vec<DVec3>,
    /// Arrays bound to nodes.
    pub point_data: AttributeSet,
    /// Arrays bound to cells.
    pub cell_data: AttributeSet,
    /// Planar texture mappings bound to nodes.
    pub texture_maps: Vec<TextureMap>,
}

impl StructuredGrid {
    /// Creates a structured grid from node dimensions and positions.
    ///
    /// # Panics
    /// Panics if `points.len()` does not equal the product of `dims`.
    #[must_use]
    pub fn new(dims: [usize; 3], points: Vec<DVec3>) -> Self {
        assert_eq!(
            points.len(),
            dims.iter().product::<usize>(),
            "point count must match grid dimensions"
        );
        Self {
            dims,
            points,
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
            texture_maps: Vec::new(),
        }
    }

    /// Returns the node dimensions.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Returns the node positions, u-fastest.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        cell_count(self.dims)
    }

    /// Translates every node by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }
}
