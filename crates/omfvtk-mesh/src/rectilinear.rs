//! Axis-aligned rectilinear grids.

use glam::DVec3;

use crate::attributes::{AttributeSet, TextureMap};
use crate::structured::cell_count;

/// An axis-aligned tensor grid stored as three independent per-axis
/// coordinate arrays, with no explicit 3D point storage.
///
/// Nodes and cells follow the same column-major (x-fastest) ordering as
/// [`StructuredGrid`](crate::StructuredGrid).
#[derive(Debug, Clone)]
pub struct RectilinearGrid {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    /// Arrays bound to nodes.
    pub point_data: AttributeSet,
    /// Arrays bound to cells.
    pub cell_data: AttributeSet,
    /// Planar texture mappings bound to nodes.
    pub texture_maps: Vec<TextureMap>,
}

impl RectilinearGrid {
    /// Creates a rectilinear grid from per-axis node coordinates.
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self {
            x,
            y,
            z,
            point_data: AttributeSet::new(),
            cell_data: AttributeSet::new(),
            texture_maps: Vec::new(),
        }
    }

    /// Returns the node coordinates along x.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the node coordinates along y.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the node coordinates along z.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Returns the node dimensions.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        cell_count(self.dims())
    }

    /// Materializes the node positions in column-major (x-fastest) order.
    #[must_use]
    pub fn node_positions(&self) -> Vec<DVec3> {
        let mut points = Vec::with_capacity(self.num_points());
        for &z in &self.z {
            for &y in &self.y {
                for &x in &self.x {
                    points.push(DVec3::new(x, y, z));
                }
            }
        }
        points
    }

    /// Translates the grid by adding `offset` to the per-axis coordinates.
    pub fn translate(&mut self, offset: DVec3) {
        for x in &mut self.x {
            *x += offset.x;
        }
        for y in &mut self.y {
            *y += offset.y;
        }
        for z in &mut self.z {
            *z += offset.z;
        }
    }
}
