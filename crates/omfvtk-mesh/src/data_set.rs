//! The tagged union over the concrete mesh containers.

use std::borrow::Cow;

use glam::DVec3;

use crate::attributes::{AttributeSet, TextureMap};
use crate::poly_data::PolyData;
use crate::rectilinear::RectilinearGrid;
use crate::structured::StructuredGrid;

/// Any converted mesh.
#[derive(Debug, Clone)]
pub enum DataSet {
    /// Point, line, or triangle mesh.
    PolyData(PolyData),
    /// Axis-aligned tensor grid.
    RectilinearGrid(RectilinearGrid),
    /// Rotated tensor grid with explicit points.
    StructuredGrid(StructuredGrid),
}

impl DataSet {
    /// Returns the number of nodes.
    #[must_use]
    pub fn num_points(&self) -> usize {
        match self {
            DataSet::PolyData(d) => d.num_points(),
            DataSet::RectilinearGrid(d) => d.num_points(),
            DataSet::StructuredGrid(d) => d.num_points(),
        }
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        match self {
            DataSet::PolyData(d) => d.num_cells(),
            DataSet::RectilinearGrid(d) => d.num_cells(),
            DataSet::StructuredGrid(d) => d.num_cells(),
        }
    }

    /// Returns the total number of bound point and cell arrays.
    #[must_use]
    pub fn num_arrays(&self) -> usize {
        self.point_data().len() + self.cell_data().len()
    }

    /// Returns the node-bound arrays.
    #[must_use]
    pub fn point_data(&self) -> &AttributeSet {
        match self {
            DataSet::PolyData(d) => &d.point_data,
            DataSet::RectilinearGrid(d) => &d.point_data,
            DataSet::StructuredGrid(d) => &d.point_data,
        }
    }

    /// Returns the node-bound arrays mutably.
    pub fn point_data_mut(&mut self) -> &mut AttributeSet {
        match self {
            DataSet::PolyData(d) => &mut d.point_data,
            DataSet::RectilinearGrid(d) => &mut d.point_data,
            DataSet::StructuredGrid(d) => &mut d.point_data,
        }
    }

    /// Returns the cell-bound arrays.
    #[must_use]
    pub fn cell_data(&self) -> &AttributeSet {
        match self {
            DataSet::PolyData(d) => &d.cell_data,
            DataSet::RectilinearGrid(d) => &d.cell_data,
            DataSet::StructuredGrid(d) => &d.cell_data,
        }
    }

    /// Returns the cell-bound arrays mutably.
    pub fn cell_data_mut(&mut self) -> &mut AttributeSet {
        match self {
            DataSet::PolyData(d) => &mut d.cell_data,
            DataSet::RectilinearGrid(d) => &mut d.cell_data,
            DataSet::StructuredGrid(d) => &mut d.cell_data,
        }
    }

    /// Returns the bound texture mappings.
    #[must_use]
    pub fn texture_maps(&self) -> &[TextureMap] {
        match self {
            DataSet::PolyData(d) => &d.texture_maps,
            DataSet::RectilinearGrid(d) => &d.texture_maps,
            DataSet::StructuredGrid(d) => &d.texture_maps,
        }
    }

    /// Returns the bound texture mappings mutably.
    pub fn texture_maps_mut(&mut self) -> &mut Vec<TextureMap> {
        match self {
            DataSet::PolyData(d) => &mut d.texture_maps,
            DataSet::RectilinearGrid(d) => &mut d.texture_maps,
            DataSet::StructuredGrid(d) => &mut d.texture_maps,
        }
    }

    /// Returns the node positions.
    ///
    /// Borrowed for meshes with explicit points; materialized on the fly
    /// for rectilinear grids.
    #[must_use]
    pub fn node_positions(&self) -> Cow<'_, [DVec3]> {
        match self {
            DataSet::PolyData(d) => Cow::Borrowed(d.points()),
            DataSet::RectilinearGrid(d) => Cow::Owned(d.node_positions()),
            DataSet::StructuredGrid(d) => Cow::Borrowed(d.points()),
        }
    }

    /// Translates every node by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        match self {
            DataSet::PolyData(d) => d.translate(offset),
            DataSet::RectilinearGrid(d) => d.translate(offset),
            DataSet::StructuredGrid(d) => d.translate(offset),
        }
    }
}

impl From<PolyData> for DataSet {
    fn from(data: PolyData) -> Self {
        DataSet::PolyData(data)
    }
}

impl From<RectilinearGrid> for DataSet {
    fn from(grid: RectilinearGrid) -> Self {
        DataSet::RectilinearGrid(grid)
    }
}

impl From<StructuredGrid> for DataSet {
    fn from(grid: StructuredGrid) -> Self {
        DataSet::StructuredGrid(grid)
    }
}
