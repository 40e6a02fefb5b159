//! Input geometry descriptions for project elements.
//!
//! Each variant of [`Geometry`] carries the raw arrays decoded from a
//! project container. Geometries are read-only input: builders copy what
//! they need and never mutate the caller's arrays.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// A cloud of unconnected points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSetGeometry {
    /// One position per node.
    pub vertices: Vec<DVec3>,
}

impl PointSetGeometry {
    /// Creates a point set from vertex positions.
    #[must_use]
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self { vertices }
    }
}

/// Vertices connected by two-node line segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSetGeometry {
    /// One position per node.
    pub vertices: Vec<DVec3>,
    /// Start/end node index per segment. Indices are not validated.
    pub segments: Vec<[u32; 2]>,
}

impl LineSetGeometry {
    /// Creates a line set from vertices and segment index pairs.
    #[must_use]
    pub fn new(vertices: Vec<DVec3>, segments: Vec<[u32; 2]>) -> Self {
        Self { vertices, segments }
    }
}

/// A triangulated surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    /// One position per node.
    pub vertices: Vec<DVec3>,
    /// Node index triple per triangle. Indices are not validated.
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceGeometry {
    /// Creates a triangulated surface from vertices and triangle triples.
    #[must_use]
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }
}

/// A tensor-product surface grid with an optional per-node elevation offset.
///
/// The grid lies in the plane spanned by `axis_u` and `axis_v`; the third
/// axis is derived as their cross product. Node coordinates along each
/// axis are the cumulative sums of the tensor widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGridGeometry {
    /// Grid origin in world space.
    pub origin: DVec3,
    /// First in-plane axis.
    pub axis_u: DVec3,
    /// Second in-plane axis.
    pub axis_v: DVec3,
    /// Cell widths along `axis_u`.
    pub tensor_u: Vec<f64>,
    /// Cell widths along `axis_v`.
    pub tensor_v: Vec<f64>,
    /// Per-node elevation offsets along the derived `axis_w`, flattened
    /// u-fastest; length must equal the node count. `None` means flat.
    pub offset_w: Option<Vec<f64>>,
}

impl Default for SurfaceGridGeometry {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            axis_u: DVec3::X,
            axis_v: DVec3::Y,
            tensor_u: Vec::new(),
            tensor_v: Vec::new(),
            offset_w: None,
        }
    }
}

impl SurfaceGridGeometry {
    /// Returns the full frame, deriving `axis_w = axis_u x axis_v`.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::from_uv(self.axis_u, self.axis_v)
    }

    /// Returns the node counts along (u, v).
    #[must_use]
    pub fn node_shape(&self) -> (usize, usize) {
        (self.tensor_u.len() + 1, self.tensor_v.len() + 1)
    }

    /// Returns the cell counts along (u, v).
    #[must_use]
    pub fn cell_shape(&self) -> (usize, usize) {
        (self.tensor_u.len(), self.tensor_v.len())
    }
}

/// A tensor-product volumetric grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeGridGeometry {
    /// Grid origin in world space.
    pub origin: DVec3,
    /// First grid axis.
    pub axis_u: DVec3,
    /// Second grid axis.
    pub axis_v: DVec3,
    /// Third grid axis.
    pub axis_w: DVec3,
    /// Cell widths along `axis_u`.
    pub tensor_u: Vec<f64>,
    /// Cell widths along `axis_v`.
    pub tensor_v: Vec<f64>,
    /// Cell widths along `axis_w`.
    pub tensor_w: Vec<f64>,
}

impl Default for VolumeGridGeometry {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            axis_u: DVec3::X,
            axis_v: DVec3::Y,
            axis_w: DVec3::Z,
            tensor_u: Vec::new(),
            tensor_v: Vec::new(),
            tensor_w: Vec::new(),
        }
    }
}

impl VolumeGridGeometry {
    /// Returns the axis frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.axis_u, self.axis_v, self.axis_w)
    }

    /// Returns the cell counts along (u, v, w).
    #[must_use]
    pub fn cell_shape(&self) -> (usize, usize, usize) {
        (
            self.tensor_u.len(),
            self.tensor_v.len(),
            self.tensor_w.len(),
        )
    }
}

/// The geometry payload of an element.
///
/// Marked non-exhaustive so that future container kinds can be added
/// without breaking downstream matches; the dispatcher reports unmatched
/// kinds as unsupported rather than failing to compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Geometry {
    /// A cloud of unconnected points.
    PointSet(PointSetGeometry),
    /// Vertices joined by line segments.
    LineSet(LineSetGeometry),
    /// A triangulated surface.
    Surface(SurfaceGeometry),
    /// A tensor-product surface grid.
    SurfaceGrid(SurfaceGridGeometry),
    /// A tensor-product volumetric grid.
    VolumeGrid(VolumeGridGeometry),
}

impl Geometry {
    /// Returns the kind tag for dispatch and error reporting.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::PointSet(_) => "PointSet",
            Geometry::LineSet(_) => "LineSet",
            Geometry::Surface(_) => "Surface",
            Geometry::SurfaceGrid(_) => "SurfaceGrid",
            Geometry::VolumeGrid(_) => "VolumeGrid",
        }
    }

    /// Returns the number of mesh nodes this geometry produces.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        match self {
            Geometry::PointSet(g) => g.vertices.len(),
            Geometry::LineSet(g) => g.vertices.len(),
            Geometry::Surface(g) => g.vertices.len(),
            Geometry::SurfaceGrid(g) => {
                let (nu, nv) = g.node_shape();
                nu * nv
            }
            Geometry::VolumeGrid(g) => {
                let (nu, nv, nw) = g.cell_shape();
                (nu + 1) * (nv + 1) * (nw + 1)
            }
        }
    }

    /// Returns the number of mesh cells this geometry produces.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        match self {
            Geometry::PointSet(g) => g.vertices.len(),
            Geometry::LineSet(g) => g.segments.len(),
            Geometry::Surface(g) => g.triangles.len(),
            Geometry::SurfaceGrid(g) => {
                let (nu, nv) = g.cell_shape();
                nu * nv
            }
            Geometry::VolumeGrid(g) => {
                let (nu, nv, nw) = g.cell_shape();
                nu * nv * nw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_counts() {
        let geom = Geometry::PointSet(PointSetGeometry::new(vec![DVec3::ZERO; 7]));
        assert_eq!(geom.num_nodes(), 7);
        assert_eq!(geom.num_cells(), 7);
    }

    #[test]
    fn test_line_set_counts() {
        let geom = Geometry::LineSet(LineSetGeometry::new(
            vec![DVec3::ZERO; 4],
            vec![[0, 1], [1, 2]],
        ));
        assert_eq!(geom.num_nodes(), 4);
        assert_eq!(geom.num_cells(), 2);
    }

    #[test]
    fn test_surface_grid_counts() {
        let geom = Geometry::SurfaceGrid(SurfaceGridGeometry {
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 15],
            ..Default::default()
        });
        assert_eq!(geom.num_nodes(), 11 * 16);
        assert_eq!(geom.num_cells(), 10 * 15);
    }

    #[test]
    fn test_volume_grid_counts() {
        let geom = Geometry::VolumeGrid(VolumeGridGeometry {
            tensor_u: vec![1.0; 10],
            tensor_v: vec![1.0; 15],
            tensor_w: vec![1.0; 20],
            ..Default::default()
        });
        assert_eq!(geom.num_nodes(), 11 * 16 * 21);
        assert_eq!(geom.num_cells(), 10 * 15 * 20);
    }

    #[test]
    fn test_volume_default_frame_is_canonical() {
        let geom = VolumeGridGeometry::default();
        assert!(geom.frame().is_canonical());
    }
}
