//! omfvtk-rs: converts mining-project geometry elements into VTK-style
//! mesh data sets.
//!
//! The engine takes already-decoded project elements (point sets, line
//! sets, triangulated surfaces, tensor-product surface grids, and
//! tensor-product volume grids) and turns each into a mesh container
//! with its attribute arrays bound to nodes or cells and its textures
//! mapped to planar coordinates. Reading the container file format and
//! rendering the results are out of scope; the entry point is a
//! [`Project`] produced by an external decoder.
//!
//! # Quick Start
//!
//! ```
//! use omfvtk::*;
//!
//! fn main() -> Result<()> {
//!     let element = Element::new(
//!         "points of interest",
//!         Geometry::PointSet(PointSetGeometry::new(vec![
//!             DVec3::new(0.0, 0.0, 0.0),
//!             DVec3::new(1.0, 0.0, 0.0),
//!         ])),
//!     );
//!
//!     let mesh = wrap(&element, DVec3::ZERO)?;
//!     assert_eq!(mesh.num_points(), 2);
//!
//!     let project = Project::new("demo").with_element(element);
//!     let blocks = project_to_vtk(&project)?;
//!     assert_eq!(blocks.block_name(0), Some("points of interest"));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Conversion happens per geometry kind:
//!
//! - [`point_set_to_vtk`]: one vertex cell per node
//! - [`line_set_to_vtk`]: line cells plus a connectivity-group index
//! - [`surface_geom_to_vtk`]: triangle cells
//! - [`surface_grid_geom_to_vtk`]: structured grid from tensor axes
//! - [`volume_grid_geom_to_vtk`]: rectilinear or structured grid,
//!   chosen by the axis orientation
//!
//! [`wrap`] dispatches an element to its builder and binds the element's
//! data arrays and textures; [`project_to_vtk`] folds a whole project
//! into a [`MultiBlock`] keyed by element name.

pub mod attach;
pub mod lineset;
pub mod pointset;
pub mod surface;
pub mod texture;
pub mod volume;
pub mod wrapper;

pub use attach::attach_data;
pub use lineset::{line_set_to_vtk, LINE_INDEX_ARRAY};
pub use pointset::point_set_to_vtk;
pub use surface::{surface_geom_to_vtk, surface_grid_geom_to_vtk};
pub use texture::{attach_texture_coordinates, decode_textures, texture_coordinates};
pub use volume::{reorder_cell_values, volume_grid_geom_to_vtk};
pub use wrapper::{project_to_vtk, project_to_vtk_with_textures, wrap, wrap_elements};

// Re-export the data model
pub use omfvtk_core::{
    grid_coordinates, DMat3, DVec2, DVec3, Element, Frame, Geometry, ImagePayload, ImageTexture,
    LineSetGeometry, Location, OmfVtkError, PointSetGeometry, Project, Result, ScalarData,
    SurfaceGeometry, SurfaceGridGeometry, VolumeGridGeometry,
};

// Re-export the mesh containers
pub use omfvtk_mesh::{
    AttributeSet, Block, DataArray, DataSet, MultiBlock, PolyCells, PolyData, RectilinearGrid,
    StructuredGrid, TextureMap,
};
