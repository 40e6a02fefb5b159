//! Mesh containers for omfvtk-rs.
//!
//! This crate provides the output side of the conversion engine:
//! - [`PolyData`] for point, line, and triangle meshes
//! - [`RectilinearGrid`] for axis-aligned tensor grids
//! - [`StructuredGrid`] for rotated tensor grids with explicit points
//! - [`DataSet`], the tagged union over the three
//! - [`MultiBlock`], an ordered name-keyed collection of data sets
//!
//! Every container owns its arrays outright; nothing aliases caller
//! buffers. Named attribute arrays live in [`AttributeSet`]s with
//! last-write-wins name semantics, and planar texture mappings in
//! [`TextureMap`]s.

// Getters that return plain data don't all need must_use
#![allow(clippy::must_use_candidate)]

pub mod attributes;
pub mod data_set;
pub mod multi_block;
pub mod poly_data;
pub mod rectilinear;
pub mod structured;

pub use attributes::{AttributeSet, DataArray, TextureMap};
pub use data_set::DataSet;
pub use multi_block::{Block, MultiBlock};
pub use poly_data::{PolyCells, PolyData};
pub use rectilinear::RectilinearGrid;
pub use structured::StructuredGrid;
