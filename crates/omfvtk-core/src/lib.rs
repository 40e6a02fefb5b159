//! Core types for omfvtk-rs.
//!
//! This crate provides the fundamental types shared across omfvtk-rs:
//! - The caller-facing data model: [`Project`], [`Element`], the
//!   [`Geometry`] variants, [`ScalarData`] arrays, and [`ImageTexture`]s
//! - [`Frame`] for axis validation and rotation of grid geometries
//! - Tensor-axis expansion into node coordinates ([`grid_coordinates`])
//! - The [`OmfVtkError`] taxonomy used by every conversion

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Getters that return plain data don't all need must_use
#![allow(clippy::must_use_candidate)]

pub mod data;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod project;
pub mod tensor;
pub mod texture;

pub use data::{Location, ScalarData};
pub use error::{OmfVtkError, Result};
pub use frame::{Frame, ORTHOGONALITY_TOLERANCE};
pub use geometry::{
    Geometry, LineSetGeometry, PointSetGeometry, SurfaceGeometry, SurfaceGridGeometry,
    VolumeGridGeometry,
};
pub use project::{Element, Project};
pub use tensor::grid_coordinates;
pub use texture::{ImagePayload, ImageTexture};

// Re-export glam types for convenience
pub use glam::{DMat3, DVec2, DVec3};
