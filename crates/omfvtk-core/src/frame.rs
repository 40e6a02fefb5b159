//! Axis frames for grid geometries.
//!
//! A [`Frame`] holds the three axis vectors of a tensor grid. Grid builders
//! use it to validate orthogonality, to detect the canonical (axis-aligned)
//! orientation, and to rotate local grid coordinates into world space.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Maximum absolute pairwise dot product for axes to count as orthogonal.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-6;

/// Per-component tolerance when comparing a frame to the canonical basis.
const CANONICAL_TOLERANCE: f64 = 1e-8;

/// The axis frame of a tensor grid.
///
/// Axis vectors are not required to be unit length; rotation applies them
/// as-is without normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// First in-plane axis.
    pub axis_u: DVec3,
    /// Second in-plane axis.
    pub axis_v: DVec3,
    /// Out-of-plane axis.
    pub axis_w: DVec3,
}

impl Default for Frame {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl Frame {
    /// The canonical cartesian reference frame.
    pub const CANONICAL: Self = Self {
        axis_u: DVec3::X,
        axis_v: DVec3::Y,
        axis_w: DVec3::Z,
    };

    /// Creates a frame from three explicit axes.
    #[must_use]
    pub fn new(axis_u: DVec3, axis_v: DVec3, axis_w: DVec3) -> Self {
        Self {
            axis_u,
            axis_v,
            axis_w,
        }
    }

    /// Creates a frame from two in-plane axes, deriving `axis_w = axis_u x axis_v`.
    #[must_use]
    pub fn from_uv(axis_u: DVec3, axis_v: DVec3) -> Self {
        Self {
            axis_u,
            axis_v,
            axis_w: axis_u.cross(axis_v),
        }
    }

    /// Returns true if every pairwise dot product is below
    /// [`ORTHOGONALITY_TOLERANCE`] in absolute value.
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        self.axis_u.dot(self.axis_v).abs() < ORTHOGONALITY_TOLERANCE
            && self.axis_v.dot(self.axis_w).abs() < ORTHOGONALITY_TOLERANCE
            && self.axis_w.dot(self.axis_u).abs() < ORTHOGONALITY_TOLERANCE
    }

    /// Returns true if the axes equal the canonical cartesian basis
    /// (1,0,0), (0,1,0), (0,0,1) within a small componentwise tolerance.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.axis_u.abs_diff_eq(DVec3::X, CANONICAL_TOLERANCE)
            && self.axis_v.abs_diff_eq(DVec3::Y, CANONICAL_TOLERANCE)
            && self.axis_w.abs_diff_eq(DVec3::Z, CANONICAL_TOLERANCE)
    }

    /// Returns the basis matrix with the axes as columns.
    ///
    /// Multiplying a local point by this matrix is the right-multiplication
    /// of the row-vector point with the row-wise axis matrix.
    #[must_use]
    pub fn basis(&self) -> DMat3 {
        DMat3::from_cols(self.axis_u, self.axis_v, self.axis_w)
    }

    /// Rotates a local grid coordinate into world space.
    #[must_use]
    pub fn rotate_point(&self, point: DVec3) -> DVec3 {
        self.basis() * point
    }

    /// Rotates a slice of local grid coordinates in place.
    pub fn rotate_points(&self, points: &mut [DVec3]) {
        let basis = self.basis();
        for p in points {
            *p = basis * *p;
        }
    }
}
