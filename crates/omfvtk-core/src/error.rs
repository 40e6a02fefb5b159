//! Error types for omfvtk-rs.

use thiserror::Error;

/// The main error type for omfvtk-rs conversions.
#[derive(Error, Debug)]
pub enum OmfVtkError {
    /// A grid geometry was supplied with a non-orthogonal axis frame.
    #[error("axis_u, axis_v, and axis_w must be orthogonal")]
    NonOrthogonalAxes,

    /// The dispatcher received a geometry kind with no matching builder.
    #[error("geometry of kind '{0}' is not supported")]
    UnsupportedKind(String),

    /// A data array's length does not match the target node/cell count.
    #[error("array '{name}' has {actual} values but the target holds {expected}")]
    SizeMismatch {
        /// Name of the offending array.
        name: String,
        /// Number of nodes or cells the array must cover.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// Converting a named element of a collection failed.
    #[error("failed to convert element '{name}': {source}")]
    ElementConversion {
        /// Name of the element that failed.
        name: String,
        /// The underlying conversion error.
        #[source]
        source: Box<OmfVtkError>,
    },

    /// A texture image payload could not be decoded.
    #[error("texture image error: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// I/O error while reading a texture image payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OmfVtkError {
    /// Wraps this error with the name of the element being converted.
    #[must_use]
    pub fn for_element(self, name: impl Into<String>) -> Self {
        OmfVtkError::ElementConversion {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// A specialized Result type for omfvtk-rs conversions.
pub type Result<T> = std::result::Result<T, OmfVtkError>;
