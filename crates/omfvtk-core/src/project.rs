//! Project and element containers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::data::ScalarData;
use crate::geometry::Geometry;
use crate::texture::ImageTexture;

/// A single named geometry with its attribute data and textures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Element name, used as the block key in collections.
    pub name: String,
    /// Optional free-form description.
    pub description: String,
    /// The geometry payload.
    pub geometry: Geometry,
    /// Attribute arrays to bind to the converted mesh.
    pub data: Vec<ScalarData>,
    /// Textures to map onto the converted mesh.
    pub textures: Vec<ImageTexture>,
}

impl Element {
    /// Creates an element with no data or textures.
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            geometry,
            data: Vec::new(),
            textures: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the attribute arrays.
    #[must_use]
    pub fn with_data(mut self, data: Vec<ScalarData>) -> Self {
        self.data = data;
        self
    }

    /// Sets the textures.
    #[must_use]
    pub fn with_textures(mut self, textures: Vec<ImageTexture>) -> Self {
        self.textures = textures;
        self
    }
}

/// An ordered collection of elements sharing one global origin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Optional free-form description.
    pub description: String,
    /// Global origin added to every converted element.
    pub origin: DVec3,
    /// The elements, in container order.
    pub elements: Vec<Element>,
}

impl Project {
    /// Creates an empty project at the world origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            origin: DVec3::ZERO,
            elements: Vec::new(),
        }
    }

    /// Sets the global origin.
    #[must_use]
    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    /// Appends an element.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }
}
