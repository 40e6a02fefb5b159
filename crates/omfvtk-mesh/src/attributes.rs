//! Named data arrays and texture mappings stored on meshes.

use glam::DVec2;
use image::RgbImage;

/// A named scalar array stored on a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    /// Array name.
    pub name: String,
    /// One value per node or cell of the owning mesh.
    pub values: Vec<f64>,
}

/// An ordered set of named arrays.
///
/// Insertion order is preserved. Re-binding an existing name overwrites
/// the stored values in place, so binding the same array twice leaves the
/// set indistinguishable from binding it once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    arrays: Vec<DataArray>,
}

impl AttributeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `values` under `name`, overwriting any existing array of
    /// that name in place.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        if let Some(existing) = self.arrays.iter_mut().find(|a| a.name == name) {
            existing.values = values;
        } else {
            self.arrays.push(DataArray { name, values });
        }
    }

    /// Returns the values bound under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.arrays
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.values.as_slice())
    }

    /// Returns the array names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(|a| a.name.as_str())
    }

    /// Iterates the arrays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DataArray> {
        self.arrays.iter()
    }

    /// Returns the number of arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if the set holds no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a DataArray;
    type IntoIter = std::slice::Iter<'a, DataArray>;

    fn into_iter(self) -> Self::IntoIter {
        self.arrays.iter()
    }
}

/// Planar texture coordinates (and the decoded image) bound to mesh nodes.
#[derive(Debug, Clone)]
pub struct TextureMap {
    /// Key the mapping is bound under.
    pub name: String,
    /// One (s, t) coordinate per mesh node.
    pub coords: Vec<DVec2>,
    /// The decoded image associated with the same key.
    pub image: RgbImage,
}
