//! Ordered, name-keyed collections of data sets.

use crate::data_set::DataSet;

/// A block of a [`MultiBlock`]: either a mesh or a nested collection.
#[derive(Debug, Clone)]
pub enum Block {
    /// A converted mesh.
    DataSet(DataSet),
    /// A nested collection.
    MultiBlock(MultiBlock),
}

impl Block {
    /// Returns the contained data set, if this block is one.
    #[must_use]
    pub fn as_data_set(&self) -> Option<&DataSet> {
        match self {
            Block::DataSet(ds) => Some(ds),
            Block::MultiBlock(_) => None,
        }
    }

    /// Returns the nested collection, if this block is one.
    #[must_use]
    pub fn as_multi_block(&self) -> Option<&MultiBlock> {
        match self {
            Block::DataSet(_) => None,
            Block::MultiBlock(mb) => Some(mb),
        }
    }
}

impl From<DataSet> for Block {
    fn from(data: DataSet) -> Self {
        Block::DataSet(data)
    }
}

impl From<crate::PolyData> for Block {
    fn from(data: crate::PolyData) -> Self {
        Block::DataSet(data.into())
    }
}

impl From<crate::RectilinearGrid> for Block {
    fn from(grid: crate::RectilinearGrid) -> Self {
        Block::DataSet(grid.into())
    }
}

impl From<crate::StructuredGrid> for Block {
    fn from(grid: crate::StructuredGrid) -> Self {
        Block::DataSet(grid.into())
    }
}

impl From<MultiBlock> for Block {
    fn from(mb: MultiBlock) -> Self {
        Block::MultiBlock(mb)
    }
}

/// An ordered collection of named blocks.
///
/// Duplicate names are permitted; the index is the true key, and name
/// lookup returns the first match in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MultiBlock {
    names: Vec<String>,
    blocks: Vec<Block>,
}

impl MultiBlock {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named block.
    pub fn push(&mut self, name: impl Into<String>, block: impl Into<Block>) {
        self.names.push(name.into());
        self.blocks.push(block.into());
    }

    /// Returns the number of blocks.
    #[must_use]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the collection holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the name of the block at `index`.
    #[must_use]
    pub fn block_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the block at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Returns the first block with the given name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Block> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.blocks.get(i))
    }

    /// Iterates `(name, block)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Block)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.blocks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly_data::PolyData;

    fn empty_poly() -> PolyData {
        PolyData::from_points(Vec::new())
    }

    #[test]
    fn test_push_and_index() {
        let mut mb = MultiBlock::new();
        mb.push("a", empty_poly());
        mb.push("b", empty_poly());
        assert_eq!(mb.num_blocks(), 2);
        assert_eq!(mb.block_name(0), Some("a"));
        assert_eq!(mb.block_name(1), Some("b"));
        assert!(mb.get(1).is_some());
        assert!(mb.get(2).is_none());
    }

    #[test]
    fn test_duplicate_names_index_is_key() {
        let mut mb = MultiBlock::new();
        mb.push("dup", empty_poly());
        mb.push("dup", {
            let mut pd = empty_poly();
            pd.point_data.set("marker", Vec::new());
            pd
        });
        assert_eq!(mb.num_blocks(), 2);
        // Name lookup returns the first match; index addressing reaches both.
        let first = mb.get_by_name("dup").unwrap().as_data_set().unwrap();
        assert_eq!(first.num_arrays(), 0);
        let second = mb.get(1).unwrap().as_data_set().unwrap();
        assert_eq!(second.num_arrays(), 1);
    }

    #[test]
    fn test_nested_collection() {
        let mut inner = MultiBlock::new();
        inner.push("leaf", empty_poly());
        let mut outer = MultiBlock::new();
        outer.push("inner", inner);
        let nested = outer.get_by_name("inner").unwrap().as_multi_block().unwrap();
        assert_eq!(nested.num_blocks(), 1);
    }
}
