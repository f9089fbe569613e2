//! In-memory TreeSource
//!
//! Hands out clones of a tree that was built in code.

use crate::domain::entities::SpecNode;
use crate::domain::ports::{TreeSource, TreeSourceError};

#[derive(Debug, Clone)]
pub struct InMemoryTreeSource {
    tree: SpecNode,
    name: String,
}

impl InMemoryTreeSource {
    pub fn new(tree: SpecNode, name: impl Into<String>) -> Self {
        Self {
            tree,
            name: name.into(),
        }
    }
}

impl TreeSource for InMemoryTreeSource {
    fn load(&self) -> Result<SpecNode, TreeSourceError> {
        Ok(self.tree.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
