//! TreeSource port - where a Spec Tree comes from
//!
//! The domain never builds trees from disk itself. A source hands back a
//! complete, already-constructed tree snapshot; loading again produces a new
//! snapshot rather than mutating an old one.

use std::path::PathBuf;

use crate::domain::entities::SpecNode;
use crate::domain::value_objects::NodeNameError;

use super::LockError;

/// Errors raised while loading a tree snapshot
#[derive(Debug, thiserror::Error)]
pub enum TreeSourceError {
    #[error("spec directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("no '<name>.product.md' spec found in {path}")]
    MissingProduct { path: PathBuf },

    #[error("multiple product specs found in {path}: {names:?}")]
    MultipleProducts { path: PathBuf, names: Vec<String> },

    #[error("invalid node name in {path}: {source}")]
    InvalidNodeName {
        path: PathBuf,
        #[source]
        source: NodeNameError,
    },

    #[error("{path} is not a spec node: {reason}")]
    NotANode { path: PathBuf, reason: String },

    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("invalid tree snapshot {path}: {message}")]
    InvalidSnapshot { path: PathBuf, message: String },

    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Anything that can produce a Spec Tree snapshot
pub trait TreeSource {
    /// Load a complete tree
    fn load(&self) -> Result<SpecNode, TreeSourceError>;

    /// Short description for diagnostics ("directory spx", "sample tree")
    fn describe(&self) -> String;
}

impl<T: TreeSource + ?Sized> TreeSource for Box<T> {
    fn load(&self) -> Result<SpecNode, TreeSourceError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
