//! Error types for spec-tree
//!
//! Uses `thiserror` for library errors. The tree queries themselves never
//! fail; these errors come from loading trees and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec-tree operations
pub type SpecTreeResult<T> = Result<T, SpecTreeError>;

/// Main error type for spec-tree operations
#[derive(Error, Debug)]
pub enum SpecTreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree could not be loaded from its source
    #[error(transparent)]
    TreeSource(#[from] crate::domain::ports::TreeSourceError),
}
