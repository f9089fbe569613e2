//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Lock record repository (YAML)
//! - `sources/` - Tree sources (directory walk, JSON snapshot, in-memory)

pub mod repositories;
pub mod sources;

// Re-export for convenience
pub use repositories::{YamlLockRepository, DEFAULT_LOCK_FILE};
pub use sources::{FsTreeSource, InMemoryTreeSource, JsonTreeSource};
