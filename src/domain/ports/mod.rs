//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod lock_repository;
pub mod tree_source;

pub use lock_repository::{LockError, LockRepository};
pub use tree_source::{TreeSource, TreeSourceError};
