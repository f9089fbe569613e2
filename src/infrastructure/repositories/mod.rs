//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod lock;

pub use lock::{YamlLockRepository, DEFAULT_LOCK_FILE};
