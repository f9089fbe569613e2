//! Domain Layer
//!
//! The Spec Tree model and the pure queries over it.
//!
//! ## Structure
//!
//! - `entities/` - `SpecNode`, `LockRecord`
//! - `value_objects/` - `NodeType`, `NodeState`, `NodeName`, `ContentHash`
//! - `services/` - Queries, status rollup, context selection, validation
//! - `ports/` - Interfaces for loading trees and lock records
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Immutable trees** - Queries borrow; "updates" build a new tree
//! 3. **Ports & Adapters** - Tree loading goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
