//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `StatusUseCase` - Load a tree, roll states up, count and validate
//! - `ContextUseCase` - Resolve a node and select its context set

pub mod context;
pub mod status;
mod summary;

pub use context::{resolve_target, ContextOptions, ContextResult, ContextUseCase, TargetResolution};
pub use status::{StatusOptions, StatusResult, StatusUseCase};
pub use summary::NodeSummary;
