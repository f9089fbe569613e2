//! spec-tree - Spec Tree model and CLI
//!
//! A Spec Tree is a hierarchy of product, decision, enabler and outcome
//! nodes. This crate models the tree and provides its queries: status
//! rollup (a parent takes its worst child's state), ancestor paths, and the
//! deterministic context set of a node (its path plus the lower-index
//! siblings along it).
//!
//! Layers:
//! - `domain` - the tree entity and pure queries over it
//! - `infrastructure` - tree sources (spec directories, JSON snapshots) and lock files
//! - `application` - status and context use cases
//! - `presentation` - CLI parsing and rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod sample;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::SpecNode;
pub use domain::services::{
    ancestor_path, context_set, effective_state, find_by_id, flatten, lower_index_siblings,
    rolled_up, ContextSet, StateCounts,
};
pub use domain::value_objects::{NodeState, NodeType};
pub use error::{SpecTreeError, SpecTreeResult};
