//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod node_name;
mod node_state;
mod node_type;

pub use hash::ContentHash;
pub use node_name::{NodeName, NodeNameError};
pub use node_state::NodeState;
pub use node_type::NodeType;
