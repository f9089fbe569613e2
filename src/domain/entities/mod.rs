//! Domain Entities
//!
//! - `SpecNode` - A node of the Spec Tree (owns its children)
//! - `LockRecord` - Evidence binding a spec's hash to its tests' hash

mod lock_record;
mod spec_node;

pub use lock_record::{LockRecord, LOCK_VERSION};
pub use spec_node::SpecNode;
