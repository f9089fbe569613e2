//! Domain Services
//!
//! Pure functions over an immutable Spec Tree. No I/O, no shared state:
//! concurrent callers may query the same tree from any number of threads.

mod context_selector;
mod status_rollup;
mod tree_query;
mod tree_validator;

pub use context_selector::{context_set, ContextSet};
pub use status_rollup::{effective_state, rolled_up, rollup_drift, RollupDrift, StateCounts};
pub use tree_query::{
    ancestor_path, find_by_id, find_by_label, flatten, lower_index_siblings, PreOrder,
};
pub use tree_validator::{validate, TreeViolation};
