//! TreeSource Implementations
//!
//! - `fs` - Walks a spec directory, deriving leaf states from lock files
//! - `json` - Reads a serialized tree snapshot
//! - `memory` - Wraps a tree built in code

mod fs;
mod json;
mod memory;

pub use fs::{FsTreeSource, ROOT_ID};
pub use json::{parse_snapshot, JsonTreeSource};
pub use memory::InMemoryTreeSource;
