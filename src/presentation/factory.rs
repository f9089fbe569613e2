//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{ContextUseCase, StatusUseCase};
use crate::config::TreeConfig;
use crate::domain::ports::TreeSource;
use crate::infrastructure::{FsTreeSource, InMemoryTreeSource, JsonTreeSource};
use crate::sample;

use super::cli::{SampleTree, TreeArgs};

/// Tree source chosen at runtime from CLI flags and config
pub type DynTreeSource = Box<dyn TreeSource>;

pub type ConcreteStatusUseCase = StatusUseCase<DynTreeSource>;
pub type ConcreteContextUseCase = ContextUseCase<DynTreeSource>;

/// Pick the tree source: `--sample`, then `--source`, then `[tree].root`
///
/// A path ending in `.json` is read as a snapshot; anything else is walked
/// as a spec directory using the configured lock file name.
pub fn create_tree_source(args: &TreeArgs, config: &TreeConfig) -> DynTreeSource {
    if let Some(sample) = args.sample {
        return Box::new(sample_source(sample));
    }

    let path = args.source.as_deref().unwrap_or(config.root.as_path());
    if is_snapshot(path) {
        Box::new(JsonTreeSource::new(path))
    } else {
        Box::new(FsTreeSource::new(path).with_lock_file(config.lock_file.clone()))
    }
}

pub fn create_status_use_case(args: &TreeArgs, config: &TreeConfig) -> ConcreteStatusUseCase {
    StatusUseCase::new(create_tree_source(args, config))
}

pub fn create_context_use_case(args: &TreeArgs, config: &TreeConfig) -> ConcreteContextUseCase {
    ContextUseCase::new(create_tree_source(args, config))
}

fn sample_source(sample: SampleTree) -> InMemoryTreeSource {
    match sample {
        SampleTree::Full => InMemoryTreeSource::new(sample::full(), "sample tree (full)"),
        SampleTree::Simplified => {
            InMemoryTreeSource::new(sample::simplified(), "sample tree (simplified)")
        }
    }
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
