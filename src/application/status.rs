//! Status use case
//!
//! Loads a tree, rolls internal states up from the leaves, and reports the
//! result with per-state counts. Structural problems become warnings; they
//! never stop the report.

use crate::domain::entities::SpecNode;
use crate::domain::ports::TreeSource;
use crate::domain::services::{rolled_up, rollup_drift, validate, StateCounts};
use crate::error::SpecTreeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// Recompute internal states from children
    pub rollup: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self { rollup: true }
    }
}

/// Result of a status query
#[derive(Debug, Clone)]
pub struct StatusResult {
    /// The tree as reported (rolled up unless disabled)
    pub tree: SpecNode,
    pub counts: StateCounts,
    pub warnings: Vec<String>,
    /// Where the tree came from
    pub source: String,
}

impl StatusResult {
    pub fn node_count(&self) -> usize {
        self.counts.total()
    }
}

pub struct StatusUseCase<S> {
    source: S,
}

impl<S: TreeSource> StatusUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: &StatusOptions) -> SpecTreeResult<StatusResult> {
        let loaded = self.source.load()?;

        let mut warnings: Vec<String> = validate(&loaded).iter().map(ToString::to_string).collect();

        let tree = if options.rollup {
            rolled_up(&loaded)
        } else {
            // Recorded internal states are only a cache; say which ones are out of date.
            warnings.extend(rollup_drift(&loaded).into_iter().map(|drift| {
                format!(
                    "'{}' is recorded as {} but its children roll up to {}",
                    drift.id, drift.recorded, drift.effective
                )
            }));
            loaded
        };

        Ok(StatusResult {
            counts: StateCounts::of_tree(&tree),
            tree,
            warnings,
            source: self.source.describe(),
        })
    }
}
