//! Lock record entity - evidence binding a spec to its tests
//!
//! A lock record stores the content hashes of a node's spec and tests at the
//! time the binding was made. It's a pure data structure; reading it from
//! disk is the job of a `LockRepository`.

use crate::domain::value_objects::{ContentHash, NodeState};

/// Current lock record format version
pub const LOCK_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    version: u32,
    spec: ContentHash,
    tests: ContentHash,
}

impl LockRecord {
    pub fn new(spec: impl Into<ContentHash>, tests: impl Into<ContentHash>) -> Self {
        Self {
            version: LOCK_VERSION,
            spec: spec.into(),
            tests: tests.into(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn spec(&self) -> &ContentHash {
        &self.spec
    }

    pub fn tests(&self) -> &ContentHash {
        &self.tests
    }

    /// True while both recorded hashes match the current content
    pub fn holds_for(&self, spec: &ContentHash, tests: &ContentHash) -> bool {
        self.spec.matches(spec) && self.tests.matches(tests)
    }

    /// State of a testable leaf given its lock record and current hashes.
    ///
    /// - no record, or no spec to bind -> `NeedsWork`
    /// - record that still holds -> `Valid`
    /// - record that no longer holds -> `Stale`
    pub fn state_for(
        record: Option<&LockRecord>,
        spec: Option<&ContentHash>,
        tests: &ContentHash,
    ) -> NodeState {
        match (record, spec) {
            (Some(record), Some(spec)) if record.holds_for(spec, tests) => NodeState::Valid,
            (Some(_), Some(_)) => NodeState::Stale,
            _ => NodeState::NeedsWork,
        }
    }
}
