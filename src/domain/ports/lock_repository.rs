//! LockRepository port - reading lock records
//!
//! Lock records are read, never written, by this crate. Producing them is
//! the job of the external tool that binds specs to tests.

use std::path::{Path, PathBuf};

use crate::domain::entities::LockRecord;

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("failed to read lock file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("invalid lock file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("lock file {path} has version {found}, expected {expected}")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Abstract repository for lock records
pub trait LockRepository {
    /// Load the lock record at `path`; `Ok(None)` when there is none
    fn load(&self, path: &Path) -> Result<Option<LockRecord>, LockError>;
}
