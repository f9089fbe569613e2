//! YAML Lock Repository
//!
//! Implements the LockRepository port for `spx-lock.yaml` files:
//!
//! ```yaml
//! version: 1
//! spec: sha256:...
//! tests: sha256:...
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{LockRecord, LOCK_VERSION};
use crate::domain::ports::{LockError, LockRepository};

/// Default lock file name inside a node directory
pub const DEFAULT_LOCK_FILE: &str = "spx-lock.yaml";

/// YAML-based lock repository
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLockRepository;

impl YamlLockRepository {
    pub fn new() -> Self {
        Self
    }
}

/// YAML representation of a lock record
#[derive(Debug, Clone, Deserialize)]
struct YamlLockRecord {
    #[serde(default = "default_version")]
    version: u32,
    spec: String,
    tests: String,
}

fn default_version() -> u32 {
    LOCK_VERSION
}

impl LockRepository for YamlLockRepository {
    fn load(&self, path: &Path) -> Result<Option<LockRecord>, LockError> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| LockError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let record: YamlLockRecord =
            serde_yaml_ng::from_str(&content).map_err(|e| LockError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if record.version != LOCK_VERSION {
            return Err(LockError::VersionMismatch {
                path: path.to_path_buf(),
                found: record.version,
                expected: LOCK_VERSION,
            });
        }

        Ok(Some(
            LockRecord::new(record.spec, record.tests).with_version(record.version),
        ))
    }
}
