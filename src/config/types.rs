//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpecTreeResult;
use crate::infrastructure::DEFAULT_LOCK_FILE;

use super::loader::{self, ConfigWarning};

/// Where trees are read from and how they are interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Spec directory, relative to the working directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Lock file name inside each node directory
    #[serde(default = "default_lock_file")]
    pub lock_file: String,

    /// Recompute internal node states from their children
    #[serde(default = "default_true")]
    pub rollup: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            lock_file: default_lock_file(),
            rollup: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("spx")
}

fn default_lock_file() -> String {
    DEFAULT_LOCK_FILE.to_string()
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Use unicode icons and tree connectors
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> SpecTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
