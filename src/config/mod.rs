//! Configuration module for spec-tree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SPEC_TREE_*)
//! 3. Project config (.spec-tree.toml in the working directory)
//! 4. User config (~/.config/spec-tree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, with_env_overrides, with_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, TreeConfig};
