//! Common test utilities for spec-tree CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and config directories plus CLI runners
//! - Fixtures: a small spec directory with every node state

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
