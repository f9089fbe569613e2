//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON renderers
//! - `terminal` - Color and unicode capability detection

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::{Cli, ColorWhen, Commands, SampleTree, TreeArgs};
pub use output::OutputStyle;
