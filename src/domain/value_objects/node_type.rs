//! Node type value object
//!
//! - `Product`: the tree root category
//! - `Enabler`: infrastructure other nodes build on
//! - `Outcome`: a user-observable capability
//! - `Decision`: an architecture/product decision record, never tested

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Product,
    Enabler,
    Outcome,
    Decision,
}

impl NodeType {
    /// Whether nodes of this type carry tests (and therefore lock evidence)
    pub fn supports_tests(&self) -> bool {
        !matches!(self, NodeType::Product | NodeType::Decision)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Product => "product",
            NodeType::Enabler => "enabler",
            NodeType::Outcome => "outcome",
            NodeType::Decision => "decision",
        }
    }

    /// Map a naming-scheme suffix to a type.
    ///
    /// Decision records appear as `adr` (architecture) or `pdr` (product).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "product" => Some(NodeType::Product),
            "enabler" => Some(NodeType::Enabler),
            "outcome" => Some(NodeType::Outcome),
            "adr" | "pdr" | "decision" => Some(NodeType::Decision),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_suffix(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown node type '{}'", s))
    }
}
