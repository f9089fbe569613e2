//! Node state value object
//!
//! Variants are declared in ascending severity so the derived `Ord` is the
//! rollup order: `Valid < Stale < NeedsWork`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeState {
    /// Lock evidence matches current spec and tests
    Valid,
    /// Lock evidence exists but no longer matches
    Stale,
    /// No valid lock evidence at all
    NeedsWork,
}

impl NodeState {
    pub const ALL: [NodeState; 3] = [NodeState::Valid, NodeState::Stale, NodeState::NeedsWork];

    /// The more severe of two states
    pub fn worst(self, other: NodeState) -> NodeState {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Valid => "valid",
            NodeState::Stale => "stale",
            NodeState::NeedsWork => "needs-work",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            NodeState::NeedsWork => "needs work",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "valid" => Ok(NodeState::Valid),
            "stale" => Ok(NodeState::Stale),
            "needs-work" | "needs_work" | "needs work" => Ok(NodeState::NeedsWork),
            _ => Err(format!("unknown node state '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order() {
        assert!(NodeState::Valid < NodeState::Stale);
        assert!(NodeState::Stale < NodeState::NeedsWork);
    }

    #[test]
    fn worst_picks_more_severe() {
        assert_eq!(NodeState::Valid.worst(NodeState::Stale), NodeState::Stale);
        assert_eq!(NodeState::NeedsWork.worst(NodeState::Stale), NodeState::NeedsWork);
        assert_eq!(NodeState::Valid.worst(NodeState::Valid), NodeState::Valid);
    }

    #[test]
    fn label_spells_out_needs_work() {
        assert_eq!(NodeState::NeedsWork.label(), "needs work");
        assert_eq!(NodeState::Stale.label(), "stale");
        assert_eq!(NodeState::Valid.label(), "valid");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&NodeState::NeedsWork).unwrap();
        assert_eq!(json, "\"needs-work\"");
        let parsed: NodeState = serde_json::from_str("\"stale\"").unwrap();
        assert_eq!(parsed, NodeState::Stale);
    }

    #[test]
    fn from_str_accepts_label_spellings() {
        assert_eq!("needs work".parse::<NodeState>().unwrap(), NodeState::NeedsWork);
        assert_eq!("NEEDS_WORK".parse::<NodeState>().unwrap(), NodeState::NeedsWork);
        assert!("broken".parse::<NodeState>().is_err());
    }
}
