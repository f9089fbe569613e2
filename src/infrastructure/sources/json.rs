//! JSON snapshot TreeSource
//!
//! Reads a tree in the same camelCase shape `SpecNode` serializes to.
//! `depth` is always derived from position; any recorded value is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::SpecNode;
use crate::domain::ports::{TreeSource, TreeSourceError};
use crate::domain::value_objects::{NodeState, NodeType};

/// Serialized node as found in a snapshot file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(rename = "type")]
    node_type: NodeType,
    state: NodeState,
    #[serde(default)]
    index: u32,
    #[serde(default)]
    has_lock_file: Option<bool>,
    #[serde(default)]
    has_tests: Option<bool>,
    #[serde(default)]
    purpose: Option<String>,
    #[serde(default)]
    children: Vec<NodeRecord>,
}

impl NodeRecord {
    fn into_node(self, depth: usize) -> SpecNode {
        let slug = self.slug.unwrap_or_else(|| self.id.clone());
        let label = self.label.unwrap_or_else(|| self.id.clone());
        let mut node = SpecNode::new(
            self.id,
            slug,
            label,
            self.node_type,
            self.state,
            self.index,
            depth,
        );
        if let Some(has_lock_file) = self.has_lock_file {
            node = node.with_lock_file(has_lock_file);
        }
        if let Some(has_tests) = self.has_tests {
            node = node.with_tests(has_tests);
        }
        if let Some(purpose) = self.purpose {
            node = node.with_purpose(purpose);
        }
        let children = self
            .children
            .into_iter()
            .map(|child| child.into_node(depth + 1))
            .collect();
        node.with_children(children)
    }
}

/// Parse a snapshot; `origin` only labels errors
pub fn parse_snapshot(content: &str, origin: &Path) -> Result<SpecNode, TreeSourceError> {
    let record: NodeRecord =
        serde_json::from_str(content).map_err(|e| TreeSourceError::InvalidSnapshot {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(record.into_node(0))
}

/// Loads a tree from a `.json` snapshot file
#[derive(Debug, Clone)]
pub struct JsonTreeSource {
    path: PathBuf,
}

impl JsonTreeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TreeSource for JsonTreeSource {
    fn load(&self) -> Result<SpecNode, TreeSourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| TreeSourceError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        parse_snapshot(&content, &self.path)
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::find_by_id;
    use crate::sample;
    use tempfile::tempdir;

    #[test]
    fn serialized_tree_loads_back_equal() {
        let tree = sample::full();
        let json = serde_json::to_string_pretty(&tree).unwrap();
        let loaded = parse_snapshot(&json, Path::new("tree.json")).unwrap();
        assert_eq!(loaded, tree);
    }

    #[test]
    fn minimal_records_apply_defaults() {
        let json = r#"{
            "id": "root",
            "type": "product",
            "state": "valid",
            "children": [
                { "id": "harness", "type": "enabler", "state": "valid", "index": 21 },
                { "id": "adr", "type": "decision", "state": "needs-work", "index": 15 }
            ]
        }"#;

        let tree = parse_snapshot(json, Path::new("tree.json")).unwrap();
        assert_eq!(tree.slug(), "root");
        assert_eq!(tree.label(), "root");
        assert!(!tree.has_tests());

        let harness = find_by_id(&tree, "harness").unwrap();
        assert!(harness.has_lock_file());
        assert!(harness.has_tests());
        assert_eq!(harness.depth(), 1);

        let adr = find_by_id(&tree, "adr").unwrap();
        assert!(!adr.has_lock_file());
        assert!(!adr.has_tests());
    }

    #[test]
    fn recorded_depth_is_ignored() {
        let json = r#"{
            "id": "root", "type": "product", "state": "valid", "depth": 4,
            "children": [{ "id": "a", "type": "outcome", "state": "stale", "depth": 9 }]
        }"#;
        let tree = parse_snapshot(json, Path::new("tree.json")).unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.children()[0].depth(), 1);
    }

    #[test]
    fn invalid_state_is_reported() {
        let json = r#"{ "id": "root", "type": "product", "state": "broken" }"#;
        let err = parse_snapshot(json, Path::new("tree.json")).unwrap_err();
        assert!(matches!(err, TreeSourceError::InvalidSnapshot { .. }));
        assert!(err.to_string().contains("tree.json"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, serde_json::to_string(&sample::simplified()).unwrap()).unwrap();

        let source = JsonTreeSource::new(&path);
        assert_eq!(source.load().unwrap(), sample::simplified());
        assert!(source.describe().starts_with("snapshot "));
    }

    #[test]
    fn load_missing_file() {
        let err = JsonTreeSource::new("/nonexistent/tree.json").load().unwrap_err();
        assert!(matches!(err, TreeSourceError::Read { .. }));
    }
}
