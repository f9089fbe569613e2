//! Node entry names
//!
//! Spec tree entries on disk encode their sibling index, slug and type:
//!
//! - node directories: `<index>-<slug>.<type>/` (e.g. `43-status-rollup.outcome/`)
//! - decision records: `<index>-<slug>.<adr|pdr>.md` (e.g. `15-cli-framework.adr.md`)
//! - the product spec at the root: `<slug>.product.md`

use super::NodeType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeNameError {
    #[error("'{name}' has no '<index>-' prefix")]
    MissingIndex { name: String },

    #[error("'{name}' has a non-numeric index '{index}'")]
    InvalidIndex { name: String, index: String },

    #[error("'{name}' has an empty slug")]
    EmptySlug { name: String },

    #[error("'{name}' has no '.<type>' suffix")]
    MissingType { name: String },

    #[error("'{name}' has unknown type '{suffix}'")]
    UnknownType { name: String, suffix: String },
}

/// Parsed `<index>-<slug>.<type>` entry name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeName {
    index: u32,
    slug: String,
    node_type: NodeType,
    entry: String,
}

impl NodeName {
    /// Parse a node directory name such as `32-parse-directory-tree.enabler`.
    ///
    /// A trailing `/` is accepted. Product directories are rejected: the
    /// product only appears once, as the root's spec file.
    pub fn parse_dir(name: &str) -> Result<Self, NodeNameError> {
        let bare = name.trim_end_matches('/');
        let (stem, suffix) = split_type(bare)?;
        let node_type = node_type_for(bare, suffix)?;
        let (index, slug) = split_index(bare, stem)?;
        Ok(Self {
            index,
            slug: slug.to_string(),
            node_type,
            entry: format!("{}/", bare),
        })
    }

    /// Parse a decision record file name such as `15-cli-framework.adr.md`.
    pub fn parse_decision_file(name: &str) -> Result<Self, NodeNameError> {
        let bare = name.strip_suffix(".md").ok_or_else(|| NodeNameError::MissingType {
            name: name.to_string(),
        })?;
        let (stem, suffix) = split_type(bare)?;
        let node_type = node_type_for(name, suffix)?;
        if node_type != NodeType::Decision {
            return Err(NodeNameError::UnknownType {
                name: name.to_string(),
                suffix: suffix.to_string(),
            });
        }
        let (index, slug) = split_index(name, stem)?;
        Ok(Self {
            index,
            slug: slug.to_string(),
            node_type,
            entry: name.to_string(),
        })
    }

    /// Slug of a root product spec file (`spx-cli.product.md` -> `spx-cli`)
    pub fn product_slug(file_name: &str) -> Option<&str> {
        file_name
            .strip_suffix(".product.md")
            .filter(|slug| !slug.is_empty())
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Entry name as shown in trees (`43-status-rollup.outcome/`)
    pub fn entry(&self) -> &str {
        &self.entry
    }
}

fn split_type(bare: &str) -> Result<(&str, &str), NodeNameError> {
    bare.rsplit_once('.')
        .filter(|(_, suffix)| !suffix.is_empty())
        .ok_or_else(|| NodeNameError::MissingType {
            name: bare.to_string(),
        })
}

fn node_type_for(name: &str, suffix: &str) -> Result<NodeType, NodeNameError> {
    match NodeType::from_suffix(suffix) {
        Some(NodeType::Product) | None => Err(NodeNameError::UnknownType {
            name: name.to_string(),
            suffix: suffix.to_string(),
        }),
        Some(node_type) => Ok(node_type),
    }
}

fn split_index<'a>(name: &str, stem: &'a str) -> Result<(u32, &'a str), NodeNameError> {
    let (index, slug) = stem
        .split_once('-')
        .ok_or_else(|| NodeNameError::MissingIndex {
            name: name.to_string(),
        })?;
    if index.is_empty() {
        return Err(NodeNameError::MissingIndex {
            name: name.to_string(),
        });
    }
    let index = index.parse::<u32>().map_err(|_| NodeNameError::InvalidIndex {
        name: name.to_string(),
        index: index.to_string(),
    })?;
    if slug.is_empty() {
        return Err(NodeNameError::EmptySlug {
            name: name.to_string(),
        });
    }
    Ok((index, slug))
}
