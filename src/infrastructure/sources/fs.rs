//! File system TreeSource
//!
//! Builds a Spec Tree snapshot by walking a spec directory:
//!
//! ```text
//! spx/
//! ├── spx-cli.product.md
//! ├── 15-cli-framework.adr.md
//! └── 54-tree-interpretation.outcome/
//!     ├── tree-interpretation.md
//!     ├── spx-lock.yaml
//!     ├── tests/
//!     └── 43-status-rollup.outcome/
//! ```
//!
//! Leaf states come from lock records; internal states are left as
//! authored and rolled up by the caller.

use std::path::{Path, PathBuf};

use crate::domain::entities::{LockRecord, SpecNode};
use crate::domain::ports::{LockRepository, TreeSource, TreeSourceError};
use crate::domain::value_objects::{ContentHash, NodeName, NodeState, NodeType};
use crate::infrastructure::repositories::{YamlLockRepository, DEFAULT_LOCK_FILE};

/// Id of the product node at the top of every tree
pub const ROOT_ID: &str = "root";

const TESTS_DIR: &str = "tests";

/// Walks a spec directory into a tree
#[derive(Debug, Clone)]
pub struct FsTreeSource<R = YamlLockRepository> {
    root: PathBuf,
    lock_file: String,
    locks: R,
}

impl FsTreeSource<YamlLockRepository> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock_file: DEFAULT_LOCK_FILE.to_string(),
            locks: YamlLockRepository::new(),
        }
    }
}

impl<R: LockRepository> FsTreeSource<R> {
    /// Use a different lock repository (for testing)
    pub fn with_repository<T: LockRepository>(self, locks: T) -> FsTreeSource<T> {
        FsTreeSource {
            root: self.root,
            lock_file: self.lock_file,
            locks,
        }
    }

    pub fn with_lock_file(mut self, name: impl Into<String>) -> Self {
        self.lock_file = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_root(&self) -> Result<SpecNode, TreeSourceError> {
        if !self.root.is_dir() {
            return Err(TreeSourceError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let entries = sorted_entries(&self.root)?;
        let products: Vec<&String> = entries
            .iter()
            .filter(|(_, name, kind)| *kind != EntryKind::Dir && NodeName::product_slug(name).is_some())
            .map(|(_, name, _)| name)
            .collect();

        let product_file = match products.as_slice() {
            [] => {
                return Err(TreeSourceError::MissingProduct {
                    path: self.root.clone(),
                })
            }
            [single] => (*single).clone(),
            many => {
                return Err(TreeSourceError::MultipleProducts {
                    path: self.root.clone(),
                    names: many.iter().map(|name| name.to_string()).collect(),
                })
            }
        };
        let label = NodeName::product_slug(&product_file)
            .unwrap_or(&product_file)
            .to_string();

        let mut root = SpecNode::new(
            ROOT_ID,
            product_file.as_str(),
            label,
            NodeType::Product,
            NodeState::Valid,
            0,
            0,
        )
        .with_lock_file(false)
        .with_tests(false);
        if let Some(purpose) = read_purpose(&self.root.join(&product_file))? {
            root = root.with_purpose(purpose);
        }

        Ok(root.with_children(self.load_children(&self.root, "", 1)?))
    }

    fn load_children(
        &self,
        dir: &Path,
        id_prefix: &str,
        depth: usize,
    ) -> Result<Vec<SpecNode>, TreeSourceError> {
        let mut children = Vec::new();

        for (path, name, kind) in sorted_entries(dir)? {
            if !looks_like_node(&name) {
                continue;
            }

            let parsed = match kind {
                EntryKind::Dir => NodeName::parse_dir(&name),
                EntryKind::File if NodeName::parse_dir(&name).is_ok() => {
                    return Err(not_a_node(path, "a file named like a node directory"));
                }
                EntryKind::File => NodeName::parse_decision_file(&name),
                EntryKind::Symlink => {
                    return Err(not_a_node(path, "symbolic links are not followed"));
                }
                EntryKind::Other => {
                    return Err(not_a_node(path, "not a directory or regular file"));
                }
            }
            .map_err(|source| TreeSourceError::InvalidNodeName {
                path: path.clone(),
                source,
            })?;

            let id = format!("{}{}", id_prefix, parsed.entry().trim_end_matches('/'));
            let node = if kind == EntryKind::Dir {
                self.load_node_dir(&path, &parsed, id, depth)?
            } else {
                load_decision_file(&path, &parsed, id, depth)?
            };
            children.push(node);
        }

        // Stable: equal indices keep name order.
        children.sort_by_key(SpecNode::index);
        Ok(children)
    }

    fn load_node_dir(
        &self,
        dir: &Path,
        name: &NodeName,
        id: String,
        depth: usize,
    ) -> Result<SpecNode, TreeSourceError> {
        let spec_path = dir.join(format!("{}.md", name.slug()));
        let spec = if spec_path.is_file() {
            Some(ContentHash::from_bytes(&read_bytes(&spec_path)?))
        } else {
            None
        };
        let tests = ContentHash::from_named_contents(collect_tests(&dir.join(TESTS_DIR))?);

        let lock = self.locks.load(&dir.join(&self.lock_file))?;
        let state = LockRecord::state_for(lock.as_ref(), spec.as_ref(), &tests);

        let children = self.load_children(dir, &format!("{}/", id), depth + 1)?;
        let mut node = SpecNode::new(
            id,
            name.entry(),
            name.slug(),
            name.node_type(),
            state,
            name.index(),
            depth,
        )
        .with_lock_file(lock.is_some())
        .with_children(children);

        if spec.is_some() {
            if let Some(purpose) = read_purpose(&spec_path)? {
                node = node.with_purpose(purpose);
            }
        }
        Ok(node)
    }
}

impl<R: LockRepository> TreeSource for FsTreeSource<R> {
    fn load(&self) -> Result<SpecNode, TreeSourceError> {
        self.load_root()
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Decision records are authored as valid and never carry lock evidence
fn load_decision_file(
    path: &Path,
    name: &NodeName,
    id: String,
    depth: usize,
) -> Result<SpecNode, TreeSourceError> {
    let mut node = SpecNode::new(
        id,
        name.entry(),
        name.slug(),
        NodeType::Decision,
        NodeState::Valid,
        name.index(),
        depth,
    )
    .with_lock_file(false)
    .with_tests(false);
    if let Some(purpose) = read_purpose(path)? {
        node = node.with_purpose(purpose);
    }
    Ok(node)
}

/// Names starting with a digit are meant to be nodes and must parse
fn looks_like_node(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Entry kinds as reported by the directory itself; symlinks are not followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Symlink,
    Other,
}

fn not_a_node(path: PathBuf, reason: &str) -> TreeSourceError {
    TreeSourceError::NotANode {
        path,
        reason: reason.to_string(),
    }
}

/// `(path, file name, kind)` for every UTF-8 named entry, sorted by name.
/// A non-UTF-8 name that starts with a digit is an error rather than skipped.
fn sorted_entries(dir: &Path) -> Result<Vec<(PathBuf, String, EntryKind)>, TreeSourceError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| read_error(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| read_error(dir, e))?;
        let path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) if raw.as_encoded_bytes().first().is_some_and(u8::is_ascii_digit) => {
                return Err(not_a_node(path, "name is not valid UTF-8"));
            }
            Err(_) => continue,
        };
        let file_type = entry.file_type().map_err(|e| read_error(&path, e))?;
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        entries.push((path, name, kind));
    }
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(entries)
}

/// Every file under `dir`, keyed by its `/`-separated path relative to `dir`
fn collect_tests(dir: &Path) -> Result<Vec<(String, Vec<u8>)>, TreeSourceError> {
    let mut files = Vec::new();
    if dir.is_dir() {
        collect_files(dir, "", &mut files)?;
    }
    Ok(files)
}

fn collect_files(
    dir: &Path,
    prefix: &str,
    files: &mut Vec<(String, Vec<u8>)>,
) -> Result<(), TreeSourceError> {
    for (path, name, kind) in sorted_entries(dir)? {
        let relative = format!("{}{}", prefix, name);
        // Symlinks are read as files, never walked.
        if kind == EntryKind::Dir {
            collect_files(&path, &format!("{}/", relative), files)?;
        } else {
            files.push((relative, read_bytes(&path)?));
        }
    }
    Ok(())
}

/// First line of prose in a spec: not blank, not a heading, not front matter
fn read_purpose(path: &Path) -> Result<Option<String>, TreeSourceError> {
    let bytes = read_bytes(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let mut lines = content.lines().map(str::trim).peekable();

    if lines.peek() == Some(&"---") {
        lines.next();
        for line in lines.by_ref() {
            if line == "---" {
                break;
            }
        }
    }

    Ok(lines
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, TreeSourceError> {
    std::fs::read(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, err: std::io::Error) -> TreeSourceError {
    TreeSourceError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
