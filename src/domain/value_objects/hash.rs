//! Content hash value object
//!
//! Lock files bind a spec to its tests by recording the SHA-256 of both.
//! A node's recorded binding holds while the recomputed hashes still match.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest rendered as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap a recorded hash, adding the prefix when it is missing
    pub fn new(raw_hash: &str) -> Self {
        let raw_hash = raw_hash.trim();
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(content)))
    }

    /// Hash a set of named files as one unit.
    ///
    /// Entries are hashed in name order, each as `name\0content\0`, so the
    /// result does not depend on directory iteration order and renaming a
    /// file changes the digest.
    pub fn from_named_contents<N, C>(entries: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let mut entries: Vec<(N, C)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        let mut hasher = Sha256::new();
        for (name, content) in &entries {
            hasher.update(name.as_ref().as_bytes());
            hasher.update([0u8]);
            hasher.update(content.as_ref());
            hasher.update([0u8]);
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the `sha256:` prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Case-insensitive on the hex part; recorded hashes are often hand-edited
    pub fn matches(&self, other: &ContentHash) -> bool {
        self.hex().eq_ignore_ascii_case(other.hex())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}
