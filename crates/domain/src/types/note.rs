//! Vault file snapshots

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A note in the vault with its metadata
///
/// Produced by decoding the `application/vnd.olrapi.note+json`
/// representation of a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Raw markdown body
    pub content: String,
    /// Parsed frontmatter; values are kept as opaque JSON
    #[serde(default)]
    pub frontmatter: Map<String, Value>,
    /// Vault-relative path
    pub path: String,
    pub stat: NoteStat,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Look up a single frontmatter value.
    pub fn frontmatter_value(&self, key: &str) -> Option<&Value> {
        self.frontmatter.get(key)
    }
}

/// File statistics for a note (millisecond timestamps, byte size)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStat {
    pub ctime: i64,
    pub mtime: i64,
    pub size: i64,
}

/// Names of the files and subdirectories in a vault directory
///
/// Subdirectories carry a trailing `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub files: Vec<String>,
}

impl DirectoryListing {
    /// Entries that name subdirectories.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str).filter(|name| name.ends_with('/'))
    }
}
