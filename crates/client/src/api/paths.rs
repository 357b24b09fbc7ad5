//! Vault path handling
//!
//! Paths are cleaned lexically (duplicate separators, `.` and `..` are
//! resolved) before they are turned into URL segments. The result must stay
//! inside the vault: anything that still starts with `..` after cleaning is
//! rejected rather than forwarded.

use obsidian_rest_domain::{ObsidianError, Result};

/// Lexically clean a slash-separated path.
///
/// Mirrors the usual `path.Clean` rules: the empty path becomes `"."`, a
/// rooted path stays rooted and `..` at the root is dropped.
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Split a caller-supplied vault path into URL segments.
///
/// Leading separators are ignored; the vault root is the empty segment list.
/// With `allow_root == false` the root itself is rejected, which is what
/// every file operation wants.
pub(crate) fn vault_segments(path: &str, allow_root: bool) -> Result<Vec<String>> {
    let cleaned = clean_path(path);
    let relative = cleaned.trim_start_matches('/');

    if relative == ".." || relative.starts_with("../") {
        return Err(ObsidianError::InvalidInput(format!(
            "path escapes the vault root: {}",
            path
        )));
    }

    if relative.is_empty() || relative == "." {
        if allow_root {
            return Ok(Vec::new());
        }
        return Err(ObsidianError::InvalidInput(format!(
            "path does not name a file: {:?}",
            path
        )));
    }

    Ok(relative.split('/').map(str::to_string).collect())
}
