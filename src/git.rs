//! Staged-index plumbing: list changed paths, materialize staged blobs.
//!
//! The gate only ever inspects index content, never the working tree, so the
//! report always matches exactly what would be committed. Both operations
//! shell out to git; the hook already runs inside a git-controlled process.

use std::path::Path;
use std::process::Command;

use crate::error::GateError;

/// Hash of git's empty tree, the diff base before the first commit exists.
const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// List repo-relative paths that differ between HEAD and the staged index,
/// in git's output order.
///
/// Only Added/Copied/Modified entries are returned; a staged deletion has no
/// blob to inspect. A failure here is the gate's one fail-fast error.
pub fn staged_paths(repo: &Path) -> Result<Vec<String>, GateError> {
    let base = if head_exists(repo) { "HEAD" } else { EMPTY_TREE };
    let output = Command::new("git")
        .args(["diff-index", "--cached", "--name-only", "--diff-filter=ACM", base])
        .current_dir(repo)
        .output()
        .map_err(|e| GateError::Git {
            op: "diff-index",
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GateError::Git {
            op: "diff-index",
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// Materialize the staged blob for `path` under `prefix`, preserving the
/// relative path. Reads the index, so unstaged working-tree edits never
/// reach the scan.
pub fn checkout_staged(repo: &Path, prefix: &Path, path: &str) -> Result<(), GateError> {
    // checkout-index treats --prefix as a literal string prefix; it needs
    // the trailing separator to land files inside the directory.
    let mut prefix_arg = prefix.to_string_lossy().into_owned();
    if !prefix_arg.ends_with('/') {
        prefix_arg.push('/');
    }

    let output = Command::new("git")
        .args(["checkout-index", "--force"])
        .arg(format!("--prefix={prefix_arg}"))
        .args(["--", path])
        .current_dir(repo)
        .output()
        .map_err(|e| GateError::Git {
            op: "checkout-index",
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GateError::Git {
            op: "checkout-index",
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

fn head_exists(repo: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", "HEAD"])
        .current_dir(repo)
        .output()
        .is_ok_and(|o| o.status.success())
}
