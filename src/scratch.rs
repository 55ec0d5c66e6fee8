//! Scratch workspace for staged-content materialization.
//!
//! A fixed hidden directory at the repository root (`.commit-gate/` by
//! default). The directory itself persists across runs and also holds the
//! run logs; the staged copies inside it are scoped to one file's checks and
//! removed before the next path is examined.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GateError;

pub struct ScratchWorkspace {
    root: PathBuf,
}

impl ScratchWorkspace {
    /// Create or reuse the scratch directory under `repo`.
    pub fn open(repo: &Path, dir_name: &str) -> Result<Self, GateError> {
        let root = repo.join(dir_name);
        fs::create_dir_all(&root).map_err(|e| GateError::Io {
            path: root.clone(),
            source: e,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Materialize the staged blob for the repo-relative `path` and return a
    /// guard that removes the copy when dropped.
    pub fn materialize(&self, repo: &Path, path: &str) -> Result<StagedCopy<'_>, GateError> {
        crate::git::checkout_staged(repo, &self.root, path)?;
        Ok(StagedCopy {
            workspace: self,
            path: self.root.join(path),
        })
    }
}

/// A scoped staged-content copy. Dropping it removes the file and any
/// directories the checkout created, so no stale copies accumulate between
/// files or runs.
pub struct StagedCopy<'a> {
    workspace: &'a ScratchWorkspace,
    path: PathBuf,
}

impl StagedCopy<'_> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the staged content. Lossy: the scan is textual and staged files
    /// are not guaranteed to be valid UTF-8.
    pub fn read(&self) -> Result<String, GateError> {
        let bytes = fs::read(&self.path).map_err(|e| GateError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Drop for StagedCopy<'_> {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        // Prune now-empty directories up to (not including) the workspace root.
        let mut dir = self.path.parent();
        while let Some(d) = dir {
            if d == self.workspace.root || fs::remove_dir(d).is_err() {
                break;
            }
            dir = d.parent();
        }
    }
}
