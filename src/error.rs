//! Error types for the commit gate.
//!
//! Only environment-level failures are errors. Per-file findings (debug
//! calls, syntax errors) are not errors at all — they accumulate in the
//! run report so every staged file is checked before the gate decides.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    /// A git plumbing command failed. When the failing command is the
    /// staged-list query this is the gate's one fail-fast path.
    #[error("git {op} failed: {detail}")]
    Git { op: &'static str, detail: String },

    /// Filesystem failure in the scratch workspace.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external syntax checker could not be spawned. Callers treat this
    /// as a skipped check, not an abort cause.
    #[error("syntax checker '{command}' could not be run: {detail}")]
    Checker { command: String, detail: String },
}
