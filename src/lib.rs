//! commit-gate: a pre-commit hook that refuses commits containing staged
//! debug code or PHP syntax errors.
//!
//! The gate inspects the content that would actually be committed — staged
//! blobs from the index, never the working tree. Staged paths are listed
//! with `git diff-index`, each matching file is materialized with
//! `git checkout-index` into a scratch directory, scanned for denylisted
//! debug calls outside line comments, and (PHP family only) parse-checked
//! with `php -l`. Findings accumulate into a [`report::RunReport`]; any
//! finding refuses the commit via a non-zero exit.
//!
//! # Architecture
//!
//! - **[`git`]** — staged-index plumbing: list changed paths, materialize staged blobs.
//! - **[`scan`]** — pure text transforms: line-comment stripping, word-bounded debug-call matching.
//! - **[`checker`]** — the `SyntaxChecker` capability seam and its `php -l` subprocess impl.
//! - **[`gate`]** — the run loop: per-family scans, accumulation, never fail-fast.
//! - **[`report`]** — outcome, findings, report rendering.
//! - **[`config`]** — embedded fixed configuration: extension sets, denylists, checker.
//! - **[`scratch`]** — the `.commit-gate/` workspace with scoped staged copies.
//! - **[`logging`]** — best-effort diagnostics to `.commit-gate/gate.log`.

/// Syntax-checker trait and the `php -l` subprocess implementation.
pub mod checker;
/// Embedded configuration types and loading.
pub mod config;
/// Gate error type.
pub mod error;
/// The run loop over staged files.
pub mod gate;
/// Staged-index git plumbing.
pub mod git;
/// File-based diagnostic logging.
pub mod logging;
/// Findings, outcome, and report rendering.
pub mod report;
/// Comment stripping and debug-call matching.
pub mod scan;
/// Scratch workspace with scoped staged copies.
pub mod scratch;

use std::path::Path;

use error::GateError;
use report::RunReport;

/// Run the gate against `repo` with the embedded configuration and the real
/// `php -l` checker.
///
/// This is the entry point for the binary. Tests that need a canned checker
/// call [`gate::run`] directly.
pub fn run(repo: &Path) -> Result<RunReport, GateError> {
    let config = config::Config::default_config();
    let checker = checker::PhpSyntaxChecker::from_config(&config.checker);
    gate::run(repo, &config, &checker)
}
