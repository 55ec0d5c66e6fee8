//! The commit gate: scan every staged file, accumulate findings, decide.
//!
//! Deliberately not fail-fast: a finding marks the run for abort but the
//! scan continues, so one commit attempt surfaces every problem at once.
//! PHP-family files are scanned before script-family files, each family in
//! staged-list order.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::Path;

use log::{debug, info, warn};

use crate::checker::SyntaxChecker;
use crate::config::Config;
use crate::error::GateError;
use crate::report::{DebugFinding, RunReport, SyntaxError};
use crate::scan::{DebugCallPattern, strip_line_comments};
use crate::scratch::{ScratchWorkspace, StagedCopy};

/// Run every check against the staged index of `repo` and return the
/// accumulated report.
///
/// Per-file problems (including a copy that cannot be materialized or a
/// checker that cannot be spawned) are logged and accumulated or skipped;
/// only the staged-list query and the scratch-directory creation are fatal.
pub fn run(
    repo: &Path,
    config: &Config,
    checker: &dyn SyntaxChecker,
) -> Result<RunReport, GateError> {
    let staged = crate::git::staged_paths(repo)?;
    let scratch = ScratchWorkspace::open(repo, &config.workspace.scratch_dir)?;

    let mut report = RunReport {
        scratch_prefix: format!("{}/", scratch.root().display()),
        ..Default::default()
    };

    // The lint log holds this run's checker output only.
    let lint_log = scratch.root().join(&config.workspace.lint_log);
    if let Err(e) = fs::write(&lint_log, "") {
        warn!("cannot truncate {}: {e}", lint_log.display());
    }

    info!("gate run: {} staged path(s)", staged.len());

    let php_pattern = DebugCallPattern::new(&config.php.debug_identifiers);
    for path in staged.iter().filter(|p| config.php.matches(p)) {
        let Some(copy) = materialize(&scratch, repo, path) else {
            continue;
        };
        let Some(raw) = read(&copy, path) else {
            continue;
        };

        // Pre-check against the unstripped bytes is a cheap filter; the
        // comment-stripped text is the authoritative match surface.
        if php_pattern.is_match(&raw) {
            let matches = php_pattern.find_matches(&strip_line_comments(&raw));
            if !matches.is_empty() {
                debug!("{path}: {} debug call(s)", matches.len());
                report.debug_findings.push(DebugFinding {
                    path: path.clone(),
                    matches,
                });
            }
        }

        match checker.check(copy.path()) {
            Ok(check) => {
                report.lint_log.push_str(&check.output);
                append_lint_log(&lint_log, &check.output);
                if check.hard_error {
                    debug!("{path}: hard syntax error");
                    report.syntax_errors.push(SyntaxError {
                        path: path.clone(),
                        output: check.output,
                    });
                }
            }
            Err(e) => warn!("{path}: syntax check skipped: {e}"),
        }
    }

    let script_pattern = DebugCallPattern::new(&config.script.debug_identifiers);
    for path in staged.iter().filter(|p| config.script.matches(p)) {
        let Some(copy) = materialize(&scratch, repo, path) else {
            continue;
        };
        let Some(raw) = read(&copy, path) else {
            continue;
        };

        // No pre-check and no syntax check for scripts.
        let matches = script_pattern.find_matches(&strip_line_comments(&raw));
        if !matches.is_empty() {
            debug!("{path}: {} debug call(s)", matches.len());
            report.debug_findings.push(DebugFinding {
                path: path.clone(),
                matches,
            });
        }
    }

    info!("gate result: {}", report.outcome().label());
    Ok(report)
}

fn materialize<'a>(
    scratch: &'a ScratchWorkspace,
    repo: &Path,
    path: &str,
) -> Option<StagedCopy<'a>> {
    match scratch.materialize(repo, path) {
        Ok(copy) => Some(copy),
        Err(e) => {
            warn!("{path}: cannot materialize staged content, skipping: {e}");
            None
        }
    }
}

fn read(copy: &StagedCopy<'_>, path: &str) -> Option<String> {
    match copy.read() {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("{path}: cannot read staged copy, skipping: {e}");
            None
        }
    }
}

fn append_lint_log(path: &Path, text: &str) {
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| f.write_all(text.as_bytes()));
    if let Err(e) = result {
        warn!("lint log write failed: {e}");
    }
}
