//! Run outcome, accumulated findings, and report rendering.

use std::fmt::Write as _;

use crate::scan::DebugCallMatch;

/// Overall result of a gate run. Binary: the commit is allowed or refused,
/// with no partial-success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Abort,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Pass => 0,
            Outcome::Abort => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Abort => "ABORT",
        }
    }
}

/// Debug-call hits in one staged file.
#[derive(Debug, Clone)]
pub struct DebugFinding {
    pub path: String,
    pub matches: Vec<DebugCallMatch>,
}

/// A hard syntax error in one staged file, with the checker output
/// attributable to that file.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    pub path: String,
    pub output: String,
}

/// Everything a run accumulated. Checks never fail fast, so by the time this
/// is rendered every staged file has been examined and the report is
/// exhaustive for the commit attempt.
#[derive(Debug, Default)]
pub struct RunReport {
    pub debug_findings: Vec<DebugFinding>,
    pub syntax_errors: Vec<SyntaxError>,
    /// Raw checker output for every PHP-family file, in scan order. Also
    /// written to the lint log on disk.
    pub lint_log: String,
    /// Scratch path prefix stripped when rendering checker output, so paths
    /// read repo-relative.
    pub scratch_prefix: String,
}

impl RunReport {
    pub fn outcome(&self) -> Outcome {
        if self.debug_findings.is_empty() && self.syntax_errors.is_empty() {
            Outcome::Pass
        } else {
            Outcome::Abort
        }
    }

    /// Render the human-readable report. Empty on a clean run — silent
    /// success is part of the contract.
    ///
    /// `noise_lines` are checker banner lines to drop from the syntax-error
    /// section (the checker prints them for every file, error or not).
    pub fn render(&self, noise_lines: &[String]) -> String {
        if self.outcome() == Outcome::Pass {
            return String::new();
        }

        let mut out = String::new();

        if !self.debug_findings.is_empty() {
            out.push_str("Debug code found in staged files:\n");
            for finding in &self.debug_findings {
                for m in &finding.matches {
                    let _ = writeln!(out, "\n  {}:{} ({})", finding.path, m.line, m.identifier);
                    for (no, text) in &m.context {
                        let marker = if *no == m.line { '>' } else { ' ' };
                        let _ = writeln!(out, "  {marker} {no:4} | {text}");
                    }
                }
            }
            out.push('\n');
        }

        if !self.syntax_errors.is_empty() {
            out.push_str("Syntax errors found in staged files:\n");
            for err in &self.syntax_errors {
                let _ = writeln!(out, "\n  {}:", err.path);
                for line in err.output.lines() {
                    if line.trim().is_empty()
                        || noise_lines.iter().any(|n| line.contains(n.as_str()))
                    {
                        continue;
                    }
                    let _ = writeln!(out, "    {}", line.replace(&self.scratch_prefix, ""));
                }
            }
            out.push('\n');
        }

        out.push_str("Commit refused.\n");
        out.push_str("  - bypass with 'git commit --no-verify'\n");
        out.push_str("  - if reported line numbers look wrong, stash unstaged changes first:\n");
        out.push_str("    the gate checks staged content, not your working tree\n");
        out
    }
}
