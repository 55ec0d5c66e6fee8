//! Syntax checking: the capability seam around the external PHP linter.
//!
//! Each implementation knows how to parse-check one file and classify the
//! result. Only the checker's designated parse-error exit status counts as a
//! hard failure; the checker is free to exit non-zero for conditions that
//! must not refuse a commit.

use std::path::Path;
use std::process::Command;

use crate::config::CheckerConfig;
use crate::error::GateError;

/// Result of one syntax check.
#[derive(Debug, Clone)]
pub struct LintCheck {
    /// Everything the checker printed, stdout then stderr.
    pub output: String,
    /// True only for the designated parse-error exit status.
    pub hard_error: bool,
}

/// Trait for syntax-only parse checks.
///
/// The one genuinely external dependency of the gate; tests substitute an
/// implementation returning canned results.
pub trait SyntaxChecker: Send + Sync {
    /// Parse-check the file at `path` and classify the outcome.
    fn check(&self, path: &Path) -> Result<LintCheck, GateError>;
}

/// Subprocess checker invoking `php -l` (or whatever the configuration
/// names) once per file.
pub struct PhpSyntaxChecker {
    command: String,
    args: Vec<String>,
    parse_error_status: i32,
}

impl PhpSyntaxChecker {
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            parse_error_status: config.parse_error_status,
        }
    }
}

impl SyntaxChecker for PhpSyntaxChecker {
    fn check(&self, path: &Path) -> Result<LintCheck, GateError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| GateError::Checker {
                command: self.command.clone(),
                detail: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(LintCheck {
            output: text,
            hard_error: output.status.code() == Some(self.parse_error_status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_checker(script: &str) -> PhpSyntaxChecker {
        PhpSyntaxChecker {
            command: "sh".into(),
            args: vec!["-c".into(), script.into()],
            parse_error_status: 255,
        }
    }

    #[test]
    fn sentinel_status_is_hard_error() {
        let check = sh_checker("echo 'Parse error'; exit 255")
            .check(Path::new("ignored"))
            .unwrap();
        assert!(check.hard_error);
        assert!(check.output.contains("Parse error"));
    }

    #[test]
    fn other_nonzero_status_is_informational() {
        let check = sh_checker("echo 'deprecation notice'; exit 1")
            .check(Path::new("ignored"))
            .unwrap();
        assert!(!check.hard_error);
        assert!(check.output.contains("deprecation notice"));
    }

    #[test]
    fn success_is_not_hard_error() {
        let check = sh_checker("echo 'No syntax errors detected'; exit 0")
            .check(Path::new("ignored"))
            .unwrap();
        assert!(!check.hard_error);
    }

    #[test]
    fn stderr_is_captured_after_stdout() {
        let check = sh_checker("echo out; echo err >&2; exit 0")
            .check(Path::new("ignored"))
            .unwrap();
        assert_eq!(check.output, "out\nerr\n");
    }

    #[test]
    fn missing_binary_is_a_checker_error() {
        let checker = PhpSyntaxChecker {
            command: "definitely-not-a-real-linter".into(),
            args: vec![],
            parse_error_status: 255,
        };
        assert!(matches!(
            checker.check(Path::new("ignored")),
            Err(GateError::Checker { .. })
        ));
    }
}
