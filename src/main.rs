//! Binary entry point for the pre-commit hook.
//!
//! Git invokes the hook with the working directory at the repository root,
//! no arguments and no stdin. Exit 0 allows the commit, 1 refuses it,
//! 2 signals an environment failure (the staged-list query itself failed).

use commit_gate::checker::PhpSyntaxChecker;
use commit_gate::config::Config;
use commit_gate::{gate, logging};

fn main() {
    let repo = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("commit-gate: cannot determine working directory: {e}");
            std::process::exit(2);
        }
    };

    let config = Config::default_config();
    logging::init(
        &repo.join(&config.workspace.scratch_dir),
        &config.workspace.gate_log,
    );

    let checker = PhpSyntaxChecker::from_config(&config.checker);
    let report = match gate::run(&repo, &config, &checker) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("commit-gate: {e}");
            std::process::exit(2);
        }
    };

    let rendered = report.render(&config.checker.noise_lines);
    if !rendered.is_empty() {
        print!("{rendered}");
    }
    std::process::exit(report.outcome().exit_code());
}
