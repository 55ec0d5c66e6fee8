//! Best-effort diagnostic logging to `.commit-gate/gate.log`.
//!
//! Stdout belongs to the report (and stays silent on a clean run), so the
//! gate's own diagnostics go to a file in the scratch directory. Failures
//! are silently ignored: logging must never block the hook.

use std::fs::OpenOptions;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Initialize the file logger, creating the scratch directory if needed.
pub fn init(scratch_dir: &Path, file_name: &str) {
    let _ = std::fs::create_dir_all(scratch_dir);
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(scratch_dir.join(file_name))
    else {
        return;
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(LevelFilter::Debug, config, file);
}
