//! Staged-content scanning: pure text transforms with no file I/O.
//!
//! Two stages, applied in order: [`strip_line_comments`] removes `//`
//! comments so commented-out debug calls never match, then
//! [`DebugCallPattern`] finds denylisted identifiers in call position.

/// `//` line-comment stripping.
pub mod comments;
/// Word-bounded debug-call matching with context capture.
pub mod pattern;

pub use comments::strip_line_comments;
pub use pattern::{DebugCallMatch, DebugCallPattern};
