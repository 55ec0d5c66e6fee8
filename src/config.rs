use serde::Deserialize;

/// Embedded gate configuration.
///
/// Unlike most lint tools there is no user overlay on top of this: the
/// denylists and extension sets are fixed at build time so every clone of a
/// repository enforces the same rules. Tests construct `Config` values
/// directly when they need smaller sets.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

#[derive(Debug, Deserialize)]
pub struct Config {
    pub php: FamilyConfig,
    pub script: FamilyConfig,
    pub checker: CheckerConfig,
    pub workspace: WorkspaceConfig,
}

/// One scanned file family: which staged paths belong to it and which
/// identifiers are forbidden in call position.
#[derive(Debug, Deserialize)]
pub struct FamilyConfig {
    /// File extensions (without the dot) selecting staged paths.
    pub extensions: Vec<String>,
    /// Forbidden identifiers, matched case-sensitively as `name(`.
    pub debug_identifiers: Vec<String>,
}

/// External syntax checker invocation and output handling.
#[derive(Debug, Deserialize)]
pub struct CheckerConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Exit status that unambiguously denotes a parse error. Every other
    /// non-zero status is informational.
    pub parse_error_status: i32,
    /// Banner lines the checker always prints, filtered from the report.
    #[serde(default)]
    pub noise_lines: Vec<String>,
}

/// Scratch directory layout at the repository root.
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    pub scratch_dir: String,
    pub lint_log: String,
    pub gate_log: String,
}

impl FamilyConfig {
    /// True if the repo-relative `path` carries one of this family's
    /// extensions. Matching is case-sensitive, like the shell globs the
    /// extension sets came from.
    pub fn matches(&self, path: &str) -> bool {
        let name = path.rsplit('/').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((_, ext)) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }
}

impl Config {
    /// Load the embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }
}
