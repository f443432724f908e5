//! Validator configuration.

use mercy_integration_schema::ALLOWED_DEPENDENCIES;

/// Default minimum score for a passing integration.
pub const DEFAULT_PASS_THRESHOLD: i32 = 70;

/// Default complexity ceiling before a warning is raised.
pub const DEFAULT_COMPLEXITY_LIMIT: usize = 1000;

/// Default minimum README length, in characters.
pub const DEFAULT_README_MIN_CHARS: usize = 100;

/// Thresholds and allow-lists used by a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Minimum score (inclusive) for a passing run.
    pub pass_threshold: i32,
    /// Complexity above this value costs a warning.
    pub complexity_limit: usize,
    /// READMEs shorter than this get a warning.
    pub readme_min_chars: usize,
    /// Package names allowed in `dependencies`.
    pub allowed_dependencies: Vec<String>,
}

impl ValidatorConfig {
    pub fn is_allowed_dependency(&self, name: &str) -> bool {
        self.allowed_dependencies.iter().any(|d| d == name)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            complexity_limit: DEFAULT_COMPLEXITY_LIMIT,
            readme_min_chars: DEFAULT_README_MIN_CHARS,
            allowed_dependencies: ALLOWED_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
        }
    }
}
