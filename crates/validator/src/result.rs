//! Validation result accumulated across check phases.

use serde::Serialize;

/// Score every run starts from.
pub const MAX_SCORE: i32 = 100;

/// Outcome of validating one integration directory.
///
/// The score only ever goes down and is not clamped; it can end negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub score: i32,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            score: MAX_SCORE,
            is_valid: true,
        }
    }

    /// Record a hard error. Any error fails validation regardless of score.
    pub fn add_error(&mut self, message: impl Into<String>, penalty: i32) {
        self.is_valid = false;
        self.errors.push(message.into());
        self.score -= penalty;
    }

    /// Record a soft warning that only costs points.
    pub fn add_warning(&mut self, message: impl Into<String>, penalty: i32) {
        self.warnings.push(message.into());
        self.score -= penalty;
    }

    /// Settle the verdict once every phase has run.
    pub fn finalize(&mut self, pass_threshold: i32) {
        self.is_valid = self.errors.is_empty() && self.score >= pass_threshold;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}
