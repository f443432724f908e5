//! Human and JSON rendering of validation results.

use crate::result::{ValidationResult, MAX_SCORE};

/// Render a plain-text report.
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();
    out.push_str("=== Integration Validation ===\n\n");

    if !result.errors.is_empty() {
        out.push_str(&format!("Errors ({}):\n", result.errors.len()));
        for error in &result.errors {
            out.push_str(&format!("  ✗ {}\n", error));
        }
        out.push('\n');
    }

    if !result.warnings.is_empty() {
        out.push_str(&format!("Warnings ({}):\n", result.warnings.len()));
        for warning in &result.warnings {
            out.push_str(&format!("  ! {}\n", warning));
        }
        out.push('\n');
    }

    if result.errors.is_empty() && result.warnings.is_empty() {
        out.push_str("No issues found.\n\n");
    }

    out.push_str(&format!("Score: {}/{}\n", result.score, MAX_SCORE));
    out.push_str(&format!(
        "Status: {}\n",
        if result.is_valid { "PASSED" } else { "FAILED" }
    ));
    out
}

/// Render the result as pretty JSON.
pub fn render_json(result: &ValidationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
