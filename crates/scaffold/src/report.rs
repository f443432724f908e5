//! Human-readable scaffold summary.

use crate::types::ScaffoldResult;
use mercy_common::digest::short_fingerprint;

/// Render the list of created files and next steps.
pub fn render_text(result: &ScaffoldResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Created integration: {} ({})\n",
        result.integration_id, result.class_name
    ));
    out.push_str(&format!("Path: {}\n", result.path));
    out.push_str(&format!("Generated: {}\n\n", result.generated_at));

    out.push_str("Files:\n");
    for file in &result.files_created {
        out.push_str(&format!(
            "  + {:<22} {:>6} bytes  {}  {}\n",
            file.path,
            file.size,
            &file.sha256[..12.min(file.sha256.len())],
            file.purpose
        ));
    }

    out.push_str("\nNext steps:\n");
    for (i, step) in result.next_steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    out
}

/// One-line summary for logs.
pub fn summary_line(result: &ScaffoldResult) -> String {
    let combined: String = result
        .files_created
        .iter()
        .map(|f| f.sha256.as_str())
        .collect();
    format!(
        "{} files for {} (fingerprint {})",
        result.files_created.len(),
        result.integration_id,
        short_fingerprint(&combined)
    )
}
