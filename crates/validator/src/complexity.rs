//! Size-based complexity heuristic for integration source.

use regex::Regex;
use std::sync::LazyLock;

/// `function` keywords and arrow functions.
pub static FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfunction\b|=>").unwrap());

/// Line count plus two points per function.
///
/// Lines are counted as newline-separated segments, so a trailing newline
/// adds one empty line.
pub fn complexity_score(content: &str) -> usize {
    let lines = content.split('\n').count();
    let functions = FUNCTION_PATTERN.find_iter(content).count();
    lines + 2 * functions
}
