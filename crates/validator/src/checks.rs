//! The individual check phases of a validation run.
//!
//! Each phase appends findings to a shared [`ValidationResult`]. Phases never
//! return errors: I/O and parse failures become findings.

use crate::complexity::complexity_score;
use crate::config::ValidatorConfig;
use crate::result::ValidationResult;
use crate::rules::security_rules;
use mercy_integration_schema::layout::{
    MANIFEST_FILE, METADATA_FILE, README_FILE, REQUIRED_FILES, SOURCE_ENTRY, TEST_DIR,
};
use mercy_integration_schema::metadata::REQUIRED_FIELDS;
use mercy_integration_schema::{is_valid_id, is_valid_version, Category, MODULE_TYPE};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const MISSING_FILE_PENALTY: i32 = 20;
pub const METADATA_PARSE_PENALTY: i32 = 25;
pub const MISSING_FIELD_PENALTY: i32 = 10;
pub const VERSION_FORMAT_PENALTY: i32 = 5;
pub const ID_FORMAT_PENALTY: i32 = 15;
pub const CATEGORY_PENALTY: i32 = 5;
pub const MANIFEST_PARSE_PENALTY: i32 = 20;
pub const MANIFEST_FIELD_PENALTY: i32 = 5;
pub const DEPENDENCY_PENALTY: i32 = 15;
pub const SOURCE_READ_PENALTY: i32 = 25;
pub const MISSING_EXPORT_PENALTY: i32 = 25;
pub const MISSING_LOAD_HOOK_PENALTY: i32 = 5;
pub const COMPLEXITY_PENALTY: i32 = 10;
pub const SHORT_README_PENALTY: i32 = 5;
pub const README_READ_PENALTY: i32 = 5;
pub const MISSING_TESTS_PENALTY: i32 = 5;

/// Literal the source entry must contain.
pub const DEFAULT_EXPORT_MARKER: &str = "export default class";

/// Literal marking the load lifecycle hook.
pub const LOAD_HOOK_MARKER: &str = "onLoad(";

/// Which required files were found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    pub metadata: bool,
    pub manifest: bool,
    pub source: bool,
    pub readme: bool,
}

/// JSON truthiness: missing, null, false, 0 and "" are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// String form used for format checks; non-strings use their JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Check that every required file exists. Never short-circuits.
pub fn check_required_files(root: &Path, result: &mut ValidationResult) -> Presence {
    let mut found = [false; 4];
    for (slot, file) in found.iter_mut().zip(REQUIRED_FILES) {
        *slot = root.join(file).exists();
        if !*slot {
            result.add_error(format!("Missing required file: {}", file), MISSING_FILE_PENALTY);
        }
    }
    debug!("Required files present: {:?}", found);

    Presence {
        metadata: found[0],
        manifest: found[1],
        source: found[2],
        readme: found[3],
    }
}

/// Check `integration.json`: JSON syntax, required fields and formats.
pub fn check_metadata(root: &Path, result: &mut ValidationResult) {
    let path = root.join(METADATA_FILE);
    let metadata = match read_json(&path) {
        Ok(value) => value,
        Err(reason) => {
            result.add_error(
                format!("Invalid {}: {}", METADATA_FILE, reason),
                METADATA_PARSE_PENALTY,
            );
            return;
        }
    };

    for field in REQUIRED_FIELDS {
        if !is_truthy(metadata.get(field)) {
            result.add_error(
                format!("Missing required field in {}: {}", METADATA_FILE, field),
                MISSING_FIELD_PENALTY,
            );
        }
    }

    if let Some(version) = metadata.get("version").filter(|v| is_truthy(Some(*v))) {
        let version = text_of(version);
        if !is_valid_version(&version) {
            result.add_warning(
                format!("Version should follow semantic versioning (x.y.z): {}", version),
                VERSION_FORMAT_PENALTY,
            );
        }
    }

    if let Some(id) = metadata.get("id").filter(|v| is_truthy(Some(*v))) {
        let id = text_of(id);
        if !is_valid_id(&id) {
            result.add_error(
                format!(
                    "Invalid id \"{}\": use lowercase letters, digits, hyphens and underscores",
                    id
                ),
                ID_FORMAT_PENALTY,
            );
        }
    }

    if let Some(category) = metadata.get("category").filter(|v| is_truthy(Some(*v))) {
        let category = text_of(category);
        if !Category::is_known(&category) {
            result.add_warning(
                format!(
                    "Unknown category \"{}\" (expected one of: {})",
                    category,
                    Category::listing()
                ),
                CATEGORY_PENALTY,
            );
        }
    }
}

/// Check `package.json`: JSON syntax, identity fields, module type and
/// the dependency allow-list.
pub fn check_manifest(root: &Path, config: &ValidatorConfig, result: &mut ValidationResult) {
    let path = root.join(MANIFEST_FILE);
    let manifest = match read_json(&path) {
        Ok(value) => value,
        Err(reason) => {
            result.add_error(
                format!("Invalid {}: {}", MANIFEST_FILE, reason),
                MANIFEST_PARSE_PENALTY,
            );
            return;
        }
    };

    if !is_truthy(manifest.get("name")) {
        result.add_warning(
            format!("{} is missing a name", MANIFEST_FILE),
            MANIFEST_FIELD_PENALTY,
        );
    }
    if !is_truthy(manifest.get("version")) {
        result.add_warning(
            format!("{} is missing a version", MANIFEST_FILE),
            MANIFEST_FIELD_PENALTY,
        );
    }
    if manifest.get("type").and_then(Value::as_str) != Some(MODULE_TYPE) {
        result.add_warning(
            format!("{} should declare \"type\": \"{}\"", MANIFEST_FILE, MODULE_TYPE),
            MANIFEST_FIELD_PENALTY,
        );
    }

    if let Some(dependencies) = manifest.get("dependencies").and_then(Value::as_object) {
        for name in dependencies.keys() {
            if !config.is_allowed_dependency(name) {
                result.add_error(
                    format!(
                        "Dependency not allowed: {} (allowed: {})",
                        name,
                        config.allowed_dependencies.join(", ")
                    ),
                    DEPENDENCY_PENALTY,
                );
            }
        }
    }
}

/// Scan the source entry against the rule table and check its structure.
pub fn check_source(root: &Path, config: &ValidatorConfig, result: &mut ValidationResult) {
    let path = root.join(SOURCE_ENTRY);
    let content = match std::fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            result.add_error(
                format!("Could not read {}: {}", SOURCE_ENTRY, e),
                SOURCE_READ_PENALTY,
            );
            return;
        }
    };

    for rule in security_rules() {
        let count = rule.count_matches(&content);
        if count == 0 {
            continue;
        }
        debug!("Rule {} matched {} time(s)", rule.id, count);
        let message = format!(
            "Security ({}): {} [{} occurrence{}]",
            rule.severity,
            rule.message,
            count,
            if count == 1 { "" } else { "s" }
        );
        if rule.severity.is_error() {
            result.add_error(message, rule.severity.penalty());
        } else {
            result.add_warning(message, rule.severity.penalty());
        }
    }

    if !content.contains(DEFAULT_EXPORT_MARKER) {
        result.add_error(
            format!(
                "{} must export the integration class (`{}`)",
                SOURCE_ENTRY, DEFAULT_EXPORT_MARKER
            ),
            MISSING_EXPORT_PENALTY,
        );
    }

    if !content.contains(LOAD_HOOK_MARKER) {
        result.add_warning(
            format!("{} does not implement onLoad()", SOURCE_ENTRY),
            MISSING_LOAD_HOOK_PENALTY,
        );
    }

    let complexity = complexity_score(&content);
    if complexity > config.complexity_limit {
        result.add_warning(
            format!(
                "Code complexity is high ({} > {}); consider splitting into modules",
                complexity, config.complexity_limit
            ),
            COMPLEXITY_PENALTY,
        );
    }
}

/// README length and test directory. Runs regardless of earlier failures.
pub fn check_auxiliary(
    root: &Path,
    presence: Presence,
    config: &ValidatorConfig,
    result: &mut ValidationResult,
) {
    if presence.readme {
        match std::fs::read(root.join(README_FILE)) {
            Ok(bytes) => {
                let chars = String::from_utf8_lossy(&bytes).chars().count();
                if chars < config.readme_min_chars {
                    result.add_warning(
                        format!(
                            "{} is too short ({} characters, minimum {})",
                            README_FILE, chars, config.readme_min_chars
                        ),
                        SHORT_README_PENALTY,
                    );
                }
            }
            Err(e) => result.add_warning(
                format!("Could not read {}: {}", README_FILE, e),
                README_READ_PENALTY,
            ),
        }
    }

    if !root.join(TEST_DIR).is_dir() {
        result.add_warning(
            format!("No {}/ directory found", TEST_DIR),
            MISSING_TESTS_PENALTY,
        );
    }
}

fn read_json(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON ({})", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!({}))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!("x"))));
        assert!(is_truthy(Some(&json!(1.5))));
    }

    #[test]
    fn test_required_files_all_missing() {
        let dir = TempDir::new().unwrap();
        let mut result = ValidationResult::new();
        let presence = check_required_files(dir.path(), &mut result);
        assert_eq!(presence, Presence::default());
        assert_eq!(result.errors.len(), 4);
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_metadata_invalid_json() {
        let dir = TempDir::new().unwrap();
        dir.child(METADATA_FILE).write_str("{ not json").unwrap();
        let mut result = ValidationResult::new();
        check_metadata(dir.path(), &mut result);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_metadata_non_object_counts_all_fields_missing() {
        let dir = TempDir::new().unwrap();
        dir.child(METADATA_FILE).write_str("[1, 2]").unwrap();
        let mut result = ValidationResult::new();
        check_metadata(dir.path(), &mut result);
        assert_eq!(result.errors.len(), 6);
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_metadata_bad_formats() {
        let dir = TempDir::new().unwrap();
        dir.child(METADATA_FILE)
            .write_str(
                &json!({
                    "id": "My Integration!",
                    "name": "x",
                    "version": 2,
                    "description": "d",
                    "category": "games",
                    "developer": {}
                })
                .to_string(),
            )
            .unwrap();
        let mut result = ValidationResult::new();
        check_metadata(dir.path(), &mut result);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("My Integration!"));
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.score, 100 - 15 - 5 - 5);
    }

    #[test]
    fn test_manifest_disallowed_dependencies_in_file_order() {
        let dir = TempDir::new().unwrap();
        dir.child(MANIFEST_FILE)
            .write_str(
                r#"{"name": "x", "version": "1.0.0", "type": "module",
                    "dependencies": {"shelljs": "*", "axios": "^1.0.0", "request": "^1.0.0"}}"#,
            )
            .unwrap();
        let mut result = ValidationResult::new();
        check_manifest(dir.path(), &ValidatorConfig::default(), &mut result);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].starts_with("Dependency not allowed: shelljs"));
        assert!(result.errors[1].starts_with("Dependency not allowed: request"));
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_manifest_soft_findings() {
        let dir = TempDir::new().unwrap();
        dir.child(MANIFEST_FILE).write_str("{}").unwrap();
        let mut result = ValidationResult::new();
        check_manifest(dir.path(), &ValidatorConfig::default(), &mut result);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_source_rule_costs_once_per_rule() {
        let dir = TempDir::new().unwrap();
        let body = "eval(a);\n".repeat(50);
        dir.child(SOURCE_ENTRY)
            .write_str(&format!(
                "export default class X {{\n  async onLoad() {{}}\n}}\n{}",
                body
            ))
            .unwrap();
        let mut result = ValidationResult::new();
        check_source(dir.path(), &ValidatorConfig::default(), &mut result);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("50 occurrences"));
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_source_missing_markers() {
        let dir = TempDir::new().unwrap();
        dir.child(SOURCE_ENTRY).write_str("class X {}\n").unwrap();
        let mut result = ValidationResult::new();
        check_source(dir.path(), &ValidatorConfig::default(), &mut result);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_source_unreadable() {
        let dir = TempDir::new().unwrap();
        dir.child(SOURCE_ENTRY).create_dir_all().unwrap();
        let mut result = ValidationResult::new();
        check_source(dir.path(), &ValidatorConfig::default(), &mut result);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_auxiliary_checks() {
        let dir = TempDir::new().unwrap();
        dir.child(README_FILE).write_str("# Tiny").unwrap();
        let presence = Presence {
            readme: true,
            ..Presence::default()
        };
        let mut result = ValidationResult::new();
        check_auxiliary(dir.path(), presence, &ValidatorConfig::default(), &mut result);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_unreadable_readme_is_a_warning() {
        let dir = TempDir::new().unwrap();
        dir.child(README_FILE).create_dir_all().unwrap();
        dir.child(TEST_DIR).create_dir_all().unwrap();
        let presence = Presence {
            readme: true,
            ..Presence::default()
        };
        let mut result = ValidationResult::new();
        check_auxiliary(dir.path(), presence, &ValidatorConfig::default(), &mut result);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Could not read README.md"));
        assert_eq!(result.score, 95);
    }
}
