//! Structural validation of metadata records against the JSON schema.

use crate::schema;
use jsonschema::JSONSchema;
use serde_json::Value;
use thiserror::Error;

/// Schema validation error type.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema compilation failed: {0}")]
    Compile(String),

    #[error("Metadata does not match schema: {}", .0.join("; "))]
    Violations(Vec<String>),
}

/// Validate a metadata value against the metadata schema.
///
/// Collects every violation as `"<message> at <pointer>"`.
pub fn validate_metadata(metadata: &Value) -> Result<(), SchemaError> {
    let schema_value = schema::metadata_schema();
    let compiled =
        JSONSchema::compile(&schema_value).map_err(|e| SchemaError::Compile(e.to_string()))?;

    let violations: Vec<String> = match compiled.validate(metadata) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| format!("{} at {}", error, error.instance_path))
            .collect(),
    };

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Violations(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_minimal_metadata() {
        let metadata = serde_json::json!({
            "id": "welcome-bot",
            "name": "Welcome Bot",
            "version": "1.0.0",
            "description": "Greets people",
            "category": "utility",
            "developer": {"name": "Sam", "email": "sam@example.com"}
        });

        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn test_validate_reports_each_violation() {
        let metadata = serde_json::json!({
            "id": "Welcome Bot",
            "name": "Welcome Bot",
            "version": "1.0",
            "description": "Greets people",
            "category": "games",
            "developer": {"name": "Sam", "email": "sam@example.com"}
        });

        match validate_metadata(&metadata) {
            Err(SchemaError::Violations(v)) => assert_eq!(v.len(), 3, "{v:?}"),
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_missing_field() {
        let metadata = serde_json::json!({ "id": "x" });
        assert!(validate_metadata(&metadata).is_err());
    }
}
