//! JSON schema for the integration metadata record.

/// JSON Schema for integration.json.
pub const METADATA_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "$id": "https://mercy.bot/schemas/integration.json",
  "title": "M.E.R.C.Y Integration Metadata",
  "type": "object",
  "required": ["id", "name", "version", "description", "category", "developer"],
  "properties": {
    "id": {
      "type": "string",
      "pattern": "^[a-z0-9_-]+$"
    },
    "name": { "type": "string", "minLength": 1 },
    "version": {
      "type": "string",
      "pattern": "^\\d+\\.\\d+\\.\\d+$"
    },
    "description": { "type": "string", "minLength": 1 },
    "category": {
      "type": "string",
      "enum": ["moderation", "utility", "entertainment", "automation", "analytics", "security"]
    },
    "developer": {
      "type": "object",
      "required": ["name", "email"],
      "properties": {
        "name": { "type": "string", "minLength": 1 },
        "email": { "type": "string", "minLength": 1 },
        "github": { "type": "string" }
      }
    },
    "permissions": {
      "type": "array",
      "items": { "type": "string" }
    },
    "events": {
      "type": "array",
      "items": { "type": "string" }
    },
    "settings": {
      "type": "object",
      "additionalProperties": {
        "type": "object",
        "required": ["type"],
        "properties": {
          "type": { "type": "string" },
          "default": {},
          "description": { "type": "string" }
        }
      }
    },
    "flags": {
      "type": "object",
      "properties": {
        "premium": { "type": "boolean" },
        "experimental": { "type": "boolean" },
        "beta": { "type": "boolean" }
      }
    }
  }
}"#;

/// Get the metadata schema as a parsed JSON value.
pub fn metadata_schema() -> serde_json::Value {
    serde_json::from_str(METADATA_SCHEMA).expect("Invalid metadata schema")
}
