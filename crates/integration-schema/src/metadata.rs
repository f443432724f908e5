//! The integration metadata record (`integration.json`).

use crate::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level fields that must be present and truthy, in check order.
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "name", "version", "description", "category", "developer"];

/// Self-description of an integration, read by the host when loading it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationMetadata {
    /// Lowercase slug, also the package name and directory name.
    pub id: String,
    pub name: String,
    /// Semantic version `x.y.z`.
    pub version: String,
    pub description: String,
    pub category: Category,
    pub developer: Developer,
    /// Capabilities requested from the host, in declaration order.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Gateway events the integration subscribes to.
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub settings: BTreeMap<String, SettingSpec>,
    #[serde(default)]
    pub flags: Flags,
}

impl IntegrationMetadata {
    /// Declared default for a setting, if the setting exists.
    pub fn setting_default(&self, key: &str) -> Option<&Value> {
        self.settings.get(key).map(|s| &s.default)
    }

    /// Defaults for every declared setting.
    pub fn default_settings(&self) -> BTreeMap<String, Value> {
        self.settings
            .iter()
            .map(|(k, spec)| (k.clone(), spec.default.clone()))
            .collect()
    }
}

/// Who maintains the integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Declaration of a single user-configurable setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub default: Value,
    #[serde(default)]
    pub description: String,
}

/// Marketplace flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub beta: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> &'static str {
        r#"{
            "id": "welcome-bot",
            "name": "Welcome Bot",
            "version": "1.2.0",
            "description": "Greets new members",
            "category": "utility",
            "developer": {"name": "Sam", "email": "sam@example.com"},
            "permissions": ["SEND_MESSAGES"],
            "events": ["guildMemberAdd"],
            "settings": {
                "greeting": {"type": "string", "default": "hi", "description": "Greeting text"}
            }
        }"#
    }

    #[test]
    fn test_parse_metadata() {
        let meta: IntegrationMetadata = serde_json::from_str(sample()).unwrap();
        assert_eq!(meta.id, "welcome-bot");
        assert_eq!(meta.category, Category::Utility);
        assert_eq!(meta.developer.github, None);
        assert_eq!(meta.flags, Flags::default());
        assert_eq!(meta.settings["greeting"].kind, "string");
    }

    #[test]
    fn test_setting_defaults() {
        let meta: IntegrationMetadata = serde_json::from_str(sample()).unwrap();
        assert_eq!(
            meta.setting_default("greeting"),
            Some(&Value::String("hi".into()))
        );
        assert_eq!(meta.setting_default("missing"), None);
        assert_eq!(meta.default_settings().len(), 1);
    }

    #[test]
    fn test_github_omitted_when_absent() {
        let dev = Developer {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            github: None,
        };
        let json = serde_json::to_string(&dev).unwrap();
        assert!(!json.contains("github"));
    }
}
