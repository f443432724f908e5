//! The package manifest (`package.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Packages an integration may depend on. Anything else is rejected.
pub const ALLOWED_DEPENDENCIES: [&str; 5] = ["discord.js", "axios", "lodash", "moment", "node-cron"];

/// Required value of the manifest `type` field.
pub const MODULE_TYPE: &str = "module";

/// Check a dependency name against the allow-list.
pub fn is_allowed_dependency(name: &str) -> bool {
    ALLOWED_DEPENDENCIES.contains(&name)
}

/// Subset of `package.json` the tooling reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
    /// Package name to version range.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl PackageManifest {
    /// Dependencies outside the allow-list, in key order.
    pub fn disallowed_dependencies(&self) -> Vec<&str> {
        self.dependencies
            .keys()
            .map(String::as_str)
            .filter(|name| !is_allowed_dependency(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        assert!(is_allowed_dependency("discord.js"));
        assert!(is_allowed_dependency("node-cron"));
        assert!(!is_allowed_dependency("request"));
        assert!(!is_allowed_dependency("Discord.js"));
    }

    #[test]
    fn test_disallowed_dependencies() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{
                "name": "x",
                "version": "1.0.0",
                "type": "module",
                "dependencies": {"request": "^1.0.0", "axios": "^1.6.0", "shelljs": "*"}
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.module_type.as_deref(), Some(MODULE_TYPE));
        assert_eq!(manifest.disallowed_dependencies(), vec!["request", "shelljs"]);
    }

    #[test]
    fn test_type_field_renamed() {
        let manifest = PackageManifest {
            name: "x".into(),
            version: "1.0.0".into(),
            description: None,
            module_type: Some(MODULE_TYPE.into()),
            main: None,
            scripts: BTreeMap::new(),
            dependencies: BTreeMap::new(),
            author: None,
            license: None,
        };
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["type"], "module");
        assert!(value.get("scripts").is_none());
    }
}
