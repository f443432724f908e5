//! Integration category definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace category an integration is listed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Moderation,
    #[default]
    Utility,
    Entertainment,
    Automation,
    Analytics,
    Security,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::Moderation,
        Category::Utility,
        Category::Entertainment,
        Category::Automation,
        Category::Analytics,
        Category::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Moderation => "moderation",
            Category::Utility => "utility",
            Category::Entertainment => "entertainment",
            Category::Automation => "automation",
            Category::Analytics => "analytics",
            Category::Security => "security",
        }
    }

    /// Exact, case-sensitive membership test used by the validator.
    pub fn is_known(value: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == value)
    }

    /// Comma separated list for prompts and messages.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(Category::from_str("security").unwrap(), Category::Security);
        assert_eq!(Category::from_str(" Utility ").unwrap(), Category::Utility);
        assert!(Category::from_str("games").is_err());
    }

    #[test]
    fn test_is_known_is_case_sensitive() {
        assert!(Category::is_known("analytics"));
        assert!(!Category::is_known("Analytics"));
        assert!(!Category::is_known(""));
    }

    #[test]
    fn test_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
