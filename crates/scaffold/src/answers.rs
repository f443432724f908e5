//! Answers collected from the developer.

use crate::error::{Result, ScaffoldError};
use mercy_integration_schema::{is_valid_id, to_pascal_case, Category};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "A M.E.R.C.Y integration";

/// Everything the generator needs to know about a new integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub name: String,
    pub id: String,
    pub description: String,
    pub category: Category,
    pub developer_name: String,
    pub developer_email: String,
    pub github: Option<String>,
}

impl Answers {
    /// Reject answers that cannot produce a loadable integration.
    pub fn validate(&self) -> Result<()> {
        if to_pascal_case(&self.name).is_empty() {
            return Err(ScaffoldError::EmptyName);
        }
        if !is_valid_id(&self.id) {
            return Err(ScaffoldError::InvalidId(self.id.clone()));
        }
        if self.developer_name.trim().is_empty() {
            return Err(ScaffoldError::MissingDeveloper("name"));
        }
        if self.developer_email.trim().is_empty() {
            return Err(ScaffoldError::MissingDeveloper("email"));
        }
        Ok(())
    }

    /// JavaScript class name for the generated entry point.
    ///
    /// Names starting with a digit get an `Integration` prefix so the
    /// result is a valid identifier.
    pub fn class_name(&self) -> String {
        let pascal = to_pascal_case(&self.name);
        if pascal.starts_with(|c: char| c.is_ascii_digit()) {
            format!("Integration{pascal}")
        } else {
            pascal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(name: &str, id: &str) -> Answers {
        Answers {
            name: name.to_string(),
            id: id.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            category: Category::Utility,
            developer_name: "Sam".to_string(),
            developer_email: "sam@example.com".to_string(),
            github: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(answers("Cool Bot", "cool-bot").validate().is_ok());
        assert!(matches!(
            answers("  ", "x").validate(),
            Err(ScaffoldError::EmptyName)
        ));
        assert!(matches!(
            answers("Cool Bot", "Cool Bot").validate(),
            Err(ScaffoldError::InvalidId(_))
        ));
    }

    #[test]
    fn test_validate_developer() {
        let mut a = answers("Cool Bot", "cool-bot");
        a.developer_name = " ".to_string();
        assert!(matches!(a.validate(), Err(ScaffoldError::MissingDeveloper("name"))));

        let mut a = answers("Cool Bot", "cool-bot");
        a.developer_email = String::new();
        let err = a.validate().unwrap_err();
        assert_eq!(err.to_string(), "Developer email must not be empty");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(answers("cool bot-2", "x").class_name(), "CoolBot2");
        assert_eq!(answers("2 fast", "x").class_name(), "Integration2Fast");
    }
}
