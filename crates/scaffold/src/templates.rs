//! Template registry for generated files.

use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;

/// Class name used inside the embedded entry point template.
pub const PLACEHOLDER_CLASS: &str = "TemplateIntegration";

/// Self-contained entry point, copied with the placeholder replaced.
pub const INTEGRATION_TEMPLATE: &str = include_str!("../templates/integration.js");

const README_TEMPLATE: &str = include_str!("../templates/README.md.hbs");
const LICENSE_TEMPLATE: &str = include_str!("../templates/LICENSE.hbs");
const TEST_STUB_TEMPLATE: &str = include_str!("../templates/index.test.js.hbs");
const EXTENDS_TEMPLATE: &str = include_str!("../templates/integration_extends.js.hbs");

pub const README: &str = "readme";
pub const LICENSE: &str = "license";
pub const TEST_STUB: &str = "test_stub";
pub const EXTENDS_SOURCE: &str = "extends_source";

/// Handlebars registry with every template registered.
///
/// Output is source code and markdown, so HTML escaping is disabled.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string(README, README_TEMPLATE)?;
        registry.register_template_string(LICENSE, LICENSE_TEMPLATE)?;
        registry.register_template_string(TEST_STUB, TEST_STUB_TEMPLATE)?;
        registry.register_template_string(EXTENDS_SOURCE, EXTENDS_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.registry.render(name, data)?)
    }
}

/// Copy the embedded template, renaming the placeholder class.
pub fn render_from_template(class_name: &str) -> String {
    INTEGRATION_TEMPLATE.replace(PLACEHOLDER_CLASS, class_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_fully_replaced() {
        let source = render_from_template("CoolBot2");
        assert!(!source.contains(PLACEHOLDER_CLASS));
        assert!(source.contains("export default class CoolBot2"));
        assert!(source.contains("this.name = 'CoolBot2';"));
    }

    #[test]
    fn test_license_interpolation() {
        let templates = Templates::new().unwrap();
        let text = templates
            .render(LICENSE, &json!({"year": 2031, "developer_name": "Sam & Co"}))
            .unwrap();
        assert!(text.contains("Copyright (c) 2031 Sam & Co"));
    }

    #[test]
    fn test_extends_source() {
        let templates = Templates::new().unwrap();
        let text = templates
            .render(
                EXTENDS_SOURCE,
                &json!({"class_name": "WelcomeBot", "description": "Ends */ with eval("}),
            )
            .unwrap();
        assert!(text.contains("export default class WelcomeBot extends BaseIntegration"));
        assert!(!text.contains("Ends */"));
        assert!(text.contains("await super.onLoad();"));
    }
}
