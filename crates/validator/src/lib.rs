//! Static validation of M.E.R.C.Y integrations.
//!
//! A run checks the directory layout, the metadata record, the package
//! manifest and the source entry, then scores the result. Findings are data:
//! a failing integration yields a [`ValidationResult`] with `is_valid ==
//! false`, never an `Err`.

pub mod checks;
pub mod complexity;
pub mod config;
pub mod report;
pub mod result;
pub mod rules;

pub use config::ValidatorConfig;
pub use result::ValidationResult;
pub use rules::{security_rules, SecurityRule, Severity};

use mercy_common::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Runs every check phase against an integration directory.
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with default thresholds.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate the integration rooted at `root`.
    ///
    /// Phases run in a fixed order (required files, metadata, manifest,
    /// source, auxiliary) so repeated runs give identical output. Fails only
    /// when `root` is missing or not a directory.
    pub fn validate(&self, root: &Path) -> Result<ValidationResult> {
        if !std::fs::metadata(root)?.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        info!("Validating integration at {:?}", root);

        let mut result = ValidationResult::new();

        let presence = checks::check_required_files(root, &mut result);

        if presence.metadata {
            checks::check_metadata(root, &mut result);
        }
        if presence.manifest {
            checks::check_manifest(root, &self.config, &mut result);
        }
        if presence.source {
            checks::check_source(root, &self.config, &mut result);
        }
        checks::check_auxiliary(root, presence, &self.config, &mut result);

        result.finalize(self.config.pass_threshold);
        debug!(
            "Validation finished: score={} errors={} warnings={}",
            result.score,
            result.errors.len(),
            result.warnings.len()
        );

        Ok(result)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `root` with the default configuration.
pub fn validate_dir(root: &Path) -> Result<ValidationResult> {
    Validator::new().validate(root)
}
