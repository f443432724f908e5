//! Data formats shared by integration tooling.
//!
//! This crate defines the integration metadata record (`integration.json`),
//! the package manifest (`package.json`), the on-disk layout of an
//! integration directory and the naming rules the scaffolder and the
//! validator agree on.

pub mod category;
pub mod layout;
pub mod metadata;
pub mod naming;
pub mod package;
pub mod schema;
pub mod validation;

pub use category::Category;
pub use metadata::{Developer, Flags, IntegrationMetadata, SettingSpec};
pub use naming::{is_valid_id, is_valid_version, slugify, to_pascal_case};
pub use package::{PackageManifest, ALLOWED_DEPENDENCIES, MODULE_TYPE};
pub use validation::{validate_metadata, SchemaError};
