//! File layout of an integration directory.

/// Integration metadata record.
pub const METADATA_FILE: &str = "integration.json";

/// Package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Source entry point scanned by the security rules.
pub const SOURCE_ENTRY: &str = "src/index.js";

pub const README_FILE: &str = "README.md";

pub const LICENSE_FILE: &str = "LICENSE";

pub const TEST_DIR: &str = "test";

/// Smoke test emitted by the scaffolder.
pub const TEST_STUB: &str = "test/index.test.js";

/// Files whose absence is a hard error, in check order.
pub const REQUIRED_FILES: [&str; 4] = [METADATA_FILE, MANIFEST_FILE, SOURCE_ENTRY, README_FILE];

/// Directories created for a new integration, parents first.
pub const SCAFFOLD_DIRS: [&str; 5] = ["src", "src/commands", "src/events", "src/utils", TEST_DIR];
