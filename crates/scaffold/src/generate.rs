//! Rendering and writing of a new integration project.

use crate::answers::Answers;
use crate::error::{Result, ScaffoldError};
use crate::templates::{self, Templates};
use crate::types::{CreatedFile, PlannedFile, ScaffoldRequest, ScaffoldResult, SourceStyle};
use mercy_common::digest::sha256_hex;
use mercy_integration_schema::layout::{
    LICENSE_FILE, MANIFEST_FILE, METADATA_FILE, README_FILE, SCAFFOLD_DIRS, SOURCE_ENTRY,
    TEST_STUB,
};
use mercy_integration_schema::{
    validate_metadata, Developer, Flags, IntegrationMetadata, PackageManifest, SettingSpec,
    ALLOWED_DEPENDENCIES, MODULE_TYPE,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const INITIAL_VERSION: &str = "1.0.0";

const DISCORD_JS_RANGE: &str = "^14.14.1";

/// Metadata record with the default permission, event and settings payload.
pub fn build_metadata(answers: &Answers) -> IntegrationMetadata {
    let mut settings = BTreeMap::new();
    settings.insert(
        "enabled".to_string(),
        SettingSpec {
            kind: "boolean".to_string(),
            default: Value::Bool(true),
            description: "Enable or disable this integration".to_string(),
        },
    );
    settings.insert(
        "logChannel".to_string(),
        SettingSpec {
            kind: "channel".to_string(),
            default: Value::Null,
            description: "Channel that receives integration logs".to_string(),
        },
    );

    IntegrationMetadata {
        id: answers.id.clone(),
        name: answers.name.clone(),
        version: INITIAL_VERSION.to_string(),
        description: answers.description.clone(),
        category: answers.category,
        developer: Developer {
            name: answers.developer_name.clone(),
            email: answers.developer_email.clone(),
            github: answers.github.clone(),
        },
        permissions: vec!["SEND_MESSAGES".to_string(), "VIEW_CHANNEL".to_string()],
        events: vec!["messageCreate".to_string(), "guildMemberAdd".to_string()],
        settings,
        flags: Flags::default(),
    }
}

/// Package manifest with the fixed dependency set and validator scripts.
pub fn build_package(answers: &Answers) -> PackageManifest {
    let mut scripts = BTreeMap::new();
    scripts.insert("test".to_string(), "node --test test/".to_string());
    scripts.insert("validate".to_string(), "mercy validate".to_string());

    let mut dependencies = BTreeMap::new();
    dependencies.insert("discord.js".to_string(), DISCORD_JS_RANGE.to_string());

    PackageManifest {
        name: answers.id.clone(),
        version: INITIAL_VERSION.to_string(),
        description: Some(answers.description.clone()),
        module_type: Some(MODULE_TYPE.to_string()),
        main: Some(SOURCE_ENTRY.to_string()),
        scripts,
        dependencies,
        author: Some(answers.developer_name.clone()),
        license: Some("MIT".to_string()),
    }
}

fn pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Render every file of the project without touching the filesystem.
///
/// The output depends only on the request, so identical answers and
/// timestamps give byte-identical files.
pub fn render_files(request: &ScaffoldRequest) -> Result<Vec<PlannedFile>> {
    let answers = &request.answers;
    answers.validate()?;

    let class_name = answers.class_name();
    let templates = Templates::new()?;

    let metadata = build_metadata(answers);
    let metadata_value = serde_json::to_value(&metadata)?;
    validate_metadata(&metadata_value)?;

    let settings_rows: Vec<Value> = metadata
        .settings
        .iter()
        .map(|(key, spec)| {
            json!({
                "key": key,
                "kind": spec.kind,
                "default": spec.default.to_string(),
                "description": spec.description,
            })
        })
        .collect();

    let context = json!({
        "name": answers.name,
        "id": answers.id,
        "description": answers.description,
        "category": answers.category.as_str(),
        "version": INITIAL_VERSION,
        "developer_name": answers.developer_name,
        "developer_email": answers.developer_email,
        "github": answers.github.clone().unwrap_or_default(),
        "class_name": class_name,
        "year": request.generated_at.year(),
        "settings": settings_rows,
        "allowed_dependencies": ALLOWED_DEPENDENCIES.join(", "),
    });

    let source = match request.style {
        SourceStyle::Template => templates::render_from_template(&class_name),
        SourceStyle::Extends => templates.render(templates::EXTENDS_SOURCE, &context)?,
    };

    Ok(vec![
        PlannedFile {
            path: MANIFEST_FILE,
            purpose: "Package manifest",
            content: pretty_json(&build_package(answers))?,
        },
        PlannedFile {
            path: METADATA_FILE,
            purpose: "Integration metadata",
            content: pretty_json(&metadata_value)?,
        },
        PlannedFile {
            path: SOURCE_ENTRY,
            purpose: "Integration entry point",
            content: source,
        },
        PlannedFile {
            path: README_FILE,
            purpose: "Documentation",
            content: templates.render(templates::README, &context)?,
        },
        PlannedFile {
            path: LICENSE_FILE,
            purpose: "MIT license",
            content: templates.render(templates::LICENSE, &context)?,
        },
        PlannedFile {
            path: TEST_STUB,
            purpose: "Smoke tests",
            content: templates.render(templates::TEST_STUB, &context)?,
        },
    ])
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate the integration described by `request`.
///
/// Everything is rendered and checked before the first write. A failure
/// while writing leaves whatever was already created in place.
pub fn scaffold(request: &ScaffoldRequest) -> Result<ScaffoldResult> {
    let files = render_files(request)?;

    let base_path = request.target_dir();
    if base_path.exists() {
        return Err(ScaffoldError::AlreadyExists(base_path));
    }

    info!("Creating integration {} in {:?}", request.answers.id, base_path);
    for dir in SCAFFOLD_DIRS {
        create_dir(&base_path.join(dir))?;
    }

    let mut files_created = Vec::with_capacity(files.len());
    for file in &files {
        let full_path = base_path.join(file.path);
        write_file(&full_path, &file.content)?;
        debug!("Wrote {:?} ({} bytes)", full_path, file.content.len());

        files_created.push(CreatedFile {
            path: file.path.to_string(),
            purpose: file.purpose.to_string(),
            size: file.content.len(),
            sha256: sha256_hex(file.content.as_bytes()),
        });
    }

    let id = &request.answers.id;
    Ok(ScaffoldResult {
        integration_id: id.clone(),
        class_name: request.answers.class_name(),
        path: base_path.to_string_lossy().to_string(),
        style: request.style,
        generated_at: request.generated_at,
        files_created,
        next_steps: vec![
            format!("cd {}", id),
            "npm install".to_string(),
            "npm test".to_string(),
            "mercy validate".to_string(),
        ],
    })
}
