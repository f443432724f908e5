//! Scaffolding errors. Every variant aborts the run.

use mercy_integration_schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Integration name must contain at least one letter or digit")]
    EmptyName,

    #[error("Invalid integration id \"{0}\": use lowercase letters, digits, hyphens and underscores")]
    InvalidId(String),

    #[error("Developer {0} must not be empty")]
    MissingDeveloper(&'static str),

    #[error("Directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Input ended before \"{0}\" was answered")]
    InputClosed(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generated metadata is invalid")]
    Schema(#[from] SchemaError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
