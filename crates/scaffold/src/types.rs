//! Scaffold request and result types.

use crate::answers::Answers;
use mercy_common::GeneratedAt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the entry point source is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceStyle {
    /// Copy the bundled template and rename its class.
    #[default]
    Template,
    /// Emit a class extending the shared base integration.
    Extends,
}

impl std::fmt::Display for SourceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Extends => write!(f, "extends"),
        }
    }
}

impl std::str::FromStr for SourceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "extends" => Ok(Self::Extends),
            _ => Err(format!("unknown source style: {s}")),
        }
    }
}

/// Everything needed to generate one integration.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub answers: Answers,
    /// Parent directory; the integration lands in `<into>/<id>`.
    pub into: PathBuf,
    pub style: SourceStyle,
    pub generated_at: GeneratedAt,
}

impl ScaffoldRequest {
    pub fn new(answers: Answers, into: impl Into<PathBuf>) -> Self {
        Self {
            answers,
            into: into.into(),
            style: SourceStyle::default(),
            generated_at: GeneratedAt::now(),
        }
    }

    pub fn with_style(mut self, style: SourceStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_generated_at(mut self, generated_at: GeneratedAt) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Directory the integration is written to.
    pub fn target_dir(&self) -> PathBuf {
        self.into.join(&self.answers.id)
    }
}

/// A file rendered in memory, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the integration directory.
    pub path: &'static str,
    pub purpose: &'static str,
    pub content: String,
}

/// Result of scaffold generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldResult {
    pub integration_id: String,
    pub class_name: String,
    /// Directory the integration was written to.
    pub path: String,
    pub style: SourceStyle,
    pub generated_at: GeneratedAt,
    pub files_created: Vec<CreatedFile>,
    pub next_steps: Vec<String>,
}

/// A file written during scaffolding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedFile {
    /// Relative path from the integration root.
    pub path: String,
    pub purpose: String,
    /// Size in bytes.
    pub size: usize,
    /// Hex SHA-256 of the content.
    pub sha256: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_style_roundtrip() {
        for style in [SourceStyle::Template, SourceStyle::Extends] {
            let parsed: SourceStyle = style.to_string().parse().expect("should parse");
            assert_eq!(style, parsed);
        }
        assert!("inline".parse::<SourceStyle>().is_err());
    }
}
