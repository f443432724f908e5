//! Project generator for new M.E.R.C.Y integrations.
//!
//! The flow is: collect [`Answers`] through a [`Prompter`], build a
//! [`ScaffoldRequest`], then [`scaffold`] it into a fresh directory.

pub mod answers;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod report;
pub mod templates;
pub mod types;

pub use answers::Answers;
pub use error::{Result, ScaffoldError};
pub use generate::{render_files, scaffold};
pub use prompt::{collect_answers, Prompter, ScriptedPrompter, StdioPrompter};
pub use types::{CreatedFile, ScaffoldRequest, ScaffoldResult, SourceStyle};
