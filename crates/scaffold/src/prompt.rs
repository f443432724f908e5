//! Interactive question flow.

use crate::answers::{Answers, DEFAULT_DESCRIPTION};
use crate::error::{Result, ScaffoldError};
use mercy_integration_schema::{slugify, Category};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::warn;

/// Source of answers for the scaffolding questions.
pub trait Prompter {
    /// Ask one question. A blank answer yields `default` (or an empty
    /// string when there is none).
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;
}

/// Prompts on a writer and reads one line per answer.
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default.filter(|d| !d.is_empty()) {
            Some(d) => write!(self.output, "{} [{}]: ", question, d)?,
            None => write!(self.output, "{}: ", question)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ScaffoldError::InputClosed(question.to_string()));
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}

/// Answers supplied up front, for non-interactive use.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        self.asked.push(question.to_string());
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| ScaffoldError::InputClosed(question.to_string()))?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}

/// Run the seven questions in order.
pub fn collect_answers(prompter: &mut dyn Prompter) -> Result<Answers> {
    let name = prompter.ask("Integration name", None)?;
    let id = prompter.ask("Integration id", Some(&slugify(&name)))?;
    let description = prompter.ask("Description", Some(DEFAULT_DESCRIPTION))?;

    let default_category = Category::default().to_string();
    let raw_category = prompter.ask(
        &format!("Category ({})", Category::listing()),
        Some(&default_category),
    )?;
    let category = raw_category.parse().unwrap_or_else(|_| {
        warn!(
            "Unknown category \"{}\", using {}",
            raw_category, default_category
        );
        Category::default()
    });

    let developer_name = prompter.ask("Developer name", None)?;
    let developer_email = prompter.ask("Developer email", None)?;
    let github = prompter.ask("GitHub URL (optional)", None)?;

    Ok(Answers {
        name,
        id,
        description,
        category,
        developer_name,
        developer_email,
        github: Some(github).filter(|g| !g.is_empty()),
    })
}
