//! mercy - scaffold and validate M.E.R.C.Y integrations.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use mercy_scaffold::{collect_answers, scaffold, ScaffoldRequest, SourceStyle, StdioPrompter};
use mercy_validator::{report, Validator};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mercy")]
#[command(
    author,
    version,
    about = "Create and check integrations for the M.E.R.C.Y bot platform"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively create a new integration project
    Init {
        /// Parent directory for the new project
        #[arg(long, default_value = ".")]
        into: PathBuf,

        /// How src/index.js is generated
        #[arg(long, value_enum, default_value_t = StyleArg::Template)]
        style: StyleArg,

        /// Output format for the summary
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check an integration project and print its score
    Validate {
        /// Integration directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format for the report
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    /// Copy the bundled template
    Template,
    /// Extend the shared base integration
    Extends,
}

impl From<StyleArg> for SourceStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Template => SourceStyle::Template,
            StyleArg::Extends => SourceStyle::Extends,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::InvalidSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => print_usage(),
            _ => e.exit(),
        },
    }
}

/// Unknown or missing subcommands are not an error.
fn print_usage() -> ! {
    let _ = Cli::command().print_help();
    println!();
    std::process::exit(0);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let Some(command) = cli.command else {
        print_usage();
    };

    match command {
        Commands::Init {
            into,
            style,
            format,
        } => {
            let stdin = std::io::stdin();
            let mut prompter = StdioPrompter::new(stdin.lock(), std::io::stderr());
            let answers = collect_answers(&mut prompter)?;
            debug!("Answers: {:?}", answers);

            let request = ScaffoldRequest::new(answers, into).with_style(style.into());
            let result = scaffold(&request)
                .with_context(|| format!("Failed to create integration {}", request.answers.id))?;
            info!("{}", mercy_scaffold::report::summary_line(&result));

            match format {
                OutputFormat::Text => print!("{}", mercy_scaffold::report::render_text(&result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }

        Commands::Validate { path, format } => {
            info!("Validating integration at {:?}", path);

            let result = Validator::new()
                .validate(&path)
                .with_context(|| format!("Cannot validate {}", path.display()))?;

            match format {
                OutputFormat::Text => print!("{}", report::render_text(&result)),
                OutputFormat::Json => println!("{}", report::render_json(&result)?),
            }

            if !result.is_valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
