mod report;
mod settings;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

use notebook::{LoadError, Notebook};
use validator::{ConfigError, Validator};

use crate::report::Style;
use crate::settings::SettingsError;

#[derive(Parser, Debug)]
#[command(
    name = "nbcheck",
    version,
    about = "Validate Jupyter notebooks for production readiness"
)]
struct Cli {
    /// Path to the notebook file
    notebook: PathBuf,

    /// Expected number of parts/sections (default: auto-detect)
    #[arg(long)]
    expected_parts: Option<usize>,

    /// Require transition cells with action cards
    #[arg(long)]
    require_transitions: bool,

    /// Minimum cells before the first part (default: 1)
    #[arg(long)]
    min_intro_cells: Option<usize>,

    /// Minimum cells after the last part (default: 2)
    #[arg(long)]
    min_conclusion_cells: Option<usize>,

    /// Required metadata fields (default: repo). Repeatable.
    #[arg(long, num_args = 1..)]
    check_metadata: Vec<String>,

    /// TOML file with validator settings; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Suppress detailed output, only show the score
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            emit_error(&cli, &err);
            2
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Validate the notebook and print the report. Returns whether it is production ready.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = settings::resolve(cli)?;
    let validator = Validator::new(config)?;
    let notebook = Notebook::from_path(&cli.notebook)?;

    let report = validator.run(&notebook);
    let overall = report.overall_score();
    info!(score = overall, rating = %report.rating(), "validation complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let name = display_name(&cli.notebook);
    if cli.quiet {
        report::write_score(&mut out, &report)?;
    } else {
        match cli.format {
            Format::Text => {
                let style = Style {
                    color: !cli.no_color,
                };
                writeln!(out, "Validating: {}", cli.notebook.display())?;
                writeln!(out, "Total cells: {}", notebook.len())?;
                writeln!(out)?;
                report::write_text(&mut out, &name, &report, style)?;
            }
            Format::Json => report::write_json(&mut out, &name, &report)?,
        }
    }
    out.flush()?;

    Ok(report.is_production_ready())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn emit_error(cli: &Cli, err: &CliError) {
    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    // Decode errors carry a position; show it against the file when we can reread it.
    if let CliError::Load(load_err) = err {
        if load_err.location().is_some() {
            if let Ok(source) = std::fs::read_to_string(&cli.notebook) {
                let mut files = SimpleFiles::new();
                let file_id = files.add(cli.notebook.display().to_string(), source.clone());
                let diagnostic = load_err.to_diagnostic(file_id, &source);
                let writer = StandardStream::stderr(color_choice);
                let config = term::Config::default();
                let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
                return;
            }
        }
    }
    eprintln!("error: {}", err);
}
