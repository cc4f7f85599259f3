use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eqcalc::lexer::{render_labels, strip_whitespace, tokenize, truncate_line};
use eqcalc::{Equation, EquationError};
use log::info;

const PROMPT: &str = "Please input a valid equation (example: a = 3 + 4 ):";

/// Log level for the application
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// eqcalc - Tokenize and evaluate a single equation such as `a = 3 + 4`
///
/// The equation is read from standard input.
#[derive(Parser, Debug)]
#[command(name = "eqcalc")]
#[command(about = "Tokenize and evaluate a single equation read from standard input")]
#[command(version)]
pub struct CliArgs {
    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock())
}

/// Prompt on `output`, read one line from `input`, and print its echo and value
///
/// Nothing is written after the prompt unless the whole line parses and tokenizes.
pub fn run_with<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read the equation from standard input")?;

    let text = strip_whitespace(truncate_line(&line));
    info!("Read equation '{}'", text);

    let equation = Equation::parse(&text).map_err(EquationError::from)?;
    let lexemes = tokenize(&text).map_err(EquationError::from)?;

    writeln!(
        output,
        "Here is the tokenized String: {}",
        render_labels(&lexemes)
    )?;
    writeln!(output, "{}", equation.result_line())?;
    info!("Evaluated '{}' to {}", equation, equation.value());
    Ok(())
}
