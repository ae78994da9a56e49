// ============================================================================
// decimal-sum
// Batch driver: reads literal pairs from a file and prints their exact sums
// ============================================================================

use clap::{Parser, ValueEnum};
use exact_decimal::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Validate pairs of decimal literals and add them exactly.
///
/// The input file holds whitespace-separated tokens, consumed two at a time.
/// A trailing unpaired token is ignored.
#[derive(Debug, Parser)]
#[command(name = "decimal-sum", version, about)]
struct Cli {
    /// Input file. Prompted for on stdin when omitted.
    input: Option<PathBuf>,

    /// Worker threads used to evaluate pairs.
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Output format for case reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Report only the first invalid token of each pair.
    #[arg(long)]
    first_invalid_only: bool,

    /// Maximum level for diagnostics written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
enum CliError {
    MissingFileName,
    Open(PathBuf),
    Config(String),
    Batch(BatchError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingFileName => write!(f, "Failed to read file name."),
            CliError::Open(path) => {
                write!(f, "Error: could not open file '{}'.", path.display())
            },
            CliError::Config(reason) => write!(f, "Error: {}.", reason),
            CliError::Batch(err) => write!(f, "Error: {}.", err),
            CliError::Io(err) => write!(f, "Error: {}.", err),
        }
    }
}

impl From<BatchError> for CliError {
    fn from(err: BatchError) -> Self {
        CliError::Batch(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::MissingFileName
            | CliError::Open(_)
            | CliError::Batch(_)
            | CliError::Io(_) => 1,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let path = match cli.input {
        Some(path) => path,
        None => prompt_file_name()?,
    };
    let file = File::open(&path).map_err(|err| {
        tracing::debug!("Opening {} failed: {}", path.display(), err);
        CliError::Open(path.clone())
    })?;

    let format = match cli.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::JsonLines,
    };
    let mut builder = BatchProcessorBuilder::new()
        .workers(cli.workers)
        .format(format);
    if cli.first_invalid_only {
        builder = builder.first_invalid_only();
    }

    let sink = Arc::new(WriterReportSink::from_config(io::stdout(), builder.config()));
    let processor = builder.build(sink).map_err(CliError::Config)?;

    if processor.config().format == ReportFormat::Text {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Processing test cases from '{}'...", path.display())?;
        writeln!(stdout)?;
    }

    let outcome = processor.run_reader(BufReader::new(file))?;
    tracing::debug!("Summary: {:?}", outcome.summary);

    Ok(())
}

/// Prompt on stdout and take the first whitespace-delimited token from stdin.
fn prompt_file_name() -> Result<PathBuf, CliError> {
    read_file_name(io::stdin().lock(), &mut io::stdout().lock())
}

fn read_file_name<R: BufRead, W: Write>(input: R, prompt: &mut W) -> Result<PathBuf, CliError> {
    write!(prompt, "Enter input file name: ")?;
    prompt.flush()?;

    for line in input.lines() {
        if let Some(token) = line?.split_ascii_whitespace().next() {
            return Ok(PathBuf::from(token));
        }
    }
    Err(CliError::MissingFileName)
}
