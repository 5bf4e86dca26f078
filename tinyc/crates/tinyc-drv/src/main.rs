//! tinyc - scan a TINY source file and print its token listing.
//!
//! Parses command-line arguments, initializes logging, loads configuration
//! and runs the scanner over the input file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tinyc_drv::{Config, DriverError, Session};

/// tinyc - Scanner for the TINY language
///
/// Reads a TINY source file, echoes each line and prints every token the
/// scanner produces.
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(author = "TINY Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scanner for the TINY language", long_about = None)]
struct Cli {
    /// Source file (".tny" is appended if the name has no extension)
    input: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "TINYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TINYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TINYC_NO_COLOR")]
    no_color: bool,

    /// Write the listing to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not echo source lines
    #[arg(long)]
    no_echo: bool,

    /// Do not trace tokens
    #[arg(long)]
    no_trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("warning: {:#}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> tinyc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Applies the command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if cli.no_echo {
        config.scan.echo_source = false;
    }
    if cli.no_trace {
        config.scan.trace_scan = false;
    }
    config
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let session = Session::new(apply_overrides(config, &cli));

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        },
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let scanned = session.scan_file(&cli.input, &mut *out);
    out.flush().context("failed to write listing")?;
    let summary = scanned?;

    session
        .render_diagnostics(&mut io::stderr().lock())
        .context("failed to write diagnostics")?;

    match session.check() {
        Err(DriverError::LexicalErrors { count }) => {
            anyhow::bail!(
                "{} lexical error(s) in {} token(s)",
                count,
                summary.tokens
            )
        },
        other => other.map_err(Into::into),
    }
}
