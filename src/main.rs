//! Binary entry point for the semtok CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Classify a document (tree + type facts as JSON)
//! semtok classify module.json
//!
//! # Classify every document under a directory, legend-encoded
//! semtok classify --format encoded docs/
//!
//! # Read a document from stdin, syntactic tokens only
//! semtok classify --no-types < module.json
//!
//! # Print the token legend
//! semtok legend
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use semtok::cli::{run_classify, run_legend, ClassifyOptions, OutputFormat};
use semtok::error::{OutputErrorCode, SemtokError};
use semtok::output::{emit_response, emit_response_compact, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Semantic tokens for type-checked Python.
///
/// All output is JSON on stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "semtok", version, about = "Semantic tokens for type-checked Python")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Log level for tracing output (overridden by RUST_LOG).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Emit single-line JSON.
    #[arg(long, global = true)]
    compact: bool,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the names of a document.
    Classify {
        /// Document file or directory of `*.json` documents (stdin if omitted or `-`).
        path: Option<PathBuf>,
        /// Token representation.
        #[arg(long, value_enum, default_value_t = OutputFormat::Tokens)]
        format: OutputFormat,
        /// Ignore type facts; classify declarations, imports and keywords only.
        #[arg(long)]
        no_types: bool,
    },
    /// Print the token type and modifier legend.
    Legend,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level);

    let compact = cli.global.compact;
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            tracing::debug!(code = error_code.code(), "command failed: {}", err);
            let response = ErrorResponse::from_error(&err);

            // Errors go to stdout as JSON, like every other response.
            let _ = emit(&response, compact);

            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command.
fn execute(cli: Cli) -> Result<(), SemtokError> {
    let compact = cli.global.compact;
    match cli.command {
        Command::Classify {
            path,
            format,
            no_types,
        } => {
            let options = ClassifyOptions {
                format,
                use_types: !no_types,
            };
            let output = run_classify(path.as_deref(), io::stdin().lock(), &options)?;
            emit(&output, compact)
        }
        Command::Legend => emit(&run_legend(), compact),
    }
}

/// Write a response to stdout.
fn emit<T: Serialize>(response: &T, compact: bool) -> Result<(), SemtokError> {
    let mut stdout = io::stdout().lock();
    if compact {
        emit_response_compact(response, &mut stdout)?;
    } else {
        emit_response(response, &mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
