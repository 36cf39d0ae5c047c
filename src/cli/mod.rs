//! CLI module for the codebattle evaluation core
//!
//! ## Commands
//!
//! - `eval <file> -i <input>` - Synthesize, compile and run a submission
//! - `emit <file> -i <input>` - Print the synthesized program (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile-and-run evaluation core for C++ practice submissions
#[derive(Parser, Debug)]
#[command(name = "codebattle")]
#[command(version = VERSION)]
#[command(about = "Compile-and-run evaluation core for C++ practice submissions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize, compile and run a submission against test-case inputs
    Eval {
        /// Source file containing the code fragment
        #[arg(value_name = "FILE", conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline code fragment
        #[arg(short = 'c', long = "code", value_name = "CODE")]
        code: Option<String>,
        /// Raw test-case input, e.g. '[1,2,3]' or '[-1,0,3,5,9,12], target = 9'
        /// (repeatable; each input is evaluated independently)
        #[arg(short, long, value_name = "INPUT", required = true)]
        input: Vec<String>,
        /// Working directory for transient files (default: the OS temp dir)
        #[arg(long, value_name = "DIR")]
        work_dir: Option<PathBuf>,
        /// External compiler executable
        #[arg(long, value_name = "PATH", default_value = "g++")]
        compiler: PathBuf,
        /// Execution ceiling in seconds
        #[arg(long, value_name = "SECS", default_value_t = 10)]
        timeout: u64,
    },

    /// Print the synthesized program without compiling (debug)
    Emit {
        /// Source file containing the code fragment
        #[arg(value_name = "FILE", conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline code fragment
        #[arg(short = 'c', long = "code", value_name = "CODE")]
        code: Option<String>,
        /// Raw test-case input
        #[arg(short, long, value_name = "INPUT")]
        input: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub async fn run() {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
async fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Eval {
            file,
            code,
            input,
            work_dir,
            compiler,
            timeout,
        } => {
            let fragment = commands::resolve_fragment(file.as_deref(), code)?;
            commands::eval_submission(&fragment, &input, work_dir, compiler, timeout).await
        }
        Command::Emit { file, code, input } => {
            let fragment = commands::resolve_fragment(file.as_deref(), code)?;
            commands::emit_program(&fragment, &input)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
