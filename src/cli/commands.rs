//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::EvalConfig;
use crate::errors::EvalError;
use crate::{backend, evaluate, frontend};

use super::{CliError, CliResult, ExitCode};

/// Maximum fragment size (1 MB)
///
/// Fragments larger than this are rejected before any synthesis happens.
const MAX_FRAGMENT_SIZE: u64 = 1024 * 1024;

/// Resolve the code fragment from a file path or an inline `-c` string.
pub fn resolve_fragment(file: Option<&Path>, code: Option<String>) -> CliResult<String> {
    if let Some(code) = code {
        if code.is_empty() {
            return Err(CliError::failure(
                "Error: -c/--code requires a source code string",
            ));
        }
        return Ok(code);
    }
    if let Some(path) = file {
        return read_fragment(path);
    }
    Err(CliError::failure(
        "Error: provide a fragment file path or -c \"code\"",
    ))
}

/// Read a fragment file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_FRAGMENT_SIZE` (1 MB)
fn read_fragment(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_FRAGMENT_SIZE {
        return Err(CliError::failure(format!(
            "Fragment '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_FRAGMENT_SIZE
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Evaluate a fragment against each input independently.
///
/// Successful outputs go to stdout, one line per input; failures render as
/// diagnostics on stderr. The exit code is nonzero iff any input failed.
pub async fn eval_submission(
    fragment: &str,
    inputs: &[String],
    work_dir: Option<PathBuf>,
    compiler: PathBuf,
    timeout_secs: u64,
) -> CliResult<ExitCode> {
    let config = EvalConfig {
        work_dir: work_dir.unwrap_or_else(std::env::temp_dir),
        compiler,
        run_timeout: Duration::from_secs(timeout_secs),
        ..EvalConfig::default()
    };

    let mut failed = false;
    for input in inputs {
        match evaluate(fragment, input, &config).await {
            Ok(output) => println!("{output}"),
            Err(e) => {
                failed = true;
                eprintln!("{}", render_diagnostic(e));
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print the synthesized program for a fragment and input, without compiling.
pub fn emit_program(fragment: &str, input: &str) -> CliResult<ExitCode> {
    let literal = frontend::literal::normalize(input)
        .map_err(|e| CliError::failure(render_diagnostic(e)))?;
    let signals = frontend::fragment::scan(fragment);
    let program = backend::harness::synthesize(fragment, &signals, &literal);
    print!("{program}");
    Ok(ExitCode::SUCCESS)
}

/// Render an evaluation error through miette's report formatting.
fn render_diagnostic(error: EvalError) -> String {
    format!("{:?}", miette::Report::new(error))
}
