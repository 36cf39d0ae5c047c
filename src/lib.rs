#![forbid(unsafe_code)]
//! Codebattle evaluation core
//!
//! Turns a user-submitted C++ code fragment plus a raw test-case input string
//! into a complete standalone program, compiles it with an external `g++`
//! toolchain, runs the binary under a hard wall-clock ceiling, and returns
//! the trimmed standard output or a classified failure.
//!
//! The pipeline is:
//! 1. `frontend::literal` — parse the raw input into a typed [`Literal`]
//! 2. `frontend::fragment` — structural scan of the fragment for invocation signals
//! 3. `backend::harness` — synthesize the full program text
//! 4. `backend::compiler` — write a transient source file and drive the compiler
//! 5. `backend::runner` — execute the artifact with timeout-and-kill
//!
//! Every transient file is owned by a scoped guard and removed on every exit
//! path, including panic unwind.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` and `backend` modules enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod errors;
pub mod frontend;

pub use backend::harness::{SynthesizedProgram, synthesize};
pub use config::EvalConfig;
pub use errors::EvalError;
pub use frontend::fragment::{FragmentSignals, Invocation};
pub use frontend::literal::{Literal, normalize};

/// Evaluate one `(code, input)` pair end to end.
///
/// Returns the program's standard output, trimmed of surrounding whitespace,
/// or the first failure encountered along the pipeline. Exactly one outcome
/// holds per call; no transient file outlives it.
///
/// Concurrent calls are independent: transient files are named by
/// per-invocation random identifiers, so evaluations sharing a working
/// directory never interfere.
pub async fn evaluate(code: &str, input: &str, config: &EvalConfig) -> Result<String, EvalError> {
    let literal = frontend::literal::normalize(input)?;
    let signals = frontend::fragment::scan(code);
    let program = backend::harness::synthesize(code, &signals, &literal);
    let artifact = backend::compiler::compile(&program, config).await?;
    backend::runner::run(artifact, config).await
}
