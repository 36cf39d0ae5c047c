//! Error taxonomy for the evaluation pipeline
//!
//! One variant per failure class; exactly one outcome holds per evaluation.
//! Parse failures keep the offending raw input and the underlying parser
//! message verbatim — a silent fallback could report a wrong "output" as
//! correct. Compiler and runtime diagnostics are propagated unedited.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Failure classification for one `(code, input)` evaluation.
#[derive(Debug, Error, Diagnostic)]
pub enum EvalError {
    /// The raw test-case input did not parse into a supported literal shape.
    #[error("invalid input format: {message}. Input was: {input}")]
    #[diagnostic(
        code(codebattle::parse),
        help(
            "expected a JSON-style array of integers, an array of single-character strings, or an array followed by `target = <integer>`"
        )
    )]
    Parse {
        /// The raw input text, surfaced verbatim for debuggability.
        input: String,
        /// The underlying parser message.
        message: String,
    },

    /// The external compiler rejected the synthesized program, or could not
    /// be invoked. Never retried: compilation is deterministic.
    #[error("compilation error: {0}")]
    #[diagnostic(code(codebattle::compile))]
    Compile(String),

    /// Execution exceeded the wall-clock ceiling and the process was killed.
    #[error(
        "code execution timed out after {}s; your code might be stuck in an infinite loop",
        .limit.as_secs()
    )]
    #[diagnostic(code(codebattle::timeout))]
    Timeout {
        /// The ceiling that was exceeded.
        limit: Duration,
    },

    /// The compiled program exited nonzero for any reason other than timeout.
    #[error("runtime error: {0}")]
    #[diagnostic(code(codebattle::runtime))]
    Runtime(String),

    /// Environmental failure (transient file write, process wait).
    #[error("evaluation I/O failure: {0}")]
    #[diagnostic(code(codebattle::io))]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Construct a parse failure carrying the offending input verbatim.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }
}
