//! Evaluation configuration
//!
//! The working directory, compiler and ceilings are explicit, injected state:
//! callers construct an [`EvalConfig`] once and pass it to every evaluation.
//! Nothing in the core resolves ambient global paths.

use std::path::PathBuf;
use std::time::Duration;

/// Hard wall-clock ceiling for running a compiled submission.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(10);

/// Ceiling for the external compiler, so a pathological fragment (e.g.
/// runaway template instantiation) cannot hang the compile step.
pub const DEFAULT_COMPILE_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one or more evaluations.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Writable directory where transient source files and artifacts live.
    /// Shared across concurrent evaluations; access is disjoint because
    /// filenames carry per-evaluation random identifiers.
    pub work_dir: PathBuf,
    /// External native compiler executable.
    pub compiler: PathBuf,
    /// Wall-clock ceiling for the compile step.
    pub compile_timeout: Duration,
    /// Wall-clock ceiling for running the artifact.
    pub run_timeout: Duration,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            work_dir: std::env::temp_dir(),
            compiler: PathBuf::from("g++"),
            compile_timeout: DEFAULT_COMPILE_TIMEOUT,
            run_timeout: DEFAULT_RUN_TIMEOUT,
        }
    }
}

impl EvalConfig {
    /// Config rooted at an explicit working directory, defaults elsewhere.
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }
}
