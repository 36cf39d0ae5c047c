//! Evaluation backend
//!
//! Everything after the request is understood:
//!
//! 1. Signals + literal → `harness` → complete C++ program text
//! 2. `compiler` writes the program to a transient file and drives `g++`
//! 3. `runner` executes the artifact under a wall-clock ceiling
//!
//! ## Module Organization
//!
//! - `harness` - program synthesis around the user fragment
//! - `cpp_emitter` - low-level C++ code string builder
//! - `compiler` - transient files, random identifiers, compiler invocation
//! - `runner` - child-process execution with timeout-and-kill
//!
//! Cleanup is a cross-cutting discipline, not a component: the transient
//! source and the compiled artifact are owned by `Drop` guards in `compiler`,
//! so every exit path (success, failure, timeout, panic unwind) retires them.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod compiler;
pub mod cpp_emitter;
pub mod harness;
pub mod runner;

pub use compiler::{CompiledArtifact, compile};
pub use harness::{SynthesizedProgram, synthesize};
pub use runner::run;
