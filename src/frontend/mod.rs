//! Evaluation frontend
//!
//! Everything that interprets the raw request before any code is generated:
//! - `literal`: parses the free-form test-case input into a typed [`Literal`](literal::Literal)
//! - `fragment`: minimal structural scan of the submitted code fragment for
//!   the signals that drive harness synthesis
//!
//! The fragment is never type-checked or semantically understood; detection
//! is driven by a shallow token scan, not substring search, so matches inside
//! comments and string literals are ignored.

pub mod fragment;
pub mod literal;
