//! Lumen - a small expression-oriented language
//!
//! This is the root workspace crate that hosts the integration tests.
//! The node model and printer live in the `lumen-ast` member crate.

pub use lumen_ast as ast;
