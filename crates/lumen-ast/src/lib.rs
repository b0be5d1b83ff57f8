//! Lumen AST - Core types for the abstract syntax tree
//!
//! This crate defines the closed set of node variants produced by the parser,
//! their kind tags, and the canonical printer that renders a tree back to text.

mod builder;
mod error;
mod expr;
mod kind;
mod node;
mod printer;

pub use builder::*;
pub use error::*;
pub use expr::*;
pub use kind::*;
pub use node::*;
pub use printer::*;

use serde::{Deserialize, Serialize};

/// A complete Lumen program
///
/// Statements are kept in source order; rendering concatenates them without
/// separators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    pub const fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterate over the top-level statements in order
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.body.iter()
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            body: iter.into_iter().collect(),
        }
    }
}
