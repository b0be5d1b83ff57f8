//! Canonical text printer for Lumen AST
//!
//! Every node implements `Display`; `to_string()` yields its canonical form.
//! Binary expressions are parenthesized at every level and nothing is elided,
//! so the output mirrors the tree shape exactly.

use std::fmt;

use crate::{BinaryExpression, Identifier, Node, NumericLiteral, Program, StringLiteral};

/// Format a number as the shortest decimal that reads back to the same value.
///
/// Never uses exponent notation. Non-finite values print as `NaN`, `+Inf`
/// and `-Inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else {
        value.to_string()
    }
}

// ===== Program =====

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.body {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

// ===== Nodes =====

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(n) => write!(f, "{}", n),
            Node::NumericLiteral(n) => write!(f, "{}", n),
            Node::NullLiteral => f.write_str("null"),
            Node::Identifier(n) => write!(f, "{}", n),
            Node::BinaryExpression(n) => write!(f, "{}", n),
            Node::StringLiteral(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.value))
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Raw value, no escaping
        write!(f, "\"{}\"", self.value)
    }
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// ===== Convenience function =====

/// Convert a program to canonical Lumen text.
pub fn to_source(program: &Program) -> String {
    program.to_string()
}
