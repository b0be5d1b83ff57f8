//! The closed set of node variants

use serde::{Deserialize, Serialize};

use crate::{BinaryExpression, Identifier, NodeKind, NumericLiteral, Program, StringLiteral};

/// Any node of the tree
///
/// Serialized with its kind tag under `"kind"`, e.g.
/// `{"kind":"Identifier","symbol":"x"}`. Each binary expression adds a level
/// of JSON nesting, and `serde_json` refuses input nested deeper than 128
/// levels, so very deep operand chains serialize but do not load back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    Program(Program),
    NumericLiteral(NumericLiteral),
    NullLiteral,
    Identifier(Identifier),
    BinaryExpression(BinaryExpression),
    StringLiteral(StringLiteral),
}

/// A node in statement position (a program body entry)
pub type Statement = Node;

/// A node in operand position. Every statement node may appear here.
pub type Expression = Node;

impl Node {
    pub fn program(body: Vec<Statement>) -> Self {
        Node::Program(Program::new(body))
    }

    pub fn identifier(symbol: impl Into<String>) -> Self {
        Node::Identifier(Identifier::new(symbol))
    }

    pub fn number(value: f64) -> Self {
        Node::NumericLiteral(NumericLiteral::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral::new(value))
    }

    pub fn null() -> Self {
        Node::NullLiteral
    }

    pub fn binary(left: Expression, operator: impl Into<String>, right: Expression) -> Self {
        Node::BinaryExpression(BinaryExpression::new(left, operator, right))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::NumericLiteral(_) => NodeKind::NumericLiteral,
            Node::NullLiteral => NodeKind::NullLiteral,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::BinaryExpression(_) => NodeKind::BinaryExpression,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    /// Direct children in rendering order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Program(program) => program.body.iter().collect(),
            Node::BinaryExpression(binary) => vec![binary.left.as_ref(), binary.right.as_ref()],
            Node::NumericLiteral(_)
            | Node::NullLiteral
            | Node::Identifier(_)
            | Node::StringLiteral(_) => Vec::new(),
        }
    }
}

impl From<Program> for Node {
    fn from(node: Program) -> Self {
        Node::Program(node)
    }
}

impl From<NumericLiteral> for Node {
    fn from(node: NumericLiteral) -> Self {
        Node::NumericLiteral(node)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::number(value)
    }
}

impl From<Identifier> for Node {
    fn from(node: Identifier) -> Self {
        Node::Identifier(node)
    }
}

impl From<BinaryExpression> for Node {
    fn from(node: BinaryExpression) -> Self {
        Node::BinaryExpression(node)
    }
}

impl From<StringLiteral> for Node {
    fn from(node: StringLiteral) -> Self {
        Node::StringLiteral(node)
    }
}
