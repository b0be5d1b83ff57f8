//! AST error types

use thiserror::Error;

use crate::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A binary expression was finished without one of its operands
    #[error("{kind} is missing its `{field}` operand")]
    MissingOperand { kind: NodeKind, field: &'static str },

    /// A binary expression was finished without its operator text
    #[error("{kind} is missing its operator")]
    MissingOperator { kind: NodeKind },

    /// Text that names none of the node kinds
    #[error("unknown node kind: {tag}")]
    UnknownKind { tag: String },
}

impl AstError {
    pub fn missing_operand(field: &'static str) -> Self {
        AstError::MissingOperand {
            kind: NodeKind::BinaryExpression,
            field,
        }
    }

    /// The kind of node whose construction failed, if any
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            AstError::MissingOperand { kind, .. } => Some(*kind),
            AstError::MissingOperator { kind } => Some(*kind),
            AstError::UnknownKind { .. } => None,
        }
    }

    /// The field that was left unset
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AstError::MissingOperand { field, .. } => Some(*field),
            AstError::MissingOperator { .. } => Some("operator"),
            AstError::UnknownKind { .. } => None,
        }
    }

    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            AstError::MissingOperand { .. } => "E-AST-001",
            AstError::MissingOperator { .. } => "E-AST-002",
            AstError::UnknownKind { .. } => "E-AST-003",
        }
    }
}
