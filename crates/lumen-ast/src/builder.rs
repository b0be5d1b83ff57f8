//! Incremental construction of binary expressions
//!
//! A parser that discovers the operands of an infix expression one at a time
//! can collect them here; `build` refuses to produce a node until both
//! operands and the operator are present.

use tracing::debug;

use crate::{AstError, BinaryExpression, Expression, NodeKind};

#[derive(Debug, Clone, Default)]
pub struct BinaryExpressionBuilder {
    left: Option<Expression>,
    right: Option<Expression>,
    operator: Option<String>,
}

impl BinaryExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, left: impl Into<Expression>) -> Self {
        self.left = Some(left.into());
        self
    }

    pub fn right(mut self, right: impl Into<Expression>) -> Self {
        self.right = Some(right.into());
        self
    }

    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn build(self) -> Result<BinaryExpression, AstError> {
        let left = self.left.ok_or_else(|| reject(AstError::missing_operand("left")))?;
        let right = self
            .right
            .ok_or_else(|| reject(AstError::missing_operand("right")))?;
        let operator = self.operator.ok_or_else(|| {
            reject(AstError::MissingOperator {
                kind: NodeKind::BinaryExpression,
            })
        })?;

        Ok(BinaryExpression::new(left, operator, right))
    }
}

fn reject(err: AstError) -> AstError {
    debug!(
        code = err.code(),
        kind = ?err.kind(),
        field = ?err.field(),
        "rejected incomplete node"
    );
    err
}
