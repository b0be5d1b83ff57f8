//! Expression AST nodes

use serde::{Deserialize, Serialize};

use crate::{Expression, NodeKind};

/// Name reference: `x`, `total_count`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub symbol: String,
}

impl Identifier {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub const fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
}

/// Numeric constant: `42`, `3.14`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    #[serde(with = "number_repr")]
    pub value: f64,
}

impl NumericLiteral {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub const fn kind(&self) -> NodeKind {
        NodeKind::NumericLiteral
    }
}

/// String constant: `"hello"`
///
/// The value is stored and printed raw; embedded quotes are not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub const fn kind(&self) -> NodeKind {
        NodeKind::StringLiteral
    }
}

/// Infix operation: `a + b`, `x * (y - 1)`
///
/// Both operands are owned. The operator text is whatever the parser saw and
/// is not checked against a known set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub operator: String,
}

impl BinaryExpression {
    pub fn new(left: Expression, operator: impl Into<String>, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            operator: operator.into(),
        }
    }

    pub const fn kind(&self) -> NodeKind {
        NodeKind::BinaryExpression
    }
}

/// Serde form of a numeric literal's value
///
/// Finite values are plain numbers. JSON has no `NaN` or infinity, so those
/// are written as the strings `"NaN"`, `"+Inf"` and `"-Inf"`.
mod number_repr {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::Deserialize;

    use crate::format_number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_number(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "+Inf" => Ok(f64::INFINITY),
                "-Inf" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"NaN\", \"+Inf\" or \"-Inf\"",
                )),
            },
        }
    }
}
