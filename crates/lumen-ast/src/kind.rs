//! Node kind tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AstError;

/// Discriminator identifying which variant a node is
///
/// The tag is derived from the variant, never stored beside it, so the two
/// cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    NumericLiteral,
    NullLiteral,
    Identifier,
    BinaryExpression,
    StringLiteral,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Program,
        NodeKind::NumericLiteral,
        NodeKind::NullLiteral,
        NodeKind::Identifier,
        NodeKind::BinaryExpression,
        NodeKind::StringLiteral,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::Identifier => "Identifier",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::StringLiteral => "StringLiteral",
        }
    }

    /// Whether nodes of this kind never have children
    pub const fn is_leaf(self) -> bool {
        !matches!(self, NodeKind::Program | NodeKind::BinaryExpression)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AstError::UnknownKind { tag: s.to_string() })
    }
}
