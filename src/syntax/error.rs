//! Error types for structurally broken trees.

use rowan::TextRange;
use thiserror::Error;

use super::{SyntaxKind, SyntaxNode};

/// Errors raised while reading a tree.
///
/// Semantically incomplete trees never produce these: a missing optional
/// field is reported as `None`. Only a node that lacks a field its kind
/// declares as mandatory aborts the read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A node is missing one of its mandatory fields.
    #[error("malformed {kind:?} node at {range:?}: missing mandatory field `{field}`")]
    Malformed {
        kind: SyntaxKind,
        field: &'static str,
        range: TextRange,
    },
}

impl AstError {
    /// Create a malformed-node error for `node` missing `field`.
    pub fn malformed(node: &SyntaxNode, field: &'static str) -> Self {
        tracing::warn!(
            kind = ?node.kind(),
            range = ?node.text_range(),
            field,
            "malformed AST node"
        );
        Self::Malformed {
            kind: node.kind(),
            field,
            range: node.text_range(),
        }
    }
}

pub type AstResult<T> = Result<T, AstError>;
