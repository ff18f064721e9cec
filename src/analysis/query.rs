//! Kind-agnostic tree queries.

use crate::syntax::{AstElement, AstNode, FieldValue, SyntaxNode};

/// Generic traversal helpers over any subtree.
///
/// Holds no state: every query is a pure function of the tree it is given
/// and can be re-run with the same result while the tree is unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AstQuery;

impl AstQuery {
    pub fn new() -> Self {
        Self
    }

    /// Every node of type `T` below `root` (direct or indirect), in document order.
    ///
    /// `root` itself is never part of the result.
    pub fn descendants_of_type<T: AstNode>(&self, root: &SyntaxNode) -> Vec<T> {
        root.descendants().skip(1).filter_map(T::cast).collect()
    }

    /// The value stored under `field` in `node`'s field schema.
    ///
    /// Returns `None` when the field is not set, when the node's kind does
    /// not declare a field with that name, or when the kind has no schema.
    pub fn field_by_name(&self, node: &SyntaxNode, field: &str) -> Option<FieldValue> {
        AstElement::cast(node.clone())?.field(field)
    }

    /// [`field_by_name`](Self::field_by_name) for a single-node field, cast to `T`.
    pub fn node_field<T: AstNode>(&self, node: &SyntaxNode, field: &str) -> Option<T> {
        self.field_by_name(node, field)?.cast()
    }
}
