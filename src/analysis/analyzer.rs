//! The contract shared by all analyzers.

use super::AstQuery;
use crate::syntax::{AstNode, FieldValue};

/// Base contract for analyzers over a tree.
///
/// An analyzer:
/// - holds one [`AstQuery`] and hands it out through [`ast_query`](Self::ast_query),
/// - exposes every derived fact through an accessor that computes it on
///   first use and returns the cached value afterwards,
/// - never mutates the tree it reads. The tree must stay unchanged while
///   the analyzer is alive, or cached facts go stale; this is a precondition
///   of the caller and is not detected.
pub trait AstAnalyzer {
    fn ast_query(&self) -> &AstQuery;

    /// Collect the field `field` of every parent, skipping parents where it
    /// is absent. Collection fields contribute all their nodes; values that
    /// are not a `C` are dropped.
    fn collect_fields<P: AstNode, C: AstNode>(&self, parents: &[P], field: &str) -> Vec<C> {
        let query = self.ast_query();
        parents
            .iter()
            .filter_map(|parent| query.field_by_name(parent.syntax(), field))
            .flat_map(FieldValue::into_nodes)
            .filter_map(C::cast)
            .collect()
    }
}
