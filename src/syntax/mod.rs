//! Lossless syntax trees for nesC component files.
//!
//! This layer owns the tree the analyzers read. Source text is parsed
//! elsewhere; trees arrive as rowan green nodes or are assembled with
//! [`TreeBuilder`] / [`ComponentDecl`].
//!
//! ## Architecture
//!
//! ```text
//! GreenNode (rowan) → immutable, cheap to clone, Send + Sync
//!     ↓
//! SyntaxNode (rowan) → CST view with parent pointers, identity-based Eq/Hash
//!     ↓
//! AST layer → typed wrappers with a fixed field schema per node kind
//! ```

pub mod ast;
mod builder;
mod decl;
mod error;
pub mod keywords;
mod syntax_kind;

pub use ast::*;
pub use builder::{SourceTree, TreeBuilder};
pub use decl::{AccessDecl, AccessItems, ComponentDecl, InterfaceDecl, StatementDecl, build_source};
pub use error::{AstError, AstResult};
pub use syntax_kind::{NescLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
