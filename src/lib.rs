//! # nesc-refactor
//!
//! Semantic analysis layer for refactoring nesC components.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! refactor  → Rename refactorings: preconditions, text edits
//!   ↓
//! analysis  → AstQuery, AstAnalyzer, ComponentAnalyzer (memoized facts)
//!   ↓
//! syntax    → SyntaxKind, typed AST with field schema, tree builders
//!   ↓
//! base      → Primitives (TextRange, Position/Span, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → analysis → refactor)
// ============================================================================

/// Foundation types: TextRange, Position/Span, LineIndex
pub mod base;

/// Syntax: rowan CST, typed AST wrappers, field schema
pub mod syntax;

/// Analyzers deriving semantic facts from component specifications
pub mod analysis;

/// Refactorings consuming the analyzers
pub mod refactor;

// Re-export commonly needed items
pub use analysis::{AstAnalyzer, AstQuery, ComponentAnalyzer};
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
pub use syntax::{AstError, AstResult, SourceTree};
