//! Foundation types for the nesC refactoring layer.
//!
//! This module provides the source-location primitives used throughout:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`], [`Span`] - Line/column positions for edits and diagnostics
//! - [`LineIndex`] - Offset to line/column conversion
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
