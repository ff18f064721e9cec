//! Refactoring tests
//!
//! Tests for the rename consumer of the analyzers:
//! - Name classification
//! - Rename preconditions
//! - Edit computation
