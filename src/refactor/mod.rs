//! Refactorings built on the semantic analyzers.
//!
//! These are the consumers of [`crate::analysis`]: they turn a user request
//! (rename `R` to `Reader`) into preconditions and [`TextEdit`]s. Collecting
//! the request and applying the edits belong to the host editor.

mod edit;
mod error;
mod rename;

pub use edit::TextEdit;
pub use error::{RenameError, RenameResult};
pub use rename::{
    InterfaceAliasRename, NameTarget, RenameInfo, RenameOptions, resolve_name,
};
