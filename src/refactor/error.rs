//! Error types for rename refactorings.

use smol_str::SmolStr;
use thiserror::Error;

use crate::syntax::AstError;

/// Reasons a rename cannot proceed.
///
/// Everything except [`RenameError::Ast`] is a precondition failure meant to
/// be shown to the user; `Ast` means the tree itself is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("the new name must not be empty")]
    EmptyName,

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(SmolStr),

    #[error("`{0}` is a reserved word")]
    ReservedWord(SmolStr),

    #[error("the new name is the same as the old name `{0}`")]
    Unchanged(SmolStr),

    /// The old name does not denote an alias of the component.
    #[error("`{name}` is not an interface alias in component `{component}`")]
    NotAnAlias { name: SmolStr, component: SmolStr },

    /// The new name already denotes an interface of the component.
    #[error("`{name}` is already used for an interface in component `{component}`")]
    NameInUse { name: SmolStr, component: SmolStr },

    #[error(transparent)]
    Ast(#[from] AstError),
}

pub type RenameResult<T> = Result<T, RenameError>;
