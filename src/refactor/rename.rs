//! Renaming an interface alias.
//!
//! The refactoring asks the [`ComponentAnalyzer`] what the selected name
//! denotes, checks that the rename is safe, and computes the text edits. It
//! never applies them.

use smol_str::SmolStr;
use tracing::debug;

use super::{RenameError, RenameResult, TextEdit};
use crate::analysis::ComponentAnalyzer;
use crate::syntax::{AstNode, Identifier, keywords};

/// The old and new name of a rename, as collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameInfo {
    old_name: SmolStr,
    new_name: SmolStr,
}

impl RenameInfo {
    /// Start a rename of `old_name`; the new name starts out equal to it.
    pub fn new(old_name: impl Into<SmolStr>) -> Self {
        let old_name = old_name.into();
        Self {
            new_name: old_name.clone(),
            old_name,
        }
    }

    pub fn with_new_name(mut self, new_name: impl Into<SmolStr>) -> Self {
        self.set_new_name(new_name);
        self
    }

    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn set_new_name(&mut self, new_name: impl Into<SmolStr>) {
        self.new_name = new_name.into();
    }

    /// Check the new name on its own, without looking at any tree.
    pub fn validate_new_name(&self) -> RenameResult<()> {
        let name = self.new_name.as_str();
        if name.is_empty() {
            return Err(RenameError::EmptyName);
        }
        if !keywords::is_identifier(name) {
            return Err(RenameError::InvalidIdentifier(self.new_name.clone()));
        }
        if keywords::is_keyword(name) {
            return Err(RenameError::ReservedWord(self.new_name.clone()));
        }
        if self.new_name == self.old_name {
            return Err(RenameError::Unchanged(self.old_name.clone()));
        }
        Ok(())
    }
}

/// Knobs of the rename computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOptions {
    /// Also rewrite uses of the alias in the implementation body.
    pub rename_usages: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            rename_usages: true,
        }
    }
}

/// What a name in a component's specification denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTarget {
    /// A local alias; `interface` is `None` when the renamed interface has no name in the tree.
    InterfaceAlias {
        alias: Identifier,
        interface: Option<Identifier>,
    },
    /// The name of a referenced interface that is not hidden behind an alias.
    Interface(Identifier),
    Unknown,
}

/// Classify `name` against the specification of `analyzer`'s component.
///
/// Aliases win over interface names: inside the component, `R` in
/// `provides interface Read as R` is the only name the interface has.
pub fn resolve_name(analyzer: &ComponentAnalyzer, name: &str) -> RenameResult<NameTarget> {
    if let Some(alias) = analyzer.alias_identifier_for_alias_name(name)? {
        return Ok(NameTarget::InterfaceAlias {
            alias: alias.clone(),
            interface: analyzer.interface_identifier_for_alias(alias).cloned(),
        });
    }
    for reference in analyzer.interface_references() {
        if reference.rename().is_some() {
            continue;
        }
        if let Some(identifier) = reference.interface_identifier() {
            if identifier.has_name(name)? {
                return Ok(NameTarget::Interface(identifier));
            }
        }
    }
    Ok(NameTarget::Unknown)
}

/// Rename of an interface alias inside one component.
#[derive(Debug)]
pub struct InterfaceAliasRename<'a> {
    analyzer: &'a ComponentAnalyzer,
    info: RenameInfo,
    options: RenameOptions,
}

impl<'a> InterfaceAliasRename<'a> {
    pub fn new(analyzer: &'a ComponentAnalyzer, info: RenameInfo, options: RenameOptions) -> Self {
        Self {
            analyzer,
            info,
            options,
        }
    }

    pub fn info(&self) -> &RenameInfo {
        &self.info
    }

    /// Check that the rename can proceed, returning the alias declaration it renames.
    ///
    /// With several aliases spelled the same, the first declared one is renamed.
    pub fn check_preconditions(&self) -> RenameResult<&'a Identifier> {
        self.info.validate_new_name()?;

        let component = self.analyzer.component_name()?;
        let old_name = self.info.old_name();
        let alias = self
            .analyzer
            .alias_identifier_for_alias_name(old_name)?
            .ok_or_else(|| RenameError::NotAnAlias {
                name: SmolStr::new(old_name),
                component: component.clone(),
            })?;

        let new_name = self.info.new_name();
        let mut in_use = self
            .analyzer
            .local_interface_names()?
            .iter()
            .any(|name| name == new_name);
        // Commands and events of the specification live in the same namespace.
        for declared in self.analyzer.declaration_identifiers() {
            if in_use {
                break;
            }
            in_use = declared.has_name(new_name)?;
        }
        if in_use {
            return Err(RenameError::NameInUse {
                name: SmolStr::new(new_name),
                component,
            });
        }
        Ok(alias)
    }

    /// The edits performing the rename, ordered by offset.
    pub fn compute_edits(&self) -> RenameResult<Vec<TextEdit>> {
        let alias = self.check_preconditions()?;
        let new_name = self.info.new_name();
        let mut edits = vec![TextEdit::replace(alias.range(), new_name)];

        if self.options.rename_usages {
            let statements = self
                .analyzer
                .component()
                .and_then(|component| component.implementation())
                .into_iter()
                .flat_map(|implementation| implementation.statements().collect::<Vec<_>>());
            for statement in statements {
                let Some(target) = statement.target() else {
                    continue;
                };
                if target.has_name(self.info.old_name())? {
                    edits.push(TextEdit::replace(target.range(), new_name));
                }
            }
        }

        edits.sort_by_key(|edit| edit.range.start());
        edits.dedup_by_key(|edit| edit.range);
        debug!(
            old = self.info.old_name(),
            new = new_name,
            component = %self.analyzer.component_identifier().syntax().text(),
            edits = edits.len(),
            "computed alias rename"
        );
        Ok(edits)
    }
}
