//! Semantic facts about one component's specification.

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::{AstAnalyzer, AstQuery};
use crate::syntax::{
    Access, AccessList, AstError, AstNode, AstResult, Component, Declaration, DeclarationList,
    Identifier, InterfaceReference, ParameterizedInterface, ParameterizedInterfaceList,
    TranslationUnit,
};

/// Analyzer for the specification of a nesC component.
///
/// Bound to one `(component name, specification)` pair for its whole life;
/// build a new analyzer to look at another component. Construction does no
/// traversal. Every derived collection is computed on first request and
/// cached for the lifetime of the analyzer.
///
/// The analyzer holds rowan nodes and is therefore neither `Send` nor
/// `Sync`. To query one file from several threads, share its
/// [`SourceTree`](crate::syntax::SourceTree) and build one analyzer per thread.
///
/// Lookups that must read identifier text return [`AstResult`]; they only
/// fail on a structurally broken tree. A semantically incomplete
/// specification degrades to empty collections and `None`.
#[derive(Debug)]
pub struct ComponentAnalyzer {
    query: AstQuery,
    root: TranslationUnit,
    component_identifier: Identifier,
    specification: AccessList,

    interface_references: OnceCell<Vec<InterfaceReference>>,
    referenced_interface_identifiers: OnceCell<Vec<Identifier>>,
    referenced_interface_alias_identifiers: OnceCell<Vec<Identifier>>,
    referenced_interface_names: OnceCell<FxHashSet<SmolStr>>,
    local_interface_names: OnceCell<Vec<SmolStr>>,
    declaration_identifiers: OnceCell<Vec<Identifier>>,
    /// Keyed by alias node identity, in declaration order.
    alias_to_interface: OnceCell<IndexMap<Identifier, Identifier>>,
}

impl AstAnalyzer for ComponentAnalyzer {
    fn ast_query(&self) -> &AstQuery {
        &self.query
    }
}

impl ComponentAnalyzer {
    pub fn new(
        root: TranslationUnit,
        component_identifier: Identifier,
        specification: AccessList,
    ) -> Self {
        Self {
            query: AstQuery::new(),
            root,
            component_identifier,
            specification,
            interface_references: OnceCell::new(),
            referenced_interface_identifiers: OnceCell::new(),
            referenced_interface_alias_identifiers: OnceCell::new(),
            referenced_interface_names: OnceCell::new(),
            local_interface_names: OnceCell::new(),
            declaration_identifiers: OnceCell::new(),
            alias_to_interface: OnceCell::new(),
        }
    }

    /// Bind an analyzer to `component`.
    ///
    /// A component always carries a name and a specification block; one
    /// without them is a malformed tree.
    pub fn for_component(root: TranslationUnit, component: &Component) -> AstResult<Self> {
        let name = component
            .name()
            .ok_or_else(|| AstError::malformed(component.syntax(), Component::NAME))?;
        let specification = component
            .specification()
            .ok_or_else(|| AstError::malformed(component.syntax(), Component::SPECIFICATION))?;
        Ok(Self::new(root, name, specification))
    }

    pub fn translation_unit(&self) -> &TranslationUnit {
        &self.root
    }

    pub fn specification(&self) -> &AccessList {
        &self.specification
    }

    /// The component declaration the bound name belongs to.
    pub fn component(&self) -> Option<Component> {
        self.component_identifier
            .syntax()
            .parent()
            .and_then(Component::cast)
    }

    /// The name identifier of this component.
    pub fn component_identifier(&self) -> &Identifier {
        &self.component_identifier
    }

    /// The name of this component.
    pub fn component_name(&self) -> AstResult<SmolStr> {
        self.component_identifier.name()
    }

    /// Every interface referenced in the specification, in declaration order.
    ///
    /// Only access clauses that list interfaces contribute; bare command and
    /// event declarations do not. An interface listed twice appears twice.
    pub fn interface_references(&self) -> &[InterfaceReference] {
        self.interface_references.get_or_init(|| {
            let query = self.ast_query();
            let accesses: Vec<Access> = query.descendants_of_type(self.specification.syntax());
            let lists: Vec<ParameterizedInterfaceList> =
                self.collect_fields(&accesses, Access::INTERFACES);
            let interfaces: Vec<ParameterizedInterface> = lists
                .iter()
                .flat_map(|list| query.descendants_of_type::<ParameterizedInterface>(list.syntax()))
                .collect();
            let references: Vec<InterfaceReference> =
                self.collect_fields(&interfaces, ParameterizedInterface::REFERENCE);

            debug!(
                component = %self.component_identifier.syntax().text(),
                accesses = accesses.len(),
                references = references.len(),
                "collected interface references"
            );
            references
        })
    }

    /// The identifier of every referenced interface, in declaration order.
    ///
    /// A reference without an interface type, or with a type without a
    /// name, contributes nothing.
    pub fn referenced_interface_identifiers(&self) -> &[Identifier] {
        self.referenced_interface_identifiers.get_or_init(|| {
            let identifiers: Vec<Identifier> = self
                .interface_references()
                .iter()
                .filter_map(|reference| {
                    let identifier = reference.interface_identifier();
                    if identifier.is_none() {
                        trace!(range = ?reference.syntax().text_range(), "reference without interface name");
                    }
                    identifier
                })
                .collect();
            debug!(count = identifiers.len(), "collected referenced interface identifiers");
            identifiers
        })
    }

    /// The alias identifier of every aliased reference, in declaration order.
    pub fn referenced_interface_alias_identifiers(&self) -> &[Identifier] {
        self.referenced_interface_alias_identifiers.get_or_init(|| {
            let aliases: Vec<Identifier> = self
                .interface_references()
                .iter()
                .filter_map(InterfaceReference::rename)
                .collect();
            debug!(count = aliases.len(), "collected interface alias identifiers");
            aliases
        })
    }

    /// Map from each alias identifier to the identifier of the interface it renames.
    ///
    /// Keys are compared by node identity, not by text: two aliases spelled
    /// the same are two entries. References that lack either the alias or
    /// the interface name have no entry.
    pub fn alias_to_interface_name(&self) -> &IndexMap<Identifier, Identifier> {
        self.alias_to_interface.get_or_init(|| {
            let mut map = IndexMap::new();
            for reference in self.interface_references() {
                let Some(alias) = reference.rename() else {
                    continue;
                };
                match reference.interface_identifier() {
                    Some(interface) => {
                        map.insert(alias, interface);
                    }
                    None => {
                        trace!(range = ?alias.range(), "alias without interface name");
                    }
                }
            }
            debug!(count = map.len(), "built alias map");
            map
        })
    }

    /// The identifier of the interface renamed by `alias`.
    pub fn interface_identifier_for_alias(&self, alias: &Identifier) -> Option<&Identifier> {
        self.alias_to_interface_name().get(alias)
    }

    /// The first alias identifier, in declaration order, spelled `name`.
    pub fn alias_identifier_for_alias_name(&self, name: &str) -> AstResult<Option<&Identifier>> {
        for alias in self.referenced_interface_alias_identifiers() {
            if alias.has_name(name)? {
                return Ok(Some(alias));
            }
        }
        Ok(None)
    }

    /// The identifier of the interface renamed by the alias spelled `name`.
    pub fn interface_identifier_for_alias_name(
        &self,
        name: &str,
    ) -> AstResult<Option<&Identifier>> {
        Ok(self
            .alias_identifier_for_alias_name(name)?
            .and_then(|alias| self.interface_identifier_for_alias(alias)))
    }

    /// The name of the interface renamed by the alias spelled `name`.
    pub fn interface_name_for_alias_name(&self, name: &str) -> AstResult<Option<SmolStr>> {
        self.interface_identifier_for_alias_name(name)?
            .map(Identifier::name)
            .transpose()
    }

    /// Whether `name` is an alias introduced with `as` in this specification.
    pub fn is_alias_name(&self, name: &str) -> AstResult<bool> {
        Ok(self.alias_identifier_for_alias_name(name)?.is_some())
    }

    /// The set of interface names referenced by the specification.
    pub fn referenced_interface_names(&self) -> AstResult<&FxHashSet<SmolStr>> {
        self.referenced_interface_names.get_or_try_init(|| {
            self.referenced_interface_identifiers()
                .iter()
                .map(Identifier::name)
                .collect()
        })
    }

    /// The names under which the implementation sees each referenced
    /// interface: the alias where there is one, the interface name otherwise.
    pub fn local_interface_names(&self) -> AstResult<&[SmolStr]> {
        let names = self.local_interface_names.get_or_try_init(|| {
            let mut names = Vec::new();
            for reference in self.interface_references() {
                let local = reference.rename().or_else(|| reference.interface_identifier());
                if let Some(identifier) = local {
                    names.push(identifier.name()?);
                }
            }
            Ok::<_, AstError>(names)
        })?;
        Ok(names.as_slice())
    }

    /// The names of the bare `command` / `event` declarations of the
    /// specification, in declaration order.
    ///
    /// These share the component's namespace with interface instance names.
    pub fn declaration_identifiers(&self) -> &[Identifier] {
        self.declaration_identifiers.get_or_init(|| {
            let accesses: Vec<Access> =
                self.ast_query().descendants_of_type(self.specification.syntax());
            let lists: Vec<DeclarationList> = self.collect_fields(&accesses, Access::DECLARATIONS);
            let declarations: Vec<Declaration> =
                self.collect_fields(&lists, DeclarationList::DECLARATIONS);
            let identifiers: Vec<Identifier> =
                self.collect_fields(&declarations, Declaration::NAME);
            debug!(count = identifiers.len(), "collected command and event names");
            identifiers
        })
    }
}
