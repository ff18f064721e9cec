use smol_str::SmolStr;

use super::*;
use crate::syntax::{AstError, AstResult};
use rowan::TextRange;

// ============================================================================
// Translation unit
// ============================================================================

ast_node!(TranslationUnit, TRANSLATION_UNIT);

impl TranslationUnit {
    children_method!(components, Component);

    /// Find the first component declared with the given name.
    ///
    /// Components whose name identifier is malformed are skipped.
    pub fn component(&self, name: &str) -> Option<Component> {
        self.components().find(|c| {
            c.name()
                .and_then(|ident| ident.name().ok())
                .is_some_and(|n| n == name)
        })
    }

    /// Source text of the whole file.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

fixed_fields!(TranslationUnit {
    COMPONENTS = "components" => components: nodes,
});

// ============================================================================
// Component
// ============================================================================

ast_node!(Component, COMPONENT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Module,
    Configuration,
}

impl Component {
    token_to_enum_method!(component_kind, ComponentKind, [
        MODULE_KW => Module,
        CONFIGURATION_KW => Configuration,
    ]);

    /// Check for the `generic` modifier (e.g., `generic module Queue() {}`).
    pub fn is_generic(&self) -> bool {
        find_token(&self.0, SyntaxKind::GENERIC_KW).is_some()
    }

    first_child_method!(name, Identifier);
    first_child_method!(specification, AccessList);
    first_child_method!(implementation, Implementation);
}

fixed_fields!(Component {
    NAME = "name" => name: node,
    SPECIFICATION = "specification" => specification: node,
    IMPLEMENTATION = "implementation" => implementation: node,
});

// ============================================================================
// Specification
// ============================================================================

ast_node!(AccessList, ACCESS_LIST);

impl AccessList {
    children_method!(accesses, Access);
}

fixed_fields!(AccessList {
    ACCESSES = "accesses" => accesses: nodes,
});

ast_node!(Access, ACCESS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDirection {
    Provides,
    Uses,
}

impl Access {
    token_to_enum_method!(direction, AccessDirection, [
        PROVIDES_KW => Provides,
        USES_KW => Uses,
    ]);

    /// The `provides` / `uses` keyword token.
    pub fn direction_token(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::PROVIDES_KW)
            .or_else(|| find_token(&self.0, SyntaxKind::USES_KW))
    }

    first_child_method!(interfaces, ParameterizedInterfaceList);
    first_child_method!(declarations, DeclarationList);
}

fixed_fields!(Access {
    DIRECTION = "direction" => direction_token: token,
    INTERFACES = "interfaces" => interfaces: node,
    DECLARATIONS = "declarations" => declarations: node,
});

ast_node!(ParameterizedInterfaceList, PARAMETERIZED_INTERFACE_LIST);

impl ParameterizedInterfaceList {
    children_method!(interfaces, ParameterizedInterface);
}

fixed_fields!(ParameterizedInterfaceList {
    INTERFACES = "interfaces" => interfaces: nodes,
});

ast_node!(ParameterizedInterface, PARAMETERIZED_INTERFACE);

impl ParameterizedInterface {
    first_child_method!(reference, InterfaceReference);
    first_child_method!(parameters, InterfaceParameters);
}

fixed_fields!(ParameterizedInterface {
    REFERENCE = "reference" => reference: node,
    PARAMETERS = "parameters" => parameters: node,
});

// ============================================================================
// Interface reference
// ============================================================================

ast_node!(InterfaceReference, INTERFACE_REFERENCE);

impl InterfaceReference {
    first_child_method!(name, InterfaceType);
    child_after_keyword_method!(rename, Identifier, AS_KW, "Get the alias introduced by `as` (e.g., `R` in `Read as R`).");

    /// The identifier naming the referenced interface, through `Name → InterfaceType → Name`.
    pub fn interface_identifier(&self) -> Option<Identifier> {
        self.name().and_then(|ty| ty.name())
    }
}

fixed_fields!(InterfaceReference {
    NAME = "name" => name: node,
    RENAME = "rename" => rename: node,
});

ast_node!(InterfaceType, INTERFACE_TYPE);

impl InterfaceType {
    first_child_method!(name, Identifier);
    first_child_method!(arguments, TypeArguments);
}

fixed_fields!(InterfaceType {
    NAME = "name" => name: node,
    ARGUMENTS = "arguments" => arguments: node,
});

ast_node!(TypeArguments, TYPE_ARGUMENTS);

impl TypeArguments {
    children_method!(types, TypeName);
}

fixed_fields!(TypeArguments {
    TYPES = "types" => types: nodes,
});

ast_node!(TypeName, TYPE_NAME);

impl TypeName {
    first_child_method!(name, Identifier);
}

fixed_fields!(TypeName {
    NAME = "name" => name: node,
});

ast_node!(InterfaceParameters, INTERFACE_PARAMETERS);

impl InterfaceParameters {
    children_method!(parameters, Parameter);
}

fixed_fields!(InterfaceParameters {
    PARAMETERS = "parameters" => parameters: nodes,
});

ast_node!(Parameter, PARAMETER);

impl Parameter {
    first_child_method!(type_name, TypeName);
    first_child_method!(name, Identifier);
}

fixed_fields!(Parameter {
    TYPE = "type" => type_name: node,
    NAME = "name" => name: node,
});

// ============================================================================
// Bare command / event declarations
// ============================================================================

ast_node!(DeclarationList, DECLARATION_LIST);

impl DeclarationList {
    children_method!(declarations, Declaration);
}

fixed_fields!(DeclarationList {
    DECLARATIONS = "declarations" => declarations: nodes,
});

ast_node!(Declaration, DECLARATION);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Command,
    Event,
}

impl Declaration {
    token_to_enum_method!(declaration_kind, DeclarationKind, [
        COMMAND_KW => Command,
        EVENT_KW => Event,
    ]);

    pub fn kind_token(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::COMMAND_KW)
            .or_else(|| find_token(&self.0, SyntaxKind::EVENT_KW))
    }

    first_child_method!(name, Identifier);
}

fixed_fields!(Declaration {
    KIND = "kind" => kind_token: token,
    NAME = "name" => name: node,
});

// ============================================================================
// Implementation
// ============================================================================

ast_node!(Implementation, IMPLEMENTATION);

impl Implementation {
    children_method!(statements, Statement);
}

fixed_fields!(Implementation {
    STATEMENTS = "statements" => statements: nodes,
});

ast_node!(Statement, STATEMENT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Call,
    Signal,
}

impl Statement {
    token_to_enum_method!(statement_kind, StatementKind, [
        CALL_KW => Call,
        SIGNAL_KW => Signal,
    ]);

    /// The identifier the statement acts on (`R` in `call R.read();`).
    pub fn target(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }

    /// The member named after the target (`read` in `call R.read();`).
    pub fn member(&self) -> Option<Identifier> {
        self.0.children().filter_map(Identifier::cast).nth(1)
    }

    /// Every identifier mentioned by the statement, in source order.
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.0.descendants().filter_map(Identifier::cast)
    }
}

fixed_fields!(Statement {
    TARGET = "target" => target: node,
    MEMBER = "member" => member: node,
});

// ============================================================================
// Identifier
// ============================================================================

ast_node!(Identifier, IDENTIFIER);

impl Identifier {
    /// The `IDENT` token carrying the name.
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::IDENT)
    }

    /// The source name.
    ///
    /// The `IDENT` token is the one mandatory field of the schema; an
    /// identifier without it is a malformed tree.
    pub fn name(&self) -> AstResult<SmolStr> {
        self.ident_token()
            .map(|t| SmolStr::new(t.text()))
            .ok_or_else(|| AstError::malformed(&self.0, Self::NAME))
    }

    /// Check the name without allocating.
    pub fn has_name(&self, name: &str) -> AstResult<bool> {
        self.ident_token()
            .map(|t| t.text() == name)
            .ok_or_else(|| AstError::malformed(&self.0, Self::NAME))
    }

    /// Source range of the name.
    pub fn range(&self) -> TextRange {
        self.ident_token()
            .map(|t| t.text_range())
            .unwrap_or_else(|| self.0.text_range())
    }
}

fixed_fields!(Identifier {
    NAME = "name" => ident_token: token,
});
