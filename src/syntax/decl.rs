//! Declarative description of component files.
//!
//! A [`ComponentDecl`] lists what a component declares and renders it into
//! a lossless tree whose text reads like nesC source:
//!
//! ```text
//! module Logger {
//!   provides interface Read as R;
//!   uses interface Timer<TMilli> as T[uint8_t id];
//! }
//! implementation {
//!   call R.read();
//! }
//! ```

use smol_str::SmolStr;

use super::SyntaxKind;
use super::ast::{AccessDirection, ComponentKind, DeclarationKind, StatementKind};
use super::builder::{SourceTree, TreeBuilder};

/// One `interface ...` entry of an access clause.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceDecl {
    /// `None` renders a reference without its interface type, a partial tree
    /// an editor can hold while the user is typing.
    pub name: Option<SmolStr>,
    pub alias: Option<SmolStr>,
    pub type_args: Vec<SmolStr>,
    /// `(type, name)` pairs of a parameterized interface (`[uint8_t id]`).
    pub parameters: Vec<(SmolStr, SmolStr)>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A reference with no interface type.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn type_arg(mut self, ty: impl Into<SmolStr>) -> Self {
        self.type_args.push(ty.into());
        self
    }

    pub fn parameter(mut self, ty: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        self.parameters.push((ty.into(), name.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessItems {
    Interfaces(Vec<InterfaceDecl>),
    /// Bare `command` / `event` declarations, as `(kind, name)` pairs.
    Declarations(Vec<(DeclarationKind, SmolStr)>),
}

/// One `provides` / `uses` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecl {
    pub direction: AccessDirection,
    pub items: AccessItems,
}

/// One statement of an implementation body: `call Target.member();`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementDecl {
    pub kind: StatementKind,
    pub target: SmolStr,
    pub member: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDecl {
    pub kind: ComponentKind,
    pub generic: bool,
    pub name: SmolStr,
    pub accesses: Vec<AccessDecl>,
    pub statements: Vec<StatementDecl>,
}

impl ComponentDecl {
    pub fn module(name: impl Into<SmolStr>) -> Self {
        Self::new(ComponentKind::Module, name)
    }

    pub fn configuration(name: impl Into<SmolStr>) -> Self {
        Self::new(ComponentKind::Configuration, name)
    }

    fn new(kind: ComponentKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            generic: false,
            name: name.into(),
            accesses: Vec::new(),
            statements: Vec::new(),
        }
    }

    pub fn generic(mut self) -> Self {
        self.generic = true;
        self
    }

    /// `provides interface X;`
    pub fn provides(self, interface: InterfaceDecl) -> Self {
        self.provides_all(vec![interface])
    }

    /// `uses interface X;`
    pub fn uses(self, interface: InterfaceDecl) -> Self {
        self.uses_all(vec![interface])
    }

    /// `provides { interface X; interface Y; }`
    pub fn provides_all(self, interfaces: Vec<InterfaceDecl>) -> Self {
        self.access(AccessDirection::Provides, AccessItems::Interfaces(interfaces))
    }

    /// `uses { interface X; interface Y; }`
    pub fn uses_all(self, interfaces: Vec<InterfaceDecl>) -> Self {
        self.access(AccessDirection::Uses, AccessItems::Interfaces(interfaces))
    }

    /// `provides command void name();`
    pub fn provides_command(self, name: impl Into<SmolStr>) -> Self {
        self.access(
            AccessDirection::Provides,
            AccessItems::Declarations(vec![(DeclarationKind::Command, name.into())]),
        )
    }

    /// `uses event void name();`
    pub fn uses_event(self, name: impl Into<SmolStr>) -> Self {
        self.access(
            AccessDirection::Uses,
            AccessItems::Declarations(vec![(DeclarationKind::Event, name.into())]),
        )
    }

    pub fn access(mut self, direction: AccessDirection, items: AccessItems) -> Self {
        self.accesses.push(AccessDecl { direction, items });
        self
    }

    /// `call Target.member();` in the implementation body.
    pub fn call(mut self, target: impl Into<SmolStr>, member: impl Into<SmolStr>) -> Self {
        self.statements.push(StatementDecl {
            kind: StatementKind::Call,
            target: target.into(),
            member: member.into(),
        });
        self
    }

    /// `signal Target.member();` in the implementation body.
    pub fn signal(mut self, target: impl Into<SmolStr>, member: impl Into<SmolStr>) -> Self {
        self.statements.push(StatementDecl {
            kind: StatementKind::Signal,
            target: target.into(),
            member: member.into(),
        });
        self
    }

    /// Render this component as the only one in a file.
    pub fn build(&self) -> SourceTree {
        build_source(std::slice::from_ref(self))
    }
}

/// Render a file holding `components` in order.
pub fn build_source(components: &[ComponentDecl]) -> SourceTree {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::TRANSLATION_UNIT);
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            b.whitespace("\n\n");
        }
        component_into(&mut b, component);
    }
    b.whitespace("\n");
    b.finish_node();
    b.finish()
}

fn component_into(b: &mut TreeBuilder, decl: &ComponentDecl) {
    b.start_node(SyntaxKind::COMPONENT);
    if decl.generic {
        b.keyword("generic").space();
    }
    match decl.kind {
        ComponentKind::Module => b.keyword("module"),
        ComponentKind::Configuration => b.keyword("configuration"),
    };
    b.space().identifier(&decl.name);
    if decl.generic {
        b.token(SyntaxKind::L_PAREN, "(")
            .token(SyntaxKind::R_PAREN, ")");
    }
    b.space();

    b.start_node(SyntaxKind::ACCESS_LIST)
        .token(SyntaxKind::L_BRACE, "{");
    for access in &decl.accesses {
        b.whitespace("\n  ");
        access_into(b, access);
    }
    b.whitespace("\n").token(SyntaxKind::R_BRACE, "}").finish_node();

    b.whitespace("\n");
    b.start_node(SyntaxKind::IMPLEMENTATION)
        .keyword("implementation")
        .space()
        .token(SyntaxKind::L_BRACE, "{");
    for statement in &decl.statements {
        b.whitespace("\n  ");
        statement_into(b, statement);
    }
    b.whitespace("\n").token(SyntaxKind::R_BRACE, "}").finish_node();

    b.finish_node();
}

fn access_into(b: &mut TreeBuilder, decl: &AccessDecl) {
    b.start_node(SyntaxKind::ACCESS);
    match decl.direction {
        AccessDirection::Provides => b.keyword("provides"),
        AccessDirection::Uses => b.keyword("uses"),
    };
    b.space();
    match &decl.items {
        AccessItems::Interfaces(interfaces) if interfaces.len() == 1 => {
            b.start_node(SyntaxKind::PARAMETERIZED_INTERFACE_LIST);
            parameterized_interface_into(b, &interfaces[0]);
            b.finish_node().token(SyntaxKind::SEMICOLON, ";");
        }
        AccessItems::Interfaces(interfaces) => {
            b.token(SyntaxKind::L_BRACE, "{");
            b.start_node(SyntaxKind::PARAMETERIZED_INTERFACE_LIST);
            for interface in interfaces {
                b.whitespace("\n    ");
                parameterized_interface_into(b, interface);
                b.token(SyntaxKind::SEMICOLON, ";");
            }
            b.finish_node();
            b.whitespace("\n  ").token(SyntaxKind::R_BRACE, "}");
        }
        AccessItems::Declarations(declarations) => {
            b.start_node(SyntaxKind::DECLARATION_LIST);
            for (i, (kind, name)) in declarations.iter().enumerate() {
                if i > 0 {
                    b.token(SyntaxKind::SEMICOLON, ";").space();
                }
                b.start_node(SyntaxKind::DECLARATION);
                match kind {
                    DeclarationKind::Command => b.keyword("command"),
                    DeclarationKind::Event => b.keyword("event"),
                };
                b.space()
                    .keyword("void")
                    .space()
                    .identifier(name)
                    .token(SyntaxKind::L_PAREN, "(")
                    .token(SyntaxKind::R_PAREN, ")")
                    .finish_node();
            }
            b.finish_node().token(SyntaxKind::SEMICOLON, ";");
        }
    }
    b.finish_node();
}

fn parameterized_interface_into(b: &mut TreeBuilder, decl: &InterfaceDecl) {
    b.start_node(SyntaxKind::PARAMETERIZED_INTERFACE)
        .keyword("interface")
        .space();

    b.start_node(SyntaxKind::INTERFACE_REFERENCE);
    if let Some(name) = &decl.name {
        b.start_node(SyntaxKind::INTERFACE_TYPE).identifier(name);
        if !decl.type_args.is_empty() {
            b.start_node(SyntaxKind::TYPE_ARGUMENTS)
                .token(SyntaxKind::LT, "<");
            for (i, ty) in decl.type_args.iter().enumerate() {
                if i > 0 {
                    b.token(SyntaxKind::COMMA, ",").space();
                }
                b.start_node(SyntaxKind::TYPE_NAME)
                    .identifier(ty)
                    .finish_node();
            }
            b.token(SyntaxKind::GT, ">").finish_node();
        }
        b.finish_node();
    }
    if let Some(alias) = &decl.alias {
        if decl.name.is_some() {
            b.space();
        }
        b.keyword("as").space().identifier(alias);
    }
    b.finish_node();

    if !decl.parameters.is_empty() {
        b.start_node(SyntaxKind::INTERFACE_PARAMETERS)
            .token(SyntaxKind::L_BRACKET, "[");
        for (i, (ty, name)) in decl.parameters.iter().enumerate() {
            if i > 0 {
                b.token(SyntaxKind::COMMA, ",").space();
            }
            b.start_node(SyntaxKind::PARAMETER)
                .start_node(SyntaxKind::TYPE_NAME)
                .identifier(ty)
                .finish_node()
                .space()
                .identifier(name)
                .finish_node();
        }
        b.token(SyntaxKind::R_BRACKET, "]").finish_node();
    }

    b.finish_node();
}

fn statement_into(b: &mut TreeBuilder, decl: &StatementDecl) {
    b.start_node(SyntaxKind::STATEMENT);
    match decl.kind {
        StatementKind::Call => b.keyword("call"),
        StatementKind::Signal => b.keyword("signal"),
    };
    b.space()
        .identifier(&decl.target)
        .token(SyntaxKind::DOT, ".")
        .identifier(&decl.member)
        .token(SyntaxKind::L_PAREN, "(")
        .token(SyntaxKind::R_PAREN, ")")
        .token(SyntaxKind::SEMICOLON, ";")
        .finish_node();
}
