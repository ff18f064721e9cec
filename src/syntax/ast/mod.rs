//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode of one kind and provides methods to access
//! its children. On top of the typed accessors every node kind declares a
//! fixed field schema ([`FixedNode`]) so that callers which work across node
//! kinds can read a field by name through [`AstElement`].

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities
// ============================================================================

/// Find the first direct child token of the given kind.
#[inline]
fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Macro to generate a method that finds the first child of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     first_child_method!(name, Identifier);
///     first_child_method!(specification, AccessList);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate a method that gets the first child node of a type after a specific keyword.
///
/// This is the shape of `as R` in an interface reference.
macro_rules! child_after_keyword_method {
    ($name:ident, $type:ident, $keyword:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self) -> Option<$type> {
            let mut seen_keyword = false;
            for child in self.0.children_with_tokens() {
                match child {
                    rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::$keyword => {
                        seen_keyword = true;
                    }
                    rowan::NodeOrToken::Node(n) if seen_keyword => {
                        if let Some(result) = $type::cast(n) {
                            return Some(result);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
    };
}

/// Macro to generate a method that maps token kinds to enum variants.
///
/// Usage:
/// ```ignore
/// impl Access {
///     token_to_enum_method!(direction, AccessDirection, [
///         PROVIDES_KW => Provides,
///         USES_KW => Uses,
///     ]);
/// }
/// ```
macro_rules! token_to_enum_method {
    ($name:ident, $enum_type:ident, [$($token:ident => $variant:ident),+ $(,)?]) => {
        pub fn $name(&self) -> Option<$enum_type> {
            for token in self.0.children_with_tokens().filter_map(|e| e.into_token()) {
                match token.kind() {
                    $(SyntaxKind::$token => return Some($enum_type::$variant),)+
                    _ => {}
                }
            }
            None
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type, this node excluded.
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().skip(1).filter_map(T::cast)
    }
}

// ============================================================================
// Field schema
// ============================================================================

/// The value stored under one named field of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single child node
    Node(SyntaxNode),
    /// A collection of child nodes (possibly empty)
    Nodes(Vec<SyntaxNode>),
    /// A keyword or name token
    Token(SyntaxToken),
}

impl FieldValue {
    /// The single node held by this field, if it holds one.
    pub fn into_node(self) -> Option<SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// The single node held by this field, cast to a typed wrapper.
    pub fn cast<T: AstNode>(self) -> Option<T> {
        self.into_node().and_then(T::cast)
    }

    /// Every node held by this field: one for `Node`, all for `Nodes`, none for `Token`.
    pub fn into_nodes(self) -> Vec<SyntaxNode> {
        match self {
            Self::Node(node) => vec![node],
            Self::Nodes(nodes) => nodes,
            Self::Token(_) => Vec::new(),
        }
    }

    pub fn into_token(self) -> Option<SyntaxToken> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }
}

/// A node kind with a fixed set of named fields.
///
/// Lookup never fails for a field name the kind does not declare; it yields
/// `None`, the same as a declared field that is not set.
pub trait FixedNode: AstNode {
    /// Names of the fields this kind declares, in source order.
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<FieldValue>;
}

macro_rules! field_value {
    (node, $value:expr) => {
        $value.map(|n| FieldValue::Node(n.syntax().clone()))
    };
    (nodes, $value:expr) => {
        Some(FieldValue::Nodes($value.map(|n| n.syntax().clone()).collect()))
    };
    (token, $value:expr) => {
        $value.map(FieldValue::Token)
    };
}

/// Macro to declare the field schema of a node kind.
///
/// Each entry names the associated constant, the field key, the accessor
/// that reads the field, and its shape (`node`, `nodes` or `token`).
///
/// Usage:
/// ```ignore
/// fixed_fields!(InterfaceType {
///     NAME = "name" => name: node,
///     ARGUMENTS = "arguments" => arguments: node,
/// });
/// ```
macro_rules! fixed_fields {
    ($ty:ident { $($konst:ident = $key:literal => $accessor:ident : $shape:ident),* $(,)? }) => {
        impl $ty {
            $(pub const $konst: &'static str = $key;)*
        }

        impl FixedNode for $ty {
            const FIELDS: &'static [&'static str] = &[$($key),*];

            fn field(&self, name: &str) -> Option<FieldValue> {
                match name {
                    $($key => field_value!($shape, self.$accessor()),)*
                    _ => None,
                }
            }
        }
    };
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        /// Equality and hashing follow node identity: two nodes with the
        /// same text at different positions are different values.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Macro to generate the closed sum type over every node kind.
macro_rules! ast_element {
    ($($variant:ident),+ $(,)?) => {
        /// Any typed node of the tree, for callers that work across kinds.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AstElement {
            $($variant($variant),)+
        }

        impl AstElement {
            /// Wrap `node` in the variant matching its kind, or `None` for
            /// kinds without a schema (`ERROR`).
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                let kind = node.kind();
                $(
                    if $variant::can_cast(kind) {
                        return $variant::cast(node).map(Self::$variant);
                    }
                )+
                None
            }

            pub fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(it) => it.syntax(),)+
                }
            }

            /// Names of the fields declared by this node's kind.
            pub fn fields(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant(_) => <$variant as FixedNode>::FIELDS,)+
                }
            }

            pub fn field(&self, name: &str) -> Option<FieldValue> {
                match self {
                    $(Self::$variant(it) => it.field(name),)+
                }
            }
        }
    };
}

// Submodules declared after the macros so macro_rules! are in scope
mod nodes;

pub use self::nodes::*;

ast_element!(
    TranslationUnit,
    Component,
    AccessList,
    Access,
    ParameterizedInterfaceList,
    ParameterizedInterface,
    InterfaceReference,
    InterfaceType,
    TypeArguments,
    TypeName,
    InterfaceParameters,
    Parameter,
    DeclarationList,
    Declaration,
    Implementation,
    Statement,
    Identifier,
);
