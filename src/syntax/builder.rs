//! Tree construction.
//!
//! Trees reach the analysis layer already built. [`TreeBuilder`] is the
//! low-level way to build one: it mirrors rowan's `GreenNodeBuilder` and adds
//! helpers for the leaf shapes every tree repeats. For ordinary component
//! shapes, [`ComponentDecl`](super::ComponentDecl) renders a whole file.

use rowan::{GreenNode, GreenNodeBuilder};

use super::ast::{AstNode, TranslationUnit};
use super::keywords::keyword_kind;
use super::syntax_kind::SyntaxKind;
use super::SyntaxNode;

/// An immutable, lossless tree for one source file.
///
/// The green tree is `Send + Sync`; every thread that analyzes the file
/// creates its own [`SyntaxNode`] view with [`SourceTree::syntax`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceTree {
    pub green: GreenNode,
}

impl SourceTree {
    pub fn new(green: GreenNode) -> Self {
        Self { green }
    }

    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// The root as a translation unit, if the tree was built with one.
    pub fn translation_unit(&self) -> Option<TranslationUnit> {
        TranslationUnit::cast(self.syntax())
    }

    /// The full source text of the tree.
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

/// Builder for [`SourceTree`]s.
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        self.builder.start_node(kind.into());
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        self.builder.finish_node();
        self
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        self.builder.token(kind.into(), text);
        self
    }

    /// Emit a keyword token; text that is not a known keyword becomes an `IDENT`.
    pub fn keyword(&mut self, text: &str) -> &mut Self {
        let kind = keyword_kind(text).unwrap_or(SyntaxKind::IDENT);
        self.token(kind, text)
    }

    pub fn whitespace(&mut self, text: &str) -> &mut Self {
        self.token(SyntaxKind::WHITESPACE, text)
    }

    /// Emit a single space.
    pub fn space(&mut self) -> &mut Self {
        self.whitespace(" ")
    }

    /// Emit an `IDENTIFIER` node wrapping one `IDENT` token.
    pub fn identifier(&mut self, name: &str) -> &mut Self {
        self.start_node(SyntaxKind::IDENTIFIER)
            .token(SyntaxKind::IDENT, name)
            .finish_node()
    }

    pub fn finish(self) -> SourceTree {
        SourceTree::new(self.builder.finish())
    }
}
