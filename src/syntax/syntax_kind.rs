//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds that can appear in a nesC
//! component tree handed to the analysis layer.

/// All syntax kinds (tokens and nodes) of a nesC component tree
///
/// Tokens are leaf elements (identifiers, keywords, punctuation).
/// Nodes are composite (components, access clauses, interface references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    LT,        // <
    GT,        // >
    SEMICOLON, // ;
    COMMA,     // ,
    DOT,       // .
    EQ,        // =
    ARROW,     // ->

    // =========================================================================
    // KEYWORDS - nesC
    // =========================================================================
    MODULE_KW,
    CONFIGURATION_KW,
    GENERIC_KW,
    INTERFACE_KW,
    PROVIDES_KW,
    USES_KW,
    AS_KW,
    IMPLEMENTATION_KW,
    COMPONENTS_KW,
    COMMAND_KW,
    EVENT_KW,
    TASK_KW,
    CALL_KW,
    SIGNAL_KW,
    POST_KW,
    ASYNC_KW,

    // =========================================================================
    // KEYWORDS - C (only the ones that show up in specifications)
    // =========================================================================
    VOID_KW,
    TYPEDEF_KW,
    STRUCT_KW,
    RETURN_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    /// Root of one source file
    TRANSLATION_UNIT,
    /// `module Name { ... } implementation { ... }`
    COMPONENT,
    /// The `{ ... }` specification block of a component
    ACCESS_LIST,
    /// One `provides ...;` / `uses ...;` clause
    ACCESS,
    PARAMETERIZED_INTERFACE_LIST,
    /// `interface Read<uint8_t> as R[uint8_t id]`
    PARAMETERIZED_INTERFACE,
    /// `Read<uint8_t> as R`
    INTERFACE_REFERENCE,
    /// `Read<uint8_t>`
    INTERFACE_TYPE,
    /// `<uint8_t, uint16_t>`
    TYPE_ARGUMENTS,
    TYPE_NAME,
    /// `[uint8_t id]`
    INTERFACE_PARAMETERS,
    PARAMETER,
    /// Bare command/event declarations of an access clause
    DECLARATION_LIST,
    DECLARATION,
    IMPLEMENTATION,
    /// A statement inside an implementation body
    STATEMENT,
    /// A leaf node wrapping one `IDENT` token
    IDENTIFIER,

    // Error recovery
    ERROR,

    // Must be last
    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::MODULE_KW as u16) && (self as u16) <= (Self::RETURN_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::ARROW as u16)
    }

    /// Check if this is a composite node kind
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::TRANSLATION_UNIT as u16) && (self as u16) <= (Self::ERROR as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NescLanguage {}

impl rowan::Language for NescLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<NescLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<NescLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<NescLanguage>;
