//! Reserved words of nesC and the C subset it builds on.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use super::SyntaxKind;

/// nesC reserved words on top of C.
pub const NESC_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "atomic", "call", "command", "component", "components",
    "configuration", "event", "extends", "generic", "implementation", "includes",
    "interface", "module", "new", "norace", "post", "provides", "signal", "task", "uses",
];

/// C89/C99 reserved words.
pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
    "typedef", "union", "unsigned", "void", "volatile", "while",
];

static ALL_KEYWORDS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| NESC_KEYWORDS.iter().chain(C_KEYWORDS).copied().collect());

/// Whether `text` is reserved and can never name an interface alias.
pub fn is_keyword(text: &str) -> bool {
    ALL_KEYWORDS.contains(text)
}

/// Token kind for the keywords the tree distinguishes.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "module" => SyntaxKind::MODULE_KW,
        "configuration" => SyntaxKind::CONFIGURATION_KW,
        "generic" => SyntaxKind::GENERIC_KW,
        "interface" => SyntaxKind::INTERFACE_KW,
        "provides" => SyntaxKind::PROVIDES_KW,
        "uses" => SyntaxKind::USES_KW,
        "as" => SyntaxKind::AS_KW,
        "implementation" => SyntaxKind::IMPLEMENTATION_KW,
        "components" => SyntaxKind::COMPONENTS_KW,
        "command" => SyntaxKind::COMMAND_KW,
        "event" => SyntaxKind::EVENT_KW,
        "task" => SyntaxKind::TASK_KW,
        "call" => SyntaxKind::CALL_KW,
        "signal" => SyntaxKind::SIGNAL_KW,
        "post" => SyntaxKind::POST_KW,
        "async" => SyntaxKind::ASYNC_KW,
        "void" => SyntaxKind::VOID_KW,
        "typedef" => SyntaxKind::TYPEDEF_KW,
        "struct" => SyntaxKind::STRUCT_KW,
        "return" => SyntaxKind::RETURN_KW,
        _ => return None,
    };
    Some(kind)
}

/// Whether `text` is lexically a C identifier (ASCII letters, digits, `_`).
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
