//! Identifier predicate used to validate field names.

/// Strict, reserved and the weak keywords that can't be used as plain field names.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// True if `s` can be used as a bare field name.
///
/// That is, it follows identifier syntax and isn't a keyword.
/// A lone `_` is not an identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid_syntax = match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    };
    valid_syntax && s != "_" && !is_keyword(s)
}
