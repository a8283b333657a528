//! Reserved identifiers of ECMAScript 2023.
//!
//! Keys listed here are identifier-shaped, so the formatter still renders them
//! with dot notation. The table is exported for callers that want to flag them.
//!
//! Sources:
//! - <https://262.ecma-international.org/14.0/#sec-keywords-and-reserved-words>
//! - <https://262.ecma-international.org/14.0/#sec-value-properties-of-the-global-object>

/// Global value properties, then keywords, future reserved keywords and
/// restricted names.
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    // Value properties of the global object
    "globalThis",
    "Infinity",
    "NaN",
    "undefined",
    // Keywords
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Future reserved keywords
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    // Not keywords, but restricted
    "arguments",
    "eval",
];

/// Returns `true` if `key` is in [`RESERVED_IDENTIFIERS`]. Case-sensitive.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::is_reserved;
///
/// assert!(is_reserved("class"));
/// assert!(is_reserved("NaN"));
/// assert!(!is_reserved("Class"));
/// ```
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&key)
}
