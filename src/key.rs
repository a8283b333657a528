//! Key normalization and classification.
//!
//! Each key after the first goes through two steps before it is rendered:
//!
//! 1. [`unwrap_quotes`] strips one matching outer pair of `'` or `"`
//! 2. [`classify`] picks the [`Notation`] from the two predicates
//!    [`is_integer_like`] and [`is_identifier`]
//!
//! ## Examples
//!
//! ```rust
//! use keypath_fmt::key::{classify, unwrap_quotes, Notation};
//!
//! assert_eq!(classify(unwrap_quotes("'0'")), Notation::Index);
//! assert_eq!(classify("name"), Notation::Dot);
//! assert_eq!(classify("key-with-dash"), Notation::Bracket);
//! ```

/// How a single key is appended to a keypath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `[0]`
    Index,
    /// `.name`
    Dot,
    /// `["some key"]`
    Bracket,
}

/// Strips one matching pair of outer quotes from `key`.
///
/// Both ends must carry the same quote character and at least one character
/// must sit between them. Anything else is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::key::unwrap_quotes;
///
/// assert_eq!(unwrap_quotes("\"key\""), "key");
/// assert_eq!(unwrap_quotes("'key'"), "key");
/// assert_eq!(unwrap_quotes("\"\""), "\"\"");
/// assert_eq!(unwrap_quotes("\"key'"), "\"key'");
/// ```
#[must_use]
pub fn unwrap_quotes(key: &str) -> &str {
    let bytes = key.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'"' | b'\'')), Some(&close)) if open == close && bytes.len() > 2 => {
            &key[1..key.len() - 1]
        }
        _ => key,
    }
}

/// Returns `true` if `key` reads as an array index: `0`, or a non-zero digit
/// followed by any number of digits.
///
/// Leading zeros, signs and decimal points are rejected. The value is not
/// range checked.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::key::is_integer_like;
///
/// assert!(is_integer_like("0"));
/// assert!(is_integer_like("42"));
/// assert!(!is_integer_like("01"));
/// assert!(!is_integer_like("-1"));
/// ```
#[must_use]
pub fn is_integer_like(key: &str) -> bool {
    match key.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Returns `true` if `key` can be written after a dot: ASCII letters, digits,
/// `_` and `$`, not starting with a digit.
///
/// Reserved words are not checked; `class` is an identifier here. See
/// [`is_reserved`](crate::is_reserved).
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::key::is_identifier;
///
/// assert!(is_identifier("$scope"));
/// assert!(is_identifier("_private1"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("key-with-dash"));
/// ```
#[must_use]
pub fn is_identifier(key: &str) -> bool {
    let is_start = |b: &u8| b.is_ascii_alphabetic() || *b == b'_' || *b == b'$';
    match key.as_bytes() {
        [first, rest @ ..] => {
            is_start(first) && rest.iter().all(|b| is_start(b) || b.is_ascii_digit())
        }
        [] => false,
    }
}

/// Picks the notation for an already normalized key. The integer check runs
/// first.
#[must_use]
pub fn classify(key: &str) -> Notation {
    if is_integer_like(key) {
        Notation::Index
    } else if is_identifier(key) {
        Notation::Dot
    } else {
        Notation::Bracket
    }
}
