//! Keypath Notation
//!
//! This module documents the notation produced by this library.
//!
//! # Overview
//!
//! A keypath names a nested location by listing the keys used to reach it. The
//! rendered form is the one JavaScript developers write by hand when accessing
//! nested data:
//!
//! ```text
//! some.object[0].key
//! headers["content-type"]
//! ```
//!
//! # The Root Key
//!
//! The first key is copied into the output unchanged. It is not classified, not
//! unwrapped and not prefixed:
//!
//! | Keys | Output |
//! |------|--------|
//! | `key` | `key` |
//! | `0` | `0` |
//! | `"quoted"`, `a` | `"quoted".a` |
//!
//! # Following Keys
//!
//! Each following key is normalized, then classified.
//!
//! ## Quote Normalization
//!
//! A key that starts and ends with the same quote character, `'` or `"`, with at
//! least one character in between, loses that one outer pair:
//!
//! | Key | Normalized |
//! |-----|------------|
//! | `"0"` | `0` |
//! | `'key'` | `key` |
//! | `""` | `""` (nothing between the quotes) |
//! | `"key'` | `"key'` (mismatched) |
//! | `''a''` | `'a'` (only the outer pair) |
//!
//! ## Classification
//!
//! Rules are tried in order:
//!
//! | Rule | Pattern | Rendering | Example |
//! |------|---------|-----------|---------|
//! | Integer-like | `0` or `[1-9][0-9]*` | `[key]` | `[0]`, `[42]` |
//! | Identifier | `[A-Za-z_$][A-Za-z0-9_$]*` | `.key` | `.name`, `.$el` |
//! | Anything else | | `["key"]` | `["01"]`, `["key-with-dash"]`, `[""]` |
//!
//! **Notes**:
//! - Integer-like keys are not range checked; any run of digits without a leading zero is an index
//! - Identifier matching is ASCII only: `café` renders as `["café"]`
//! - Quotes inside a bracket-string key are written as-is, without escaping
//! - Reserved words (`class`, `default`, `NaN`) are identifiers here
//!
//! # Options
//!
//! [`KeypathOptions`](crate::KeypathOptions) changes two details:
//!
//! - `quote`: `Quote::Single` renders `['key-with-dash']`
//! - `unwrap_quotes`: `false` skips quote normalization, so `'0'` renders as `["'0'"]`
//!
//! # Limitations
//!
//! - **No parsing**: there is no way back from a formatted string to its keys
//! - **No traversal**: keypaths are only rendered, never resolved against data
//! - **Ambiguity**: embedded quotes are not escaped, so `a["say "hi""]` cannot
//!   be read back reliably

// This module contains only documentation; no implementation code
