//! # keypath_fmt
//!
//! Formats a sequence of property-access keys into a single human-readable keypath
//! such as `some.object[0].key`.
//!
//! ## Notation
//!
//! The first key is written as-is. Every following key is appended in one of three forms:
//!
//! - **Index**: integer-like keys (`0`, `42`) become `[0]`, `[42]`
//! - **Dot**: identifier-like keys (`name`, `$el`, `_id`) become `.name`
//! - **Bracket string**: anything else becomes `["key-with-dash"]`
//!
//! Keys wrapped in one matching pair of single or double quotes are unwrapped before
//! they are classified, so `'0'` still renders as `[0]`.
//!
//! ## Quick Start
//!
//! ```rust
//! use keypath_fmt::to_keypath;
//!
//! assert_eq!(to_keypath(["some", "object", "0", "key"]), "some.object[0].key");
//! assert_eq!(to_keypath(["some", "object", "01", "key"]), "some.object[\"01\"].key");
//! assert_eq!(to_keypath(["some", "object", "'key-with-dash'"]), "some.object[\"key-with-dash\"]");
//! assert_eq!(to_keypath(Vec::<String>::new()), "");
//! ```
//!
//! ### Building Paths
//!
//! ```rust
//! use keypath_fmt::keypath;
//!
//! let path = keypath!["users", 0, "display-name"];
//! assert_eq!(path.to_string(), "users[0][\"display-name\"]");
//! ```
//!
//! ## Reserved Words
//!
//! Classification is purely syntactic. Reserved words such as `class` are
//! identifier-shaped and render with dot notation; [`RESERVED_IDENTIFIERS`] and
//! [`is_reserved`] are exported for callers that want to check them.
//!
//! ## Guarantees
//!
//! - Formatting is total: every input has a rendering and nothing panics
//! - Formatting is pure and deterministic; all types are `Send + Sync`
//! - No `unsafe` code
//!
//! See the [`syntax`] module for the full notation rules.

pub mod error;
pub mod format;
pub mod key;
pub mod keypath;
pub mod macros;
pub mod options;
pub mod reserved;
pub mod ser;
pub mod syntax;

pub use error::{Error, Result};
pub use format::Formatter;
pub use key::{is_identifier, is_integer_like, Notation};
pub use keypath::Keypath;
pub use options::{KeypathOptions, Quote};
pub use reserved::{is_reserved, RESERVED_IDENTIFIERS};
pub use ser::KeySerializer;

use log::trace;
use serde::Serialize;
use std::io;

/// Formats `path` using dot and bracket notation.
///
/// An empty sequence yields an empty string. There is no way to pass an absent
/// sequence; callers holding an `Option` can pass `opt.into_iter().flatten()`.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::to_keypath;
///
/// assert_eq!(to_keypath(["a", "0", ".c"]), "a[0][\".c\"]");
/// assert_eq!(to_keypath(&["key"]), "key");
///
/// let keys: Option<Vec<&str>> = None;
/// assert_eq!(to_keypath(keys.into_iter().flatten()), "");
/// ```
#[must_use]
pub fn to_keypath<I>(path: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    to_keypath_with_options(path, &KeypathOptions::default())
}

/// Formats `path` with custom options.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::{to_keypath_with_options, KeypathOptions, Quote};
///
/// let options = KeypathOptions::new().with_quote(Quote::Single);
/// assert_eq!(to_keypath_with_options(["a", "b c"], &options), "a['b c']");
/// ```
#[must_use]
pub fn to_keypath_with_options<I>(path: I, options: &KeypathOptions) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut keys = path.into_iter();
    let Some(root) = keys.next() else {
        return String::new();
    };

    let mut formatter = Formatter::new(options.clone());
    formatter.write_root(root.as_ref());
    for key in keys {
        formatter.write_key(key.as_ref());
    }

    let output = formatter.into_inner();
    trace!("Formatted keypath {}", output);
    output
}

/// Writes the formatted `path` to `writer`.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, ["items", "0"]).unwrap();
/// assert_eq!(buffer, b"items[0]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer<W, I>(writer: W, path: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    to_writer_with_options(writer, path, &KeypathOptions::default())
}

/// Writes the formatted `path` to `writer` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer_with_options<W, I>(mut writer: W, path: I, options: &KeypathOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keypath = to_keypath_with_options(path, options);
    writer
        .write_all(keypath.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Converts a `Serialize` value into key text.
///
/// See [`KeySerializer`] for which values are accepted.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::to_key;
///
/// assert_eq!(to_key(&"name").unwrap(), "name");
/// assert_eq!(to_key(&7_usize).unwrap(), "7");
/// assert!(to_key(&true).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedKey`] for floats, booleans, `None`, bytes and
/// compound values.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_key<K>(key: &K) -> Result<String>
where
    K: ?Sized + Serialize,
{
    key.serialize(KeySerializer)
}
