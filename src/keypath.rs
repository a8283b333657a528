//! Owned keypath type.
//!
//! [`Keypath`] stores raw keys in order and renders them through
//! [`to_keypath`](crate::to_keypath) when displayed. It serializes as a plain
//! sequence of strings.
//!
//! ## Examples
//!
//! ```rust
//! use keypath_fmt::Keypath;
//!
//! let mut path = Keypath::new();
//! path.push("users");
//! path.push_index(3);
//! path.push("e-mail");
//!
//! assert_eq!(path.to_string(), "users[3][\"e-mail\"]");
//! assert_eq!(path.len(), 3);
//! ```

use crate::{to_keypath_with_options, KeypathOptions, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of raw keys.
///
/// Keys are kept exactly as pushed, quotes included; normalization happens
/// only when the path is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keypath(Vec<String>);

impl Keypath {
    /// Creates an empty `Keypath`.
    #[must_use]
    pub fn new() -> Self {
        Keypath(Vec::new())
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.0.push(key.into());
    }

    /// Appends an array index.
    pub fn push_index(&mut self, index: usize) {
        self.0.push(index.to_string());
    }

    /// Appends any `Serialize` value that has a key representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath_fmt::Keypath;
    ///
    /// let mut path = Keypath::new();
    /// path.push_key(&"items").unwrap();
    /// path.push_key(&0_u64).unwrap();
    /// assert_eq!(path.to_string(), "items[0]");
    ///
    /// assert!(path.push_key(&vec![1, 2]).is_err());
    /// assert_eq!(path.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKey`](crate::Error::UnsupportedKey) and
    /// leaves the path untouched if `key` cannot be turned into key text.
    pub fn push_key<K>(&mut self, key: &K) -> Result<()>
    where
        K: ?Sized + Serialize,
    {
        let key = crate::to_key(key)?;
        self.0.push(key);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Renders the path with custom options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath_fmt::{Keypath, KeypathOptions, Quote};
    ///
    /// let path: Keypath = ["env", "NODE-ENV"].into_iter().collect();
    /// let options = KeypathOptions::new().with_quote(Quote::Single);
    /// assert_eq!(path.to_string_with_options(&options), "env['NODE-ENV']");
    /// ```
    #[must_use]
    pub fn to_string_with_options(&self, options: &KeypathOptions) -> String {
        to_keypath_with_options(&self.0, options)
    }
}

impl fmt::Display for Keypath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_keypath(&self.0))
    }
}

impl From<Vec<String>> for Keypath {
    fn from(keys: Vec<String>) -> Self {
        Keypath(keys)
    }
}

impl From<Keypath> for Vec<String> {
    fn from(path: Keypath) -> Self {
        path.0
    }
}

impl<S: Into<String>> FromIterator<S> for Keypath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Keypath(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Keypath {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Keypath {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Keypath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[String]> for Keypath {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path: Keypath = ["some", "object", "0", "key"].into_iter().collect();
        assert_eq!(path.to_string(), "some.object[0].key");
        assert_eq!(format!("{}", Keypath::new()), "");
    }

    #[test]
    fn test_keys_stay_raw() {
        let mut path = Keypath::new();
        path.push("a");
        path.push("'0'");
        assert_eq!(path.as_slice(), ["a", "'0'"]);
        assert_eq!(path.to_string(), "a[0]");
    }

    #[test]
    fn test_push_and_pop() {
        let mut path = Keypath::new();
        assert!(path.is_empty());
        path.push("list");
        path.push_index(12);
        assert_eq!(path.to_string(), "list[12]");
        assert_eq!(path.pop(), Some("12".to_string()));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_push_key_rejects_without_mutating() {
        let mut path = Keypath::from(vec!["a".to_string()]);
        assert!(path.push_key(&2.5_f32).is_err());
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_extend_and_iterate() {
        let mut path = Keypath::new();
        path.extend(["a", "b"]);
        path.extend(vec![String::from("c")]);
        let keys: Vec<&String> = path.iter().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        let owned: Vec<String> = path.into_iter().collect();
        assert_eq!(owned, ["a", "b", "c"]);
    }
}
