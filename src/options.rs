//! Configuration options for keypath formatting.
//!
//! - [`KeypathOptions`]: Main configuration struct
//! - [`Quote`]: Quote character used by the bracket-string form (`["key"]`)
//!
//! The default options produce the conventional JavaScript-style rendering.
//!
//! ## Examples
//!
//! ```rust
//! use keypath_fmt::{to_keypath_with_options, KeypathOptions, Quote};
//!
//! let options = KeypathOptions::new().with_quote(Quote::Single);
//! let path = to_keypath_with_options(["headers", "content-type"], &options);
//! assert_eq!(path, "headers['content-type']");
//! ```

/// Quote character for keys rendered in bracket-string form.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::Quote;
///
/// assert_eq!(Quote::Double.as_char(), '"');
/// assert_eq!(Quote::Single.as_char(), '\'');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// Configuration options for keypath formatting.
///
/// # Examples
///
/// ```rust
/// use keypath_fmt::{KeypathOptions, Quote};
///
/// let options = KeypathOptions::new();
/// assert!(options.unwrap_quotes);
/// assert_eq!(options.quote, Quote::Double);
///
/// let options = KeypathOptions::new()
///     .with_quote(Quote::Single)
///     .with_unwrap_quotes(false);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypathOptions {
    /// Strip one matching outer quote pair from each key after the first.
    pub unwrap_quotes: bool,
    pub quote: Quote,
}

impl Default for KeypathOptions {
    fn default() -> Self {
        KeypathOptions {
            unwrap_quotes: true,
            quote: Quote::default(),
        }
    }
}

impl KeypathOptions {
    /// Creates default options (quotes unwrapped, double-quoted bracket keys).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quote character for bracket-string keys.
    #[must_use]
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    /// Enables or disables outer quote stripping.
    ///
    /// When disabled, a pre-quoted key such as `"0"` is classified with its
    /// quotes and therefore never renders as an index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath_fmt::{to_keypath_with_options, KeypathOptions};
    ///
    /// let options = KeypathOptions::new().with_unwrap_quotes(false);
    /// let path = to_keypath_with_options(["list", "'0'"], &options);
    /// assert_eq!(path, "list[\"'0'\"]");
    /// ```
    #[must_use]
    pub fn with_unwrap_quotes(mut self, unwrap_quotes: bool) -> Self {
        self.unwrap_quotes = unwrap_quotes;
        self
    }
}
