//! Keypath rendering.
//!
//! This module provides the [`Formatter`] that accumulates a formatted keypath
//! one key at a time.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use keypath_fmt::to_keypath;
//!
//! assert_eq!(to_keypath(["some", "object", "0", "key"]), "some.object[0].key");
//! ```
//!
//! ## Direct Formatter Usage
//!
//! ```rust
//! use keypath_fmt::{Formatter, KeypathOptions};
//!
//! let mut formatter = Formatter::new(KeypathOptions::new());
//! formatter.write_root("config");
//! formatter.write_key("servers");
//! formatter.write_key("0");
//! formatter.write_key("host-name");
//!
//! assert_eq!(formatter.into_inner(), "config.servers[0][\"host-name\"]");
//! ```

use crate::key::{self, Notation};
use crate::KeypathOptions;

/// The keypath formatter.
///
/// The first key goes through [`Formatter::write_root`] and is copied
/// verbatim. Every later key goes through [`Formatter::write_key`].
pub struct Formatter {
    output: String,
    options: KeypathOptions,
}

impl Formatter {
    pub fn new(options: KeypathOptions) -> Self {
        Formatter {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes the leading key as-is: no connector, no quote stripping.
    pub fn write_root(&mut self, key: &str) {
        self.output.push_str(key);
    }

    /// Appends `key` in index, dot or bracket-string notation.
    pub fn write_key(&mut self, key: &str) {
        let key = if self.options.unwrap_quotes {
            key::unwrap_quotes(key)
        } else {
            key
        };

        match key::classify(key) {
            Notation::Index => {
                self.output.push('[');
                self.output.push_str(key);
                self.output.push(']');
            }
            Notation::Dot => {
                self.output.push('.');
                self.output.push_str(key);
            }
            Notation::Bracket => {
                // Embedded quotes are not escaped.
                let quote = self.options.quote.as_char();
                self.output.push('[');
                self.output.push(quote);
                self.output.push_str(key);
                self.output.push(quote);
                self.output.push(']');
            }
        }
    }
}
