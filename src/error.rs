//! Error types for keypath output and key conversion.
//!
//! Formatting a keypath never fails: every sequence of strings has a rendering.
//! Errors only come from the surrounding surface:
//!
//! - **I/O Errors**: writing a formatted keypath to a [`std::io::Write`] failed
//! - **Unsupported Keys**: a value passed to [`to_key`](crate::to_key) has no key representation
//!
//! ## Examples
//!
//! ```rust
//! use keypath_fmt::{to_key, Error};
//!
//! let result = to_key(&1.5_f64);
//! assert!(matches!(result, Err(Error::UnsupportedKey(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Value cannot be used as a keypath key
    #[error("Unsupported key: {0} cannot be used as a keypath key")]
    UnsupportedKey(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an unsupported key error naming the rejected kind of value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath_fmt::Error;
    ///
    /// let err = Error::unsupported_key("f64");
    /// assert!(err.to_string().contains("f64"));
    /// ```
    pub fn unsupported_key(kind: &str) -> Self {
        Error::UnsupportedKey(kind.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
