//! Error types for YSO parsing, serialization, and lookup.
//!
//! ## Error Categories
//!
//! - **I/O errors**: file or stream failures surfaced by the `from_file` /
//!   `to_file` / `from_reader` / `to_writer` helpers
//! - **Lookup errors**: indexed access to a section or key that does not
//!   exist ([`Error::KeyNotFound`])
//! - **Malformed input**: structural parse failures — a section header with
//!   no closing bracket, or a multi-line value still open at end of input
//!
//! A failed parse never yields a partial [`Document`](crate::Document); the
//! error is all the caller gets. Lookup errors are recoverable: check with
//! [`Document::contains_section`](crate::Document::contains_section) or
//! [`Section::contains`](crate::Section::contains) first when absence is an
//! expected case.
//!
//! Line numbers are not tracked; error messages reference the offending
//! content itself.
//!
//! ## Examples
//!
//! ```rust
//! use yso::{from_str, Error};
//!
//! let err = from_str("[unclosed").unwrap_err();
//! assert!(err.is_malformed());
//! ```

use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A section or key looked up through the fallible accessor path was absent
    #[error("key not found: '{name}'")]
    KeyNotFound { name: String },

    /// A section header line had no closing `]`
    #[error("expected ']' in section header: '{line}'")]
    UnclosedHeader { line: String },

    /// End of input was reached while collecting a multi-line value
    #[error("expected closing '\"\"\"' for key '{key}'")]
    UnterminatedValue { key: String },
}

impl Error {
    /// Creates an I/O error for file or stream failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a missing-section / missing-key lookup error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Error;
    ///
    /// let err = Error::key_not_found("general");
    /// assert!(err.to_string().contains("general"));
    /// ```
    pub fn key_not_found(name: &str) -> Self {
        Error::KeyNotFound {
            name: name.to_string(),
        }
    }

    /// Creates a malformed-header error carrying the offending line.
    pub fn unclosed_header(line: &str) -> Self {
        Error::UnclosedHeader {
            line: line.to_string(),
        }
    }

    /// Creates an unterminated multi-line value error for the given key.
    pub fn unterminated_value(key: &str) -> Self {
        Error::UnterminatedValue {
            key: key.to_string(),
        }
    }

    /// Returns `true` for the structural parse failures (`UnclosedHeader`,
    /// `UnterminatedValue`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Error;
    ///
    /// assert!(Error::unclosed_header("[oops").is_malformed());
    /// assert!(!Error::key_not_found("missing").is_malformed());
    /// ```
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::UnclosedHeader { .. } | Error::UnterminatedValue { .. }
        )
    }

    /// Returns `true` if this is a missing-section or missing-key error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
