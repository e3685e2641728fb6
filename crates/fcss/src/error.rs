//! Error types for stylesheet tokenizing and parsing.
//!
//! Parsing is fail-fast: the first [`FcssError`] aborts the whole stylesheet.
//! Matching never fails, so nothing in this module is produced by the
//! matching engine.

use thiserror::Error;

/// Errors that can occur while reading or parsing a stylesheet.
///
/// # Examples
///
/// ```rust
/// use fcss::parser::parse_stylesheet;
/// use fcss::FcssError;
///
/// let err = parse_stylesheet("div { color }").unwrap_err();
/// match err {
///     FcssError::Syntax { expected, line, .. } => {
///         assert_eq!(expected, "':'");
///         assert_eq!(line, 1);
///     }
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FcssError {
    /// The character stream could not be split into tokens, e.g. an
    /// unterminated quoted string or comment.
    #[error("lexical error at line {line}: {message}")]
    Lexical { message: String, line: usize },

    /// A grammar production saw a token it did not expect.
    ///
    /// `expected` and `found` are human readable token descriptions such as
    /// `':'` or `identifier "color"`.
    #[error("syntax error at line {line}: expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        line: usize,
    },

    /// An I/O error occurred while reading a stylesheet source.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}

impl FcssError {
    /// The 1-based source line the error refers to, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            FcssError::Lexical { line, .. } | FcssError::Syntax { line, .. } => Some(*line),
            FcssError::Io(_) => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FcssError>;
