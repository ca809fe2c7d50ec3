//! Error types for parsing and value access.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors produced by the parser and by the fallible [`Value`](crate::Value)
/// mutation helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input was not valid JSON (or extended JSON, when comments are
    /// enabled). Includes the 1-based line number where parsing failed.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A value was used under the wrong tag, e.g. inserting a key into an
    /// array. This is caller misuse, not an input error.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// An existing array was indexed past its current length.
    #[error("array index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience alias used throughout litejson.
pub type Result<T> = std::result::Result<T, JsonError>;
