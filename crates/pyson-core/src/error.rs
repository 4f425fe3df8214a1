//! Error types for literal parsing and JSON conversion.

use std::fmt;
use thiserror::Error;

/// Which collection form an [`PysonError::UnterminatedCollection`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// `[...]` or `(...)` — both parse to a sequence.
    Sequence,
    /// `{key: value, ...}`
    Mapping,
    /// `{elem, ...}`
    Set,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Sequence => f.write_str("list/tuple"),
            CollectionKind::Mapping => f.write_str("mapping"),
            CollectionKind::Set => f.write_str("set"),
        }
    }
}

/// Errors produced while parsing Python literal notation or serializing the
/// result. All parse errors are fatal: the grammar is deterministic, nothing
/// backtracks, and no partial tree is ever returned.
///
/// Offsets are byte offsets into the source text.
#[derive(Error, Debug)]
pub enum PysonError {
    /// A string literal's closing quote was not found before end of input.
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A collection's closing delimiter was not found before end of input.
    #[error("unterminated {kind} opened at offset {offset}")]
    UnterminatedCollection { kind: CollectionKind, offset: usize },

    /// A character appeared where the grammar required something else.
    #[error("expected {expected} but found {found:?} at offset {offset}")]
    UnexpectedCharacter {
        expected: String,
        found: char,
        offset: usize,
    },

    /// Input ended where a value was required.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },

    /// Nesting exceeded the parser's depth limit.
    #[error("nesting exceeds {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },

    /// The parsed tree could not be serialized to JSON text.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout pyson-core.
pub type Result<T> = std::result::Result<T, PysonError>;
