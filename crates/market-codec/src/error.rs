//! Errors raised by the writer and reader.

use std::fmt;

/// Failure of a single encode or decode operation.
///
/// Every variant is fatal to the operation that raised it: the codec
/// never retries or falls back, a reader never returns a partial value,
/// and a writer that returned an error holds a partially-written buffer
/// that must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A read needed more bytes than remain before the buffer end.
    Truncated { needed: usize, remaining: usize },

    /// Text bytes were not valid UTF-8.
    InvalidUtf8,

    /// A value does not fit the wire width of the named field kind.
    RangeExceeded(&'static str),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Truncated { needed, remaining } => write!(
                f,
                "buffer truncated: needed {} more bytes, {} remaining",
                needed, remaining
            ),
            CodecError::InvalidUtf8 => write!(f, "text field is not valid UTF-8"),
            CodecError::RangeExceeded(what) => write!(f, "{} exceeds wire range", what),
        }
    }
}

impl std::error::Error for CodecError {}
