// ============================================================================
// Wire Errors
// Error types for the 128-bit decimal format and the binary reader/writer
// ============================================================================

use super::ElementType;
use std::fmt;

/// Errors raised by the wire layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireError {
    /// Value needs more than 34 significant digits
    PrecisionOverflow { digits: usize },
    /// Exponent cannot be brought into -6176..=6111 without losing digits
    ExponentOutOfRange { exponent: i64 },
    /// Text is not a decimal number
    Malformed,
    /// Reader found a different element than the one requested
    UnexpectedElement { expected: ElementType, found: u8 },
    /// Type byte does not name any known element
    UnknownElement { found: u8 },
    /// Input ended before the element was complete
    Truncated { needed: usize, remaining: usize },
    /// String payload is not NUL-terminated UTF-8
    InvalidString,
    /// Milliseconds since epoch outside the representable date range
    InvalidDateTime { millis: i64 },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::PrecisionOverflow { digits } => write!(
                f,
                "precision overflow: {} significant digits exceed the 34-digit decimal128 coefficient",
                digits
            ),
            WireError::ExponentOutOfRange { exponent } => write!(
                f,
                "exponent out of range: {} is outside the decimal128 range -6176..=6111",
                exponent
            ),
            WireError::Malformed => write!(f, "malformed decimal string"),
            WireError::UnexpectedElement { expected, found } => write!(
                f,
                "unexpected element: expected {:?}, found type byte {:#04x}",
                expected, found
            ),
            WireError::UnknownElement { found } => {
                write!(f, "unknown element type byte {:#04x}", found)
            },
            WireError::Truncated { needed, remaining } => write!(
                f,
                "truncated input: needed {} bytes, {} remaining",
                needed, remaining
            ),
            WireError::InvalidString => write!(f, "invalid string payload"),
            WireError::InvalidDateTime { millis } => {
                write!(f, "invalid datetime: {} ms since epoch is out of range", millis)
            },
        }
    }
}

impl std::error::Error for WireError {}

/// Result type alias for wire operations
pub type WireResult<T> = Result<T, WireError>;
