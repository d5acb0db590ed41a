// ============================================================================
// Codec Errors
// Error taxonomy reported by codecs and the registry to their caller
// ============================================================================

use crate::wire::{Decimal128, WireError};
use std::fmt;

/// Errors returned by encode/decode. None of them is recovered inside a codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Runtime type of the value or slot is not the codec's type
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Value has more significant digits than the target holds
    PrecisionOverflow { digits: usize },
    /// Value's exponent falls outside the target's range
    ExponentRange { exponent: i64 },
    /// Decoded NaN or Infinity
    SpecialValue { value: Decimal128 },
    /// Canonical string did not parse on the other side
    Parse { text: String, reason: String },
    /// No codec registered for the type
    NoCodec { type_name: &'static str },
    /// Reader or writer failure
    Wire(WireError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            },
            CodecError::PrecisionOverflow { digits } => write!(
                f,
                "precision overflow: {} significant digits cannot be represented",
                digits
            ),
            CodecError::ExponentRange { exponent } => {
                write!(f, "exponent out of range: {} cannot be represented", exponent)
            },
            CodecError::SpecialValue { value } => {
                write!(f, "special value {} is not a supported decimal", value)
            },
            CodecError::Parse { text, reason } => {
                write!(f, "could not convert {:?}: {}", text, reason)
            },
            CodecError::NoCodec { type_name } => {
                write!(f, "no codec registered for {}", type_name)
            },
            CodecError::Wire(err) => write!(f, "wire error: {}", err),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Wire(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WireError> for CodecError {
    fn from(err: WireError) -> Self {
        CodecError::Wire(err)
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
