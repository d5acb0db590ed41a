// ============================================================================
// Numeric Errors
// Error types for application decimal construction and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while building or converting a [`Decimal`](super::Decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a decimal number
    InvalidInput,
    /// Exponent in the input cannot be folded into a non-negative u32 scale
    ExponentOverflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ExponentOverflow => {
                write!(f, "exponent overflow: exponent cannot be represented as a scale")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
        assert_eq!(
            NumericError::PrecisionLoss.to_string(),
            "precision loss: conversion would lose significant digits"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidInput, NumericError::InvalidInput);
        assert_ne!(NumericError::InvalidInput, NumericError::ExponentOverflow);
    }
}
