// ============================================================================
// Numeric Module
// Arbitrary-precision decimal used by application code
// ============================================================================
//
// This module provides:
// - Decimal: sign + unbounded coefficient + non-negative scale
// - NumericError: Error types for parsing and conversion
//
// Design principles:
// - No floating-point operations
// - Construction never rounds
// - Negative zero is a distinct, preserved state
// - Canonical string form never uses exponent notation

mod decimal;
mod errors;

pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};
