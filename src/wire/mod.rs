// ============================================================================
// Wire Module
// 128-bit decimal interchange format and element-level reader/writer
// ============================================================================
//
// This module provides:
// - Decimal128: IEEE 754-2008 decimal128 (BID), 16 bytes little-endian
// - ElementType: type byte preceding each element
// - ValueWriter / ValueReader: element primitives the codecs go through
// - BinaryWriter / BinaryReader: in-memory implementation of both
// - WireError: Error types for parsing and reading

mod binary;
mod decimal128;
mod element;
mod errors;
mod value_io;

pub use binary::{BinaryReader, BinaryWriter};
pub use decimal128::{Decimal128, Decimal128Kind, MAX_DIGITS, MAX_EXPONENT, MIN_EXPONENT};
pub use element::ElementType;
pub use errors::{WireError, WireResult};
pub use value_io::{ValueReader, ValueWriter};
