// ============================================================================
// Value Reader / Writer Interfaces
// Element-level primitives the codecs write through and read from
// ============================================================================

use super::{Decimal128, ElementType, WireResult};
use chrono::{DateTime, Utc};

/// Sink for typed elements.
///
/// Codecs never touch bytes directly; they hand finished values to a
/// writer, which owns the layout.
pub trait ValueWriter {
    fn write_decimal128(&mut self, value: Decimal128) -> WireResult<()>;

    fn write_string(&mut self, value: &str) -> WireResult<()>;

    /// UTC datetime with millisecond precision
    fn write_datetime(&mut self, value: DateTime<Utc>) -> WireResult<()>;

    fn write_int64(&mut self, value: i64) -> WireResult<()>;

    fn write_null(&mut self) -> WireResult<()>;
}

/// Source of typed elements.
///
/// Every `read_*` call fails with `UnexpectedElement` without consuming input
/// when the next element has a different type.
pub trait ValueReader {
    /// Type of the next element, without consuming it
    fn peek_type(&self) -> WireResult<ElementType>;

    fn read_decimal128(&mut self) -> WireResult<Decimal128>;

    fn read_string(&mut self) -> WireResult<String>;

    fn read_datetime(&mut self) -> WireResult<DateTime<Utc>>;

    fn read_int64(&mut self) -> WireResult<i64>;

    fn read_null(&mut self) -> WireResult<()>;
}
