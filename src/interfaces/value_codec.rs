// ============================================================================
// Value Codec Interface
// Defines the contract for type-directed encode/decode plug-ins
// ============================================================================

use super::{TypedRef, TypedSlot};
use crate::codec::CodecResult;
use crate::wire::{ValueReader, ValueWriter};

/// Codec plugged into a [`Registry`](crate::codec::Registry) for one type.
///
/// The registry hands over type-erased values; implementations must check
/// the runtime tag first and fail with `TypeMismatch` before reading or
/// writing anything.
///
/// Implementations: DecimalCodec, RustDecimalCodec
pub trait ValueCodec: Send + Sync {
    /// Encode `value` through `writer`
    fn encode_value(&self, writer: &mut dyn ValueWriter, value: TypedRef<'_>) -> CodecResult<()>;

    /// Decode the next element from `reader` into `slot`
    fn decode_value(&self, reader: &mut dyn ValueReader, slot: TypedSlot<'_>) -> CodecResult<()>;

    /// Get the codec name for logging
    fn name(&self) -> &str;
}
