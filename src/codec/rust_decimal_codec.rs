// ============================================================================
// rust_decimal Codec
// rust_decimal::Decimal <-> Decimal128, through the application Decimal
// ============================================================================

use super::decimal_codec::DecimalCodec;
use super::errors::{CodecError, CodecResult};
use crate::interfaces::{TypedRef, TypedSlot, ValueCodec};
use crate::numeric::Decimal;
use crate::wire::{ValueReader, ValueWriter};
use std::any::type_name;

/// Largest scale rust_decimal supports.
const RUST_DECIMAL_MAX_SCALE: u32 = 28;

/// Codec for `rust_decimal::Decimal`.
///
/// Encoding always fits (28 digits, scale <= 28). Decoding fails with
/// `ExponentRange` when the value needs a scale above 28 and with
/// `PrecisionOverflow` when the coefficient exceeds 96 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustDecimalCodec {
    inner: DecimalCodec,
}

impl RustDecimalCodec {
    pub const fn new(inner: DecimalCodec) -> Self {
        Self { inner }
    }

    fn narrow(decimal: &Decimal) -> CodecResult<rust_decimal::Decimal> {
        decimal.to_rust_decimal().map_err(|_| {
            let normalized = decimal.normalized();
            if normalized.scale() > RUST_DECIMAL_MAX_SCALE {
                CodecError::ExponentRange {
                    exponent: -(normalized.scale() as i64),
                }
            } else {
                CodecError::PrecisionOverflow {
                    digits: normalized.significant_digits() as usize,
                }
            }
        })
    }
}

impl ValueCodec for RustDecimalCodec {
    fn encode_value(&self, writer: &mut dyn ValueWriter, value: TypedRef<'_>) -> CodecResult<()> {
        let decimal = value
            .downcast::<rust_decimal::Decimal>()
            .ok_or(CodecError::TypeMismatch {
                expected: type_name::<rust_decimal::Decimal>(),
                found: value.type_name(),
            })?;

        let wire = self.inner.to_decimal128(&Decimal::from(*decimal))?;
        writer.write_decimal128(wire)?;
        Ok(())
    }

    fn decode_value(&self, reader: &mut dyn ValueReader, mut slot: TypedSlot<'_>) -> CodecResult<()> {
        let found = slot.type_name();
        let target = slot
            .downcast_mut::<rust_decimal::Decimal>()
            .ok_or(CodecError::TypeMismatch {
                expected: type_name::<rust_decimal::Decimal>(),
                found,
            })?;

        let wire = reader.read_decimal128()?;
        let decimal = self.inner.from_decimal128(wire)?;
        *target = Self::narrow(&decimal)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "RustDecimalCodec"
    }
}
