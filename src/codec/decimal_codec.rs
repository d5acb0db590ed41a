// ============================================================================
// Decimal Codec
// Application Decimal <-> Decimal128, mediated by canonical decimal strings
// ============================================================================

use super::errors::{CodecError, CodecResult};
use crate::interfaces::{TypedRef, TypedSlot, ValueCodec};
use crate::numeric::Decimal;
use crate::wire::{Decimal128, ValueReader, ValueWriter, WireError, MAX_DIGITS, MIN_EXPONENT};
use std::any::type_name;

/// Stateless codec between [`Decimal`] and [`Decimal128`].
///
/// Encode renders the decimal's canonical string and parses it as a
/// Decimal128; decode does the reverse. Neither direction rounds:
/// - more than 34 significant digits -> `PrecisionOverflow`
/// - exponent outside -6176..=6111 -> `ExponentRange`
/// - NaN / Infinity on decode -> `SpecialValue`
///
/// By default digits are folded between coefficient and exponent when that
/// is exact (`1` followed by 40 zeros encodes as `1E+40`). [`DecimalCodec::strict`]
/// turns folding off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalCodec {
    exponent_folding: bool,
}

impl DecimalCodec {
    pub const fn new() -> Self {
        Self {
            exponent_folding: true,
        }
    }

    /// Reject values that only fit after moving digits into the exponent.
    pub const fn strict() -> Self {
        Self {
            exponent_folding: false,
        }
    }

    pub const fn is_strict(&self) -> bool {
        !self.exponent_folding
    }

    /// Convert to the wire representation.
    ///
    /// # Errors
    /// - `PrecisionOverflow` if more than 34 significant digits remain
    /// - `ExponentRange` if the exponent cannot be brought into range
    /// - `Parse` if the canonical string is rejected for any other reason
    pub fn to_decimal128(&self, value: &Decimal) -> CodecResult<Decimal128> {
        if let Some(outcome) = self.below_exponent_range(value) {
            return outcome;
        }

        let canonical = value.to_string();
        let parsed = if self.exponent_folding {
            canonical.parse::<Decimal128>()
        } else {
            Decimal128::parse_exact(&canonical)
        };

        parsed.map_err(|err| match err {
            WireError::PrecisionOverflow { digits } => CodecError::PrecisionOverflow { digits },
            WireError::ExponentOutOfRange { exponent } => CodecError::ExponentRange { exponent },
            other => CodecError::Parse {
                text: canonical.clone(),
                reason: other.to_string(),
            },
        })
    }

    /// Decide values whose scale alone puts them below the smallest exponent,
    /// without rendering `scale` fractional digits. Gives the same result the
    /// string path would.
    fn below_exponent_range(&self, value: &Decimal) -> Option<CodecResult<Decimal128>> {
        let (negative, _, exponent) = value.to_exponent_parts();
        if exponent >= MIN_EXPONENT as i64 {
            return None;
        }

        if value.is_zero() {
            return Some(if self.exponent_folding {
                Decimal128::from_parts(negative, 0, MIN_EXPONENT).map_err(CodecError::from)
            } else {
                Err(CodecError::ExponentRange { exponent })
            });
        }

        let digits = value.significant_digits() as usize;
        if !self.exponent_folding {
            return Some(Err(if digits > MAX_DIGITS {
                CodecError::PrecisionOverflow { digits }
            } else {
                CodecError::ExponentRange { exponent }
            }));
        }

        // Trailing zeros may still lift the exponent into range.
        let normalized = value.normalized();
        let (_, _, normalized_exponent) = normalized.to_exponent_parts();
        if normalized_exponent >= MIN_EXPONENT as i64 {
            return None;
        }

        let significant = normalized.significant_digits() as usize;
        Some(Err(if significant > MAX_DIGITS {
            CodecError::PrecisionOverflow {
                digits: significant,
            }
        } else {
            CodecError::ExponentRange {
                exponent: exponent + digits.saturating_sub(MAX_DIGITS) as i64,
            }
        }))
    }

    /// Convert from the wire representation.
    ///
    /// # Errors
    /// - `SpecialValue` for NaN and ±Infinity
    /// - `Parse` if the wire string is not accepted as a Decimal
    pub fn from_decimal128(&self, value: Decimal128) -> CodecResult<Decimal> {
        if !value.is_finite() {
            return Err(CodecError::SpecialValue { value });
        }

        let canonical = value.to_string();
        match canonical.parse::<Decimal>() {
            Ok(decimal) => Ok(decimal),
            Err(err) => Err(CodecError::Parse {
                text: canonical,
                reason: err.to_string(),
            }),
        }
    }
}

impl Default for DecimalCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCodec for DecimalCodec {
    fn encode_value(&self, writer: &mut dyn ValueWriter, value: TypedRef<'_>) -> CodecResult<()> {
        let decimal = value
            .downcast::<Decimal>()
            .ok_or(CodecError::TypeMismatch {
                expected: type_name::<Decimal>(),
                found: value.type_name(),
            })?;

        let wire = self.to_decimal128(decimal)?;
        writer.write_decimal128(wire)?;
        Ok(())
    }

    fn decode_value(&self, reader: &mut dyn ValueReader, mut slot: TypedSlot<'_>) -> CodecResult<()> {
        let found = slot.type_name();
        let target = slot
            .downcast_mut::<Decimal>()
            .ok_or(CodecError::TypeMismatch {
                expected: type_name::<Decimal>(),
                found,
            })?;

        let wire = reader.read_decimal128()?;
        *target = self.from_decimal128(wire)?;
        Ok(())
    }

    fn name(&self) -> &str {
        if self.exponent_folding {
            "DecimalCodec"
        } else {
            "DecimalCodec(strict)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{BinaryReader, BinaryWriter, Decimal128Kind};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn encode(codec: &DecimalCodec, value: &Decimal) -> CodecResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        codec.encode_value(&mut writer, TypedRef::of(value))?;
        Ok(writer.into_bytes())
    }

    fn decode(codec: &DecimalCodec, bytes: &[u8]) -> CodecResult<Decimal> {
        let mut reader = BinaryReader::new(bytes);
        let mut out = Decimal::default();
        codec.decode_value(&mut reader, TypedSlot::of(&mut out))?;
        Ok(out)
    }

    #[test]
    fn test_round_trip() {
        let codec = DecimalCodec::new();
        let value = Decimal::new(123456, 3);

        let bytes = encode(&codec, &value).unwrap();
        let back = decode(&codec, &bytes).unwrap();

        assert_eq!(back, value);
        assert!(back.is_identical(&value));
    }

    #[test]
    fn test_encoded_representation() {
        let wire = DecimalCodec::new().to_decimal128(&dec("-123.456")).unwrap();
        assert_eq!(
            wire.classify(),
            Decimal128Kind::Finite {
                negative: true,
                coefficient: 123456,
                exponent: -3
            }
        );
    }

    #[test]
    fn test_negative_zero_preserved() {
        let codec = DecimalCodec::new();
        let value = dec("-0.00");

        let bytes = encode(&codec, &value).unwrap();
        let back = decode(&codec, &bytes).unwrap();

        assert!(back.is_zero());
        assert!(back.is_sign_negative());
        assert_eq!(back.to_string(), "-0.00");
    }

    #[test]
    fn test_precision_overflow() {
        let codec = DecimalCodec::new();
        let value = dec(&format!("1{}", "9".repeat(34)));

        assert_eq!(
            codec.to_decimal128(&value),
            Err(CodecError::PrecisionOverflow { digits: 35 })
        );
    }

    #[test]
    fn test_thirty_four_digits_fit() {
        let codec = DecimalCodec::new();
        let value = dec(&format!("0.{}", "9".repeat(34)));

        let back = codec
            .from_decimal128(codec.to_decimal128(&value).unwrap())
            .unwrap();
        assert!(back.is_identical(&value));
    }

    #[test]
    fn test_exponent_range() {
        let codec = DecimalCodec::new();
        let tiny = Decimal::new(1, 6177);

        assert_eq!(
            codec.to_decimal128(&tiny),
            Err(CodecError::ExponentRange { exponent: -6177 })
        );
    }

    #[test]
    fn test_exponent_range_large_scale() {
        for codec in [DecimalCodec::new(), DecimalCodec::strict()] {
            assert_eq!(
                codec.to_decimal128(&Decimal::new(1, 70_000)),
                Err(CodecError::ExponentRange { exponent: -70_000 })
            );
            assert_eq!(
                codec.to_decimal128(&dec("-4.5e-1000000000")),
                Err(CodecError::ExponentRange {
                    exponent: -1_000_000_001
                })
            );
        }

        let wide_digits = format!("1{}", "3".repeat(40));
        let wide = Decimal::from_parts(false, wide_digits.parse().unwrap(), 70_000);
        assert_eq!(
            DecimalCodec::new().to_decimal128(&wide),
            Err(CodecError::PrecisionOverflow { digits: 41 })
        );
    }

    #[test]
    fn test_large_scale_zero_clamps() {
        let zero = Decimal::negative_zero(u32::MAX);

        let wire = DecimalCodec::new().to_decimal128(&zero).unwrap();
        assert_eq!(
            wire.classify(),
            Decimal128Kind::Finite {
                negative: true,
                coefficient: 0,
                exponent: -6176
            }
        );
        assert_eq!(
            DecimalCodec::strict().to_decimal128(&zero),
            Err(CodecError::ExponentRange {
                exponent: -(u32::MAX as i64)
            })
        );
    }

    #[test]
    fn test_large_scale_trailing_zeros_still_fold() {
        let codec = DecimalCodec::new();
        // 1.5 written with 10_000 fractional digits
        let value = Decimal::from_parts(
            false,
            format!("15{}", "0".repeat(9_999)).parse().unwrap(),
            10_000,
        );

        let back = codec
            .from_decimal128(codec.to_decimal128(&value).unwrap())
            .unwrap();
        assert_eq!(back, dec("1.5"));
    }

    #[test]
    fn test_upper_exponent_boundary() {
        let codec = DecimalCodec::new();

        let largest_power = dec(&format!("1{}", "0".repeat(6144)));
        let wire = codec.to_decimal128(&largest_power).unwrap();
        assert_eq!(wire.to_string(), format!("1.{}E+6144", "0".repeat(33)));
        assert!(codec.from_decimal128(wire).unwrap().is_identical(&largest_power));

        let too_large = dec(&format!("1{}", "0".repeat(6145)));
        assert_eq!(
            codec.to_decimal128(&too_large),
            Err(CodecError::ExponentRange { exponent: 6112 })
        );

        let max = dec(&format!("{}{}", "9".repeat(34), "0".repeat(6111)));
        let wire = codec.to_decimal128(&max).unwrap();
        assert_eq!(
            wire.classify(),
            Decimal128Kind::Finite {
                negative: false,
                coefficient: 10u128.pow(34) - 1,
                exponent: 6111
            }
        );
        assert!(codec.from_decimal128(wire).unwrap().is_identical(&max));
    }

    #[test]
    fn test_trailing_zeros_fold_into_exponent() {
        let codec = DecimalCodec::new();
        let value = dec(&format!("5{}", "0".repeat(40)));

        let wire = codec.to_decimal128(&value).unwrap();
        let back = codec.from_decimal128(wire).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_strict_rejects_folding() {
        let strict = DecimalCodec::strict();
        assert!(strict.is_strict());

        let wide = dec(&format!("5{}", "0".repeat(40)));
        assert_eq!(
            strict.to_decimal128(&wide),
            Err(CodecError::PrecisionOverflow { digits: 41 })
        );

        let deep_zero = Decimal::new(0, 7000);
        assert_eq!(
            strict.to_decimal128(&deep_zero),
            Err(CodecError::ExponentRange { exponent: -7000 })
        );
        assert!(DecimalCodec::new().to_decimal128(&deep_zero).is_ok());
    }

    #[test]
    fn test_special_values_rejected() {
        let codec = DecimalCodec::new();
        for special in [Decimal128::NAN, Decimal128::INFINITY, Decimal128::NEG_INFINITY] {
            assert_eq!(
                codec.from_decimal128(special),
                Err(CodecError::SpecialValue { value: special })
            );
        }
    }

    #[test]
    fn test_decode_nan_from_wire() {
        let mut writer = BinaryWriter::new();
        writer.write_decimal128(Decimal128::NAN).unwrap();

        let mut out = dec("7.5");
        let mut reader = BinaryReader::new(writer.as_bytes());
        let result = DecimalCodec::new().decode_value(&mut reader, TypedSlot::of(&mut out));

        assert_eq!(
            result,
            Err(CodecError::SpecialValue {
                value: Decimal128::NAN
            })
        );
        assert!(out.is_identical(&dec("7.5")));
    }

    #[test]
    fn test_encode_type_mismatch_writes_nothing() {
        let mut writer = BinaryWriter::new();
        let result = DecimalCodec::new().encode_value(&mut writer, TypedRef::of(&42i64));

        assert_eq!(
            result,
            Err(CodecError::TypeMismatch {
                expected: type_name::<Decimal>(),
                found: "i64"
            })
        );
        assert!(writer.is_empty());
    }

    #[test]
    fn test_decode_type_mismatch_reads_nothing() {
        let bytes = encode(&DecimalCodec::new(), &dec("1.5")).unwrap();
        let mut reader = BinaryReader::new(&bytes);
        let mut wrong = 0i64;

        let result = DecimalCodec::new().decode_value(&mut reader, TypedSlot::of(&mut wrong));
        assert!(matches!(result, Err(CodecError::TypeMismatch { found: "i64", .. })));
        assert_eq!(reader.remaining(), bytes.len());
    }

    #[test]
    fn test_decode_wrong_element_is_wire_error() {
        let mut writer = BinaryWriter::new();
        writer.write_string("1.5").unwrap();

        let result = decode(&DecimalCodec::new(), writer.as_bytes());
        assert!(matches!(
            result,
            Err(CodecError::Wire(WireError::UnexpectedElement { .. }))
        ));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let codec = DecimalCodec::new();
        let bytes = encode(&codec, &dec("98765.4321")).unwrap();

        let first = decode(&codec, &bytes).unwrap();
        let second = decode(&codec, &bytes).unwrap();
        assert!(first.is_identical(&second));
    }

    #[test]
    fn test_decode_scientific_wire_values() {
        let codec = DecimalCodec::new();

        let small = codec.from_decimal128("1.5E-10".parse().unwrap()).unwrap();
        assert!(small.is_identical(&Decimal::new(15, 11)));

        let large = codec.from_decimal128("1.5E+3".parse().unwrap()).unwrap();
        assert!(large.is_identical(&Decimal::new(1500, 0)));
    }
}
