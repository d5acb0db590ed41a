// ============================================================================
// Decimal128
// IEEE 754-2008 128-bit decimal, binary integer significand encoding
// ============================================================================

use super::errors::{WireError, WireResult};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Maximum number of significant digits in the coefficient.
pub const MAX_DIGITS: usize = 34;

/// Smallest unbiased exponent.
pub const MIN_EXPONENT: i32 = -6176;

/// Largest unbiased exponent.
pub const MAX_EXPONENT: i32 = 6111;

const EXPONENT_BIAS: i32 = 6176;
const MAX_COEFFICIENT: u128 = 10u128.pow(MAX_DIGITS as u32) - 1;
const COEFFICIENT_MASK: u128 = (1 << 113) - 1;
const SIGN_BIT: u128 = 1 << 127;

/// 128-bit decimal as stored by the document format.
///
/// Layout (bit 127 first): sign, 14-bit biased exponent, 113-bit
/// coefficient. When the two bits after the sign are `11` the value is
/// either a special (NaN, ±Infinity) or a non-canonical encoding, which
/// reads as zero. On the wire the 16 bytes are little-endian.
///
/// Equality is bitwise: `1.0` and `1.00` are different encodings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    bits: u128,
}

/// Decoded view of a [`Decimal128`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimal128Kind {
    Finite {
        negative: bool,
        coefficient: u128,
        exponent: i32,
    },
    Infinity {
        negative: bool,
    },
    NaN,
}

impl Decimal128 {
    pub const NAN: Self = Self {
        bits: 0x7C00u128 << 112,
    };

    pub const INFINITY: Self = Self {
        bits: 0x7800u128 << 112,
    };

    pub const NEG_INFINITY: Self = Self {
        bits: 0xF800u128 << 112,
    };

    /// Positive zero with exponent 0.
    pub const ZERO: Self = Self {
        bits: (EXPONENT_BIAS as u128) << 113,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from the 16 little-endian wire bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self {
            bits: u128::from_le_bytes(bytes),
        }
    }

    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    /// Build a finite value from sign, coefficient and unbiased exponent.
    ///
    /// # Errors
    /// - `PrecisionOverflow` if the coefficient has more than 34 digits
    /// - `ExponentOutOfRange` if the exponent is outside -6176..=6111
    pub fn from_parts(negative: bool, coefficient: u128, exponent: i32) -> WireResult<Self> {
        if coefficient > MAX_COEFFICIENT {
            return Err(WireError::PrecisionOverflow {
                digits: coefficient.to_string().len(),
            });
        }
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(WireError::ExponentOutOfRange {
                exponent: exponent as i64,
            });
        }

        let sign = if negative { SIGN_BIT } else { 0 };
        let biased = (exponent + EXPONENT_BIAS) as u128;
        Ok(Self {
            bits: sign | (biased << 113) | coefficient,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub const fn to_bytes(self) -> [u8; 16] {
        self.bits.to_le_bytes()
    }

    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    /// Split into sign, coefficient and exponent, or identify a special value.
    pub fn classify(self) -> Decimal128Kind {
        let negative = self.bits & SIGN_BIT != 0;

        match (self.bits >> 122) & 0x1F {
            0x1F => return Decimal128Kind::NaN,
            0x1E => return Decimal128Kind::Infinity { negative },
            _ => {},
        }

        let (biased, coefficient) = if (self.bits >> 125) & 0b11 == 0b11 {
            // Implicit 100 prefix puts the coefficient above 10^34 - 1.
            ((self.bits >> 111) & 0x3FFF, 0)
        } else {
            let coefficient = self.bits & COEFFICIENT_MASK;
            let coefficient = if coefficient > MAX_COEFFICIENT {
                0
            } else {
                coefficient
            };
            ((self.bits >> 113) & 0x3FFF, coefficient)
        };

        Decimal128Kind::Finite {
            negative,
            coefficient,
            exponent: biased as i32 - EXPONENT_BIAS,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self.classify(), Decimal128Kind::NaN)
    }

    pub fn is_infinite(self) -> bool {
        matches!(self.classify(), Decimal128Kind::Infinity { .. })
    }

    pub fn is_finite(self) -> bool {
        matches!(self.classify(), Decimal128Kind::Finite { .. })
    }

    pub fn is_sign_negative(self) -> bool {
        self.bits & SIGN_BIT != 0
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse without moving digits between coefficient and exponent.
    ///
    /// Unlike [`FromStr`], trailing zeros are never stripped, the
    /// coefficient is never zero-padded and the exponent of a zero is never
    /// clamped. Any text that would need one of those adjustments fails.
    pub fn parse_exact(text: &str) -> WireResult<Self> {
        parse(text, false)
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn parse_exponent(text: &str) -> WireResult<i64> {
    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => WireError::ExponentOutOfRange { exponent: i64::MAX },
        IntErrorKind::NegOverflow => WireError::ExponentOutOfRange { exponent: i64::MIN },
        _ => WireError::Malformed,
    })
}

fn checked_exponent(exponent: i64) -> WireResult<i32> {
    if exponent < MIN_EXPONENT as i64 || exponent > MAX_EXPONENT as i64 {
        return Err(WireError::ExponentOutOfRange { exponent });
    }
    Ok(exponent as i32)
}

fn trailing_zeros(digits: &str) -> usize {
    digits.bytes().rev().take_while(|b| *b == b'0').count()
}

/// Parse decimal text. With `fold` set, digits move between coefficient and
/// exponent when that keeps the value exact; nothing is ever rounded.
fn parse(text: &str, fold: bool) -> WireResult<Decimal128> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body.eq_ignore_ascii_case("nan") {
        let sign = if negative { SIGN_BIT } else { 0 };
        return Ok(Decimal128::from_bits(Decimal128::NAN.bits | sign));
    }
    if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        return Ok(if negative {
            Decimal128::NEG_INFINITY
        } else {
            Decimal128::INFINITY
        });
    }

    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
        None => (body, 0),
    };

    let (int_digits, frac_digits) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(WireError::Malformed);
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return Err(WireError::Malformed);
    }

    let mut exponent = exponent
        .checked_sub(frac_digits.len() as i64)
        .ok_or(WireError::ExponentOutOfRange { exponent })?;

    let digits = format!("{}{}", int_digits, frac_digits);
    let significant = digits.trim_start_matches('0');

    if significant.is_empty() {
        if fold {
            exponent = exponent.clamp(MIN_EXPONENT as i64, MAX_EXPONENT as i64);
        }
        return Decimal128::from_parts(negative, 0, checked_exponent(exponent)?);
    }

    let mut coefficient = significant.to_string();

    if coefficient.len() > MAX_DIGITS {
        let excess = coefficient.len() - MAX_DIGITS;
        let zeros = trailing_zeros(&coefficient);
        if !fold || excess > zeros {
            let digits = if fold {
                coefficient.len() - zeros
            } else {
                coefficient.len()
            };
            return Err(WireError::PrecisionOverflow { digits });
        }
        coefficient.truncate(coefficient.len() - excess);
        exponent += excess as i64;
    }

    if fold && exponent > MAX_EXPONENT as i64 {
        let pad = exponent - MAX_EXPONENT as i64;
        if pad <= (MAX_DIGITS - coefficient.len()) as i64 {
            coefficient.push_str(&"0".repeat(pad as usize));
            exponent = MAX_EXPONENT as i64;
        }
    }

    if fold && exponent < MIN_EXPONENT as i64 {
        let strip = MIN_EXPONENT as i64 - exponent;
        if strip <= trailing_zeros(&coefficient) as i64 {
            coefficient.truncate(coefficient.len() - strip as usize);
            exponent = MIN_EXPONENT as i64;
        }
    }

    let exponent = checked_exponent(exponent)?;
    let coefficient: u128 = coefficient.parse().map_err(|_| WireError::Malformed)?;
    Decimal128::from_parts(negative, coefficient, exponent)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal128 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Decimal128 {
    type Err = WireError;

    /// Parse decimal text, folding digits into the exponent when lossless.
    ///
    /// # Examples
    /// - "123.456" -> coefficient 123456, exponent -3
    /// - "1000" followed by 40 zeros -> coefficient 1000..., exponent raised
    /// - "NaN", "-Infinity" -> special values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, true)
    }
}

impl fmt::Display for Decimal128 {
    /// Scientific string form: plain notation while the exponent is not
    /// positive and the adjusted exponent is at least -6, `d.dddE±n` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, coefficient, exponent) = match self.classify() {
            Decimal128Kind::NaN => return f.write_str("NaN"),
            Decimal128Kind::Infinity { negative: false } => return f.write_str("Infinity"),
            Decimal128Kind::Infinity { negative: true } => return f.write_str("-Infinity"),
            Decimal128Kind::Finite {
                negative,
                coefficient,
                exponent,
            } => (negative, coefficient, exponent as i64),
        };

        if negative {
            f.write_str("-")?;
        }

        let digits = coefficient.to_string();
        let adjusted = exponent + digits.len() as i64 - 1;

        if exponent <= 0 && adjusted >= -6 {
            if exponent == 0 {
                return f.write_str(&digits);
            }
            let frac_len = (-exponent) as usize;
            if digits.len() > frac_len {
                let (int_part, frac_part) = digits.split_at(digits.len() - frac_len);
                write!(f, "{}.{}", int_part, frac_part)
            } else {
                write!(f, "0.{}{}", "0".repeat(frac_len - digits.len()), digits)
            }
        } else {
            let (first, rest) = digits.split_at(1);
            f.write_str(first)?;
            if !rest.is_empty() {
                write!(f, ".{}", rest)?;
            }
            let sign = if adjusted >= 0 { "+" } else { "" };
            write!(f, "E{}{}", sign, adjusted)
        }
    }
}

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal128({}, bits={:#034x})", self, self.bits)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal128 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
