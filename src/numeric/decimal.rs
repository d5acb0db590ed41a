// ============================================================================
// Application Decimal
// Arbitrary-precision signed decimal with explicit scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::IntErrorKind;
use std::ops::Neg;
use std::str::FromStr;

/// Largest positive exponent that `from_str` folds into the coefficient.
const MAX_EXPONENT_FOLD: u32 = 1_000_000;

/// Arbitrary-precision decimal number.
///
/// Represents `(-1)^negative × coefficient × 10^(-scale)` where the
/// coefficient is unbounded and the scale is the number of fractional digits.
///
/// Values are immutable and construction never rounds. The sign is stored
/// separately from the coefficient, so negative zero (`-0.00`) is a distinct
/// state that survives formatting and parsing.
///
/// Equality and ordering are numeric: `1.50 == 1.5` and `-0 == 0`.
/// Use [`Decimal::is_identical`] to compare representations.
///
/// # Example
/// ```
/// use decimal128_codec::numeric::Decimal;
///
/// let price: Decimal = "123.456".parse().unwrap();
/// assert_eq!(price, Decimal::new(123456, 3));
/// assert_eq!(price.to_string(), "123.456");
/// ```
#[derive(Clone)]
pub struct Decimal {
    negative: bool,
    coefficient: BigUint,
    scale: u32,
}

/// Compute 10^n as a big integer
fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

fn digit_count(value: &BigUint) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.to_str_radix(10).len() as u64
    }
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a signed unscaled integer and a scale.
    ///
    /// `Decimal::new(-12345, 2)` is `-123.45`.
    pub fn new(unscaled: i128, scale: u32) -> Self {
        Self {
            negative: unscaled < 0,
            coefficient: BigUint::from(unscaled.unsigned_abs()),
            scale,
        }
    }

    /// Create from sign, magnitude and scale.
    ///
    /// A zero coefficient with `negative = true` yields negative zero.
    pub fn from_parts(negative: bool, coefficient: BigUint, scale: u32) -> Self {
        Self {
            negative,
            coefficient,
            scale,
        }
    }

    /// Positive zero with scale 0.
    pub fn zero() -> Self {
        Self::from_parts(false, BigUint::zero(), 0)
    }

    /// Negative zero with the given scale.
    pub fn negative_zero(scale: u32) -> Self {
        Self::from_parts(true, BigUint::zero(), scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unsigned coefficient (unscaled magnitude).
    pub fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// True for negative values and for negative zero.
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Number of digits in the coefficient (1 for zero).
    pub fn significant_digits(&self) -> u64 {
        digit_count(&self.coefficient)
    }

    /// Same value with trailing fractional zeros removed.
    ///
    /// The sign of zero is kept: `-0.000` normalizes to `-0`.
    pub fn normalized(&self) -> Self {
        if self.coefficient.is_zero() {
            return Self::from_parts(self.negative, BigUint::zero(), 0);
        }

        let ten = BigUint::from(10u32);
        let mut coefficient = self.coefficient.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = coefficient.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            coefficient = quotient;
            scale -= 1;
        }
        Self::from_parts(self.negative, coefficient, scale)
    }

    /// Sign, coefficient and exponent (`-scale`), the form a
    /// `coefficient × 10^exponent` encoding works with.
    pub fn to_exponent_parts(&self) -> (bool, &BigUint, i64) {
        (self.negative, &self.coefficient, -(self.scale as i64))
    }

    /// Representation equality: sign, coefficient and scale all match.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.negative == other.negative
            && self.scale == other.scale
            && self.coefficient == other.coefficient
    }

    /// -1, 0 or 1. Zero of either sign is 0.
    fn signum(&self) -> i8 {
        if self.coefficient.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Compare absolute values of two non-zero decimals.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        // Position of the most significant digit decides unless equal.
        let adjusted = |d: &Self| d.significant_digits() as i64 - d.scale as i64;
        match adjusted(self).cmp(&adjusted(other)) {
            Ordering::Equal => {},
            ordering => return ordering,
        }

        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.coefficient.cmp(&other.coefficient),
            Ordering::Less => {
                (&self.coefficient * pow10(other.scale - self.scale)).cmp(&other.coefficient)
            },
            Ordering::Greater => self
                .coefficient
                .cmp(&(&other.coefficient * pow10(self.scale - other.scale))),
        }
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to rust_decimal::Decimal.
    ///
    /// Trailing fractional zeros are dropped when the exact representation
    /// does not fit the 96-bit mantissa or the 28-digit scale limit.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value needs more digits than rust_decimal holds
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let build = |d: &Self| -> Option<rust_decimal::Decimal> {
            let magnitude = d.coefficient.to_i128()?;
            let signed = if d.negative { -magnitude } else { magnitude };
            let mut out = rust_decimal::Decimal::try_from_i128_with_scale(signed, d.scale).ok()?;
            if d.negative && magnitude == 0 {
                out.set_sign_negative(true);
            }
            Some(out)
        };

        build(self)
            .or_else(|| build(&self.normalized()))
            .ok_or(NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            ordering => return ordering,
        }

        match self.signum() {
            0 => Ordering::Equal,
            1 => self.cmp_magnitude(other),
            _ => other.cmp_magnitude(self),
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with numeric equality.
        let normalized = self.normalized();
        self.signum().hash(state);
        if !normalized.coefficient.is_zero() {
            normalized.coefficient.hash(state);
            normalized.scale.hash(state);
        }
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            negative: !self.negative,
            ..self
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value as i128, 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::new(value as i128, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(value as i128, 0)
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self {
            negative: value.is_sign_negative(),
            coefficient: BigUint::from(value.mantissa().unsigned_abs()),
            scale: value.scale(),
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for Decimal {
    /// Canonical form: sign, digits and a decimal point, never an exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.to_str_radix(10);
        let sign = if self.negative { "-" } else { "" };
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            return write!(f, "{}{}.{}", sign, int_part, frac_part);
        }

        // Leading zeros are written out: format widths stop at u16::MAX.
        f.write_str(sign)?;
        f.write_str("0.")?;
        for _ in 0..scale - digits.len() {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn parse_exponent(s: &str) -> NumericResult<i64> {
    s.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumericError::ExponentOverflow,
        _ => NumericError::InvalidInput,
    })
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse from a decimal string, optionally in exponent notation.
    ///
    /// # Examples
    /// - "123.456" -> coefficient 123456, scale 3
    /// - "-0.00" -> negative zero, scale 2
    /// - "1.5E-3" -> coefficient 15, scale 4
    /// - "1.2E+3" -> coefficient 1200, scale 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
            None => (body, 0),
        };

        let (int_digits, frac_digits) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(NumericError::InvalidInput);
        }

        let coefficient: BigUint = format!("{}{}", int_digits, frac_digits)
            .parse()
            .map_err(|_| NumericError::InvalidInput)?;

        let scale = (frac_digits.len() as i64)
            .checked_sub(exponent)
            .ok_or(NumericError::ExponentOverflow)?;

        if scale >= 0 {
            let scale = u32::try_from(scale).map_err(|_| NumericError::ExponentOverflow)?;
            return Ok(Self::from_parts(negative, coefficient, scale));
        }

        // Positive net exponent: fold it into the coefficient.
        if coefficient.is_zero() {
            return Ok(Self::from_parts(negative, coefficient, 0));
        }
        let shift = u32::try_from(-scale)
            .ok()
            .filter(|shift| *shift <= MAX_EXPONENT_FOLD)
            .ok_or(NumericError::ExponentOverflow)?;
        Ok(Self::from_parts(negative, coefficient * pow10(shift), 0))
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
