// ============================================================================
// Decimal Value
// Canonical sign-magnitude decimal with exact addition
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::literal::Literal;
use super::magnitude::{add_magnitude, compare_magnitude, sub_magnitude, Magnitude};
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest scale `rust_decimal::Decimal` supports.
const RUST_DECIMAL_MAX_SCALE: usize = 28;

/// Sign of a decimal value. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Arbitrary-precision decimal number in canonical form.
///
/// Every value satisfies:
/// - integer digits are non-empty and have no leading zero unless the integer
///   part is exactly 0
/// - fraction digits have no trailing zero (empty means no fractional part)
/// - zero is always `Sign::Positive`
///
/// Because the form is canonical, derived equality and hashing are numeric
/// equality and hashing. Values are immutable; every operation returns a new
/// value.
///
/// # Example
/// ```
/// use exact_decimal::numeric::DecimalValue;
///
/// let a: DecimalValue = "+0001.0".parse().unwrap();
/// let b: DecimalValue = "-0001.005".parse().unwrap();
/// assert_eq!(a.to_string(), "1");
/// assert_eq!(b.to_string(), "-1.005");
/// assert_eq!((a + b).to_string(), "-0.005");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    sign: Sign,
    magnitude: Magnitude,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::zero(),
        }
    }

    /// Only constructor for computed values; forces zero to be positive.
    fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    /// Canonicalize a validated literal.
    ///
    /// Leading integer zeros are stripped down to a single digit, trailing
    /// fraction zeros are stripped, and a zero result loses its sign.
    pub fn normalize(literal: Literal<'_>) -> Self {
        let magnitude = Magnitude::from_ascii(
            literal.integer_digits().as_bytes(),
            literal.fraction_digits().as_bytes(),
        );
        Self::from_parts(literal.sign(), magnitude)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digit values (0-9), most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        self.magnitude.integer_digits()
    }

    /// Fraction digit values (0-9), most significant first.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        self.magnitude.fraction_digits()
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> usize {
        self.magnitude.fraction_digits().len()
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Same magnitude, positive sign.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Flip the sign. Zero stays positive.
    pub fn negate(&self) -> Self {
        Self::from_parts(self.sign.flip(), self.magnitude.clone())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact signed addition.
    ///
    /// Like signs add magnitudes and keep the sign. Unlike signs subtract the
    /// smaller magnitude from the larger and take the larger operand's sign.
    pub fn exact_add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        if self.sign == other.sign {
            return Self::from_parts(
                self.sign,
                add_magnitude(&self.magnitude, &other.magnitude),
            );
        }

        match compare_magnitude(&self.magnitude, &other.magnitude) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(
                self.sign,
                sub_magnitude(&self.magnitude, &other.magnitude),
            ),
            Ordering::Less => Self::from_parts(
                other.sign,
                sub_magnitude(&other.magnitude, &self.magnitude),
            ),
        }
    }

    /// Exact signed subtraction, `self + (-other)`.
    pub fn exact_sub(&self, other: &Self) -> Self {
        self.exact_add(&other.negate())
    }
}

/// Validate and canonicalize a literal in one step.
///
/// # Errors
/// Returns `InvalidLiteral` if `text` does not match the literal grammar.
pub fn normalize(text: &str) -> NumericResult<DecimalValue> {
    let literal = Literal::parse(text)?;
    Ok(DecimalValue::normalize(literal))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for DecimalValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                compare_magnitude(&self.magnitude, &other.magnitude)
            },
            (Sign::Negative, Sign::Negative) => {
                compare_magnitude(&other.magnitude, &self.magnitude)
            },
        }
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_parts(self.sign.flip(), self.magnitude)
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for DecimalValue {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.exact_add(&rhs)
    }
}

impl<'a> Add<&'a DecimalValue> for &'a DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn add(self, rhs: &'a DecimalValue) -> Self::Output {
        self.exact_add(rhs)
    }
}

impl Sub for DecimalValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.exact_sub(&rhs)
    }
}

impl<'a> Sub<&'a DecimalValue> for &'a DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn sub(self, rhs: &'a DecimalValue) -> Self::Output {
        self.exact_sub(rhs)
    }
}

impl Sum for DecimalValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.exact_add(&x))
    }
}

impl<'a> Sum<&'a DecimalValue> for DecimalValue {
    fn sum<I: Iterator<Item = &'a DecimalValue>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.exact_add(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_char('0');
        }
        if self.is_negative() {
            f.write_char('-')?;
        }
        for &d in self.integer_digits() {
            f.write_char(char::from(b'0' + d))?;
        }
        if !self.fraction_digits().is_empty() {
            f.write_char('.')?;
            for &d in self.fraction_digits() {
                f.write_char(char::from(b'0' + d))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({})", self)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for DecimalValue {
    type Err = NumericError;

    /// Parse a decimal literal.
    ///
    /// # Examples
    /// - "0007" -> 7
    /// - "-0001.500" -> -1.5
    /// - "-0.0" -> 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalValue {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has more than 28 fraction digits
    /// - `Overflow` if the digits do not fit the 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let scale = self.scale();
        if scale > RUST_DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mantissa = self
            .integer_digits()
            .iter()
            .chain(self.fraction_digits())
            .try_fold(0i128, |acc, &d| acc.checked_mul(10)?.checked_add(i128::from(d)))
            .ok_or(NumericError::Overflow)?;
        let signed = if self.is_negative() { -mantissa } else { mantissa };

        rust_decimal::Decimal::try_from_i128_with_scale(signed, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    fn from(d: rust_decimal::Decimal) -> Self {
        let scale = d.scale() as usize;
        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };

        let raw = d.mantissa().unsigned_abs().to_string();
        let padded = format!("{:0>width$}", raw, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);

        Self::from_parts(
            sign,
            Magnitude::from_ascii(int_part.as_bytes(), frac_part.as_bytes()),
        )
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        normalize(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
