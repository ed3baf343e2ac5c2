//! Core definition of the `Int` arbitrary-precision integer.
//!
//! The value is stored as an explicit sign and an unbounded magnitude,
//! delegating limb management to `num-bigint`. Everything layered above it
//! (fields, curves, keys) goes through the API defined here, so the
//! contracts in this file are the contracts of the whole crate's arithmetic:
//!
//! - parsers reject empty strings and stray characters,
//! - `modulo` always lands in `[0, m)` for a positive modulus,
//! - exports are big-endian and, where a width is given, zero-padded.

use std::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Errors produced while parsing an `Int` from text.
#[derive(Debug)]
pub enum IntParseError {
    /// The input was empty (or empty after its sign / `0x` prefix).
    Empty,

    /// The input contained a character outside the expected digit set.
    InvalidDigit,
}

/// Errors produced by fallible arithmetic.
#[derive(Debug)]
pub enum ArithmeticError {
    /// Division or reduction by zero was requested.
    DivisionByZero,

    /// A modular inverse was requested for a non-invertible element.
    NotInvertible,

    /// A square root was required for a quadratic non-residue.
    NonResidue,

    /// A modular exponentiation was requested with a negative exponent.
    NegativeExponent,
}

/// Unbounded signed integer.
///
/// `Int` is the scalar type used for field elements, curve coordinates and
/// secret scalars. It is an ordinary value type: cloning copies the value,
/// comparison is numeric, and hashing follows equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(pub(crate) BigInt);

impl Int {
    /// Returns the value zero.
    #[inline]
    pub fn zero() -> Self {
        Int(BigInt::zero())
    }

    /// Returns the value one.
    #[inline]
    pub fn one() -> Self {
        Int(BigInt::one())
    }

    /// Constructs a non-negative integer from big-endian magnitude bytes.
    ///
    /// Leading zero bytes are permitted and do not change the value; an
    /// empty slice yields zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Int(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Parses a hexadecimal integer.
    ///
    /// Accepts an optional leading `-`, an optional `0x`/`0X` prefix, and
    /// mixed-case digits. An odd number of digits is allowed; the digits
    /// denote a plain magnitude, not a byte string.
    ///
    /// # Errors
    ///
    /// - [`IntParseError::Empty`] if no digits remain after the sign and
    ///   prefix are stripped.
    /// - [`IntParseError::InvalidDigit`] on any non-hexadecimal character.
    pub fn from_hex(text: &str) -> Result<Self, IntParseError> {
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);

        if digits.is_empty() {
            return Err(IntParseError::Empty);
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IntParseError::InvalidDigit);
        }

        let magnitude =
            BigInt::parse_bytes(digits.as_bytes(), 16).ok_or(IntParseError::InvalidDigit)?;

        Ok(Int(if negative { -magnitude } else { magnitude }))
    }

    /// Parses a decimal integer.
    ///
    /// Accepts an optional leading `-` followed by one or more decimal
    /// digits. Whitespace, signs in other positions, and any other
    /// characters are rejected.
    ///
    /// # Errors
    ///
    /// - [`IntParseError::Empty`] if no digits are present.
    /// - [`IntParseError::InvalidDigit`] on any non-decimal character.
    pub fn from_dec(text: &str) -> Result<Self, IntParseError> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if digits.is_empty() {
            return Err(IntParseError::Empty);
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IntParseError::InvalidDigit);
        }

        let magnitude =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(IntParseError::InvalidDigit)?;

        Ok(Int(if negative { -magnitude } else { magnitude }))
    }

    /// Constructs an integer from a signed word array.
    ///
    /// The words are the magnitude in **little-endian** base 2³² order, with
    /// the sign carried separately. An all-zero magnitude yields zero
    /// regardless of the requested sign.
    pub fn from_words(negative: bool, words: &[u32]) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };

        Int(BigInt::new(sign, words.to_vec()))
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the bit of the magnitude at `index` (0 = least significant).
    ///
    /// The scan always reads the backing limb, so the access pattern does
    /// not depend on whether the bit is set.
    #[inline]
    pub fn bit(&self, index: u64) -> bool {
        self.0.magnitude().bit(index)
    }

    /// Returns the bit width of the magnitude (zero for the value zero).
    #[inline]
    pub fn bit_width(&self) -> u64 {
        self.0.bits()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Int(self.0.abs())
    }

    /// Reduces `self` modulo a positive modulus.
    ///
    /// The result always lies in `[0, modulus)`, also for negative `self`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero or negative; reduction by a non-positive
    /// modulus is a caller bug.
    pub fn modulo(&self, modulus: &Int) -> Int {
        assert!(modulus.0.is_positive(), "modulus must be positive");

        let remainder = &self.0 % &modulus.0;

        if remainder.is_negative() {
            Int(remainder + &modulus.0)
        } else {
            Int(remainder)
        }
    }

    /// Truncated division, returning an error instead of panicking.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Int) -> Result<Int, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Int(&self.0 / &divisor.0))
    }

    /// Truncated remainder, returning an error instead of panicking.
    ///
    /// The remainder carries the sign of `self`, matching the `%` operator.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Int) -> Result<Int, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Int(&self.0 % &divisor.0))
    }

    /// Computes `self^exponent mod modulus`.
    ///
    /// The result lies in `[0, modulus)` for any (also negative) base.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::NegativeExponent`] if `exponent < 0`.
    /// - [`ArithmeticError::DivisionByZero`] if `modulus <= 0`.
    pub fn modpow(&self, exponent: &Int, modulus: &Int) -> Result<Int, ArithmeticError> {
        if exponent.0.is_negative() {
            return Err(ArithmeticError::NegativeExponent);
        }

        if !modulus.0.is_positive() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Int(self.0.modpow(&exponent.0, &modulus.0)))
    }

    /// Exports the magnitude as big-endian bytes.
    ///
    /// The value zero exports as a single `0x00` byte. The sign is not
    /// encoded; callers that need it must track it separately.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.magnitude().to_bytes_be()
    }

    /// Exports the magnitude as exactly `width` big-endian bytes.
    ///
    /// The value is left-padded with zero bytes.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude does not fit in `width` bytes; callers are
    /// expected to know the bound of the value they are exporting.
    pub fn to_be_bytes_padded(&self, width: usize) -> Vec<u8> {
        let bytes = self.0.magnitude().to_bytes_be();

        let bytes = if self.is_zero() { Vec::new() } else { bytes };
        assert!(bytes.len() <= width, "value does not fit in requested width");

        let mut out = vec![0u8; width];
        out[width - bytes.len()..].copy_from_slice(&bytes);

        out
    }

    /// Formats the magnitude as lowercase hexadecimal, zero-padded on the
    /// left to at least `width` digits.
    ///
    /// A `width` of zero yields the minimal representation. Negative values
    /// are prefixed with `-`; the padding applies to the magnitude only.
    pub fn to_hex_padded(&self, width: usize) -> String {
        let digits = self.0.magnitude().to_str_radix(16);
        let padding = width.saturating_sub(digits.len());

        let mut out = String::with_capacity(padding + digits.len() + 1);

        if self.is_negative() {
            out.push('-');
        }

        for _ in 0..padding {
            out.push('0');
        }

        out.push_str(&digits);
        out
    }

    /// Formats the magnitude as uppercase hexadecimal, zero-padded on the
    /// left to at least `width` digits.
    pub fn to_hex_padded_upper(&self, width: usize) -> String {
        self.to_hex_padded(width).to_ascii_uppercase()
    }

    /// Formats the value in decimal, with a leading `-` when negative.
    pub fn to_dec(&self) -> String {
        self.0.to_str_radix(10)
    }

    pub(crate) fn to_usize_digit(&self) -> usize {
        self.0
            .to_usize()
            .expect("digit remainder fits in a machine word")
    }

    /// Overwrites the backing limbs with zeros, leaving the value zero.
    ///
    /// Reassigning a fresh zero would free the old limb buffer untouched;
    /// this instead writes a zero digit over every occupied slot of the
    /// current allocation before the length is normalised away. Only the
    /// present allocation is reached; buffers released by earlier
    /// arithmetic are already gone.
    ///
    /// Call this on any `Int` that has carried secret material before
    /// letting it go out of scope.
    pub fn scrub(&mut self) {
        let limbs = self.0.bits().div_ceil(32) as usize;
        let zeros = vec![0u32; limbs];

        // A positive sign forces the digits to be written through to the
        // buffer; normalisation then settles the value back to zero.
        self.0.assign_from_slice(Sign::Plus, &zeros);
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
