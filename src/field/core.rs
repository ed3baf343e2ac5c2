//! Field descriptor and modular arithmetic.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::scalar::{ArithmeticError, Int};

/// A prime field 𝔽ₚ.
///
/// The descriptor is immutable: once constructed, the modulus never
/// changes, and the same `Field` value can back any number of curves and
/// computations concurrently.
///
/// The modulus is required to be an odd prime greater than 3. Oddness and
/// the size bound are checked at construction; primality is owed by the
/// caller (curve descriptors only ever construct fields from published
/// curve primes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    modulus: Int,
    byte_len: usize,
}

impl Field {
    /// Creates the field 𝔽ₚ for the given modulus.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is even or not greater than 3; such a modulus
    /// is a programming error, not a runtime condition.
    pub fn new(modulus: Int) -> Self {
        assert!(modulus > Int::from(3u32), "field modulus must exceed 3");
        assert!(modulus.bit(0), "field modulus must be odd");

        let byte_len = modulus.bit_width().div_ceil(8) as usize;

        Field { modulus, byte_len }
    }

    /// Returns the modulus p.
    #[inline]
    pub fn modulus(&self) -> &Int {
        &self.modulus
    }

    /// Returns the byte width of the modulus (32 for 256-bit fields).
    ///
    /// Fixed-width encodings of field elements, and the constant-time swap
    /// used by the Montgomery ladder, operate on buffers of this size.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Reduces a value into `[0, p)`.
    #[inline]
    pub fn reduce(&self, value: &Int) -> Int {
        value.modulo(&self.modulus)
    }

    /// Evaluates a closure and reduces its result into `[0, p)`.
    ///
    /// This is the deferred form of [`Field::reduce`]: the closure may
    /// accumulate an arbitrarily large intermediate value, and only the
    /// final reduction is part of the contract.
    #[inline]
    pub fn eval<F: FnOnce() -> Int>(&self, f: F) -> Int {
        self.reduce(&f())
    }

    /// Returns `a + b mod p`.
    #[inline]
    pub fn add(&self, a: &Int, b: &Int) -> Int {
        self.reduce(&(a + b))
    }

    /// Returns `a - b mod p`.
    #[inline]
    pub fn sub(&self, a: &Int, b: &Int) -> Int {
        self.reduce(&(a - b))
    }

    /// Returns `-a mod p`.
    #[inline]
    pub fn neg(&self, a: &Int) -> Int {
        self.reduce(&-a)
    }

    /// Returns `a · b mod p`.
    #[inline]
    pub fn mul(&self, a: &Int, b: &Int) -> Int {
        self.reduce(&(a * b))
    }

    /// Returns `a² mod p`.
    #[inline]
    pub fn sq(&self, a: &Int) -> Int {
        self.mul(a, a)
    }

    /// Returns `base^exponent mod p` for a non-negative exponent.
    ///
    /// # Panics
    ///
    /// Panics on a negative exponent; field exponents in this crate are
    /// always derived from the (public) modulus.
    pub fn pow(&self, base: &Int, exponent: &Int) -> Int {
        assert!(!exponent.is_negative(), "field exponent must be non-negative");

        Int(base.0.modpow(&exponent.0, &self.modulus.0))
    }

    /// Computes the multiplicative inverse `a⁻¹ mod p`.
    ///
    /// Uses the extended Euclidean algorithm. In a prime field the only
    /// non-invertible residue is zero.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::NotInvertible`] if `a ≡ 0 (mod p)`.
    pub fn inverse(&self, a: &Int) -> Result<Int, ArithmeticError> {
        let a = self.reduce(a);

        if a.is_zero() {
            return Err(ArithmeticError::NotInvertible);
        }

        let (mut r0, mut r1) = (self.modulus.0.clone(), a.0);
        let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

        while !r1.is_zero() {
            let quotient = &r0 / &r1;

            let r2 = &r0 - &quotient * &r1;
            r0 = r1;
            r1 = r2;

            let t2 = &t0 - &quotient * &t1;
            t0 = t1;
            t1 = t2;
        }

        // gcd != 1 can only be reached with a composite modulus.
        if !r0.is_one() {
            return Err(ArithmeticError::NotInvertible);
        }

        Ok(self.reduce(&Int(t0)))
    }

    /// Computes `a · b⁻¹ mod p`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::NotInvertible`] if `b ≡ 0 (mod p)`.
    pub fn div(&self, a: &Int, b: &Int) -> Result<Int, ArithmeticError> {
        let inverse = self.inverse(b)?;

        Ok(self.mul(a, &inverse))
    }
}
