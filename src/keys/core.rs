//! Core private- and public-key types.
//!
//! A private key is a secret scalar `k` with `1 ≤ k < n` for the order
//! `n` of the curve it belongs to; the bound is enforced by every
//! constructor. A public key is the affine point `k·G`, always normalised
//! before it is exposed.
//!
//! Secret-bearing buffers created while parsing or serialising key
//! material are wiped before release. The scalar itself lives in a
//! zeroizing 32-byte buffer that is wiped when the key is dropped;
//! big-integer copies made for the actual multiplication are overwritten
//! before they are released wherever their allocation is reachable.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use crate::curve::{montgomery, weierstrass};
use crate::curve::{AffinePoint, Curve, CurveForm};
use crate::field::ArithmeticError;
use crate::rng::{EntropyError, EntropySource, OsEntropy};
use crate::scalar::Int;

/// Network parameters for serialised key formats.
///
/// Only the version bytes live here; the formats themselves are defined
/// in [`wif`](super::wif) and [`address`](super::address).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
    /// Version byte of WIF private-key envelopes.
    pub wif_prefix: u8,

    /// Version byte of P2PKH addresses.
    pub p2pkh_prefix: u8,
}

impl Network {
    /// Bitcoin mainnet.
    pub const MAINNET: Network = Network {
        wif_prefix: 0x80,
        p2pkh_prefix: 0x00,
    };

    /// Bitcoin testnet.
    pub const TESTNET: Network = Network {
        wif_prefix: 0xEF,
        p2pkh_prefix: 0x6F,
    };
}

/// Errors produced by key construction, derivation, and point decoding.
#[derive(Debug)]
pub enum KeyError {
    /// Malformed hexadecimal key material.
    InvalidHex,

    /// Malformed base64 key material.
    InvalidBase64,

    /// Malformed decimal key material.
    InvalidDecimal,

    /// The scalar is zero or not below the group order.
    ScalarOutOfRange,

    /// A SEC1 point encoding had an unknown tag or a wrong length.
    InvalidEncoding,

    /// A decoded point does not satisfy the curve equation.
    NotOnCurve,

    /// The operation is not defined for the curve's form.
    UnsupportedForm,

    /// Field arithmetic failed while deriving or decoding a point.
    Arithmetic(ArithmeticError),

    /// The entropy source backing the ladder gave up.
    Entropy(EntropyError),
}

impl From<ArithmeticError> for KeyError {
    fn from(error: ArithmeticError) -> Self {
        KeyError::Arithmetic(error)
    }
}

impl From<EntropyError> for KeyError {
    fn from(error: EntropyError) -> Self {
        KeyError::Entropy(error)
    }
}

/// A private key: a secret scalar `k` with `1 ≤ k < n`.
///
/// The scalar is stored as a fixed 32-byte big-endian buffer inside
/// [`Zeroizing`], so dropping the key wipes the backing storage. The
/// big-integer form consumed by the curve engines is rebuilt on demand
/// and scrubbed after use.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<[u8; 32]>,
}

impl PrivateKey {
    /// Constructs a private key from a 32-byte big-endian buffer.
    ///
    /// # Errors
    ///
    /// [`KeyError::ScalarOutOfRange`] when the value is zero or not below
    /// the curve order.
    pub fn from_be_bytes(bytes: &[u8; 32], curve: &Curve) -> Result<Self, KeyError> {
        Self::from_scalar(Int::from_be_bytes(bytes), curve)
    }

    /// Constructs a private key from hexadecimal text.
    ///
    /// The text may carry an optional `0x` prefix and mixed-case digits,
    /// and must have an even number of digits (it denotes a byte string).
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidHex`] on malformed input.
    /// - [`KeyError::ScalarOutOfRange`] when the value is out of range.
    pub fn from_hex(text: &str, curve: &Curve) -> Result<Self, KeyError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        let mut bytes = hex::decode(digits).map_err(|_| KeyError::InvalidHex)?;

        let k = Int::from_be_bytes(&bytes);
        bytes.zeroize();

        Self::from_scalar(k, curve)
    }

    /// Constructs a private key from standard-alphabet base64 text.
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidBase64`] on malformed input.
    /// - [`KeyError::ScalarOutOfRange`] when the value is out of range.
    pub fn from_base64(text: &str, curve: &Curve) -> Result<Self, KeyError> {
        let mut bytes = BASE64.decode(text).map_err(|_| KeyError::InvalidBase64)?;

        let k = Int::from_be_bytes(&bytes);
        bytes.zeroize();

        Self::from_scalar(k, curve)
    }

    /// Constructs a private key from decimal text.
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidDecimal`] on malformed input.
    /// - [`KeyError::ScalarOutOfRange`] when the value is out of range.
    pub fn from_dec(text: &str, curve: &Curve) -> Result<Self, KeyError> {
        let k = Int::from_dec(text).map_err(|_| KeyError::InvalidDecimal)?;

        Self::from_scalar(k, curve)
    }

    fn from_scalar(mut k: Int, curve: &Curve) -> Result<Self, KeyError> {
        if k.is_zero() || k.is_negative() || &k >= curve.order() {
            k.scrub();
            return Err(KeyError::ScalarOutOfRange);
        }

        let mut padded = k.to_be_bytes_padded(32);
        k.scrub();

        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&padded);
        padded.zeroize();

        Ok(PrivateKey { bytes })
    }

    /// Returns the secret scalar as a fresh big integer.
    ///
    /// The returned value is a transient copy for a single scalar
    /// multiplication; callers must scrub it after use instead of
    /// keeping it in longer-lived storage.
    pub fn scalar(&self) -> Int {
        Int::from_be_bytes(self.bytes.as_slice())
    }

    /// Exports the scalar as 32 big-endian bytes, zero-padded.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        *self.bytes
    }

    /// Exports the scalar as 64 uppercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes.as_slice())
    }

    /// Exports the scalar as standard-alphabet base64 of its 32 bytes.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.bytes.as_slice())
    }
}

/// Constant-time equality on the scalar bytes: all bytes are folded
/// before the comparison, so the execution time does not depend on the
/// position of the first difference.
impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes
            .iter()
            .zip(other.bytes.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl Eq for PrivateKey {}

/// The scalar is never printed.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// A public key: the affine point `k·G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Derives the public key `k·G` using OS entropy for the ladder's
    /// projective randomisation.
    ///
    /// See [`PublicKey::derive_with`] for the entropy-injected form.
    pub fn derive(private: &PrivateKey, curve: &Curve) -> Result<Self, KeyError> {
        Self::derive_with(private, curve, &mut OsEntropy)
    }

    /// Derives the public key `k·G` with a caller-supplied entropy source.
    ///
    /// Dispatches on the curve form:
    ///
    /// - **Short Weierstrass**: projective double-and-add, normalised to
    ///   affine at the end.
    /// - **Montgomery**: the XZ ladder, which consumes one random value
    ///   from `entropy`; the affine `y` is then recovered from the curve
    ///   equation as the smaller of the two square roots, making the
    ///   derived key deterministic.
    ///
    /// The result always satisfies the curve equation.
    pub fn derive_with(
        private: &PrivateKey,
        curve: &Curve,
        entropy: &mut dyn EntropySource,
    ) -> Result<Self, KeyError> {
        let mut k = private.scalar();
        let derived = Self::multiply_generator(curve, &k, entropy);
        k.scrub();

        Ok(PublicKey { point: derived? })
    }

    fn multiply_generator(
        curve: &Curve,
        k: &Int,
        entropy: &mut dyn EntropySource,
    ) -> Result<AffinePoint, KeyError> {
        match curve.form() {
            CurveForm::ShortWeierstrass => {
                Ok(weierstrass::scalar_mul(curve, k, curve.generator())?)
            }

            CurveForm::Montgomery => {
                let xz = montgomery::ladder_mul(curve, k, curve.generator(), entropy)?;

                if xz.is_identity() {
                    Ok(AffinePoint::identity())
                } else {
                    let y = montgomery_y(curve, &xz.x)?;
                    Ok(AffinePoint::new(xz.x, y))
                }
            }
        }
    }

    /// Returns the affine public point.
    #[inline]
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Encodes the point in SEC1 compressed form: `02 || x` for even `y`,
    /// `03 || x` for odd `y`, with `x` padded to the field width.
    ///
    /// # Panics
    ///
    /// Panics on the identity, which has no SEC1 encoding.
    pub fn to_sec1_compressed(&self, curve: &Curve) -> Vec<u8> {
        assert!(!self.point.is_identity(), "identity has no SEC1 encoding");

        let width = curve.field().byte_len();
        let tag = if self.point.y.bit(0) { 0x03 } else { 0x02 };

        let mut out = Vec::with_capacity(1 + width);
        out.push(tag);
        out.extend_from_slice(&self.point.x.to_be_bytes_padded(width));

        out
    }

    /// Encodes the point in SEC1 uncompressed form: `04 || x || y`.
    ///
    /// # Panics
    ///
    /// Panics on the identity, which has no SEC1 encoding.
    pub fn to_sec1_uncompressed(&self, curve: &Curve) -> Vec<u8> {
        assert!(!self.point.is_identity(), "identity has no SEC1 encoding");

        let width = curve.field().byte_len();

        let mut out = Vec::with_capacity(1 + 2 * width);
        out.push(0x04);
        out.extend_from_slice(&self.point.x.to_be_bytes_padded(width));
        out.extend_from_slice(&self.point.y.to_be_bytes_padded(width));

        out
    }

    /// Returns the compressed encoding as uppercase hexadecimal.
    pub fn to_hex_compressed(&self, curve: &Curve) -> String {
        hex::encode_upper(self.to_sec1_compressed(curve))
    }

    /// Returns the uncompressed encoding as uppercase hexadecimal.
    pub fn to_hex_uncompressed(&self, curve: &Curve) -> String {
        hex::encode_upper(self.to_sec1_uncompressed(curve))
    }

    /// Decodes a SEC1 point encoding on a short-Weierstrass curve.
    ///
    /// Compressed encodings recover `y` from the curve equation, choosing
    /// the root whose parity matches the tag. Uncompressed encodings are
    /// checked against the curve equation.
    ///
    /// # Errors
    ///
    /// - [`KeyError::UnsupportedForm`] for Montgomery curves, whose point
    ///   validation rules are not defined here.
    /// - [`KeyError::InvalidEncoding`] on an unknown tag or wrong length.
    /// - [`KeyError::NotOnCurve`] when no matching curve point exists.
    pub fn from_sec1(bytes: &[u8], curve: &Curve) -> Result<Self, KeyError> {
        if curve.form() != CurveForm::ShortWeierstrass {
            return Err(KeyError::UnsupportedForm);
        }

        let f = curve.field();
        let width = f.byte_len();

        match bytes.first().copied() {
            Some(tag @ (0x02 | 0x03)) if bytes.len() == 1 + width => {
                let x = f.reduce(&Int::from_be_bytes(&bytes[1..]));

                let rhs = f.eval(|| &x * &x * &x + curve.a() * &x + curve.b());
                let roots = f.sqrt(&rhs);

                let odd = tag == 0x03;
                let y = roots
                    .into_iter()
                    .find(|root| root.bit(0) == odd)
                    .ok_or(KeyError::NotOnCurve)?;

                Ok(PublicKey {
                    point: AffinePoint::new(x, y),
                })
            }

            Some(0x04) if bytes.len() == 1 + 2 * width => {
                let x = f.reduce(&Int::from_be_bytes(&bytes[1..1 + width]));
                let y = f.reduce(&Int::from_be_bytes(&bytes[1 + width..]));

                let lhs = f.sq(&y);
                let rhs = f.eval(|| &x * &x * &x + curve.a() * &x + curve.b());

                if lhs != rhs {
                    return Err(KeyError::NotOnCurve);
                }

                Ok(PublicKey {
                    point: AffinePoint::new(x, y),
                })
            }

            _ => Err(KeyError::InvalidEncoding),
        }
    }
}

/// Recovers the affine `y` for a normalised Montgomery x-coordinate.
///
/// Solves `y² = x(x² + ax + 1)/b` and returns the smaller root.
fn montgomery_y(curve: &Curve, x: &Int) -> Result<Int, KeyError> {
    let f = curve.field();

    let numerator = f.eval(|| x * &(x * x + curve.a() * x + Int::one()));
    let y_squared = f.div(&numerator, curve.b())?;

    let roots = f.sqrt(&y_squared);

    roots
        .into_iter()
        .next()
        .ok_or(KeyError::Arithmetic(ArithmeticError::NonResidue))
}
