//! Montgomery curve arithmetic.
//!
//! Scalar multiplication on curves `by² = x(x² + ax + 1)` runs entirely
//! on XZ coordinates through the Montgomery ladder. Three properties make
//! the ladder the right tool for secret scalars:
//!
//! - every iteration performs exactly one differential add-and-double,
//!   independent of the scalar bit,
//! - accumulators are exchanged with a constant-time conditional swap,
//!   never with a branch,
//! - the working point is projectively randomised before the first
//!   iteration (Coron's DPA countermeasure), so intermediate values do
//!   not repeat across runs even for the same scalar.
//!
//! Branches on structurally public predicates (identity inputs, curve
//! form) are permitted; branches on scalar bits are not.

use zeroize::Zeroize;

use crate::field::Field;
use crate::rng::{EntropyError, EntropySource};
use crate::scalar::Int;

use super::params::{Curve, CurveForm};
use super::point::{AffinePoint, XzPoint};

/// Attempts to draw a usable randomiser before giving up.
const RANDOMISE_RETRIES: usize = 32;

/// Swaps two integers if `flag` is 1, leaves them in place if it is 0.
///
/// The exchange is computed over fixed `width`-byte buffers with the mask
/// construction `mask = −flag`, `delta = mask & (n₁ ⊕ n₂)`,
/// `n₁ ← n₁ ⊕ delta`, `n₂ ← n₂ ⊕ delta`: the same sequence of operations
/// runs for both flag values, so the scalar bit driving the swap does not
/// reach a branch predictor or the memory access pattern.
///
/// Both values must fit in `width` bytes and must be non-negative.
///
/// # Panics
///
/// Panics if `flag` is not 0 or 1, or if the two values are equal; a swap
/// of equal values indicates a caller bug, since its effect would be
/// unobservable and a correct ladder never produces it.
pub fn conditional_swap(width: usize, n1: &mut Int, n2: &mut Int, flag: u8) {
    assert!(flag <= 1, "swap flag must be 0 or 1");
    assert!(n1 != n2, "conditional swap of equal values");

    let mask = flag.wrapping_neg();

    let mut a = n1.to_be_bytes_padded(width);
    let mut b = n2.to_be_bytes_padded(width);

    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let delta = mask & (*x ^ *y);
        *x ^= delta;
        *y ^= delta;
    }

    *n1 = Int::from_be_bytes(&a);
    *n2 = Int::from_be_bytes(&b);

    a.zeroize();
    b.zeroize();
}

/// Multiplies both coordinates of an XZ point by a fresh random scalar.
///
/// The randomiser `l` is drawn uniformly from `[2, p)`: a draw of the
/// field's byte width is rejected when it falls outside the range, and
/// source failures are retried. `(l·x, l·z)` is the same projective point
/// as `(x, z)`, but its concrete representative is unpredictable, which
/// breaks the correlation a differential power analysis relies on.
///
/// # Errors
///
/// [`EntropyError::Exhausted`] when no usable value was drawn within the
/// retry budget.
pub fn randomise(
    field: &Field,
    point: &XzPoint,
    entropy: &mut dyn EntropySource,
) -> Result<XzPoint, EntropyError> {
    let two = Int::from(2u32);

    for _ in 0..RANDOMISE_RETRIES {
        let mut buf = vec![0u8; field.byte_len()];

        if entropy.rand_bytes(&mut buf).is_err() {
            continue;
        }

        let l = Int::from_be_bytes(&buf);
        buf.zeroize();

        if l < two || &l >= field.modulus() {
            continue;
        }

        return Ok(XzPoint {
            x: field.mul(&point.x, &l),
            z: field.mul(&point.z, &l),
        });
    }

    Err(EntropyError::Exhausted)
}

/// One ladder step: `(R, S) ← (2R, R + S)` with difference `D = S − R`.
///
/// This is the combined differential add-and-double (mladd-1987-m-3),
/// with `(X₂, Z₂) = R`, `(X₃, Z₃) = S` and the difference supplied in
/// normalised form:
///
/// ```text
/// A = X₂ + Z₂; AA = A²; B = X₂ − Z₂; BB = B²; E = AA − BB
/// C = X₃ + Z₃; D' = X₃ − Z₃; DA = D'·A; CB = C·B
/// S ← ((DA + CB)², X₁·(DA − CB)²)
/// R ← (AA·BB, E·(BB + a24·E))
/// ```
///
/// # Panics
///
/// Panics if the difference point is not normalised to `z = 1`; the
/// formula folds `Z₁ = 1` into the `S` update, so an unnormalised
/// difference would silently compute a different point.
pub fn differential_add_double(curve: &Curve, r: &mut XzPoint, s: &mut XzPoint, d: &XzPoint) {
    assert_eq!(curve.form, CurveForm::Montgomery);
    assert!(d.z == Int::one(), "difference point must have z = 1");

    let f = &curve.field;
    let a24 = curve.a24();

    let a = f.add(&r.x, &r.z);
    let aa = f.sq(&a);
    let b = f.sub(&r.x, &r.z);
    let bb = f.sq(&b);
    let e = f.sub(&aa, &bb);

    let c = f.add(&s.x, &s.z);
    let d_prime = f.sub(&s.x, &s.z);
    let da = f.mul(&d_prime, &a);
    let cb = f.mul(&c, &b);

    s.x = f.sq(&f.add(&da, &cb));
    s.z = f.mul(&d.x, &f.sq(&f.sub(&da, &cb)));

    r.x = f.mul(&aa, &bb);
    r.z = f.eval(|| &e * (&bb + a24 * &e));
}

/// Computes `n · P` with the Montgomery ladder and returns the result
/// normalised to `z = 1` (or the identity when the product is ∞).
///
/// The accumulators start as `R = (1, 0)` (the identity) and
/// `S = randomise(P)`; the loop then consumes every scalar bit from the
/// most significant down to bit 0. Each iteration conditionally swaps the
/// accumulators on the current bit, applies the differential
/// add-and-double with `P` as the difference, and swaps back, so the
/// work per iteration is independent of the bit value.
///
/// Multiplying by zero, or multiplying the identity, yields the identity.
/// The scalar must be non-negative.
///
/// # Errors
///
/// [`EntropyError`] when the projective randomisation cannot obtain a
/// usable random value.
pub fn ladder_mul(
    curve: &Curve,
    n: &Int,
    point: &AffinePoint,
    entropy: &mut dyn EntropySource,
) -> Result<XzPoint, EntropyError> {
    assert_eq!(curve.form, CurveForm::Montgomery);
    assert!(!n.is_negative(), "scalar must be non-negative");

    if n.is_zero() || point.is_identity() {
        return Ok(XzPoint::identity());
    }

    let f = &curve.field;
    let width = f.byte_len();

    let d = XzPoint::from_affine(point);
    let mut r = XzPoint::identity();
    let mut s = randomise(f, &d, entropy)?;

    for index in (0..n.bit_width()).rev() {
        let bit = n.bit(index) as u8;

        conditional_swap(width, &mut r.x, &mut s.x, bit);
        conditional_swap(width, &mut r.z, &mut s.z, bit);

        differential_add_double(curve, &mut r, &mut s, &d);

        conditional_swap(width, &mut r.x, &mut s.x, bit);
        conditional_swap(width, &mut r.z, &mut s.z, bit);
    }

    // The discarded accumulator still holds scalar-dependent state.
    s.x.scrub();
    s.z.scrub();

    if r.z.is_zero() {
        return Ok(XzPoint::identity());
    }

    let z_inv = f
        .inverse(&r.z)
        .expect("non-zero z is invertible in a prime field");

    Ok(XzPoint {
        x: f.mul(&r.x, &z_inv),
        z: Int::one(),
    })
}
