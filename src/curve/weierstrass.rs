//! Short-Weierstrass curve arithmetic.
//!
//! Operations on curves `y² = x³ + ax + b` over 𝔽ₚ, in two layers:
//!
//! - **Affine** chord-and-tangent addition and doubling, with the full
//!   case analysis for the identity, inverse pairs, and tangent points.
//! - **Projective** doubling and addition using the dbl-2007-bl and
//!   add-2007-bl formulas from the Explicit-Formulas Database, transcribed
//!   operand-for-operand so intermediate values match the published
//!   sequences.
//!
//! Scalar multiplication runs most-significant-bit first over projective
//! coordinates and normalises once at the end. This engine makes no
//! constant-time claims; secret scalars on Montgomery curves go through
//! the ladder in [`montgomery`](super::montgomery) instead.

use crate::field::ArithmeticError;
use crate::scalar::Int;

use super::params::{Curve, CurveForm};
use super::point::{AffinePoint, ProjectivePoint};

/// Returns the inverse `(x, −y mod p)` of an affine point.
///
/// The identity is its own inverse.
pub fn invert(curve: &Curve, point: &AffinePoint) -> AffinePoint {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);

    if point.is_identity() {
        return AffinePoint::identity();
    }

    AffinePoint::new(point.x.clone(), curve.field.neg(&point.y))
}

/// Adds two affine points.
///
/// Follows the chord construction: `λ = (y_Q − y_P)/(x_Q − x_P)`,
/// `x_R = λ² − x_P − x_Q`, `y_R = λ(x_P − x_R) − y_P`. The identity,
/// inverse pairs, and `P = Q` are handled before the division, so the
/// slope denominator is always invertible.
pub fn add(
    curve: &Curve,
    p: &AffinePoint,
    q: &AffinePoint,
) -> Result<AffinePoint, ArithmeticError> {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);

    if p.is_identity() {
        return Ok(q.clone());
    }

    if q.is_identity() {
        return Ok(p.clone());
    }

    if *q == invert(curve, p) {
        return Ok(AffinePoint::identity());
    }

    if p == q {
        return double(curve, p);
    }

    let f = &curve.field;

    let slope = f.div(&f.sub(&q.y, &p.y), &f.sub(&q.x, &p.x))?;
    let x = f.eval(|| &slope * &slope - &p.x - &q.x);
    let y = f.eval(|| &slope * (&p.x - &x) - &p.y);

    Ok(AffinePoint::new(x, y))
}

/// Doubles an affine point.
///
/// Uses the tangent construction `λ = (3x² + a)/(2y)`. Doubling the
/// identity, or any point with `y = 0`, yields the identity.
pub fn double(curve: &Curve, p: &AffinePoint) -> Result<AffinePoint, ArithmeticError> {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);

    if p.is_identity() {
        return Ok(AffinePoint::identity());
    }

    let f = &curve.field;

    if f.reduce(&p.y).is_zero() {
        return Ok(AffinePoint::identity());
    }

    let numerator = f.eval(|| Int::from(3u32) * &p.x * &p.x + &curve.a);
    let slope = f.div(&numerator, &f.add(&p.y, &p.y))?;
    let x = f.eval(|| &slope * &slope - &p.x - &p.x);
    let y = f.eval(|| &slope * (&p.x - &x) - &p.y);

    Ok(AffinePoint::new(x, y))
}

/// Doubles a projective point with dbl-2007-bl.
///
/// Operand sequence:
///
/// ```text
/// XX = X²; ZZ = Z²; w = aZZ + 3XX; s = 2YZ; ss = s²; sss = s·ss
/// R = Ys; RR = R²; B = (X + R)² − XX − RR; h = w² − 2B
/// X₃ = hs; Y₃ = w(B − h) − 2RR; Z₃ = sss
/// ```
///
/// A point with `y = 0` doubles to a representative with `Z₃ = 0`, which
/// is the identity.
pub fn double_projective(curve: &Curve, p: &ProjectivePoint) -> ProjectivePoint {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);

    if p.is_identity() {
        return ProjectivePoint::identity();
    }

    let f = &curve.field;

    let xx = f.sq(&p.x);
    let zz = f.sq(&p.z);
    let w = f.eval(|| &curve.a * &zz + Int::from(3u32) * &xx);
    let s = f.eval(|| Int::from(2u32) * &p.y * &p.z);
    let ss = f.sq(&s);
    let sss = f.mul(&s, &ss);
    let r = f.mul(&p.y, &s);
    let rr = f.sq(&r);
    let b = f.eval(|| f.sq(&f.add(&p.x, &r)) - &xx - &rr);
    let h = f.eval(|| f.sq(&w) - Int::from(2u32) * &b);

    let x3 = f.mul(&h, &s);
    let y3 = f.eval(|| &w * (&b - &h) - Int::from(2u32) * &rr);

    ProjectivePoint {
        x: x3,
        y: y3,
        z: sss,
    }
}

/// Adds two projective points with add-2007-bl.
///
/// Operand sequence:
///
/// ```text
/// U₁ = X₁Z₂; U₂ = X₂Z₁; S₁ = Y₁Z₂; S₂ = Y₂Z₁; ZZ = Z₁Z₂
/// T = U₁ + U₂; TT = T²; M = S₁ + S₂; R = TT − U₁U₂ + aZZ²
/// F = ZZ·M; L = M·F; LL = L²; G = (T + L)² − TT − LL
/// W = 2R² − G; X₃ = 2FW; Y₃ = R(G − 2W) − 2LL; Z₃ = 4F³
/// ```
///
/// The formula is unified: it also computes doublings correctly. Its one
/// degeneracy is a pair of distinct points whose y-coordinates cancel
/// (`M ≡ 0` with `U₁ ≠ U₂`); that case falls back to the affine chord
/// before re-projecting.
pub fn add_projective(
    curve: &Curve,
    p: &ProjectivePoint,
    q: &ProjectivePoint,
) -> Result<ProjectivePoint, ArithmeticError> {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);

    if p.is_identity() {
        return Ok(q.clone());
    }

    if q.is_identity() {
        return Ok(p.clone());
    }

    let f = &curve.field;

    let u1 = f.mul(&p.x, &q.z);
    let u2 = f.mul(&q.x, &p.z);
    let s1 = f.mul(&p.y, &q.z);
    let s2 = f.mul(&q.y, &p.z);
    let zz = f.mul(&p.z, &q.z);
    let t = f.add(&u1, &u2);
    let tt = f.sq(&t);
    let m = f.add(&s1, &s2);

    if m.is_zero() {
        if u1 == u2 {
            // P = −Q
            return Ok(ProjectivePoint::identity());
        }

        // Distinct x with cancelling y: outside the unified formula.
        let sum = add(curve, &p.to_affine(f)?, &q.to_affine(f)?)?;
        return Ok(ProjectivePoint::from_affine(&sum));
    }

    let r = f.eval(|| &tt - &f.mul(&u1, &u2) + &curve.a * &f.sq(&zz));
    let ff = f.mul(&zz, &m);
    let l = f.mul(&m, &ff);
    let ll = f.sq(&l);
    let g = f.eval(|| f.sq(&f.add(&t, &l)) - &tt - &ll);
    let w = f.eval(|| Int::from(2u32) * f.sq(&r) - &g);

    let x3 = f.eval(|| Int::from(2u32) * &ff * &w);
    let y3 = f.eval(|| &r * (&g - Int::from(2u32) * &w) - Int::from(2u32) * &ll);
    let z3 = f.eval(|| Int::from(4u32) * &ff * &ff * &ff);

    Ok(ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    })
}

/// Computes `k · P` by projective double-and-add, MSB first.
///
/// `k = 0` (and multiplying the identity) yields the identity; a scalar
/// equal to the group order therefore also lands on the identity. The
/// scalar must be non-negative.
pub fn scalar_mul(
    curve: &Curve,
    k: &Int,
    point: &AffinePoint,
) -> Result<AffinePoint, ArithmeticError> {
    assert_eq!(curve.form, CurveForm::ShortWeierstrass);
    assert!(!k.is_negative(), "scalar must be non-negative");

    if k.is_zero() || point.is_identity() {
        return Ok(AffinePoint::identity());
    }

    let base = ProjectivePoint::from_affine(point);
    let mut acc = ProjectivePoint::identity();

    for index in (0..k.bit_width()).rev() {
        acc = double_projective(curve, &acc);

        if k.bit(index) {
            acc = add_projective(curve, &acc, &base)?;
        }
    }

    acc.to_affine(&curve.field)
}
