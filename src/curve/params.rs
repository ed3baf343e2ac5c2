//! Named curve descriptors and domain-parameter validation.

use crate::field::Field;
use crate::scalar::Int;

use super::point::AffinePoint;

/// The algebraic form a curve equation is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveForm {
    /// `y² = x³ + ax + b`
    ShortWeierstrass,

    /// `by² = x(x² + ax + 1)`
    Montgomery,
}

/// Identifier of a registered curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// The Bitcoin curve, short Weierstrass over a 256-bit prime.
    Secp256k1,

    /// The Diffie–Hellman curve of RFC 7748, Montgomery form over 2²⁵⁵ − 19.
    Curve25519,
}

/// Errors raised while constructing a curve descriptor.
#[derive(Debug)]
pub enum CurveError {
    /// The discriminant condition of the requested form does not hold:
    /// `4a³ + 27b² ≡ 0` for short Weierstrass, `b(a² − 4) ≡ 0` for
    /// Montgomery.
    SingularCurve,
}

/// An immutable elliptic-curve descriptor.
///
/// Carries the domain parameters `{id, form, p, a, b, G, n, h}` together
/// with the precomputed ladder constant `a24` for Montgomery curves.
/// Descriptors are validated at construction and never mutate; they can
/// be cloned and shared across threads without synchronisation.
#[derive(Clone, Debug)]
pub struct Curve {
    pub(crate) id: CurveId,
    pub(crate) form: CurveForm,
    pub(crate) field: Field,
    pub(crate) a: Int,
    pub(crate) b: Int,
    pub(crate) g: AffinePoint,
    pub(crate) n: Int,
    pub(crate) h: u32,
    pub(crate) a24: Option<Int>,
}

impl Curve {
    /// Constructs a short-Weierstrass curve `y² = x³ + ax + b`.
    ///
    /// The coefficients are reduced into the field before validation.
    ///
    /// # Errors
    ///
    /// [`CurveError::SingularCurve`] when `4a³ + 27b² ≡ 0 (mod p)`.
    pub fn weierstrass(
        id: CurveId,
        field: Field,
        a: Int,
        b: Int,
        generator: AffinePoint,
        order: Int,
        cofactor: u32,
    ) -> Result<Self, CurveError> {
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let four_a3 = field.eval(|| Int::from(4u32) * &a * &a * &a);
        let discriminant = field.eval(|| four_a3 + Int::from(27u32) * &b * &b);

        if discriminant.is_zero() {
            return Err(CurveError::SingularCurve);
        }

        Ok(Curve {
            id,
            form: CurveForm::ShortWeierstrass,
            field,
            a,
            b,
            g: generator,
            n: order,
            h: cofactor,
            a24: None,
        })
    }

    /// Constructs a Montgomery curve `by² = x(x² + ax + 1)`.
    ///
    /// The ladder constant `a24 = (a + 2)/4 mod p` is precomputed here so
    /// the differential add-and-double never divides.
    ///
    /// # Errors
    ///
    /// [`CurveError::SingularCurve`] when `b(a² − 4) ≡ 0 (mod p)`.
    pub fn montgomery(
        id: CurveId,
        field: Field,
        a: Int,
        b: Int,
        generator: AffinePoint,
        order: Int,
        cofactor: u32,
    ) -> Result<Self, CurveError> {
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let condition = field.eval(|| &b * (&(&a * &a) - &Int::from(4u32)));

        if condition.is_zero() {
            return Err(CurveError::SingularCurve);
        }

        let a_plus_2 = field.add(&a, &Int::from(2u32));
        let a24 = field
            .div(&a_plus_2, &Int::from(4u32))
            .expect("4 is invertible modulo an odd prime");

        Ok(Curve {
            id,
            form: CurveForm::Montgomery,
            field,
            a,
            b,
            g: generator,
            n: order,
            h: cofactor,
            a24: Some(a24),
        })
    }

    /// Returns the curve identifier.
    #[inline]
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Returns the curve form.
    #[inline]
    pub fn form(&self) -> CurveForm {
        self.form
    }

    /// Returns the underlying prime field.
    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the coefficient `a` of the curve equation.
    #[inline]
    pub fn a(&self) -> &Int {
        &self.a
    }

    /// Returns the coefficient `b` of the curve equation.
    #[inline]
    pub fn b(&self) -> &Int {
        &self.b
    }

    /// Returns the generator point G.
    #[inline]
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Returns the group order n of the generator.
    #[inline]
    pub fn order(&self) -> &Int {
        &self.n
    }

    /// Returns the cofactor h.
    #[inline]
    pub fn cofactor(&self) -> u32 {
        self.h
    }

    /// Returns the precomputed `(a + 2)/4 mod p`.
    ///
    /// # Panics
    ///
    /// Panics when called on a non-Montgomery curve; the constant only
    /// exists for the ladder.
    #[inline]
    pub fn a24(&self) -> &Int {
        self.a24
            .as_ref()
            .expect("a24 is only defined for Montgomery curves")
    }
}

/// Looks up a registered curve descriptor by identifier.
///
/// The lookup is a direct match on the identifier, independent of how
/// many curves are registered.
pub fn curve_by_id(id: CurveId) -> Curve {
    match id {
        CurveId::Secp256k1 => secp256k1(),
        CurveId::Curve25519 => curve25519(),
    }
}

fn hex(text: &str) -> Int {
    Int::from_hex(text).expect("registry constant is valid hex")
}

/// secp256k1: `y² = x³ + 7` over p = 2²⁵⁶ − 2³² − 977.
fn secp256k1() -> Curve {
    let field = Field::new(hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    ));

    let generator = AffinePoint::new(
        hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    );

    let order = hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

    Curve::weierstrass(
        CurveId::Secp256k1,
        field,
        Int::zero(),
        Int::from(7u32),
        generator,
        order,
        1,
    )
    .expect("secp256k1 parameters are non-singular")
}

/// Curve25519: `y² = x(x² + 486662x + 1)` over p = 2²⁵⁵ − 19.
fn curve25519() -> Curve {
    let field = Field::new(hex(
        "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED",
    ));

    let generator = AffinePoint::new(
        Int::from(9u32),
        hex("20AE19A1B8A086B4E01EDD2C7748D14C923D4D7E6D7C61B229E9C5A27ECED3D9"),
    );

    let order = hex("1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED");

    Curve::montgomery(
        CurveId::Curve25519,
        field,
        Int::from(486662u32),
        Int::one(),
        generator,
        order,
        8,
    )
    .expect("Curve25519 parameters are non-singular")
}
