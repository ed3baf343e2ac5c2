//! Point representations across coordinate systems.
//!
//! Three coordinate systems are used by the curve engines, each with its
//! own type and identity encoding:
//!
//! - affine `(x, y)` with a distinguished point at infinity,
//! - projective `(X, Y, Z)` with identity `(0, 1, 0)` and affine
//!   interpretation `(X/Z, Y/Z)` for `Z ≠ 0`,
//! - Montgomery XZ `(x, z)` with identity `(1, 0)`; the y-coordinate is
//!   never materialised inside the ladder.
//!
//! Conversions between representations are total: the identity maps to
//! the identity in every form.

use crate::field::{ArithmeticError, Field};
use crate::scalar::Int;

/// A point in affine coordinates, or the point at infinity.
///
/// Equality is coordinate-wise; the identity compares equal only to
/// itself. Non-identity points are expected to satisfy the equation of
/// the curve they are used with, and the engines preserve that invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: Int,
    pub y: Int,
    infinity: bool,
}

impl AffinePoint {
    /// Creates a finite affine point from its coordinates.
    pub fn new(x: Int, y: Int) -> Self {
        AffinePoint {
            x,
            y,
            infinity: false,
        }
    }

    /// Returns the point at infinity (the group identity).
    pub fn identity() -> Self {
        AffinePoint {
            x: Int::zero(),
            y: Int::zero(),
            infinity: true,
        }
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// A point in projective coordinates `(X, Y, Z)`.
///
/// The identity is `(0, 1, 0)`; any representative with `Z = 0` is
/// treated as the identity. For `Z ≠ 0` the affine interpretation is
/// `(X/Z, Y/Z)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePoint {
    pub x: Int,
    pub y: Int,
    pub z: Int,
}

impl ProjectivePoint {
    /// Returns the identity `(0, 1, 0)`.
    pub fn identity() -> Self {
        ProjectivePoint {
            x: Int::zero(),
            y: Int::one(),
            z: Int::zero(),
        }
    }

    /// Returns `true` when this representative encodes the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Lifts an affine point to projective coordinates with `Z = 1`.
    pub fn from_affine(point: &AffinePoint) -> Self {
        if point.is_identity() {
            return Self::identity();
        }

        ProjectivePoint {
            x: point.x.clone(),
            y: point.y.clone(),
            z: Int::one(),
        }
    }

    /// Normalises to affine coordinates through `X/Z, Y/Z` modulo p.
    ///
    /// Representatives with `Z = 0` normalise to the point at infinity.
    ///
    /// # Errors
    ///
    /// Propagates [`ArithmeticError::NotInvertible`] only for coordinates
    /// that are not reduced representatives of a curve point; values
    /// produced by the engines always normalise.
    pub fn to_affine(&self, field: &Field) -> Result<AffinePoint, ArithmeticError> {
        let z = field.reduce(&self.z);

        if z.is_zero() {
            return Ok(AffinePoint::identity());
        }

        let z_inv = field.inverse(&z)?;

        Ok(AffinePoint::new(
            field.mul(&self.x, &z_inv),
            field.mul(&self.y, &z_inv),
        ))
    }
}

/// A point in Montgomery XZ coordinates `(x, z)`.
///
/// The identity is `(1, 0)`; any representative with `z = 0` is treated
/// as the identity. The affine x-coordinate is `x/z` for `z ≠ 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XzPoint {
    pub x: Int,
    pub z: Int,
}

impl XzPoint {
    /// Returns the identity `(1, 0)`.
    pub fn identity() -> Self {
        XzPoint {
            x: Int::one(),
            z: Int::zero(),
        }
    }

    /// Returns `true` when this representative encodes the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Projects an affine point to XZ coordinates, dropping `y`.
    pub fn from_affine(point: &AffinePoint) -> Self {
        if point.is_identity() {
            return Self::identity();
        }

        XzPoint {
            x: point.x.clone(),
            z: Int::one(),
        }
    }
}
