//! Elliptic curves over prime fields
//!
//! This module contains the curve layer of the crate: point
//! representations, named curve descriptors, and the arithmetic engines
//! for the two supported curve forms.
//!
//! ## Curve forms
//!
//! - **Short Weierstrass**: `y² = x³ + ax + b`, the form of signing-key
//!   curves such as secp256k1. Arithmetic is available both on affine
//!   points (chord-and-tangent) and on projective points using the
//!   dbl-2007-bl and add-2007-bl formulas from the Explicit-Formulas
//!   Database.
//!
//! - **Montgomery**: `by² = x(x² + ax + 1)`, the form of Curve25519.
//!   Scalar multiplication runs exclusively on XZ coordinates through a
//!   branch-free ladder with constant-time conditional swaps and
//!   projective randomisation.
//!
//! ## Point representations
//!
//! Each coordinate system has its own type: [`AffinePoint`],
//! [`ProjectivePoint`], and [`XzPoint`]. Conversions between them are
//! total functions; the identity element round-trips through every form.
//!
//! ## Descriptors
//!
//! A [`Curve`] is an immutable record of domain parameters, validated at
//! construction: the discriminant condition for its form must hold, and
//! Montgomery curves precompute the ladder constant `a24 = (a + 2)/4`.
//! [`curve_by_id`] resolves a [`CurveId`] to its descriptor in constant
//! time relative to the number of registered curves.

pub mod montgomery;
pub mod weierstrass;

mod params;
mod point;

pub use params::{curve_by_id, Curve, CurveError, CurveForm, CurveId};
pub use point::{AffinePoint, ProjectivePoint, XzPoint};
