//! Prime field arithmetic
//!
//! This module implements arithmetic in prime fields 𝔽ₚ for an arbitrary
//! odd prime modulus `p > 3`.
//!
//! A [`Field`] is an immutable descriptor: it carries the modulus and
//! nothing else, never mutates after construction, and can be cloned and
//! shared across threads freely. All operations are named methods rather
//! than operators, so that every reduction is visible at the call site:
//! each binary operation contractually returns a value in `[0, p)`.
//!
//! ## Provided operations
//!
//! - Reduction into `[0, p)`, including a deferred form that reduces the
//!   result of a closure.
//! - Addition, subtraction, negation, multiplication, squaring, and
//!   exponentiation.
//! - Modular inversion via the extended Euclidean algorithm, and division
//!   as multiplication by an inverse.
//! - Square roots: the `p ≡ 3 (mod 4)` fast path verified by squaring, and
//!   Tonelli–Shanks for the general case, always listing the smaller root
//!   first.

mod core;
mod sqrt;

pub use self::core::Field;
pub use crate::scalar::ArithmeticError;
