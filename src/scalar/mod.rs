//! Arbitrary-precision signed integers
//!
//! This module defines the integer type underlying all field and curve
//! arithmetic in the crate.
//!
//! `Int` is an unbounded signed integer with an explicit sign and magnitude.
//! It provides deterministic parsing from big-endian bytes, hexadecimal and
//! decimal strings, bit-level inspection, modular exponentiation, and
//! fixed-width exports suitable for wire formats (64 hex characters for
//! 256-bit scalars, zero-padded byte buffers for key material).
//!
//! The type intentionally does not hide reductions or conversions behind
//! implicit behavior: callers always state the modulus, the width, and the
//! radix they want.

mod conv;
mod core;
mod ops;

pub use self::core::{ArithmeticError, Int, IntParseError};
