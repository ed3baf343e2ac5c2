//! Elliptic-curve arithmetic and key material for Nebula
//!
//! This crate provides the elliptic-curve kernel used throughout the Nebula
//! ecosystem: prime-field arithmetic, curve algebra in short Weierstrass and
//! Montgomery form, scalar multiplication, and the key types derived from it.
//!
//! The focus is on **clarity, predictability, and auditability**. Curve
//! formulas are transcribed operand-for-operand from their published
//! references, secret-dependent control flow is confined to constant-time
//! primitives, and every public operation has explicit, documented semantics.
//!
//! # Module overview
//!
//! - `scalar`
//!   Arbitrary-precision signed integers (`Int`): the substrate for field
//!   and curve arithmetic. Parsing from hex/decimal/bytes, bit access,
//!   modular exponentiation, and fixed-width export.
//!
//! - `field`
//!   Prime fields 𝔽ₚ. Reduction, modular inversion, division, and square
//!   roots, with every binary operation contractually reduced into `[0, p)`.
//!
//! - `curve`
//!   Point representations (affine, projective, Montgomery XZ), named curve
//!   descriptors (secp256k1, Curve25519), and the two curve engines:
//!   short-Weierstrass chord-and-tangent arithmetic with projective
//!   formulas, and the Montgomery XZ ladder with constant-time conditional
//!   swaps and projective randomisation.
//!
//! - `keys`
//!   Private-key material (1 ≤ k < n, scrubbed on drop), public-key
//!   derivation via scalar multiplication, SEC1 point encodings, WIF
//!   envelopes, Base58 addresses, and Zilliqa-style fingerprints.
//!
//! - `codec`
//!   Base58 and Base58Check, used by the WIF and address formats.
//!
//! - `hash`
//!   Hashing collaborators (SHA-256, double SHA-256, HASH160) backing
//!   checksums, addresses, and fingerprints.
//!
//! - `rng`
//!   The entropy interface consumed by the Montgomery ladder's projective
//!   randomisation: an OS-backed source for production and a replayable
//!   source for deterministic regression tests.
//!
//! # Design goals
//!
//! - Explicit semantics over abstraction
//! - No secret-dependent branches in ladder code
//! - Deterministic behavior given a fixed entropy stream
//! - Minimal and explicit API surface
//!
//! This crate deliberately stops below signature schemes: ECDSA, Schnorr,
//! and friends are expected to be layered on top by other Nebula crates.

mod os;

pub mod codec;
pub mod curve;
pub mod field;
pub mod hash;
pub mod keys;
pub mod rng;
pub mod scalar;
