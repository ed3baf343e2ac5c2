//! Key material and key-derived formats.
//!
//! This module defines private-key material, public-key derivation, and
//! the serialisation formats layered on top of them.
//!
//! It includes:
//! - private scalars with range enforcement and scrub-on-drop,
//! - public points derived by scalar multiplication on either curve form,
//! - SEC1 point encodings (compressed and uncompressed),
//! - WIF private-key envelopes,
//! - Base58Check P2PKH addresses and Zilliqa-style fingerprints.
//!
//! No signing or verification logic lives here, only key structure and
//! manipulation: signature schemes belong to higher layers.
//!
//! ## Derivation
//!
//! [`PublicKey::derive`] dispatches on the curve form. Short-Weierstrass
//! curves use projective double-and-add; Montgomery curves use the
//! constant-time XZ ladder and recover the affine `y` afterwards as the
//! smaller square root, so the result is deterministic even though the
//! ladder itself is randomised.

pub mod address;
pub mod wif;

mod core;

pub use self::core::{KeyError, Network, PrivateKey, PublicKey};
