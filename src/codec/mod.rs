//! Binary-to-text codecs.
//!
//! Home of the Base58 and Base58Check encodings used by WIF private-key
//! envelopes and legacy Bitcoin addresses. Hexadecimal and base64 at the
//! crate boundary go through the `hex` and `base64` crates; Base58 has no
//! established ecosystem counterpart and is implemented here.

pub mod base58;
