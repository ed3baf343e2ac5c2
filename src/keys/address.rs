//! Public-key address formats.
//!
//! Two address derivations are provided on top of the SEC1 encodings:
//!
//! - **P2PKH**: `Base58Check(version || RIPEMD160(SHA256(pubkey)))`,
//!   the legacy Bitcoin address format.
//! - **Fingerprint**: the last 20 bytes of `SHA256(pubkey)` as uppercase
//!   hexadecimal, the Zilliqa-style account identifier.

use crate::codec::base58;
use crate::curve::Curve;
use crate::hash::{hash160, sha256};

use super::core::{Network, PublicKey};

/// Derives the Base58Check P2PKH address of a public key.
///
/// The `compressed` flag selects which SEC1 encoding is hashed; the two
/// encodings yield unrelated addresses, so it must match the form the
/// key is published in.
pub fn p2pkh(public: &PublicKey, curve: &Curve, network: &Network, compressed: bool) -> String {
    let encoded = if compressed {
        public.to_sec1_compressed(curve)
    } else {
        public.to_sec1_uncompressed(curve)
    };

    let digest = hash160(&encoded);

    let mut payload = Vec::with_capacity(21);
    payload.push(network.p2pkh_prefix);
    payload.extend_from_slice(&digest);

    base58::check_encode(&payload)
}

/// Derives the Zilliqa-style fingerprint of a public key.
///
/// The compressed SEC1 encoding is hashed with SHA-256 and the last 20
/// bytes are returned as 40 uppercase hexadecimal characters.
pub fn fingerprint(public: &PublicKey, curve: &Curve) -> String {
    let digest = sha256(&public.to_sec1_compressed(curve));

    hex::encode_upper(&digest[12..])
}
