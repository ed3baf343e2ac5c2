//! Hashing collaborators.
//!
//! The curve kernel itself never hashes, but the formats layered on top
//! of it do: WIF envelopes and Base58Check addresses carry double-SHA256
//! checksums, P2PKH addresses are built from HASH160 digests, and
//! Zilliqa-style fingerprints truncate a single SHA-256. The digest
//! implementations come from the RustCrypto `sha2` and `ripemd` crates;
//! this module only fixes the compositions used across the crate.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Returns `SHA-256(data)`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Returns `SHA-256(SHA-256(data))`, the Base58Check checksum digest.
pub fn dsha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Returns `RIPEMD-160(SHA-256(data))`, the P2PKH address digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}
