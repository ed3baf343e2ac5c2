//! Wallet Import Format (WIF) private-key envelopes.
//!
//! A WIF string is the Base58Check encoding of
//!
//! ```text
//! network.wif_prefix || k (32 bytes, big-endian) [|| 0x01]
//! ```
//!
//! where the trailing `0x01` marks a key whose public key is meant to be
//! used in compressed form. The four-byte double-SHA256 checksum added by
//! Base58Check detects transcription errors at decode time.

use zeroize::Zeroize;

use crate::codec::base58;
use crate::codec::base58::Base58Error;
use crate::curve::Curve;

use super::core::{Network, PrivateKey};

/// Errors produced while decoding a WIF string.
#[derive(Debug)]
pub enum WifError {
    /// The text is not valid Base58.
    InvalidBase58,

    /// The embedded checksum does not match.
    InvalidChecksum,

    /// The payload has neither the compressed nor the uncompressed length.
    InvalidLength,

    /// The payload has the compressed length but no `0x01` marker.
    InvalidCompressionFlag,

    /// The embedded scalar is zero or not below the curve order.
    ScalarOutOfRange,
}

impl From<Base58Error> for WifError {
    fn from(error: Base58Error) -> Self {
        match error {
            Base58Error::InvalidCharacter => WifError::InvalidBase58,
            Base58Error::InvalidLength => WifError::InvalidLength,
            Base58Error::InvalidChecksum => WifError::InvalidChecksum,
        }
    }
}

/// The result of decoding a WIF string.
#[derive(Debug)]
pub struct DecodedWif {
    /// The embedded private key.
    pub private: PrivateKey,

    /// The network version byte the envelope was encoded for.
    pub wif_prefix: u8,

    /// Whether the envelope carried the compressed-public-key marker.
    pub compressed: bool,
}

/// Encodes a private key as a WIF string.
///
/// With `compressed` set, the `0x01` marker is appended before the
/// checksum, signalling that the corresponding public key should be
/// serialised in compressed form.
pub fn encode(private: &PrivateKey, network: &Network, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);

    payload.push(network.wif_prefix);
    payload.extend_from_slice(&private.to_be_bytes());

    if compressed {
        payload.push(0x01);
    }

    let encoded = base58::check_encode(&payload);
    payload.zeroize();

    encoded
}

/// Decodes a WIF string, validating the checksum and the embedded scalar
/// against the given curve's order.
///
/// The version byte is returned as-is; mapping it back to a network is
/// left to the caller, since WIF prefixes are not unique across chains.
pub fn decode(text: &str, curve: &Curve) -> Result<DecodedWif, WifError> {
    let mut payload = base58::check_decode(text)?;

    let compressed = match payload.len() {
        33 => false,
        34 if payload[33] == 0x01 => true,
        34 => {
            payload.zeroize();
            return Err(WifError::InvalidCompressionFlag);
        }
        _ => {
            payload.zeroize();
            return Err(WifError::InvalidLength);
        }
    };

    let wif_prefix = payload[0];

    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(&payload[1..33]);
    payload.zeroize();

    let result = PrivateKey::from_be_bytes(&key_bytes, curve);
    key_bytes.zeroize();

    let private = result.map_err(|_| WifError::ScalarOutOfRange)?;

    Ok(DecodedWif {
        private,
        wif_prefix,
        compressed,
    })
}
