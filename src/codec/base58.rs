//! Base58 and Base58Check.
//!
//! Base58 is the Bitcoin alphabet radix encoding: the byte string is read
//! as a big-endian integer and rewritten in base 58, with one `1` emitted
//! per leading zero byte (the integer conversion cannot represent them).
//! Base58Check appends the first four bytes of a double-SHA256 of the
//! payload before encoding, so transmission errors are detected at decode
//! time.

use crate::hash::dsha256;
use crate::scalar::Int;

/// The Bitcoin Base58 alphabet: no `0`, `O`, `I`, or `l`.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the Base58Check checksum in bytes.
const CHECKSUM_LEN: usize = 4;

/// Errors produced while decoding Base58 text.
#[derive(Debug)]
pub enum Base58Error {
    /// The input contained a character outside the Base58 alphabet.
    InvalidCharacter,

    /// A checked payload was too short to carry a checksum.
    InvalidLength,

    /// The embedded checksum did not match the payload.
    InvalidChecksum,
}

/// Encodes bytes as Base58 text.
///
/// The empty input encodes to the empty string.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    let fifty_eight = Int::from(58u32);
    let mut value = Int::from_be_bytes(bytes);
    let mut digits = Vec::new();

    while !value.is_zero() {
        let remainder = &value % &fifty_eight;
        value = &value / &fifty_eight;

        digits.push(ALPHABET[remainder.to_usize_digit()]);
    }

    let mut out = String::with_capacity(zeros + digits.len());

    for _ in 0..zeros {
        out.push('1');
    }

    for &digit in digits.iter().rev() {
        out.push(digit as char);
    }

    out
}

/// Decodes Base58 text to bytes.
///
/// # Errors
///
/// [`Base58Error::InvalidCharacter`] on any character outside the
/// alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = text.bytes().take_while(|&b| b == b'1').count();

    let fifty_eight = Int::from(58u32);
    let mut value = Int::zero();

    for byte in text.bytes() {
        let index = ALPHABET
            .iter()
            .position(|&c| c == byte)
            .ok_or(Base58Error::InvalidCharacter)?;

        value = &value * &fifty_eight + Int::from(index as u32);
    }

    let digits = if value.is_zero() {
        Vec::new()
    } else {
        value.to_be_bytes()
    };

    let mut out = vec![0u8; zeros];
    out.extend_from_slice(&digits);

    Ok(out)
}

/// Encodes a payload with its four-byte double-SHA256 checksum appended.
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = dsha256(payload);

    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    encode(&data)
}

/// Decodes Base58Check text, verifying and stripping the checksum.
///
/// # Errors
///
/// - [`Base58Error::InvalidCharacter`] on malformed Base58.
/// - [`Base58Error::InvalidLength`] when fewer than four bytes decode.
/// - [`Base58Error::InvalidChecksum`] when the checksum does not match.
pub fn check_decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let data = decode(text)?;

    if data.len() < CHECKSUM_LEN {
        return Err(Base58Error::InvalidLength);
    }

    let (payload, checksum) = data.split_at(data.len() - CHECKSUM_LEN);

    if dsha256(payload)[..CHECKSUM_LEN] != *checksum {
        return Err(Base58Error::InvalidChecksum);
    }

    Ok(payload.to_vec())
}
