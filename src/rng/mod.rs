//! Entropy sources
//!
//! This module defines the randomness interface consumed by the crate.
//!
//! The only internal consumer is the Montgomery ladder, whose projective
//! randomisation draws one value per scalar multiplication. The interface
//! is deliberately byte-oriented and swappable:
//!
//! - [`OsEntropy`] pulls bytes from the operating system and is the
//!   production source.
//! - [`FixedEntropy`] replays a caller-supplied byte sequence, which makes
//!   randomised operations reproducible in regression tests. This is a
//!   first-class configuration point, not a test-only backdoor: callers
//!   choose the source explicitly at every randomised call site.
//!
//! Failures are surfaced as [`EntropyError`]; consumers retry a bounded
//! number of times before giving up.

use crate::os::sys_random;

/// Errors produced by entropy sources and their consumers.
#[derive(Debug)]
pub enum EntropyError {
    /// The underlying source refused to produce bytes.
    SourceFailed,

    /// A bounded retry loop ran out of attempts (or a replayed sequence
    /// ran out of bytes).
    Exhausted,
}

/// A source of cryptographically secure random bytes.
///
/// Implementations either fill the entire buffer or fail; partial fills
/// are not part of the contract.
pub trait EntropySource {
    /// Fills `out` with random bytes.
    fn rand_bytes(&mut self, out: &mut [u8]) -> Result<(), EntropyError>;
}

/// Entropy from the operating system.
///
/// Delegates to the platform facility (`getrandom` on Linux,
/// `arc4random_buf` on macOS, `BCryptGenRandom` on Windows).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn rand_bytes(&mut self, out: &mut [u8]) -> Result<(), EntropyError> {
        sys_random(out)
    }
}

/// A deterministic source replaying a fixed byte sequence.
///
/// Bytes are handed out in order and never reused. Once the sequence is
/// exhausted, every further request fails with
/// [`EntropyError::Exhausted`], so a test that consumes more randomness
/// than it scripted fails loudly instead of repeating bytes.
#[derive(Clone, Debug)]
pub struct FixedEntropy {
    bytes: Vec<u8>,
    cursor: usize,
}

impl FixedEntropy {
    /// Creates a source that replays `bytes` once.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        FixedEntropy {
            bytes: bytes.into(),
            cursor: 0,
        }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }
}

impl EntropySource for FixedEntropy {
    fn rand_bytes(&mut self, out: &mut [u8]) -> Result<(), EntropyError> {
        if self.remaining() < out.len() {
            return Err(EntropyError::Exhausted);
        }

        out.copy_from_slice(&self.bytes[self.cursor..self.cursor + out.len()]);
        self.cursor += out.len();

        Ok(())
    }
}
