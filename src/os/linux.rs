//! Operating system abstraction layer (Linux)
//!
//! Secure random bytes are obtained from the kernel entropy pool through
//! the `getrandom` system call. Partial reads are handled transparently;
//! they can occur depending on kernel behavior or signal interruptions.

use libc::{c_void, getrandom};

use crate::rng::EntropyError;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Errors
///
/// Returns [`EntropyError::SourceFailed`] when `getrandom` reports an
/// error; the buffer contents are unspecified in that case.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(EntropyError::SourceFailed);
        }

        filled += ret as usize;
    }

    Ok(())
}
