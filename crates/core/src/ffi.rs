//! C FFI bindings for mobile and native embedders

use crate::params::{DIGEST_HEX_LEN, DIGEST_SIZE};
use crate::{H416, hash};
use core::slice;

/// Opaque hasher handle for FFI
pub struct H416Handle {
    inner: H416,
}

/// Create a new streaming hasher
/// Returns a pointer to the hasher (caller must free with h416_free)
#[unsafe(no_mangle)]
pub extern "C" fn h416_new() -> *mut H416Handle {
    let hasher = Box::new(H416Handle { inner: H416::new() });
    Box::into_raw(hasher)
}

/// Free a hasher instance
#[unsafe(no_mangle)]
pub extern "C" fn h416_free(hasher: *mut H416Handle) {
    if !hasher.is_null() {
        unsafe {
            let _ = Box::from_raw(hasher);
        }
    }
}

/// Absorb input bytes into a streaming hasher
/// - hasher: pointer from h416_new()
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
#[unsafe(no_mangle)]
pub extern "C" fn h416_update(hasher: *mut H416Handle, input: *const u8, input_len: usize) {
    if hasher.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    unsafe {
        let hasher = &mut *hasher;
        hasher.inner.update(input_slice(input, input_len));
    }
}

/// Write the digest of everything absorbed so far and reset the hasher
/// - output: pointer to a 52-byte buffer
#[unsafe(no_mangle)]
pub extern "C" fn h416_finalize(hasher: *mut H416Handle, output: *mut u8) {
    if hasher.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let hasher = &mut *hasher;
        let digest = hasher.inner.finalize_reset();
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&digest.to_bytes());
    }
}

/// One-shot digest
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - output: pointer to a 52-byte buffer for the result
#[unsafe(no_mangle)]
pub extern "C" fn h416_digest(input: *const u8, input_len: usize, output: *mut u8) {
    if (input.is_null() && input_len != 0) || output.is_null() {
        return;
    }

    unsafe {
        let digest = hash(input_slice(input, input_len));
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&digest.to_bytes());
    }
}

/// One-shot digest rendered as ASCII hex
/// - output: pointer to a 104-byte buffer (not NUL-terminated)
#[unsafe(no_mangle)]
pub extern "C" fn h416_digest_hex(input: *const u8, input_len: usize, output: *mut u8) {
    if (input.is_null() && input_len != 0) || output.is_null() {
        return;
    }

    unsafe {
        let hex = hash(input_slice(input, input_len)).to_hex();
        slice::from_raw_parts_mut(output, DIGEST_HEX_LEN).copy_from_slice(hex.as_bytes());
    }
}

/// Benchmark: compute N digests and return total microseconds
#[unsafe(no_mangle)]
pub extern "C" fn h416_benchmark(iterations: u32) -> u64 {
    use std::time::Instant;

    let input = b"benchmark test input data for mobile";

    let start = Instant::now();
    for i in 0..iterations {
        let mut data = input.to_vec();
        data.extend_from_slice(&i.to_le_bytes());
        let _ = hash(&data);
    }
    let elapsed = start.elapsed();

    elapsed.as_micros() as u64
}

/// Get hash rate (hashes per second) from a benchmark run
#[unsafe(no_mangle)]
pub extern "C" fn h416_hashrate(iterations: u32, microseconds: u64) -> f64 {
    if microseconds == 0 {
        return 0.0;
    }
    (iterations as f64) / (microseconds as f64 / 1_000_000.0)
}

/// Borrow `len` bytes at `ptr`, treating a null pointer as empty.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest;

    #[test]
    fn test_streaming_handle_matches_one_shot() {
        let handle = h416_new();
        let message = b"Hello, World!";
        h416_update(handle, message.as_ptr(), 5);
        h416_update(handle, message[5..].as_ptr(), message.len() - 5);

        let mut streamed = [0u8; DIGEST_SIZE];
        h416_finalize(handle, streamed.as_mut_ptr());
        h416_free(handle);

        let mut one_shot = [0u8; DIGEST_SIZE];
        h416_digest(message.as_ptr(), message.len(), one_shot.as_mut_ptr());
        assert_eq!(streamed, one_shot);
        assert_eq!(one_shot, hash(message).to_bytes());
    }

    #[test]
    fn test_hex_output() {
        let mut out = [0u8; DIGEST_HEX_LEN];
        h416_digest_hex(core::ptr::null(), 0, out.as_mut_ptr());
        assert_eq!(std::str::from_utf8(&out).unwrap(), digest(b""));
    }

    #[test]
    fn test_null_handles_are_ignored() {
        h416_free(core::ptr::null_mut());
        h416_update(core::ptr::null_mut(), core::ptr::null(), 0);
        h416_finalize(core::ptr::null_mut(), core::ptr::null_mut());
        assert_eq!(h416_hashrate(10, 0), 0.0);
        assert_eq!(h416_hashrate(10, 1_000_000), 10.0);
    }
}
