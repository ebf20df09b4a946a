use std::io::{self, Read};

use crate::{GapReadError, Result};

/// Fixed-size read buffer reused across every iteration of the loop
pub struct ReadBuffer {
    buffer: Vec<u8>,
}

impl ReadBuffer {
    /// Allocate a zeroed buffer of `size` bytes
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GapReadError::ConfigError(
                "Buffer size must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            buffer: vec![0; size],
        })
    }

    /// Read from `reader` until the buffer is full or the source runs dry
    ///
    /// Returns the number of bytes filled; anything below `len()` is a
    /// short read. Bytes past the returned count keep stale contents.
    pub fn fill_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        let mut filled = 0;
        while filled < self.buffer.len() {
            match reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// First 8 bytes as a native-endian `u64`
    pub fn leading_u64(&self) -> u64 {
        decode_first_u64(&self.buffer)
    }

    /// Get the buffer size
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[u8] {
        &self.buffer
    }
}

/// Decode the first 8 bytes of `bytes` as a native-endian `u64`
///
/// Inputs shorter than 8 bytes are zero-extended.
pub fn decode_first_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    let n = bytes.len().min(word.len());
    word[..n].copy_from_slice(&bytes[..n]);
    u64::from_ne_bytes(word)
}
