//! Benchmark configuration
//!
//! The binary always runs with the build-time constants; the builders exist
//! so the library and its tests can measure other shapes.

use serde::{Deserialize, Serialize};
use crate::{GapReadError, Result, BUFFER_SIZE, GAP_SIZE};

/// Shape of the read-with-gaps access pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReadConfig {
    /// Bytes read per iteration
    pub buffer_size: usize,
    /// Bytes skipped after every full read
    pub gap_size: u64,
}

impl Default for GapReadConfig {
    fn default() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
            gap_size: GAP_SIZE,
        }
    }
}

impl GapReadConfig {
    /// Create a configuration from the build-time constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read size
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Set the gap size
    pub fn with_gap_size(mut self, size: u64) -> Self {
        self.gap_size = size;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(GapReadError::ConfigError(
                "Buffer size must be greater than 0".to_string(),
            ));
        }

        if self.gap_size == 0 {
            return Err(GapReadError::ConfigError(
                "Gap size must be greater than 0".to_string(),
            ));
        }

        // The gap is applied as a relative seek
        if self.gap_size > i64::MAX as u64 {
            return Err(GapReadError::ConfigError(format!(
                "Gap size too large: {} bytes (max: {} bytes)",
                self.gap_size,
                i64::MAX
            )));
        }

        Ok(())
    }

    /// Distance between the starts of two consecutive reads
    pub fn stride(&self) -> u64 {
        (self.buffer_size as u64).saturating_add(self.gap_size)
    }

    /// Number of full reads a file of `file_size` bytes yields
    ///
    /// Reads start at `0, stride, 2 * stride, ...` and stop at the first
    /// offset with fewer than `buffer_size` bytes left.
    pub fn expected_reads(&self, file_size: u64) -> u64 {
        let buffer_size = self.buffer_size as u64;
        if buffer_size == 0 || file_size < buffer_size {
            return 0;
        }
        (file_size - buffer_size) / self.stride() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let config = GapReadConfig::new();
        assert_eq!(config.buffer_size, 65536);
        assert_eq!(config.gap_size, 65536);
        assert_eq!(config.stride(), 131072);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let config = GapReadConfig::new().with_buffer_size(0);
        assert!(matches!(config.validate(), Err(GapReadError::ConfigError(_))));

        let config = GapReadConfig::new().with_gap_size(0);
        assert!(matches!(config.validate(), Err(GapReadError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_unseekable_gap() {
        let config = GapReadConfig::new().with_gap_size(u64::MAX);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Gap size too large"));
    }

    #[test]
    fn test_expected_reads() {
        let config = GapReadConfig::new();
        assert_eq!(config.expected_reads(0), 0);
        assert_eq!(config.expected_reads(65535), 0);
        assert_eq!(config.expected_reads(65536), 1);
        assert_eq!(config.expected_reads(131072), 1);
        assert_eq!(config.expected_reads(131072 + 65535), 1);
        assert_eq!(config.expected_reads(131072 + 65536), 2);
        assert_eq!(config.expected_reads(128 * 1024 * 1024), 1024);
    }

    #[test]
    fn test_expected_reads_uneven_shape() {
        let config = GapReadConfig::new().with_buffer_size(10).with_gap_size(3);
        // reads at 0, 13, 26; the one at 39 would need 49 bytes
        assert_eq!(config.expected_reads(48), 3);
        assert_eq!(config.expected_reads(49), 4);
    }
}
