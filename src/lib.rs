//! gapread - sequential read-with-gaps disk benchmark
//!
//! Reads a fixed-size block, skips a fixed-size gap and repeats until the
//! end of the file, so an operator can observe how block size, gap size,
//! readahead and page-cache state affect real disk reads.

use std::fmt;

pub mod bench;
pub mod config;
pub mod io;
pub mod models;
pub mod util;

/// Errors that stop a run before a report is produced
#[derive(Debug)]
pub enum GapReadError {
    /// Wrong number of command-line arguments
    UsageError {
        /// Invocation name printed in the usage line
        program: String,
    },
    /// The target file could not be opened for reading
    OpenError(std::io::Error),
    /// The random-access hint was rejected by the operating system
    AdviseError(std::io::Error),
    /// Buffer or gap size out of range
    ConfigError(String),
}

impl GapReadError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl fmt::Display for GapReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapReadError::UsageError { program } => write!(f, "Usage: {} <test-file>", program),
            GapReadError::OpenError(err) => write!(f, "{}", err),
            GapReadError::AdviseError(_) => write!(f, "fadvise failed"),
            GapReadError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GapReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GapReadError::OpenError(err) | GapReadError::AdviseError(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for gapread operations
pub type Result<T> = std::result::Result<T, GapReadError>;

pub const APP_NAME: &str = "gapread";

/// Bytes read per iteration (64 KiB)
pub const BUFFER_SIZE: usize = 1 << 16;

/// Bytes skipped after every full read (64 KiB)
pub const GAP_SIZE: u64 = 1 << 16;

pub const EXIT_FAILURE: i32 = 1;

/// Environment variable holding the `env_logger` filter
pub const LOG_ENV: &str = "GAPREAD_LOG";
