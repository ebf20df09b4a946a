//! I/O operations module
//!
//! Platform file access, the readahead advisory and the reusable read
//! buffer used by the benchmark loop.

pub mod disk;
pub mod buffer;

pub use disk::{DiskIO, PlatformDiskIO};
pub use buffer::{ReadBuffer, decode_first_u64};
