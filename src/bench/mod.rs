//! Benchmark engine module
//!
//! Contains the read-with-gaps measurement loop.

pub mod gap_read;

pub use gap_read::GapReadBenchmark;
