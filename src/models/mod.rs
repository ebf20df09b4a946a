//! Data models module
//!
//! Contains the result of a benchmark run and its report rendering.

pub mod result;

pub use result::GapReadResult;
