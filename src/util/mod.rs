//! Utility functions module
//!
//! Contains helpers for formatting sizes, durations and rates.

pub mod units;

pub use units::{
    format_bytes, format_duration, format_latency,
    calculate_throughput_mbps, calculate_iops,
};
