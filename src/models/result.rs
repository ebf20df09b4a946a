//! Benchmark result data model
//!
//! Holds the counters of one run and renders the three-line report.

use crate::config::GapReadConfig;
use crate::util::units::{
    calculate_iops, calculate_throughput_mbps, format_bytes, format_duration, format_latency,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of one pass over the target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReadResult {
    /// Number of full-size reads
    pub reads: u64,
    /// Wrapping sum of the leading 8 bytes of every read block
    pub sum: u64,
    /// Time spent inside the read loop
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
    /// Shape the run used
    pub config: GapReadConfig,
}

impl GapReadResult {
    pub fn new(reads: u64, sum: u64, elapsed: Duration, config: GapReadConfig) -> Self {
        Self {
            reads,
            sum,
            elapsed,
            config,
        }
    }

    /// Elapsed time in whole milliseconds, truncated
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Bytes actually transferred from the file
    pub fn bytes_read(&self) -> u64 {
        self.reads.saturating_mul(self.config.buffer_size as u64)
    }

    /// Bytes of the file covered by the reads and the gaps after them
    pub fn bytes_spanned(&self) -> u64 {
        self.reads.saturating_mul(self.config.stride())
    }

    /// The report, one line per entry
    pub fn report_lines(&self) -> [String; 3] {
        [
            format!("# of reads: {}", self.reads),
            format!("Sum of reads: {}", self.sum),
            format!("Elapsed milliseconds: {}", self.elapsed_millis()),
        ]
    }

    /// Mean time per read, zero when nothing was read
    pub fn average_latency(&self) -> Duration {
        if self.reads == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.elapsed.as_nanos() / self.reads as u128) as u64)
    }

    /// Get a human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "read {} in {} blocks over {} of file in {} - {:.2} MB/s - {:.0} IOPS - {} avg",
            format_bytes(self.bytes_read()),
            format_bytes(self.config.buffer_size as u64),
            format_bytes(self.bytes_spanned()),
            format_duration(self.elapsed),
            calculate_throughput_mbps(self.bytes_read(), self.elapsed),
            calculate_iops(self.reads, self.elapsed),
            format_latency(self.average_latency()),
        )
    }
}

impl fmt::Display for GapReadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [reads, sum, elapsed] = self.report_lines();
        writeln!(f, "{}", reads)?;
        writeln!(f, "{}", sum)?;
        write!(f, "{}", elapsed)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_nanos() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}
