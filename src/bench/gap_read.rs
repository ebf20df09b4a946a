//! Sequential read-with-gaps benchmark
//!
//! Reads `buffer_size` bytes, seeks `gap_size` bytes forward and repeats
//! until a read comes back short. Only the loop itself is timed.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::GapReadConfig;
use crate::io::buffer::ReadBuffer;
use crate::io::disk::{DiskIO, PlatformDiskIO};
use crate::models::GapReadResult;
use crate::util::units::format_bytes;
use crate::{GapReadError, Result};

/// Why the measurement loop stopped
enum LoopEnd {
    ShortRead(usize),
    ReadError(std::io::Error),
    SeekError(std::io::Error),
}

/// Read-with-gaps benchmark executor
pub struct GapReadBenchmark<D: DiskIO = PlatformDiskIO> {
    config: GapReadConfig,
    disk_io: D,
}

impl GapReadBenchmark<PlatformDiskIO> {
    /// Create a new benchmark executor on the platform disk I/O
    pub fn new(config: GapReadConfig) -> Result<Self> {
        Self::with_disk_io(config, PlatformDiskIO::new())
    }
}

impl<D: DiskIO> GapReadBenchmark<D> {
    /// Create a benchmark executor on a specific disk I/O implementation
    pub fn with_disk_io(config: GapReadConfig, disk_io: D) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, disk_io })
    }

    /// Open `path`, disable readahead on it and run the measurement loop
    pub fn run(&self, path: &Path) -> Result<GapReadResult> {
        let mut file = self
            .disk_io
            .open_read(path)
            .map_err(GapReadError::OpenError)?;
        let file_len = file.metadata().map(|m| m.len()).unwrap_or(0);
        debug!("opened {} ({} bytes)", path.display(), file_len);

        self.disk_io
            .advise_random(&file)
            .map_err(GapReadError::AdviseError)?;
        debug!("random access advised for {}", path.display());

        let result = self.measure(&mut file)?;
        info!("{}", result.summary());
        Ok(result)
    }

    /// Run the measurement loop over any seekable source
    ///
    /// A short read ends the loop whether it comes from end of file or from
    /// an I/O error; errors are only logged.
    pub fn measure<R: Read + Seek + ?Sized>(&self, source: &mut R) -> Result<GapReadResult> {
        let mut buffer = ReadBuffer::new(self.config.buffer_size)?;
        let gap = self.config.gap_size as i64;
        let stride = self.config.stride();

        debug!(
            "reading {} blocks with {} gaps",
            format_bytes(self.config.buffer_size as u64),
            format_bytes(self.config.gap_size)
        );

        let mut reads = 0u64;
        let mut sum = 0u64;

        let start = Instant::now();
        let stop = loop {
            match buffer.fill_from(source) {
                Ok(filled) if filled == buffer.len() => {}
                Ok(filled) => break LoopEnd::ShortRead(filled),
                Err(e) => break LoopEnd::ReadError(e),
            }

            reads += 1;
            sum = sum.wrapping_add(buffer.leading_u64());

            if let Err(e) = source.seek(SeekFrom::Current(gap)) {
                break LoopEnd::SeekError(e);
            }
        };
        let elapsed = start.elapsed();

        // Offset of the read that did not complete
        let offset = reads.saturating_mul(stride);
        match stop {
            LoopEnd::ShortRead(filled) => {
                debug!("short read of {} bytes at offset {}", filled, offset)
            }
            LoopEnd::ReadError(e) => warn!("read failed at offset {}: {}", offset, e),
            LoopEnd::SeekError(e) => warn!("seek past gap failed before offset {}: {}", offset, e),
        }

        Ok(GapReadResult::new(reads, sum, elapsed, self.config))
    }
}
