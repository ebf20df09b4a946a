use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Platform file operations the benchmark depends on
pub trait DiskIO {
    /// Open a file for binary reading
    fn open_read(&self, path: &Path) -> io::Result<File>;

    /// Tell the OS the file will be accessed randomly, disabling readahead
    fn advise_random(&self, file: &File) -> io::Result<()>;
}

/// Platform-specific disk I/O implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDiskIO;

impl PlatformDiskIO {
    pub fn new() -> Self {
        Self
    }
}

impl DiskIO for PlatformDiskIO {
    fn open_read(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().read(true).open(path)
    }

    fn advise_random(&self, file: &File) -> io::Result<()> {
        advise_random(file)
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd"
))]
fn advise_random(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    // posix_fadvise reports failure through its return value, not errno
    let ret = unsafe { libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_RANDOM) };
    if ret != 0 {
        return Err(io::Error::from_raw_os_error(ret));
    }
    Ok(())
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn advise_random(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let ret = unsafe { libc::fcntl(file.as_raw_fd(), libc::F_RDAHEAD, 0) };
    if ret == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

// No readahead hint available here, so there is nothing to fail
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "macos",
    target_os = "ios"
)))]
fn advise_random(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_open_read_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data.bin");
        std::fs::File::create(&path).unwrap().write_all(b"abc").unwrap();

        let disk_io = PlatformDiskIO::new();
        let file = disk_io.open_read(&path).unwrap();
        assert_eq!(file.metadata().unwrap().len(), 3);
    }

    #[test]
    fn test_open_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let disk_io = PlatformDiskIO::new();

        let err = disk_io.open_read(&temp_dir.path().join("missing.bin")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_advise_random_on_regular_file() {
        let file = tempfile::tempfile().unwrap();
        assert!(PlatformDiskIO::new().advise_random(&file).is_ok());
    }

    // fadvise rejects pipes with ESPIPE, and that failure must reach the caller
    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "netbsd"
    ))]
    #[test]
    fn test_advise_random_reports_fadvise_failure() {
        use std::os::unix::io::FromRawFd;

        let mut fds = [0; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        let (reader, _writer) = unsafe { (File::from_raw_fd(fds[0]), File::from_raw_fd(fds[1])) };

        let err = PlatformDiskIO::new().advise_random(&reader).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ESPIPE));
    }
}
