//! Rotating file writer with size-based rotation and backup retention.
//!
//! Keeps the plugin log from growing without bound: once the file passes the
//! size threshold it is renamed with a timestamp suffix and a fresh file is
//! started. Only the newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Size-rotating log file.
///
/// Implements [`io::Write`]; the subscriber wraps it in a `Mutex`, which
/// `tracing-subscriber` accepts as a `MakeWriter`.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > limit, rename the file to `<name>.<timestamp>-<seq>`
/// 3. Remove the oldest backups beyond the retention limit
pub struct FileWriter {
    file_path: PathBuf,
    /// Opened lazily on first write.
    file: Option<File>,
    max_bytes: u64,
    max_backups: usize,
    /// Disambiguates backups rotated within the same millisecond.
    rotations: u32,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            max_bytes,
            max_backups,
            rotations: 0,
        }
    }

    fn check_and_rotate(&mut self) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                self.file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn file_name(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(String::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }

    fn rotate_files(&mut self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        self.rotations = self.rotations.wrapping_add(1);
        let backup_path = self
            .file_path
            .with_file_name(format!("{}.{stamp}-{:04}", self.file_name()?, self.rotations));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first. Backup
    /// names sort chronologically.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_and_rotate()?;

        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            self.file = Some(file);
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.as_mut().map_or(Ok(()), Write::flush)
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
