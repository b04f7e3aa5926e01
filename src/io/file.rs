//! Sequential read access over an OS file handle.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Result, VisionError};

/// A read-only file with a size fixed at open time and a tracked position.
///
/// # Example
///
/// ```rust,ignore
/// use vision::io::SequentialFile;
///
/// let mut file = SequentialFile::open("test.bin")?;
/// let mut buffer = vec![0u8; file.size() as usize];
/// let read = file.read_fully(&mut buffer)?;
/// assert!(file.at_end());
/// ```
#[derive(Debug)]
pub struct SequentialFile {
    /// `None` once closed.
    file: Option<File>,
    path: PathBuf,
    size: u64,
    pos: u64,
}

impl SequentialFile {
    /// Open a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| VisionError::Open {
            path: path.clone(),
            source,
        })?;
        let size = file.metadata()?.len();

        Ok(Self {
            file: Some(file),
            path,
            size,
            pos: 0,
        })
    }

    /// File size in bytes, as reported at open time.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current read position.
    #[must_use]
    pub fn tell(&self) -> u64 {
        self.pos
    }

    /// Whether the position has reached the reported size.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.size
    }

    /// Whether the handle is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn handle(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or_else(|| {
            VisionError::Io(io::Error::other(format!(
                "file '{}' is closed",
                self.path.display()
            )))
        })
    }

    /// Read until `buf` is full or the file ends.
    ///
    /// Returns the number of bytes read, which is less than `buf.len()` only
    /// at end of file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the handle is closed or the read fails.
    pub fn read_fully(&mut self, buf: &mut [u8]) -> Result<usize> {
        let file = self.handle()?;
        let mut filled = 0;
        while filled < buf.len() {
            match file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.pos += filled as u64;
        Ok(filled)
    }

    /// Move the read position.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the handle is closed or the seek fails.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let new_pos = self.handle()?.seek(pos)?;
        self.pos = new_pos;
        Ok(new_pos)
    }

    /// Release the OS handle. Further reads fail; closing twice is a no-op.
    pub fn close(&mut self) {
        self.file = None;
    }
}
