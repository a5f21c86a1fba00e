//! File-backed disk manager.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use stratum_common::constants::PAGE_SIZE;
use stratum_common::types::PageId;

use super::error::{DiskError, DiskResult};
use super::manager::DiskManager;

/// Disk manager backed by a single data file.
///
/// Page `n` lives at byte offset `n * PAGE_SIZE`. The file grows on
/// demand; reading past the current end of file yields zeroed bytes,
/// matching what a freshly allocated page contains.
///
/// The underlying file is wrapped in a mutex so that seek-then-read and
/// seek-then-write pairs are atomic with respect to each other.
pub struct FileDiskManager {
    /// The data file, locked around each positioned operation.
    file: Mutex<File>,
    /// The data file path.
    path: PathBuf,
}

impl FileDiskManager {
    /// Opens (creating if necessary) the data file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DiskResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    fn offset(page_id: PageId) -> u64 {
        page_id.as_u64() * PAGE_SIZE as u64
    }
}

impl DiskManager for FileDiskManager {
    fn read_page(&self, page_id: PageId, buf: &mut [u8]) -> DiskResult<()> {
        debug_assert_eq!(buf.len(), PAGE_SIZE);

        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(Self::offset(page_id)))?;

        let mut total_read = 0;
        while total_read < buf.len() {
            let n = file.read(&mut buf[total_read..])?;
            if n == 0 {
                break;
            }
            total_read += n;
        }

        // Past end of file: the page was never written. Zero-fill so
        // callers observe the same bytes a fresh page would hold.
        buf[total_read..].fill(0);
        Ok(())
    }

    fn write_page(&self, page_id: PageId, buf: &[u8]) -> DiskResult<()> {
        debug_assert_eq!(buf.len(), PAGE_SIZE);

        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(Self::offset(page_id)))?;

        let mut total_written = 0;
        while total_written < buf.len() {
            let n = file.write(&buf[total_written..])?;
            if n == 0 {
                return Err(DiskError::short_write(buf.len(), total_written));
            }
            total_written += n;
        }

        Ok(())
    }

    fn sync(&self) -> DiskResult<()> {
        self.file.lock().sync_all()?;
        Ok(())
    }
}

impl std::fmt::Debug for FileDiskManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDiskManager")
            .field("path", &self.path)
            .finish()
    }
}
