//! Read-only file access for raw resource blobs

use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;

/// A resource blob mapped into memory.
///
/// Records scanned from [`BlobFile::as_bytes`] borrow straight from the
/// mapping, so nothing is copied until a record is rebuilt.
pub struct BlobFile {
    mmap: Option<Mmap>,
}

impl BlobFile {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let size = file.metadata()?.len();

        // mmap rejects zero-length files
        if size == 0 {
            return Ok(Self { mmap: None });
        }

        // SAFETY: the mapping is read-only and the file is not modified
        // through this process while the mapping is alive.
        let mmap = unsafe { Mmap::map(&file) }?;

        #[cfg(unix)]
        {
            let _ = mmap.advise(memmap2::Advice::Sequential);
        }

        Ok(Self { mmap: Some(mmap) })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
