use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// A read-only memory-mapped file, backing the parallel scan path with a
/// zero-copy view of the whole input.
///
/// Zero-length files cannot be mapped, so an empty input carries no map
/// and exposes an empty slice.
#[derive(Debug)]
pub struct MappedFile {
    mmap: Option<Mmap>,
    len: u64,
}

impl MappedFile {
    /// Open and memory-map a file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        let metadata = file
            .metadata()
            .with_context(|| format!("failed to read metadata for {}", path.display()))?;

        let len = metadata.len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: the file handle stays alive via the Mmap; the file
            // must not be modified externally while mapped.
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("failed to mmap {}", path.display()))?;
            Some(mmap)
        };

        Ok(Self { mmap, len })
    }

    /// Total file size in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The entire file contents as one slice.
    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
