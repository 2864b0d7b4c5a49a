//! Single forward pass over a file, producing its byte histogram.
//!
//! Two paths with bit-identical results:
//! - `scan_file` streams through a buffered reader in fixed-size chunks,
//!   notifying a progress observer as bytes are consumed. Memory use is
//!   one read buffer plus the histogram, regardless of file size.
//! - `scan_file_parallel` memory-maps the file and folds per-chunk
//!   partial histograms on the rayon pool, merged by summation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::histogram::ByteHistogram;
use crate::mapped_file::MappedFile;
use crate::progress::ProgressObserver;

/// Read buffer size for the sequential pass; progress is reported once
/// per consumed buffer.
const READ_CHUNK: usize = 64 * 1024;

/// Below this size the parallel path is all overhead; fall back to a
/// plain accumulation over the mapped bytes.
const MIN_PARALLEL_SIZE: usize = 1024 * 1024;

/// Stream `path` once through a buffered reader, counting every byte.
///
/// The observer is told the expected total up front, the running byte
/// count after each chunk, and when the stream is exhausted. Observer
/// calls have no way to feed back into the histogram.
pub fn scan_file(path: &Path, progress: &mut dyn ProgressObserver) -> Result<ByteHistogram> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let total = file
        .metadata()
        .with_context(|| format!("failed to read metadata for {}", path.display()))?
        .len();

    progress.started(total);

    let mut reader = BufReader::with_capacity(READ_CHUNK, file);
    let mut hist = ByteHistogram::new();
    let mut done: u64 = 0;

    loop {
        let chunk = reader
            .fill_buf()
            .with_context(|| format!("failed to read {}", path.display()))?;
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        hist.accumulate(chunk);
        done += len as u64;
        progress.advanced(done);
        reader.consume(len);
    }

    progress.finished();
    log::debug!("scanned {} bytes from {}", hist.total(), path.display());
    Ok(hist)
}

/// Memory-map `path` and build the histogram from parallel partial
/// counts. Merging partial histograms by element-wise summation yields
/// exactly the sequential result, because accumulation is commutative
/// and associative.
pub fn scan_file_parallel(path: &Path) -> Result<ByteHistogram> {
    let mapped = MappedFile::open(path)?;
    let data = mapped.bytes();

    if data.len() < MIN_PARALLEL_SIZE {
        return Ok(ByteHistogram::of(data));
    }

    let num_threads = rayon::current_num_threads().max(1);
    let chunk_size = (data.len() / num_threads).max(MIN_PARALLEL_SIZE);

    let hist = data
        .par_chunks(chunk_size)
        .map(ByteHistogram::of)
        .reduce(ByteHistogram::new, |mut acc, partial| {
            acc.merge(&partial);
            acc
        });

    log::debug!(
        "parallel-scanned {} bytes from {} in {} byte chunks",
        hist.total(),
        path.display(),
        chunk_size
    );
    Ok(hist)
}
