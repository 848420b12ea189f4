use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

/// Threshold above which we use mmap instead of buffered read.
/// mmap has overhead from page table setup; for small files buffered read wins.
const MMAP_THRESHOLD: u64 = 64 * 1024; // 64KB

/// Largest file accepted by the in-memory text path. Address-space bound:
/// a comparison holds both files plus their line tables at once.
pub const MAX_INPUT_BYTES: u64 = isize::MAX as u64;

/// Errors from loading a file into memory.
#[derive(Debug, thiserror::Error)]
pub enum SlurpError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("file too large to load ({0} bytes)")]
    TooLarge(u64),
    #[error("cannot allocate {0} bytes")]
    Alloc(usize),
}

/// Read a file fully into memory, choosing mmap for large files and
/// buffered read for small ones.
///
/// A zero-length file yields a valid empty buffer.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>, SlurpError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > MAX_INPUT_BYTES {
        return Err(SlurpError::TooLarge(len));
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(len as usize)
        .map_err(|_| SlurpError::Alloc(len as usize))?;

    if len >= MMAP_THRESHOLD {
        let mmap = map_open(&file)?;
        buf.extend_from_slice(&mmap);
    } else {
        file.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

/// Memory-map an already-open file for zero-copy read access.
///
/// The mapping covers the whole file regardless of the handle's read
/// position, so a handle that has already served a sniff prefix maps
/// the same way a fresh one would.
pub fn map_open(file: &File) -> io::Result<Mmap> {
    // SAFETY: read-only mapping; the file must not be truncated while the
    // mapping is alive, which holds for the process-and-drop usage here.
    let mmap = unsafe { Mmap::map(file)? };

    #[cfg(target_os = "linux")]
    unsafe {
        libc::madvise(
            mmap.as_ptr() as *mut libc::c_void,
            mmap.len(),
            libc::MADV_SEQUENTIAL,
        );
    }

    Ok(mmap)
}

/// Memory-map a file by path.
pub fn mmap_file(path: &Path) -> io::Result<Mmap> {
    let file = File::open(path)?;
    map_open(&file)
}

/// Read up to `limit` bytes from the start of an open file.
/// The handle is left positioned after the bytes read.
pub fn read_prefix(file: &mut File, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Slurp the remainder of an open file onto an already-read prefix,
/// returning the complete contents. Avoids a second open when the caller
/// has consumed a sniff window from the handle.
pub fn read_rest(mut file: File, prefix: Vec<u8>) -> Result<Vec<u8>, SlurpError> {
    let len = file.metadata()?.len();
    if len > MAX_INPUT_BYTES {
        return Err(SlurpError::TooLarge(len));
    }

    let mut buf = prefix;
    let remaining = (len as usize).saturating_sub(buf.len());
    buf.try_reserve_exact(remaining)
        .map_err(|_| SlurpError::Alloc(remaining))?;
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
