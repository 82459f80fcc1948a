//! Detection for files on disk

use std::io::Read;
use std::path::Path;

use crate::{detect, Error, Format, MIN_HEADER_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to open file: {0}")]
    Open(std::io::Error),
    #[error("Failed to read file header: {0}")]
    Read(std::io::Error),
    #[error(transparent)]
    Detect(#[from] Error),
}

/// Reads up to [`MIN_HEADER_SIZE`] bytes from the start of the file
///
/// Shorter files are returned as they are.
pub fn read_header(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(FileError::Open)?;

    let mut header = Vec::with_capacity(MIN_HEADER_SIZE);
    let limit = u64::try_from(MIN_HEADER_SIZE).unwrap_or(u64::MAX);
    file.take(limit)
        .read_to_end(&mut header)
        .map_err(FileError::Read)?;

    tracing::debug!("Read {} header bytes from {}", header.len(), path.display());

    Ok(header)
}

/// Detects the format of the file at `path`
///
/// Files shorter than [`MIN_HEADER_SIZE`] fail with
/// [`Error::InsufficientData`].
pub fn detect_file(path: impl AsRef<Path>) -> Result<Format, FileError> {
    let header = read_header(path)?;
    Ok(detect(&header)?)
}
