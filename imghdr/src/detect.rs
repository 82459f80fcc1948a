use imghdr_common::error::ErrorWithData;

use crate::registry::SIGNATURES;
use crate::{Error, Format};

/// Number of bytes required for detection
///
/// Signatures and markers are only searched within this many leading bytes.
pub const MIN_HEADER_SIZE: usize = 16;

/// Detects the image format from the leading bytes of `data`
///
/// Returns [`Format::Unknown`] if no signature matches. Fails only if `data`
/// is shorter than [`MIN_HEADER_SIZE`].
///
/// ```
/// # use imghdr::{detect, Error, Format};
/// let jpeg = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0\x01\0\0\0\x01";
/// assert_eq!(detect(jpeg), Ok(Format::Jpeg));
///
/// assert_eq!(detect(&[0; 16]), Ok(Format::Unknown));
/// assert_eq!(
///     detect(&[0; 10]),
///     Err(Error::InsufficientData { len: 10, needed: 16 })
/// );
/// ```
pub fn detect(data: &[u8]) -> Result<Format, Error> {
    let header = data.get(..MIN_HEADER_SIZE).ok_or(Error::InsufficientData {
        len: data.len(),
        needed: MIN_HEADER_SIZE,
    })?;

    for signature in SIGNATURES {
        if signature.matches(header) {
            tracing::debug!("Detected format {}", signature.format());
            return Ok(signature.format());
        }
    }

    tracing::debug!("No signature matched header {header:02x?}");
    Ok(Format::Unknown)
}

/// Image data together with its detected format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedImage {
    format: Format,
    data: Vec<u8>,
}

impl DetectedImage {
    /// Runs [`detect`] on `data` and keeps the data
    ///
    /// The data is returned inside the error if detection fails.
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match detect(&data) {
            Ok(format) => Ok(Self { format, data }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
