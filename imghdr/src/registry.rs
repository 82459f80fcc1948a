//! Magic byte signatures of all supported formats
//!
//! [`SIGNATURES`] is checked front to back and the first match wins. Longer
//! and more specific signatures therefore have to come before shorter ones
//! they could be confused with.

use crate::{Format, MIN_HEADER_SIZE};

pub const JPEG_MAGIC_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF];
pub const PNG_MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];
pub const GIF_MAGIC_BYTES: &[u8] = b"GIF8";
pub const BMP_MAGIC_BYTES: &[u8] = b"BM";
pub const RIFF_MAGIC_BYTES: &[u8] = b"RIFF";
pub const WEBP_MAGIC_BYTES: &[u8] = b"WEBP";
pub const TIFF_LE_MAGIC_BYTES: &[u8] = b"II*\0";
pub const TIFF_BE_MAGIC_BYTES: &[u8] = b"MM\0*";

/// Magic bytes identifying one [`Format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    format: Format,
    magic: &'static [u8],
    marker: Option<&'static [u8]>,
}

impl Signature {
    const fn new(format: Format, magic: &'static [u8]) -> Self {
        Self {
            format,
            magic,
            marker: None,
        }
    }

    /// Signature that additionally requires `marker` somewhere in the header
    const fn with_marker(format: Format, magic: &'static [u8], marker: &'static [u8]) -> Self {
        Self {
            format,
            magic,
            marker: Some(marker),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Bytes the data has to start with
    pub fn magic(&self) -> &'static [u8] {
        self.magic
    }

    /// Bytes that have to appear anywhere in the inspected header
    ///
    /// Used for container formats like RIFF where the prefix alone is shared
    /// with other formats.
    pub fn marker(&self) -> Option<&'static [u8]> {
        self.marker
    }

    /// Checks the prefix and, if present, the marker
    ///
    /// ```
    /// # use imghdr::{registry, Format};
    /// let webp = registry::signature_for(Format::Webp).unwrap();
    /// assert!(webp.matches(b"RIFF\x24\0\0\0WEBPVP8 "));
    /// assert!(!webp.matches(b"RIFF\x24\0\0\0WAVEfmt "));
    /// ```
    pub fn matches(&self, header: &[u8]) -> bool {
        if !header.starts_with(self.magic) {
            return false;
        }

        match self.marker {
            Some(marker) => {
                let found = contains(header, marker);
                if !found {
                    tracing::trace!(
                        "Prefix of {} matched but marker {marker:x?} is missing",
                        self.format
                    );
                }
                found
            }
            None => true,
        }
    }
}

/// All known signatures in the order they are checked
pub const SIGNATURES: &[Signature] = &[
    Signature::new(Format::Png, PNG_MAGIC_BYTES),
    Signature::new(Format::Gif, GIF_MAGIC_BYTES),
    Signature::with_marker(Format::Webp, RIFF_MAGIC_BYTES, WEBP_MAGIC_BYTES),
    Signature::new(Format::Tiff, TIFF_LE_MAGIC_BYTES),
    Signature::new(Format::TiffBe, TIFF_BE_MAGIC_BYTES),
    Signature::new(Format::Jpeg, JPEG_MAGIC_BYTES),
    Signature::new(Format::Bmp, BMP_MAGIC_BYTES),
];

const fn signatures_fit_header(signatures: &[Signature]) -> bool {
    match signatures {
        [] => true,
        [first, rest @ ..] => {
            let marker_len = match first.marker {
                Some(marker) => marker.len(),
                None => 0,
            };
            first.magic.len() <= MIN_HEADER_SIZE
                && marker_len <= MIN_HEADER_SIZE
                && signatures_fit_header(rest)
        }
    }
}

static_assertions::const_assert!(signatures_fit_header(SIGNATURES));

/// Returns the signature of `format`
///
/// [`Format::Unknown`] has no signature.
pub fn signature_for(format: Format) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|x| x.format == format)
}

/// Display name for a raw format identifier
///
/// Values that don't belong to any [`Format`] are reported as `"Unknown"`.
///
/// ```
/// assert_eq!(imghdr::registry::name_for(2), "PNG");
/// assert_eq!(imghdr::registry::name_for(42), "Unknown");
/// ```
pub fn name_for(raw: u8) -> &'static str {
    Format::try_from(raw).unwrap_or_default().name()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|x| x == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_format_has_one_signature() {
        for format in Format::VARIANTS {
            let n = SIGNATURES.iter().filter(|x| x.format == *format).count();
            if format.is_known() {
                assert_eq!(n, 1, "{format}");
            } else {
                assert_eq!(n, 0);
            }
        }

        assert!(signature_for(Format::Unknown).is_none());
    }

    #[test]
    fn signature_bytes() {
        let magic_hex = |format| hex::encode_upper(signature_for(format).unwrap().magic());

        assert_eq!(magic_hex(Format::Jpeg), "FFD8FF");
        assert_eq!(magic_hex(Format::Png), "89504E470D0A1A0A");
        assert_eq!(magic_hex(Format::Gif), "47494638");
        assert_eq!(magic_hex(Format::Bmp), "424D");
        assert_eq!(magic_hex(Format::Webp), "52494646");
        assert_eq!(magic_hex(Format::Tiff), "49492A00");
        assert_eq!(magic_hex(Format::TiffBe), "4D4D002A");
    }

    #[test]
    fn only_webp_has_marker() {
        for signature in SIGNATURES {
            if signature.format() == Format::Webp {
                assert_eq!(signature.marker(), Some(WEBP_MAGIC_BYTES));
            } else {
                assert_eq!(signature.marker(), None);
            }
        }
    }

    /// A signature must not start with an earlier unconditional signature,
    /// otherwise it could never be reached.
    #[test]
    fn no_signature_is_shadowed() {
        for (i, later) in SIGNATURES.iter().enumerate() {
            for earlier in SIGNATURES.iter().take(i) {
                if earlier.marker().is_none() {
                    assert!(
                        !later.magic().starts_with(earlier.magic()),
                        "{} shadows {}",
                        earlier.format(),
                        later.format()
                    );
                }
            }
        }
    }

    #[test]
    fn longer_signatures_first() {
        let lengths: Vec<_> = SIGNATURES.iter().map(|x| x.magic().len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn names() {
        assert_eq!(name_for(0), "Unknown");
        assert_eq!(name_for(1), "JPEG");
        assert_eq!(name_for(5), "WEBP");
        assert_eq!(name_for(7), "TIFF_BE");
        assert_eq!(name_for(8), "Unknown");
        assert_eq!(name_for(u8::MAX), "Unknown");
    }

    #[test]
    fn marker_anywhere_in_header() {
        let webp = signature_for(Format::Webp).unwrap();
        assert!(webp.matches(b"RIFFWEBP\0\0\0\0\0\0\0\0"));
        assert!(webp.matches(b"RIFF\0\0\0\0\0\0\0\0WEBP"));
        assert!(!webp.matches(b"RIFF\0\0\0\0AVI LIST"));
        assert!(!webp.matches(b"WEBPRIFF\0\0\0\0\0\0\0\0"));
    }
}
