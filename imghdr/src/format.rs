imghdr_common::utils::named_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Image format identified by magic bytes
    pub enum Format {
        /// No known signature matched
        #[default]
        Unknown = 0 => "Unknown",
        Jpeg = 1 => "JPEG",
        Png = 2 => "PNG",
        Gif = 3 => "GIF",
        Bmp = 4 => "BMP",
        /// RIFF container carrying a `WEBP` marker
        Webp = 5 => "WEBP",
        /// Little-endian TIFF
        Tiff = 6 => "TIFF",
        /// Big-endian TIFF
        TiffBe = 7 => "TIFF_BE",
    }
);

impl Format {
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let names: Vec<_> = Format::VARIANTS.iter().map(|x| x.name()).collect();
        assert_eq!(
            names,
            ["Unknown", "JPEG", "PNG", "GIF", "BMP", "WEBP", "TIFF", "TIFF_BE"]
        );
    }

    #[test]
    fn raw_values() {
        for (raw, format) in (0_u8..).zip(Format::VARIANTS) {
            assert_eq!(u8::from(*format), raw);
            assert_eq!(Format::try_from(raw), Ok(*format));
        }

        assert_eq!(Format::try_from(8), Err(UnknownFormatValueError(8)));
        assert_eq!(
            UnknownFormatValueError(200).to_string(),
            "Enum 'Format' has no variant with value '200'"
        );
    }

    #[test]
    fn display() {
        assert_eq!(Format::TiffBe.to_string(), "TIFF_BE");
        assert_eq!(format!("{}", Format::default()), "Unknown");
        assert!(!Format::Unknown.is_known());
        assert!(Format::Webp.is_known());
    }
}
