//! Static preference order of icon file formats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Image formats an icon asset may be stored in.
pub enum IconFormat {
    /// Scalable vector graphics.
    Svg,
    /// Portable network graphics.
    Png,
    /// JPEG with the short extension.
    Jpg,
    /// JPEG with the long extension.
    Jpeg,
    /// WebP.
    Webp,
    /// AVIF.
    Avif,
}

/// Formats in the order they are probed, most specific and most efficient first.
pub const PROBE_ORDER: [IconFormat; 6] = [
    IconFormat::Svg,
    IconFormat::Png,
    IconFormat::Jpg,
    IconFormat::Jpeg,
    IconFormat::Webp,
    IconFormat::Avif,
];

impl IconFormat {
    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::Avif => "avif",
        }
    }

    /// MIME type served for the format.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Avif => "image/avif",
        }
    }

    /// Looks up a format by extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        PROBE_ORDER
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_order_starts_with_svg_and_ends_with_avif() {
        assert_eq!(PROBE_ORDER.first(), Some(&IconFormat::Svg));
        assert_eq!(PROBE_ORDER.last(), Some(&IconFormat::Avif));
    }

    #[test]
    fn extensions_round_trip_case_insensitively() {
        assert_eq!(IconFormat::from_extension("JPEG"), Some(IconFormat::Jpeg));
        assert_eq!(IconFormat::from_extension("gif"), None);
    }
}
