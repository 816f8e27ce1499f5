//! Media attachment validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of attached media.
pub enum MediaKind {
    /// Any `image/*` type.
    Image,
    /// Any `video/*` type.
    Video,
}

impl MediaKind {
    /// Classifies a MIME type, returning `None` for anything that is not image or video.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let major = mime.trim().split('/').next()?.to_ascii_lowercase();
        match major.as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// File offered by the uploader, before validation.
pub struct MediaCandidate {
    /// Original file name.
    pub file_name: String,
    /// Browser-reported MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub byte_len: u64,
    /// Preview URL created for the file, released when the file is rejected or replaced.
    pub preview_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Accepted media attached to a post.
pub struct PostMedia {
    /// Original file name.
    pub file_name: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Browser-reported MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub byte_len: u64,
    /// Preview URL.
    pub preview_url: String,
}

impl PostMedia {
    /// Size in megabytes with two decimals, e.g. `3.25 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.byte_len as f64 / BYTES_PER_MB)
    }
}

/// Reasons an attachment is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The file exceeds the configured limit.
    #[error("File is too large. Maximum size is {}.", format_limit(*limit))]
    TooLarge {
        /// Configured limit in bytes.
        limit: u64,
    },
    /// The file is neither an image nor a video.
    #[error("Only image or video files are allowed.")]
    UnsupportedType {
        /// Rejected MIME type.
        mime: String,
    },
}

/// Validates `candidate` against `max_bytes`. Size is checked before type.
///
/// # Errors
///
/// Returns [`MediaError`] when the file is too large or not an image/video.
pub fn validate_media(candidate: MediaCandidate, max_bytes: u64) -> Result<PostMedia, MediaError> {
    if candidate.byte_len > max_bytes {
        return Err(MediaError::TooLarge { limit: max_bytes });
    }
    let kind = MediaKind::from_mime(&candidate.mime_type).ok_or_else(|| {
        MediaError::UnsupportedType {
            mime: candidate.mime_type.clone(),
        }
    })?;
    Ok(PostMedia {
        file_name: candidate.file_name,
        kind,
        mime_type: candidate.mime_type,
        byte_len: candidate.byte_len,
        preview_url: candidate.preview_url,
    })
}

fn format_limit(bytes: u64) -> String {
    if bytes >= BYTES_PER_GB && bytes % BYTES_PER_GB == 0 {
        format!("{}GB", bytes / BYTES_PER_GB)
    } else {
        format!("{:.0}MB", bytes as f64 / BYTES_PER_MB)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DEFAULT_MAX_MEDIA_BYTES;

    fn candidate(mime: &str, byte_len: u64) -> MediaCandidate {
        MediaCandidate {
            file_name: "clip.bin".to_string(),
            mime_type: mime.to_string(),
            byte_len,
            preview_url: "blob:preview".to_string(),
        }
    }

    #[test]
    fn accepts_images_and_videos_up_to_the_limit() {
        let media = validate_media(candidate("video/mp4", DEFAULT_MAX_MEDIA_BYTES), DEFAULT_MAX_MEDIA_BYTES)
            .expect("accepted");
        assert_eq!(media.kind, MediaKind::Video);
        let media = validate_media(candidate("IMAGE/PNG", 10), DEFAULT_MAX_MEDIA_BYTES).unwrap();
        assert_eq!(media.kind, MediaKind::Image);
    }

    #[test]
    fn oversized_files_are_rejected_before_type_check() {
        let err = validate_media(
            candidate("application/pdf", DEFAULT_MAX_MEDIA_BYTES + 1),
            DEFAULT_MAX_MEDIA_BYTES,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "File is too large. Maximum size is 2GB.");
    }

    #[test]
    fn non_media_types_are_rejected() {
        let err = validate_media(candidate("text/plain", 1), DEFAULT_MAX_MEDIA_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "Only image or video files are allowed.");
        assert!(validate_media(candidate("", 1), DEFAULT_MAX_MEDIA_BYTES).is_err());
    }

    #[test]
    fn size_label_uses_two_decimal_megabytes() {
        let media = validate_media(candidate("image/jpeg", 3_407_872), DEFAULT_MAX_MEDIA_BYTES).unwrap();
        assert_eq!(media.size_label(), "3.25 MB");
    }

    #[test]
    fn small_limits_are_reported_in_megabytes() {
        let err = validate_media(candidate("image/png", 11 * 1024 * 1024), 10 * 1024 * 1024)
            .unwrap_err();
        assert_eq!(err.to_string(), "File is too large. Maximum size is 10MB.");
    }
}
