//! Platform identifiers: stable catalog ids and the display-name/icon-key pair used by icon
//! resolution.
//!
//! [`PlatformIdentifier`] is validated once at construction. Blank input is replaced by the
//! sentinel identifier so icon code downstream never has to re-check its inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog_schema::hyphen_slug;

/// Errors from strict identifier parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The raw value was empty or whitespace.
    #[error("platform id is empty")]
    Empty,
    /// The raw value is not a lowercase hyphen slug.
    #[error("invalid platform id `{0}`; expected a lowercase hyphen slug")]
    NotSlug(String),
}

/// Stable identifier for a catalog platform, derived as the hyphen slug of its display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformId(String);

impl PlatformId {
    /// Derives the id for a display name (`"X/Twitter"` becomes `x-twitter`).
    pub fn from_display_name(display_name: &str) -> Self {
        Self(hyphen_slug(display_name))
    }

    /// Parses an id that must already be in slug form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when `raw` is blank or not a lowercase hyphen slug.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if hyphen_slug(trimmed) != trimmed {
            return Err(IdentifierError::NotSlug(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name plus canonical icon key for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformIdentifier {
    display_name: String,
    icon_key: String,
}

impl PlatformIdentifier {
    /// Builds an identifier, substituting missing parts.
    ///
    /// The icon key accepts either a bare stem (`twitter`) or an asset path
    /// (`/icons/twitter.svg`). A blank icon key is derived from the display name; when both are
    /// blank the sentinel identifier is returned.
    pub fn new(display_name: impl Into<String>, icon_key: impl Into<String>) -> Self {
        let display_name = display_name.into().trim().to_string();
        let icon_key = icon_stem(&icon_key.into());
        match (display_name.is_empty(), icon_key.is_empty()) {
            (true, true) => Self::sentinel(),
            (false, true) => Self {
                icon_key: hyphen_slug(&display_name),
                display_name,
            },
            _ => Self {
                display_name,
                icon_key,
            },
        }
    }

    /// Builds an identifier from a single raw name, used as both display name and icon key.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => Self::new(raw, raw),
            None => Self::sentinel(),
        }
    }

    /// Identifier standing in for blank input.
    pub fn sentinel() -> Self {
        Self {
            display_name: String::new(),
            icon_key: String::new(),
        }
    }

    /// Returns whether this is the sentinel identifier.
    pub fn is_sentinel(&self) -> bool {
        self.display_name.is_empty() && self.icon_key.is_empty()
    }

    /// Human-readable platform name (empty for the sentinel).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Canonical icon asset stem (empty for the sentinel).
    pub fn icon_key(&self) -> &str {
        &self.icon_key
    }

    /// Text used to derive a fallback badge.
    pub fn badge_source(&self) -> &str {
        if self.display_name.is_empty() {
            &self.icon_key
        } else {
            &self.display_name
        }
    }
}

fn icon_stem(raw: &str) -> String {
    let trimmed = raw.trim();
    let file = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let stem = match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && is_image_extension(ext) => stem,
        _ => file,
    };
    stem.trim().to_string()
}

fn is_image_extension(ext: &str) -> bool {
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "svg" | "png" | "jpg" | "jpeg" | "webp" | "avif" | "gif"
    )
}
