//! Catalog tokens and slug rules shared with `build.rs`.
//!
//! This file is compiled both into the crate and into the build script, so it must stay free of
//! dependencies.

/// `kind` tokens accepted by the catalog file.
pub(crate) const KIND_TOKENS: [&str; 13] = [
    "social",
    "professional",
    "messaging",
    "video",
    "blogging",
    "community",
    "audio",
    "newsletter",
    "streaming",
    "marketplace",
    "creative",
    "dating",
    "lifestyle",
];

/// `category` tokens accepted by the catalog file.
pub(crate) const CATEGORY_TOKENS: [&str; 8] = [
    "mainstream",
    "business",
    "creative",
    "tech",
    "niche",
    "regional",
    "emerging",
    "web3",
];

/// `hashtags.style` tokens accepted by the catalog file.
pub(crate) const HASHTAG_STYLE_TOKENS: [&str; 9] = [
    "branded",
    "casual",
    "community",
    "creative",
    "niche",
    "none",
    "professional",
    "technical",
    "trending",
];

/// `hashtags.placement` tokens accepted by the catalog file.
pub(crate) const HASHTAG_PLACEMENT_TOKENS: [&str; 7] = [
    "caption",
    "description",
    "end",
    "inline",
    "none",
    "tags",
    "title",
];

/// Lowercases `raw` and collapses every non-alphanumeric run into a single hyphen.
pub(crate) fn hyphen_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.extend(ch.to_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}
