//! Generated placeholder badge shown once every icon candidate has failed.

use serde::{Deserialize, Serialize};

use crate::identifier::PlatformIdentifier;

/// Leading words rendered with two letters instead of one.
const TWO_LETTER_PREFIXES: [&str; 4] = ["qq", "vk", "mx", "ai"];

/// Badge text for blank input.
const UNKNOWN_BADGE_TEXT: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Colors and size of a fallback badge.
pub struct BadgeStyle {
    /// CSS background color.
    pub background: String,
    /// CSS text color.
    pub foreground: String,
    /// Edge length in CSS pixels.
    pub size_px: u16,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background: "#e5e7eb".to_string(),
            foreground: "#374151".to_string(),
            size_px: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Deterministic placeholder derived from a platform identifier.
pub struct FallbackBadge {
    /// One or two uppercase characters, or `?`.
    pub text: String,
    /// Rendering style.
    pub style: BadgeStyle,
}

impl FallbackBadge {
    /// Builds the badge for `identifier` using `style`.
    pub fn for_identifier(identifier: &PlatformIdentifier, style: BadgeStyle) -> Self {
        Self {
            text: badge_text(identifier.badge_source()),
            style,
        }
    }

    /// Inline CSS for the badge box. The dashed border marks a missing asset.
    pub fn inline_style(&self) -> String {
        let size = self.style.size_px;
        let font_px = (u32::from(size) * 2 / 5).max(8);
        format!(
            "width:{size}px;height:{size}px;background:{};color:{};border:1px dashed currentColor;\
border-radius:6px;display:inline-flex;align-items:center;justify-content:center;\
font-weight:700;font-size:{font_px}px;line-height:1;",
            self.style.background, self.style.foreground
        )
    }
}

/// Returns the badge abbreviation for a raw platform name.
///
/// The first alphanumeric character is uppercased. A leading word equal to one of the two-letter
/// prefixes keeps both letters (`"MX TakaTak"` is `MX`, `"Airbnb"` is `A`). Blank or symbol-only
/// input yields `?`.
pub fn badge_text(raw: &str) -> String {
    let Some(first_word) = raw
        .split(|ch: char| !ch.is_alphanumeric())
        .find(|word| !word.is_empty())
    else {
        return UNKNOWN_BADGE_TEXT.to_string();
    };

    let first_word = first_word.to_lowercase();
    if TWO_LETTER_PREFIXES.contains(&first_word.as_str()) {
        return first_word.to_uppercase();
    }

    first_word
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_else(|| UNKNOWN_BADGE_TEXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_matches_known_platforms() {
        assert_eq!(badge_text("qq"), "QQ");
        assert_eq!(badge_text("Instagram"), "I");
        assert_eq!(badge_text(""), "?");
        assert_eq!(badge_text("VK"), "VK");
        assert_eq!(badge_text("MX TakaTak"), "MX");
        assert_eq!(badge_text("9GAG"), "9");
        assert_eq!(badge_text("  --  "), "?");
        assert_eq!(badge_text("Qzone"), "Q");
        assert_eq!(badge_text("QQ.com"), "QQ");
    }

    #[test]
    fn two_letters_only_for_whole_leading_word() {
        assert_eq!(badge_text("Airbnb"), "A");
        assert_eq!(badge_text("Mxit"), "M");
        assert_eq!(badge_text("VKontakte"), "V");
        assert_eq!(badge_text("AI Dungeon"), "AI");
    }

    #[test]
    fn sentinel_identifier_renders_question_mark() {
        let badge = FallbackBadge::for_identifier(
            &PlatformIdentifier::sentinel(),
            BadgeStyle::default(),
        );
        assert_eq!(badge.text, "?");
    }

    #[test]
    fn inline_style_uses_caller_colors_and_dashed_border() {
        let badge = FallbackBadge {
            text: "I".to_string(),
            style: BadgeStyle {
                background: "#111".to_string(),
                foreground: "#fff".to_string(),
                size_px: 40,
            },
        };
        let css = badge.inline_style();
        assert!(css.contains("width:40px;height:40px;"));
        assert!(css.contains("background:#111;color:#fff;"));
        assert!(css.contains("border:1px dashed"));
        assert!(css.contains("font-size:16px"));
    }
}
