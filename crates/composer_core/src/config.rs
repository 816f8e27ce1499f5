//! Composition-root configuration.

use serde::{Deserialize, Serialize};

use crate::icons::badge::BadgeStyle;

/// Default maximum attachment size: 2 GiB.
pub const DEFAULT_MAX_MEDIA_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Default local session-store key.
pub const DEFAULT_SESSION_KEY: &str = "social-swift-user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Settings passed explicitly into the composer at startup.
pub struct ComposerConfig {
    /// URL prefix that icon assets are served under.
    pub icon_root: String,
    /// Largest accepted media attachment in bytes.
    pub max_media_bytes: u64,
    /// Artificial latency of the mock sign-in.
    pub mock_auth_delay_ms: u32,
    /// Session-store key holding the signed-in user.
    pub session_key: String,
    /// Default fallback badge appearance.
    pub fallback_badge: BadgeStyle,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            icon_root: "/icons".to_string(),
            max_media_bytes: DEFAULT_MAX_MEDIA_BYTES,
            mock_auth_delay_ms: 500,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            fallback_badge: BadgeStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = ComposerConfig::default();
        assert_eq!(config.icon_root, "/icons");
        assert_eq!(config.max_media_bytes, 2_147_483_648);
        assert_eq!(config.mock_auth_delay_ms, 500);
        assert_eq!(config.session_key, "social-swift-user");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ComposerConfig =
            serde_json::from_str(r#"{"icon_root":"/static/icons"}"#).expect("config");
        assert_eq!(config.icon_root, "/static/icons");
        assert_eq!(config.max_media_bytes, DEFAULT_MAX_MEDIA_BYTES);
    }
}
