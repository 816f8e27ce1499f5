//! Headless domain model for the Social Swift post composer.
//!
//! This crate owns everything that can be decided without a browser: platform identifiers and
//! the compiled-in platform catalog, icon candidate enumeration and the icon resolution state
//! machine, fallback badges, the composer reducer, media validation, caption insights, and the
//! mock session model. Browser adapters live in `platform_host_web` and the Leptos surface lives
//! in `composer_runtime`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
// Token tables are read by `build.rs` and tests.
#[allow(dead_code)]
mod catalog_schema;
pub mod composer;
pub mod config;
pub mod feed;
pub mod icons;
pub mod identifier;
pub mod insights;
pub mod media;
pub mod session;

pub use catalog::{
    builtin_catalog, CatalogError, HashtagGuidance, HashtagPlacement, HashtagStyle, Platform,
    PlatformCatalog, PlatformCategory, PlatformFilter, PlatformKind,
};
pub use composer::{
    reduce_composer, ComposerAction, ComposerEffect, ComposerError, ComposerPhase, ComposerState,
    Post, SubmitBlocker,
};
pub use config::ComposerConfig;
pub use feed::{FeedEntry, PostFeed};
pub use icons::{
    badge::{badge_text, BadgeStyle, FallbackBadge},
    formats::{IconFormat, PROBE_ORDER},
    names::{candidate_names, FALLBACK_CANDIDATE},
    resolver::{CandidateSet, IconCandidate, IconResolution, IconResolver, LoadTicket, ResolutionStep},
};
pub use identifier::{IdentifierError, PlatformId, PlatformIdentifier};
pub use insights::{
    analyze_caption, count_hashtags, hashtag_guidance, CaptionInsights, HashtagCheck,
    HashtagVerdict, InsightMetric, MetricKind,
};
pub use media::{validate_media, MediaCandidate, MediaError, MediaKind, PostMedia};
pub use session::{mock_user, AuthProvider, AuthState, User};
