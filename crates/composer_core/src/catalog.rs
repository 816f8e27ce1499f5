//! Compiled-in catalog of destination platforms.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifier::{PlatformId, PlatformIdentifier};

include!(concat!(env!("OUT_DIR"), "/platform_catalog_generated.rs"));

/// Errors raised while building a [`PlatformCatalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog payload is not valid JSON for the record schema.
    #[error("failed to decode platform catalog: {0}")]
    Decode(String),
    /// Two records slug to the same platform id.
    #[error("duplicate platform id `{0}`")]
    DuplicateId(PlatformId),
    /// A record has a blank display name.
    #[error("platform record with blank name")]
    BlankName,
    /// A record's hashtag range is not ordered as `min <= optimal <= max`.
    #[error("platform `{0}` has an inconsistent hashtag range")]
    HashtagRange(PlatformId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Broad product shape of a platform.
#[allow(missing_docs)]
pub enum PlatformKind {
    Social,
    Professional,
    Messaging,
    Video,
    Blogging,
    Community,
    Audio,
    Newsletter,
    Streaming,
    Marketplace,
    Creative,
    Dating,
    Lifestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Audience segment a platform belongs to.
#[allow(missing_docs)]
pub enum PlatformCategory {
    Mainstream,
    Business,
    Creative,
    Tech,
    Niche,
    Regional,
    Emerging,
    Web3,
}

impl PlatformCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Mainstream,
        Self::Business,
        Self::Creative,
        Self::Tech,
        Self::Niche,
        Self::Regional,
        Self::Emerging,
        Self::Web3,
    ];

    /// Lowercase token used in the catalog file and in URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainstream => "mainstream",
            Self::Business => "business",
            Self::Creative => "creative",
            Self::Tech => "tech",
            Self::Niche => "niche",
            Self::Regional => "regional",
            Self::Emerging => "emerging",
            Self::Web3 => "web3",
        }
    }

    /// Parses a category token, ignoring ASCII case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tone of hashtags that perform well on a platform.
#[allow(missing_docs)]
pub enum HashtagStyle {
    Branded,
    Casual,
    Community,
    Creative,
    Niche,
    None,
    Professional,
    Technical,
    Trending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where hashtags are expected to go in a post.
#[allow(missing_docs)]
pub enum HashtagPlacement {
    Caption,
    Description,
    End,
    Inline,
    None,
    Tags,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Hashtag recommendations for one platform.
pub struct HashtagGuidance {
    /// Whether the platform surfaces hashtags at all.
    pub supported: bool,
    /// Fewest recommended hashtags.
    pub min: u32,
    /// Most recommended hashtags.
    pub max: u32,
    /// Best-performing count.
    pub optimal: u32,
    /// Preferred tone.
    pub style: HashtagStyle,
    /// Preferred placement.
    pub placement: HashtagPlacement,
    /// Free-form advice.
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One destination platform.
pub struct Platform {
    /// Stable id derived from the display name.
    pub id: PlatformId,
    /// Human-readable name.
    pub name: String,
    /// Icon asset stem under the icon root.
    pub icon: String,
    /// Product shape.
    pub kind: PlatformKind,
    /// Audience segment.
    pub category: PlatformCategory,
    /// Hashtag recommendations.
    pub hashtags: HashtagGuidance,
}

impl Platform {
    /// Identifier used for icon resolution.
    pub fn identifier(&self) -> PlatformIdentifier {
        PlatformIdentifier::new(self.name.as_str(), self.icon.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct PlatformRecord {
    name: String,
    icon: String,
    kind: PlatformKind,
    category: PlatformCategory,
    hashtags: HashtagGuidance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional predicates applied by [`PlatformCatalog::filter`].
pub struct PlatformFilter {
    /// Keep only this kind.
    pub kind: Option<PlatformKind>,
    /// Keep only this category.
    pub category: Option<PlatformCategory>,
    /// Case-insensitive substring of the display name.
    pub search_term: Option<String>,
}

impl PlatformFilter {
    /// Filter matching display names containing `term`.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Returns whether `platform` passes every set predicate.
    pub fn matches(&self, platform: &Platform) -> bool {
        if self.kind.is_some_and(|kind| kind != platform.kind) {
            return false;
        }
        if self
            .category
            .is_some_and(|category| category != platform.category)
        {
            return false;
        }
        match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => platform
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered, id-unique list of platforms.
pub struct PlatformCatalog {
    platforms: Vec<Platform>,
}

impl PlatformCatalog {
    /// Parses a catalog from the build-time JSON record layout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when decoding fails or a record breaks a catalog invariant.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<PlatformRecord> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Decode(err.to_string()))?;
        let mut seen = BTreeSet::new();
        let mut platforms = Vec::with_capacity(records.len());
        for record in records {
            if record.name.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            let id = PlatformId::from_display_name(&record.name);
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }
            let tags = &record.hashtags;
            if tags.supported && !(tags.min <= tags.optimal && tags.optimal <= tags.max) {
                return Err(CatalogError::HashtagRange(id));
            }
            platforms.push(Platform {
                id,
                name: record.name,
                icon: record.icon,
                kind: record.kind,
                category: record.category,
                hashtags: record.hashtags,
            });
        }
        Ok(Self { platforms })
    }

    /// Every platform in catalog order.
    pub fn all(&self) -> &[Platform] {
        &self.platforms
    }

    /// Number of platforms.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Looks up a platform by id.
    pub fn get(&self, id: &PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|platform| &platform.id == id)
    }

    /// Returns whether `id` names a catalog platform.
    pub fn contains(&self, id: &PlatformId) -> bool {
        self.get(id).is_some()
    }

    /// Platforms passing `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a PlatformFilter) -> impl Iterator<Item = &'a Platform> {
        self.platforms
            .iter()
            .filter(move |platform| filter.matches(platform))
    }

    /// Icon identifier for `id`; unknown ids resolve to the sentinel.
    pub fn identifier(&self, id: &PlatformId) -> PlatformIdentifier {
        self.get(id)
            .map(Platform::identifier)
            .unwrap_or_else(PlatformIdentifier::sentinel)
    }
}

/// Returns the generated catalog JSON payload.
pub fn builtin_catalog_json() -> &'static str {
    BUILTIN_PLATFORM_CATALOG_JSON
}

/// Returns the compiled-in platform catalog.
///
/// # Panics
///
/// Panics if the build-time generated payload does not parse. `build.rs` applies the same id,
/// token, and hashtag range checks as [`PlatformCatalog::from_json`] before embedding it.
pub fn builtin_catalog() -> &'static PlatformCatalog {
    static CATALOG: OnceLock<PlatformCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        PlatformCatalog::from_json(BUILTIN_PLATFORM_CATALOG_JSON)
            .expect("generated built-in platform catalog should parse")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> PlatformId {
        PlatformId::parse(raw).expect("slug")
    }

    #[test]
    fn builtin_catalog_parses_with_unique_ids() {
        let catalog = builtin_catalog();
        assert!(catalog.len() >= 100);
        let ids: BTreeSet<_> = catalog.all().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn well_known_platforms_are_present() {
        let catalog = builtin_catalog();
        let youtube = catalog.get(&id("youtube")).expect("youtube");
        assert_eq!(youtube.kind, PlatformKind::Video);
        assert_eq!(youtube.identifier().icon_key(), "youtube");
        assert!(catalog.contains(&id("instagram-personal")));
        assert_eq!(catalog.get(&id("x-twitter")).expect("x").icon, "twitter");
    }

    #[test]
    fn filter_combines_kind_and_search() {
        let catalog = builtin_catalog();
        let filter = PlatformFilter {
            kind: Some(PlatformKind::Video),
            search_term: Some("TUBE".to_string()),
            ..PlatformFilter::default()
        };
        let names: Vec<_> = catalog.filter(&filter).map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"YouTube"));
        assert!(catalog
            .filter(&filter)
            .all(|p| p.kind == PlatformKind::Video));
    }

    #[test]
    fn blank_search_term_matches_everything() {
        let catalog = builtin_catalog();
        let filter = PlatformFilter::search("   ");
        assert_eq!(catalog.filter(&filter).count(), catalog.len());
    }

    #[test]
    fn category_tokens_match_catalog_spelling() {
        for category in PlatformCategory::ALL {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(PlatformCategory::parse(" Web3 "), Some(PlatformCategory::Web3));
        assert_eq!(PlatformCategory::parse("gaming"), None);
    }

    #[test]
    fn unknown_id_maps_to_sentinel_identifier() {
        assert!(builtin_catalog()
            .identifier(&id("not-a-platform"))
            .is_sentinel());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let raw = r#"[
            {"name":"Dev.to","icon":"dev","kind":"blogging","category":"tech",
             "hashtags":{"supported":true,"min":1,"max":4,"optimal":4,"style":"technical","placement":"tags","notes":""}},
            {"name":"dev to","icon":"devto","kind":"blogging","category":"tech",
             "hashtags":{"supported":true,"min":1,"max":4,"optimal":4,"style":"technical","placement":"tags","notes":""}}
        ]"#;
        assert_eq!(
            PlatformCatalog::from_json(raw),
            Err(CatalogError::DuplicateId(id("dev-to")))
        );
    }

    fn decode_all<T>(tokens: &[&str]) -> Vec<T>
    where
        T: serde::de::DeserializeOwned + Serialize,
    {
        tokens
            .iter()
            .map(|token| {
                let value: T = serde_json::from_str(&format!("\"{token}\""))
                    .unwrap_or_else(|err| panic!("token `{token}` does not decode: {err}"));
                assert_eq!(
                    serde_json::to_string(&value).expect("serialize"),
                    format!("\"{token}\"")
                );
                value
            })
            .collect()
    }

    #[test]
    fn build_script_tokens_decode_into_catalog_enums() {
        use crate::catalog_schema::{
            CATEGORY_TOKENS, HASHTAG_PLACEMENT_TOKENS, HASHTAG_STYLE_TOKENS, KIND_TOKENS,
        };

        let kinds: BTreeSet<PlatformKind> = decode_all(&KIND_TOKENS).into_iter().collect();
        assert_eq!(kinds.len(), KIND_TOKENS.len());
        let categories: Vec<PlatformCategory> = decode_all(&CATEGORY_TOKENS);
        assert_eq!(categories, PlatformCategory::ALL.to_vec());
        let styles: Vec<HashtagStyle> = decode_all(&HASHTAG_STYLE_TOKENS);
        assert_eq!(styles.len(), HASHTAG_STYLE_TOKENS.len());
        let placements: Vec<HashtagPlacement> = decode_all(&HASHTAG_PLACEMENT_TOKENS);
        assert_eq!(placements.len(), HASHTAG_PLACEMENT_TOKENS.len());
    }

    #[test]
    fn unknown_kind_token_fails_to_decode() {
        let raw = r#"[
            {"name":"Foo","icon":"foo","kind":"sociall","category":"niche",
             "hashtags":{"supported":false,"min":0,"max":0,"optimal":0,"style":"none","placement":"none","notes":""}}
        ]"#;
        assert!(matches!(
            PlatformCatalog::from_json(raw),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn inconsistent_hashtag_range_is_rejected() {
        let raw = r#"[
            {"name":"Foo","icon":"foo","kind":"social","category":"niche",
             "hashtags":{"supported":true,"min":5,"max":3,"optimal":4,"style":"casual","placement":"caption","notes":""}}
        ]"#;
        assert_eq!(
            PlatformCatalog::from_json(raw),
            Err(CatalogError::HashtagRange(id("foo")))
        );
    }
}
