//! Candidate asset basenames for a raw platform name.

/// Single candidate returned for null, empty, or whitespace-only input.
pub const FALLBACK_CANDIDATE: &str = "fallback";

/// Known platforms whose assets ship under a different basename than their name suggests.
///
/// Keys are matched against the lowercase alphanumeric-only form of the input. Alternates are
/// tried before any generic spelling, in the listed order.
const ALIASES: &[(&[&str], &[&str])] = &[
    (&["twitter", "x", "xtwitter"], &["twitter", "x", "x-twitter"]),
    (
        &["facebook", "facebookpages", "facebookpersonal"],
        &["facebook", "fb"],
    ),
    (
        &["instagram", "instagrampersonal", "instagramprofessional"],
        &["instagram", "ig"],
    ),
    (
        &["linkedin", "linkedincompany", "linkedinpersonal"],
        &["linkedin"],
    ),
    (&["mastodon", "mastadon"], &["mastodon", "mastadon"]),
    (&["devto", "dev"], &["dev", "dev-to", "devto"]),
    (&["wordpresscom", "wordpress"], &["wordpress"]),
    (&["telegram", "telegramchannels"], &["telegram"]),
    (&["quora", "quoraspaces"], &["quora"]),
    (&["9gag", "9gagtv"], &["9gag"]),
    (&["spotify", "spotifypodcasts"], &["spotify"]),
    (
        &["googlebusiness", "googlebusinessprofile"],
        &["google-business", "google"],
    ),
    (&["hive", "hivesocial"], &["hive"]),
    (&["lens", "lensprotocol"], &["lens"]),
    (&["deso", "desoprotocol"], &["deso"]),
    (&["bitclout"], &["bitclout", "deso"]),
    (&["kofi"], &["kofi", "ko-fi"]),
    (&["producthunt"], &["producthunt", "product-hunt"]),
    (&["whatsapp", "whatsappbusiness"], &["whatsapp"]),
    (&["mxtakatak"], &["mx-takatak", "mxtakatak"]),
    (&["naverband"], &["naver-band", "band"]),
    (&["truthsocial"], &["truth-social"]),
    (&["indiehackers"], &["indie-hackers"]),
    (&["bluesky", "bsky"], &["bluesky", "bsky"]),
    (&["youtube"], &["youtube"]),
    (&["vk", "vkontakte"], &["vk", "vkontakte"]),
    (&["odnoklassniki", "ok"], &["odnoklassniki", "ok"]),
    (&["xiaohongshu", "rednote"], &["xiaohongshu", "rednote"]),
];

/// Returns the ordered, de-duplicated, non-empty list of basenames to try for `raw`.
///
/// Alias alternates come first, followed by: lowercase, spaces as hyphens, spaces as
/// underscores, alphanumeric only, hyphen slug, and finally the trimmed original.
pub fn candidate_names(raw: Option<&str>) -> Vec<String> {
    let Some(trimmed) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return vec![FALLBACK_CANDIDATE.to_string()];
    };

    let lower = trimmed.to_lowercase();
    let compact: String = lower.chars().filter(|ch| ch.is_alphanumeric()).collect();
    let words: Vec<&str> = lower.split_whitespace().collect();

    let mut names = CandidateNames::default();
    for alias in aliases_for(&compact) {
        names.push(alias);
    }
    names.push(&lower);
    names.push(&words.join("-"));
    names.push(&words.join("_"));
    names.push(&compact);
    names.push(&crate::catalog_schema::hyphen_slug(&lower));
    names.push(trimmed);
    names.finish()
}

/// Concatenates candidate lists, keeping first occurrences only.
pub(crate) fn merge_candidates<I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut names = CandidateNames::default();
    for list in lists {
        for name in &list {
            names.push(name);
        }
    }
    names.finish()
}

fn aliases_for<'a>(compact: &'a str) -> impl Iterator<Item = &'static str> + 'a {
    ALIASES
        .iter()
        .filter(move |(keys, _)| keys.contains(&compact))
        .flat_map(|(_, alternates)| alternates.iter().copied())
}

#[derive(Default)]
struct CandidateNames {
    names: Vec<String>,
}

impl CandidateNames {
    fn push(&mut self, name: &str) {
        if name.is_empty() || self.names.iter().any(|seen| seen == name) {
            return;
        }
        self.names.push(name.to_string());
    }

    fn finish(self) -> Vec<String> {
        if self.names.is_empty() {
            vec![FALLBACK_CANDIDATE.to_string()]
        } else {
            self.names
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn position(names: &[String], needle: &str) -> usize {
        names
            .iter()
            .position(|name| name == needle)
            .unwrap_or_else(|| panic!("`{needle}` missing from {names:?}"))
    }

    #[test]
    fn blank_input_yields_only_the_sentinel() {
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(candidate_names(raw), vec!["fallback".to_string()]);
        }
    }

    #[test]
    fn generic_transformations_keep_documented_order() {
        assert_eq!(
            candidate_names(Some("Foo  Bar!")),
            vec![
                "foo  bar!",
                "foo-bar!",
                "foo_bar!",
                "foobar",
                "foo-bar",
                "Foo  Bar!",
            ]
        );
    }

    #[test]
    fn twitter_aliases_precede_generic_forms() {
        let names = candidate_names(Some("Twitter"));
        let original = position(&names, "Twitter");
        for alias in ["twitter", "x", "x-twitter"] {
            assert!(position(&names, alias) < original);
        }
        assert_eq!(&names[..3], &["twitter", "x", "x-twitter"]);
    }

    #[test]
    fn display_names_reach_their_shipped_asset_names() {
        assert_eq!(candidate_names(Some("Mastodon"))[1], "mastadon");
        assert_eq!(candidate_names(Some("Facebook Pages"))[0], "facebook");
        assert_eq!(candidate_names(Some("Dev.to"))[0], "dev");
    }

    #[test]
    fn output_never_contains_duplicates() {
        for raw in ["twitter", "X/Twitter", "qq", "!!!", "LinkedIn Company", "a b  c"] {
            let names = candidate_names(Some(raw));
            assert!(!names.is_empty());
            let mut sorted = names.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), names.len(), "duplicates in {names:?}");
        }
    }

    #[test]
    fn merge_keeps_first_occurrence_order() {
        let merged = merge_candidates([
            vec!["twitter".to_string(), "x".to_string()],
            vec!["x".to_string(), "x-twitter".to_string()],
        ]);
        assert_eq!(merged, vec!["twitter", "x", "x-twitter"]);
    }
}
