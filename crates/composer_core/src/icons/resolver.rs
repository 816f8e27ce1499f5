//! Icon resolution state machine.
//!
//! An [`IconResolver`] is bound to one [`PlatformIdentifier`] and walks its [`CandidateSet`]
//! (name variants outer, formats inner) one load attempt at a time. The owning view reports
//! browser `load`/`error` events back with the [`LoadTicket`] it was given; tickets issued
//! before a rebind or for an already-advanced cursor are ignored.

use serde::{Deserialize, Serialize};

use super::{
    badge::{BadgeStyle, FallbackBadge},
    formats::{IconFormat, PROBE_ORDER},
    names::{candidate_names, merge_candidates, FALLBACK_CANDIDATE},
};
use crate::identifier::PlatformIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One (name variant, format) pair.
pub struct IconCandidate {
    /// Asset basename.
    pub name: String,
    /// Asset format.
    pub format: IconFormat,
}

impl IconCandidate {
    /// Joins `icon_root`, the name, and the extension into an asset path.
    pub fn asset_path(&self, icon_root: &str) -> String {
        format!(
            "{}/{}.{}",
            icon_root.trim_end_matches('/'),
            self.name,
            self.format.extension()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Finite, deterministic candidate sequence for one identifier.
pub struct CandidateSet {
    names: Vec<String>,
    formats: Vec<IconFormat>,
}

impl CandidateSet {
    /// Builds the candidate set for `identifier` with the default probe order.
    pub fn for_identifier(identifier: &PlatformIdentifier) -> Self {
        Self::with_formats(identifier, &PROBE_ORDER)
    }

    /// Builds the candidate set for `identifier` probing only `formats`.
    ///
    /// The canonical icon key is tried first, followed by its variants and then the variants of
    /// the display name.
    ///
    /// An empty format list falls back to the default probe order.
    pub fn with_formats(identifier: &PlatformIdentifier, formats: &[IconFormat]) -> Self {
        let names = if identifier.is_sentinel() {
            vec![FALLBACK_CANDIDATE.to_string()]
        } else {
            merge_candidates([
                vec![identifier.icon_key().to_string()],
                candidate_names(Some(identifier.icon_key())),
                candidate_names(Some(identifier.display_name())),
            ])
        };
        let formats = if formats.is_empty() {
            PROBE_ORDER.to_vec()
        } else {
            formats.to_vec()
        };
        Self { names, formats }
    }

    /// Candidate names in probe order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Formats in probe order.
    pub fn formats(&self) -> &[IconFormat] {
        &self.formats
    }

    /// Total number of combinations.
    pub fn len(&self) -> usize {
        self.names.len() * self.formats.len()
    }

    /// Always false; the set holds at least one name and one format.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at a flat cursor position.
    pub fn get(&self, cursor: usize) -> Option<IconCandidate> {
        let per_name = self.formats.len();
        let name = self.names.get(cursor / per_name)?;
        Some(IconCandidate {
            name: name.clone(),
            format: self.formats[cursor % per_name],
        })
    }

    /// Iterates every candidate in probe order.
    pub fn iter(&self) -> impl Iterator<Item = IconCandidate> + '_ {
        (0..self.len()).filter_map(|cursor| self.get(cursor))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Resolution progress for the bound identifier.
pub enum IconResolution {
    /// Waiting on the load attempt at `cursor`.
    Loading {
        /// Flat index into the [`CandidateSet`].
        cursor: usize,
    },
    /// The candidate at `cursor` loaded; no further attempts are made.
    Loaded {
        /// Flat index of the candidate that loaded.
        cursor: usize,
    },
    /// Every candidate failed; the fallback badge is shown.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Token tying a browser load event to the attempt that issued it.
pub struct LoadTicket {
    generation: u64,
    cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of feeding a load event into the resolver.
pub enum ResolutionStep {
    /// The attempt succeeded and the resolver settled.
    Settled,
    /// The attempt failed and the cursor moved to the next candidate.
    Advanced,
    /// The attempt failed and no candidates remain.
    Exhausted,
    /// The event was stale or duplicated and changed nothing.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-display icon resolver bound to one identifier.
pub struct IconResolver {
    identifier: PlatformIdentifier,
    candidates: CandidateSet,
    icon_root: String,
    generation: u64,
    failed_attempts: usize,
    state: IconResolution,
}

impl IconResolver {
    /// Starts resolving `identifier` at the first candidate.
    pub fn new(identifier: PlatformIdentifier, icon_root: impl Into<String>) -> Self {
        let candidates = CandidateSet::for_identifier(&identifier);
        Self {
            identifier,
            candidates,
            icon_root: icon_root.into(),
            generation: 0,
            failed_attempts: 0,
            state: IconResolution::Loading { cursor: 0 },
        }
    }

    /// Bound identifier.
    pub fn identifier(&self) -> &PlatformIdentifier {
        &self.identifier
    }

    /// Candidate set being walked.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Current resolution state.
    pub fn state(&self) -> &IconResolution {
        &self.state
    }

    /// Number of failed attempts since the last (re)bind.
    pub fn failed_attempts(&self) -> usize {
        self.failed_attempts
    }

    /// Rebinds to `identifier`, resetting all progress when it differs from the current one.
    ///
    /// Returns whether a reset happened. Tickets issued before a reset are ignored afterwards.
    pub fn rebind(&mut self, identifier: PlatformIdentifier) -> bool {
        if identifier == self.identifier {
            return false;
        }
        self.candidates = CandidateSet::for_identifier(&identifier);
        self.identifier = identifier;
        self.generation = self.generation.wrapping_add(1);
        self.failed_attempts = 0;
        self.state = IconResolution::Loading { cursor: 0 };
        true
    }

    /// Ticket and asset path for the attempt in flight, if any.
    pub fn pending_attempt(&self) -> Option<(LoadTicket, String)> {
        let IconResolution::Loading { cursor } = self.state else {
            return None;
        };
        let candidate = self.candidates.get(cursor)?;
        Some((
            LoadTicket {
                generation: self.generation,
                cursor,
            },
            candidate.asset_path(&self.icon_root),
        ))
    }

    /// Asset path of the candidate that loaded.
    pub fn resolved_path(&self) -> Option<String> {
        let IconResolution::Loaded { cursor } = self.state else {
            return None;
        };
        self.candidates
            .get(cursor)
            .map(|candidate| candidate.asset_path(&self.icon_root))
    }

    /// Path to render right now: the pending attempt or the settled asset.
    pub fn current_path(&self) -> Option<String> {
        self.resolved_path()
            .or_else(|| self.pending_attempt().map(|(_, path)| path))
    }

    /// Fallback badge when resolution is exhausted.
    pub fn badge(&self, style: BadgeStyle) -> Option<FallbackBadge> {
        matches!(self.state, IconResolution::Exhausted)
            .then(|| FallbackBadge::for_identifier(&self.identifier, style))
    }

    /// Records a successful load for `ticket`.
    pub fn on_load(&mut self, ticket: LoadTicket) -> ResolutionStep {
        if !self.is_current(ticket) {
            return ResolutionStep::Ignored;
        }
        self.state = IconResolution::Loaded {
            cursor: ticket.cursor,
        };
        ResolutionStep::Settled
    }

    /// Records a failed load for `ticket` and advances the cursor.
    ///
    /// The format advances first; once the formats of a name are used up the next name starts
    /// again at the first format. After the last combination the resolver is exhausted.
    pub fn on_error(&mut self, ticket: LoadTicket) -> ResolutionStep {
        if !self.is_current(ticket) {
            return ResolutionStep::Ignored;
        }
        self.failed_attempts += 1;
        let next = ticket.cursor + 1;
        if next < self.candidates.len() {
            self.state = IconResolution::Loading { cursor: next };
            ResolutionStep::Advanced
        } else {
            self.state = IconResolution::Exhausted;
            ResolutionStep::Exhausted
        }
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
            && matches!(self.state, IconResolution::Loading { cursor } if cursor == ticket.cursor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolver(display: &str, key: &str) -> IconResolver {
        IconResolver::new(PlatformIdentifier::new(display, key), "/icons")
    }

    fn fail_all(resolver: &mut IconResolver) -> usize {
        let mut attempts = 0;
        while let Some((ticket, _)) = resolver.pending_attempt() {
            attempts += 1;
            resolver.on_error(ticket);
        }
        attempts
    }

    #[test]
    fn first_attempt_uses_first_name_and_svg() {
        let resolver = resolver("YouTube", "youtube");
        let (_, path) = resolver.pending_attempt().expect("pending");
        assert_eq!(path, "/icons/youtube.svg");
    }

    #[test]
    fn formats_advance_before_names() {
        let mut resolver = resolver("Foo Bar", "foo-bar");
        let mut paths = Vec::new();
        for _ in 0..7 {
            let (ticket, path) = resolver.pending_attempt().expect("pending");
            paths.push(path);
            resolver.on_error(ticket);
        }
        assert_eq!(
            paths,
            vec![
                "/icons/foo-bar.svg",
                "/icons/foo-bar.png",
                "/icons/foo-bar.jpg",
                "/icons/foo-bar.jpeg",
                "/icons/foo-bar.webp",
                "/icons/foo-bar.avif",
                "/icons/foobar.svg",
            ]
        );
    }

    #[test]
    fn success_settles_and_stops_attempts() {
        let mut resolver = resolver("Reddit", "reddit");
        let (first, _) = resolver.pending_attempt().unwrap();
        assert_eq!(resolver.on_error(first), ResolutionStep::Advanced);
        let (second, _) = resolver.pending_attempt().unwrap();
        assert_eq!(resolver.on_load(second), ResolutionStep::Settled);

        assert_eq!(resolver.state(), &IconResolution::Loaded { cursor: 1 });
        assert_eq!(resolver.pending_attempt(), None);
        assert_eq!(resolver.resolved_path().as_deref(), Some("/icons/reddit.png"));
        assert!(!resolver.rebind(PlatformIdentifier::new("Reddit", "reddit")));
        assert_eq!(resolver.state(), &IconResolution::Loaded { cursor: 1 });
    }

    #[test]
    fn exhaustion_takes_names_times_formats_attempts() {
        let mut resolver = resolver("Instagram", "instagram");
        let expected = resolver.candidates().names().len() * PROBE_ORDER.len();
        assert_eq!(fail_all(&mut resolver), expected);
        assert_eq!(resolver.failed_attempts(), expected);
        assert_eq!(resolver.state(), &IconResolution::Exhausted);
        let badge = resolver.badge(BadgeStyle::default()).expect("badge");
        assert_eq!(badge.text, "I");
    }

    #[test]
    fn badge_is_absent_until_exhausted() {
        let mut resolver = resolver("QQ", "qq");
        assert_eq!(resolver.badge(BadgeStyle::default()), None);
        fail_all(&mut resolver);
        assert_eq!(resolver.badge(BadgeStyle::default()).unwrap().text, "QQ");
    }

    #[test]
    fn sentinel_probes_fallback_name_only() {
        let mut resolver = IconResolver::new(PlatformIdentifier::sentinel(), "/icons/");
        assert_eq!(resolver.candidates().names(), &["fallback".to_string()]);
        let (_, path) = resolver.pending_attempt().unwrap();
        assert_eq!(path, "/icons/fallback.svg");
        assert_eq!(fail_all(&mut resolver), PROBE_ORDER.len());
        assert_eq!(resolver.badge(BadgeStyle::default()).unwrap().text, "?");
    }

    #[test]
    fn rebind_resets_state_and_ignores_stale_tickets() {
        let mut resolver = resolver("TikTok", "tiktok");
        let (stale, _) = resolver.pending_attempt().unwrap();
        resolver.on_error(stale);
        let (in_flight, _) = resolver.pending_attempt().unwrap();

        assert!(resolver.rebind(PlatformIdentifier::new("Vimeo", "vimeo")));
        assert_eq!(resolver.state(), &IconResolution::Loading { cursor: 0 });
        assert_eq!(resolver.failed_attempts(), 0);

        assert_eq!(resolver.on_load(in_flight), ResolutionStep::Ignored);
        assert_eq!(resolver.on_error(in_flight), ResolutionStep::Ignored);
        assert_eq!(resolver.state(), &IconResolution::Loading { cursor: 0 });
        let (_, path) = resolver.pending_attempt().unwrap();
        assert_eq!(path, "/icons/vimeo.svg");
    }

    #[test]
    fn duplicate_error_events_do_not_skip_candidates() {
        let mut resolver = resolver("Kick", "kick");
        let (ticket, _) = resolver.pending_attempt().unwrap();
        assert_eq!(resolver.on_error(ticket), ResolutionStep::Advanced);
        assert_eq!(resolver.on_error(ticket), ResolutionStep::Ignored);
        assert_eq!(resolver.state(), &IconResolution::Loading { cursor: 1 });
    }

    #[test]
    fn candidate_set_merges_icon_key_and_display_name_variants() {
        let set = CandidateSet::for_identifier(&PlatformIdentifier::new("X/Twitter", "twitter"));
        assert_eq!(&set.names()[..3], &["twitter", "x", "x-twitter"]);
        assert!(set.names().iter().any(|name| name == "X/Twitter"));
        assert_eq!(set.len(), set.names().len() * 6);
        assert_eq!(set.iter().count(), set.len());
    }

    #[test]
    fn restricted_formats_shrink_the_search_space() {
        let set = CandidateSet::with_formats(
            &PlatformIdentifier::new("Kick", "kick"),
            &[IconFormat::Png],
        );
        assert_eq!(set.len(), set.names().len());
        assert_eq!(set.get(0).unwrap().asset_path("/icons"), "/icons/kick.png");
    }
}
