use composer_core::{
    analyze_caption, builtin_catalog, hashtag_guidance, mock_user, reduce_composer, AuthProvider,
    BadgeStyle, ComposerAction, ComposerConfig, ComposerEffect, ComposerState, IconResolution,
    IconResolver, MediaCandidate, PlatformFilter, PlatformId, PlatformKind, PostFeed,
    ResolutionStep, SubmitBlocker, User, PROBE_ORDER,
};

fn id(raw: &str) -> PlatformId {
    PlatformId::parse(raw).expect("slug")
}

fn apply(state: &mut ComposerState, action: ComposerAction) -> Vec<ComposerEffect> {
    reduce_composer(state, builtin_catalog(), action).expect("action should apply")
}

#[test]
fn catalog_platform_icons_resolve_or_fall_back() {
    let config = ComposerConfig::default();
    let catalog = builtin_catalog();
    let mastodon = catalog.get(&id("mastodon")).expect("mastodon in catalog");

    let mut resolver = IconResolver::new(mastodon.identifier(), config.icon_root.as_str());
    let (first, path) = resolver.pending_attempt().expect("first attempt");
    assert_eq!(path, "/icons/mastadon.svg");
    assert_eq!(resolver.on_load(first), ResolutionStep::Settled);
    assert!(matches!(resolver.state(), IconResolution::Loaded { .. }));

    let mut missing = IconResolver::new(catalog.identifier(&id("mx-takatak")), "/icons");
    let mut attempts = 0;
    while let Some((ticket, _)) = missing.pending_attempt() {
        attempts += 1;
        missing.on_error(ticket);
    }
    assert_eq!(attempts, missing.candidates().names().len() * PROBE_ORDER.len());
    let badge = missing
        .badge(config.fallback_badge.clone())
        .expect("badge after exhaustion");
    assert_eq!(badge.text, "MX");
    assert_eq!(badge.style, BadgeStyle::default());
}

#[test]
fn connect_compose_and_publish_to_feed() {
    let config = ComposerConfig::default();
    let mut state = ComposerState::new(&config);
    let mut feed = PostFeed::default();

    let video: Vec<_> = builtin_catalog()
        .filter(&PlatformFilter {
            kind: Some(PlatformKind::Video),
            ..PlatformFilter::default()
        })
        .map(|platform| platform.id.clone())
        .take(2)
        .collect();
    assert_eq!(video.len(), 2);
    for platform in &video {
        apply(&mut state, ComposerAction::ActivatePlatform(platform.clone()));
        apply(&mut state, ComposerAction::ConfirmConnection);
    }
    assert_eq!(state.selected, video);

    apply(&mut state, ComposerAction::SetCaption("Watch our launch #video #launch #new".into()));
    apply(
        &mut state,
        ComposerAction::SelectMedia(MediaCandidate {
            file_name: "launch.mp4".into(),
            mime_type: "video/mp4".into(),
            byte_len: 5 * 1024 * 1024,
            preview_url: "blob:launch".into(),
        }),
    );

    let insights = analyze_caption(&state.caption);
    assert!(insights.overall > 0);
    let selected: Vec<_> = state
        .selected
        .iter()
        .filter_map(|platform| builtin_catalog().get(platform))
        .collect();
    assert_eq!(hashtag_guidance(&state.caption, selected).len(), 2);

    let effects = apply(&mut state, ComposerAction::Submit);
    for effect in effects {
        if let ComposerEffect::PublishPost(post) = effect {
            feed.publish(post, 1_700_000_000_000);
        }
    }
    apply(&mut state, ComposerAction::SubmissionHandled);

    assert_eq!(feed.len(), 1);
    let entry = &feed.entries()[0];
    assert_eq!(entry.post.platforms, video);
    assert_eq!(entry.post.media.as_ref().map(|m| m.size_label()), Some("5.00 MB".into()));
    assert_eq!(state.caption, "");
    assert_eq!(state.submit_blocker(), Some(SubmitBlocker::EmptyCaption));
}

#[test]
fn session_record_round_trips_as_json() {
    let user = mock_user(AuthProvider::Apple, None, "user-1");
    let raw = serde_json::to_string(&user).expect("serialize user");
    let restored: User = serde_json::from_str(&raw).expect("deserialize user");
    assert_eq!(restored.name.as_deref(), Some("Apple User"));
    assert_eq!(restored, user);
}
