//! Platform icon with candidate probing and a generated fallback badge.

use composer_core::{
    BadgeStyle, FallbackBadge, IconResolver, LoadTicket, PlatformIdentifier, ResolutionStep,
};
use leptos::*;

use super::primitives::merge_layout_class;
use crate::runtime_context::use_composer_runtime;

/// What the icon slot renders for the current resolver state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IconView {
    /// A candidate is being tried; its load/error events carry `ticket`.
    Probe { ticket: LoadTicket, src: String },
    /// A candidate loaded.
    Resolved { src: String },
    /// Every candidate failed.
    Badge(FallbackBadge),
}

impl IconView {
    pub(crate) fn from_resolver(resolver: &IconResolver, style: &BadgeStyle) -> Self {
        if let Some(src) = resolver.resolved_path() {
            return Self::Resolved { src };
        }
        if let Some((ticket, src)) = resolver.pending_attempt() {
            return Self::Probe { ticket, src };
        }
        Self::Badge(resolver.badge(style.clone()).unwrap_or_else(|| {
            FallbackBadge::for_identifier(resolver.identifier(), style.clone())
        }))
    }

    pub(crate) fn state_token(&self) -> &'static str {
        match self {
            Self::Probe { .. } => "loading",
            Self::Resolved { .. } => "loaded",
            Self::Badge(_) => "fallback",
        }
    }
}

#[component]
/// Renders the first loadable icon asset for `identifier`, or a fallback badge.
///
/// Candidates are tried one at a time; a new identifier restarts the search and events from
/// the previous search are ignored.
pub fn PlatformIcon(
    #[prop(into)] identifier: MaybeSignal<PlatformIdentifier>,
    #[prop(optional)] size_px: Option<u16>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let runtime = use_composer_runtime();
    let (icon_root, mut style) = runtime
        .config
        .with_value(|config| (config.icon_root.clone(), config.fallback_badge.clone()));
    if let Some(size_px) = size_px {
        style.size_px = size_px;
    }
    let size = style.size_px;

    let resolver = create_rw_signal(IconResolver::new(identifier.get_untracked(), icon_root));

    create_effect(move |_| {
        let next = identifier.get();
        if resolver.with_untracked(|resolver| resolver.identifier() != &next) {
            resolver.update(|resolver| {
                resolver.rebind(next);
            });
        }
    });

    let view_model =
        create_memo(move |_| resolver.with(|resolver| IconView::from_resolver(resolver, &style)));
    let alt = move || resolver.with(|resolver| resolver.identifier().display_name().to_string());

    let on_load = move |ticket: LoadTicket| {
        resolver.update(|resolver| {
            resolver.on_load(ticket);
        });
    };
    let on_error = move |ticket: LoadTicket| {
        let step = resolver.try_update(|resolver| resolver.on_error(ticket));
        if step == Some(ResolutionStep::Exhausted) {
            resolver.with_untracked(|resolver| {
                logging::log!(
                    "no icon asset for {:?} after {} attempts; showing badge",
                    resolver.identifier().display_name(),
                    resolver.failed_attempts()
                );
            });
        }
    };

    view! {
        <span
            class=merge_layout_class("platform-icon", layout_class)
            data-ui-kind="platform-icon"
            data-icon-state=move || view_model.with(IconView::state_token)
        >
            {move || match view_model.get() {
                IconView::Probe { ticket, src } => view! {
                    <img
                        src=src
                        alt=alt
                        width=size
                        height=size
                        on:load=move |_| on_load(ticket)
                        on:error=move |_| on_error(ticket)
                    />
                }
                .into_view(),
                IconView::Resolved { src } => view! {
                    <img src=src alt=alt width=size height=size />
                }
                .into_view(),
                IconView::Badge(badge) => view! {
                    <span
                        class="platform-icon-badge"
                        role="img"
                        aria-label=alt
                        style=badge.inline_style()
                    >
                        {badge.text}
                    </span>
                }
                .into_view(),
            }}
        </span>
    }
}
