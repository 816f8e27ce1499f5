//! Collapsible "Optimize Post" panel.

use composer_core::{analyze_caption, hashtag_guidance, HashtagCheck, HashtagVerdict};
use leptos::*;

use super::primitives::bool_token;
use crate::runtime_context::use_composer_runtime;

/// Color band for a 0..=100 score.
pub(crate) fn score_tone(score: u8) -> &'static str {
    match score {
        80.. => "great",
        60.. => "good",
        40.. => "fair",
        _ => "low",
    }
}

pub(crate) fn verdict_message(check: &HashtagCheck) -> String {
    match check.verdict {
        HashtagVerdict::WithinRange => format!(
            "{} hashtags, within range (best: {})",
            check.count, check.optimal
        ),
        HashtagVerdict::TooFew { min } => {
            format!("Add hashtags: at least {min} recommended (best: {})", check.optimal)
        }
        HashtagVerdict::TooMany { max } => {
            format!("Too many hashtags: at most {max} recommended (best: {})", check.optimal)
        }
        HashtagVerdict::Unsupported => {
            "Hashtags are not used here; consider removing them".to_string()
        }
    }
}

#[component]
/// Caption scores and per-platform hashtag advice, collapsed by default.
pub fn CaptionInsightsPanel() -> impl IntoView {
    let runtime = use_composer_runtime();
    let catalog = runtime.catalog;
    let expanded = create_rw_signal(false);
    let insights =
        create_memo(move |_| runtime.composer.with(|state| analyze_caption(&state.caption)));
    let hashtag_checks = create_memo(move |_| {
        runtime.composer.with(|state| {
            let platforms = state.selected.iter().filter_map(|id| catalog.get(id));
            hashtag_guidance(&state.caption, platforms)
                .into_iter()
                .map(|check| {
                    let name = catalog
                        .get(&check.platform)
                        .map_or_else(|| check.platform.to_string(), |p| p.name.clone());
                    let ok = check.verdict == HashtagVerdict::WithinRange;
                    (name, verdict_message(&check), ok)
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="insights-panel" data-expanded=move || bool_token(expanded.get())>
            <button
                type="button"
                class="insights-toggle"
                aria-expanded=move || bool_token(expanded.get())
                aria-controls="insights-body"
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <span>"Optimize Post"</span>
                <span aria-hidden="true">{move || if expanded.get() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=move || expanded.get()>
                <div id="insights-body" class="insights-body">
                    <div class="insights-overall">
                        <span>"Overall SEO Score"</span>
                        <strong data-tone=move || score_tone(insights.with(|i| i.overall))>
                            {move || insights.with(|i| format!("{}/100", i.overall))}
                        </strong>
                    </div>
                    <h4>"SEO Suggestions"</h4>
                    <ul class="insights-metrics">
                        {move || {
                            insights
                                .get()
                                .metrics
                                .into_iter()
                                .map(|metric| {
                                    view! {
                                        <li class="insights-metric" data-tone=score_tone(metric.score)>
                                            <div class="insights-metric-header">
                                                <span>{metric.kind.label()}</span>
                                                <span>{metric.score}</span>
                                            </div>
                                            <div
                                                class="insights-meter"
                                                role="meter"
                                                aria-valuemin="0"
                                                aria-valuemax="100"
                                                aria-valuenow=metric.score
                                                aria-label=metric.kind.label()
                                            >
                                                <div
                                                    class="insights-meter-fill"
                                                    style=format!("width:{}%", metric.score)
                                                ></div>
                                            </div>
                                            <p class="insights-advice">{metric.advice}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <Show when=move || hashtag_checks.with(|checks| !checks.is_empty())>
                        <h4>"Hashtags per platform"</h4>
                        <ul class="insights-hashtags">
                            {move || {
                                hashtag_checks
                                    .get()
                                    .into_iter()
                                    .map(|(name, message, ok)| {
                                        view! {
                                            <li data-ok=bool_token(ok)>
                                                <strong>{name}</strong>
                                                " "
                                                <span>{message}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use composer_core::PlatformId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn score_bands_match_panel_colors() {
        assert_eq!(score_tone(100), "great");
        assert_eq!(score_tone(80), "great");
        assert_eq!(score_tone(79), "good");
        assert_eq!(score_tone(60), "good");
        assert_eq!(score_tone(40), "fair");
        assert_eq!(score_tone(39), "low");
    }

    #[test]
    fn verdict_messages_name_the_limit() {
        let check = HashtagCheck {
            platform: PlatformId::from_display_name("Instagram"),
            count: 1,
            optimal: 5,
            verdict: HashtagVerdict::TooFew { min: 3 },
        };
        assert_eq!(
            verdict_message(&check),
            "Add hashtags: at least 3 recommended (best: 5)"
        );
    }
}
